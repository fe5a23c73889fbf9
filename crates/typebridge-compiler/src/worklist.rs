//! Discovery queue.

use indexmap::IndexSet;

/// FIFO queue of full type names with dedup on insert.
///
/// Every name ever enqueued stays in the set, so popping a name never makes
/// it eligible again. Insertion order is emission order.
#[derive(Debug, Clone, Default)]
pub struct Worklist {
    entries: IndexSet<String>,
    next: usize,
}

impl Worklist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the name was enqueued before.
    pub fn enqueue(&mut self, full_name: impl Into<String>) -> bool {
        self.entries.insert(full_name.into())
    }

    pub fn pop(&mut self) -> Option<String> {
        let entry = self.entries.get_index(self.next)?.clone();
        self.next += 1;
        Some(entry)
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.entries.contains(full_name)
    }

    /// Names enqueued so far, popped or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names still waiting to be popped.
    pub fn pending(&self) -> usize {
        self.entries.len() - self.next
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
