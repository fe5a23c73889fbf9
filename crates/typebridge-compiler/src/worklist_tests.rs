use crate::worklist::Worklist;

#[test]
fn dedup_on_insert() {
    let mut worklist = Worklist::new();

    assert!(worklist.enqueue("App.A"));
    assert!(worklist.enqueue("App.B"));
    assert!(!worklist.enqueue("App.A"));
    assert_eq!(worklist.len(), 2);
    assert_eq!(worklist.pending(), 2);
}

#[test]
fn fifo_and_popped_names_stay_known() {
    let mut worklist = Worklist::new();
    worklist.enqueue("App.A");
    worklist.enqueue("App.B");

    assert_eq!(worklist.pop().as_deref(), Some("App.A"));
    assert!(!worklist.enqueue("App.A"));
    worklist.enqueue("App.C");

    assert_eq!(worklist.pop().as_deref(), Some("App.B"));
    assert_eq!(worklist.pop().as_deref(), Some("App.C"));
    assert_eq!(worklist.pop(), None);
    assert_eq!(worklist.pending(), 0);
    assert!(worklist.contains("App.A"));
    assert_eq!(worklist.iter().collect::<Vec<_>>(), ["App.A", "App.B", "App.C"]);
}
