//! Emitted declarations grouped into namespace blocks.

use indexmap::IndexMap;

use crate::classify::Classification;
use crate::emit::indent;

/// File name for declarations outside any namespace.
pub const GLOBAL_FILE: &str = "_global.ts";

/// One emitted declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub full_name: String,
    /// Namespace the declaration is written into (suffixes stripped).
    pub namespace: String,
    pub kind: Classification,
    /// Declaration text at zero indentation, without a trailing newline.
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedOutput {
    declarations: Vec<Declaration>,
}

impl GeneratedOutput {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Declarations in emission order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn get(&self, full_name: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.full_name == full_name)
    }

    /// Declarations by namespace, namespaces in order of first appearance.
    pub fn by_namespace(&self) -> IndexMap<&str, Vec<&Declaration>> {
        let mut groups: IndexMap<&str, Vec<&Declaration>> = IndexMap::new();
        for decl in &self.declarations {
            groups.entry(decl.namespace.as_str()).or_default().push(decl);
        }
        groups
    }

    /// Everything as one file.
    pub fn render(&self) -> String {
        let blocks: Vec<String> = self
            .by_namespace()
            .into_iter()
            .map(|(namespace, decls)| render_block(namespace, &decls))
            .collect();
        finish(blocks.join("\n\n"))
    }

    /// One file per namespace, named `Namespace.ts`.
    pub fn files(&self) -> Vec<(String, String)> {
        self.by_namespace()
            .into_iter()
            .map(|(namespace, decls)| {
                let file = if namespace.is_empty() {
                    GLOBAL_FILE.to_string()
                } else {
                    format!("{}.ts", namespace)
                };
                (file, finish(render_block(namespace, &decls)))
            })
            .collect()
    }
}

fn render_block(namespace: &str, decls: &[&Declaration]) -> String {
    let body = decls
        .iter()
        .map(|d| d.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");
    if namespace.is_empty() {
        return body;
    }
    format!("namespace {} {{\n{}\n}}", namespace, indent(&body))
}

fn finish(mut text: String) -> String {
    text.truncate(text.trim_end().len());
    text.push('\n');
    text
}
