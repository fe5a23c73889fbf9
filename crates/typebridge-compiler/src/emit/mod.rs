//! TypeScript declaration emitters, one file per [`Classification`].

mod entity;
mod enums;
mod object;
mod script;
mod service;

use typebridge_core::ExternalType;

use crate::classify::Classification;
use crate::context::GenerationContext;

const INDENT: &str = "    ";

/// Line-oriented text buffer with block indentation.
#[derive(Debug, Default)]
pub(crate) struct CodeWriter {
    output: String,
    depth: usize,
}

impl CodeWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.output.push('\n');
    }

    /// `header {` and one level deeper.
    pub(crate) fn open(&mut self, header: &str) {
        self.line(&format!("{} {{", header));
        self.depth += 1;
    }

    pub(crate) fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// Text without the trailing newline.
    pub(crate) fn finish(mut self) -> String {
        self.output.truncate(self.output.trim_end().len());
        self.output
    }
}

/// Indent every non-empty line one level.
pub(crate) fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", INDENT, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote a string literal with single quotes.
pub(crate) fn quote(text: &str) -> String {
    format!("'{}'", text.replace('\\', "\\\\").replace('\'', "\\'"))
}

impl GenerationContext<'_> {
    pub(crate) fn emit_declaration(&mut self, ty: &ExternalType, kind: Classification) -> String {
        match kind {
            Classification::Enum => self.emit_enum(ty),
            Classification::Service => self.emit_service(ty),
            Classification::Entity => self.emit_entity(ty),
            Classification::PlainObject => self.emit_object(ty),
            Classification::ScriptDeclaration => self.emit_script(ty),
        }
    }
}
