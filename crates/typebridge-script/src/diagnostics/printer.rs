//! Text rendering of diagnostics.
//!
//! Without source text each diagnostic is one line with byte offsets. With
//! source text the offending span is shown in context through
//! `annotate-snippets`, one report per diagnostic in source order.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::{DiagnosticMessage, Diagnostics, Severity};

pub struct DiagnosticsPrinter<'a> {
    diagnostics: &'a Diagnostics,
    text: Option<&'a str>,
    path: Option<&'a str>,
    colored: bool,
}

impl<'a> DiagnosticsPrinter<'a> {
    pub fn new(diagnostics: &'a Diagnostics) -> Self {
        Self {
            diagnostics,
            text: None,
            path: None,
            colored: false,
        }
    }

    /// Source the diagnostic ranges point into.
    pub fn source(mut self, text: &'a str) -> Self {
        self.text = Some(text);
        self
    }

    pub fn path(mut self, path: &'a str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let mut ordered: Vec<&DiagnosticMessage> = self.diagnostics.iter().collect();
        ordered.sort_by_key(|d| d.range.start());

        match self.text {
            Some(text) => self.format_snippets(&ordered, text, w),
            None => self.format_lines(&ordered, w),
        }
    }

    fn format_lines(&self, ordered: &[&DiagnosticMessage], w: &mut impl Write) -> std::fmt::Result {
        let lines: Vec<String> = ordered
            .iter()
            .map(|d| match self.path {
                Some(path) => format!("{}: {}", path, d),
                None => d.to_string(),
            })
            .collect();
        w.write_str(&lines.join("\n"))
    }

    fn format_snippets(
        &self,
        ordered: &[&DiagnosticMessage],
        text: &str,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let reports: Vec<String> = ordered
            .iter()
            .map(|diag| {
                let report = [self.report(diag, text)];
                renderer.render(&report).to_string()
            })
            .collect();
        w.write_str(&reports.join("\n"))
    }

    fn report<'r>(&'r self, diag: &'r DiagnosticMessage, text: &'r str) -> Group<'r> {
        let primary = AnnotationKind::Primary
            .span(span(diag.range, text))
            .label(&diag.message);
        let mut snippet = Snippet::source(text).line_start(1).annotation(primary);
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        snippet = diag.related.iter().fold(snippet, |snippet, related| {
            snippet.annotation(
                AnnotationKind::Context
                    .span(span(related.range, text))
                    .label(&related.message),
            )
        });

        level(diag.severity()).primary_title(&diag.message).element(snippet)
    }
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// Byte span clamped to the text. An empty range widens to the next
/// character so the marker stays visible.
fn span(range: TextRange, text: &str) -> Range<usize> {
    let len = text.len();
    let start = usize::from(range.start()).min(len);
    let end = usize::from(range.end()).clamp(start, len);
    if start < end {
        return start..end;
    }
    let next = text[start..]
        .chars()
        .next()
        .map_or(start, |c| start + c.len_utf8());
    start..next
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_> {
        DiagnosticsPrinter::new(self)
    }
}
