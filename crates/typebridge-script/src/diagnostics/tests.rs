use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::ExpectedName, range(0, 5)).emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    insta::assert_snapshot!(diagnostics.printer().render(), @"error at 0..5: expected a name");
}

#[test]
fn report_with_detail() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(3, 4))
        .message("`)`")
        .emit();

    insta::assert_snapshot!(diagnostics.printer().render(), @"error at 3..4: unexpected token: `)`");
}

#[test]
fn filtered_drops_lower_priority_at_same_offset() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::UnexpectedToken, range(2, 3)).emit();
    diagnostics.report(DiagnosticKind::UnclosedBrace, range(2, 9)).emit();
    diagnostics.report(DiagnosticKind::ExpectedType, range(5, 6)).emit();

    let filtered = diagnostics.filtered();
    let kinds: Vec<_> = filtered.iter().map(|d| d.kind()).collect();
    assert_eq!(
        kinds,
        [DiagnosticKind::UnclosedBrace, DiagnosticKind::ExpectedType]
    );
}

#[test]
fn render_with_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedBrace, range(0, 5))
        .related_to("opened here", range(6, 11))
        .emit();

    let rendered = diagnostics
        .printer()
        .source("class Thing {")
        .path("thing.ts")
        .render();
    assert!(rendered.contains("error: missing closing `}`"));
    assert!(rendered.contains("thing.ts"));
    assert!(rendered.contains("opened here"));
}
