use super::cst::SyntaxKind;
use super::lexer::{lex, token_text};

fn snapshot(source: &str) -> String {
    lex(source)
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| format!("{:?} {:?}", t.kind, token_text(source, t)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn keywords_and_identifiers() {
    insta::assert_snapshot!(snapshot("export declare namespace Serenity.Ui"), @r#"
    KwExport "export"
    KwDeclare "declare"
    KwNamespace "namespace"
    Id "Serenity"
    Dot "."
    Id "Ui"
    "#);
}

#[test]
fn keyword_prefix_is_identifier() {
    insta::assert_snapshot!(snapshot("classes exporter $type _x1"), @r#"
    Id "classes"
    Id "exporter"
    Id "$type"
    Id "_x1"
    "#);
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("(a?: T) => void; x = y | z & w"), @r#"
    ParenOpen "("
    Id "a"
    Question "?"
    Colon ":"
    Id "T"
    ParenClose ")"
    FatArrow "=>"
    Id "void"
    Semicolon ";"
    Id "x"
    Equals "="
    Id "y"
    Pipe "|"
    Id "z"
    Amp "&"
    Id "w"
    "#);
}

#[test]
fn literals() {
    insta::assert_snapshot!(snapshot(r#"'a\'b' "c" `t${x}` 10.5e3"#), @r#"
    StringLit "'a\\'b'"
    StringLit "\"c\""
    TemplateLit "`t${x}`"
    Number "10.5e3"
    "#);
}

#[test]
fn comments_are_trivia() {
    let source = "a // line\n/* block\n */ b";
    let kinds: Vec<_> = lex(source).iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            SyntaxKind::Id,
            SyntaxKind::Whitespace,
            SyntaxKind::LineComment,
            SyntaxKind::Newline,
            SyntaxKind::BlockComment,
            SyntaxKind::Whitespace,
            SyntaxKind::Id,
        ]
    );
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(snapshot("a \\\\\\ b"), @r#"
    Id "a"
    Garbage "\\\\\\"
    Id "b"
    "#);
}
