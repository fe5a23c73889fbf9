use rowan::Language;

use crate::parser::cst::{SyntaxKind::*, TokenSet, TsLang, token_sets};

#[test]
fn token_set_contains() {
    let set = TokenSet::new(&[ParenOpen, ParenClose, Comma]);
    assert!(set.contains(ParenOpen));
    assert!(set.contains(Comma));
    assert!(!set.contains(Colon));
}

#[test]
fn token_set_union() {
    let set = TokenSet::new(&[Pipe]).union(TokenSet::new(&[Amp]));
    assert!(set.contains(Pipe));
    assert!(set.contains(Amp));
    assert!(!set.contains(Dot));
}

#[test]
fn token_set_ignores_node_kinds() {
    assert!(!token_sets::TRIVIA.contains(SourceFile));
    assert!(!TokenSet::EMPTY.contains(ClassDecl));
}

#[test]
fn token_set_debug() {
    let debug = format!("{:?}", TokenSet::new(&[Semicolon, KwClass]));
    assert_eq!(debug, "{Semicolon, KwClass}");
}

#[test]
fn token_kinds_fit_in_token_set() {
    assert!((Error as u16) < 64);
}

#[test]
fn keywords_are_member_names() {
    assert!(KwNamespace.is_keyword());
    assert!(KwType.is_keyword());
    assert!(!Id.is_keyword());
    assert!(KwConstructor.is_member_name());
    assert!(StringLit.is_member_name());
    assert!(Number.is_member_name());
    assert!(!Colon.is_member_name());
}

#[test]
fn delimiters() {
    assert!(BraceOpen.is_open_delimiter());
    assert!(!AngleOpen.is_open_delimiter());
    assert!(BracketClose.is_close_delimiter());
    assert!(!AngleClose.is_close_delimiter());
}

#[test]
fn trivia_and_error_kinds() {
    assert!(LineComment.is_trivia());
    assert!(BlockComment.is_trivia());
    assert!(!Id.is_trivia());
    assert!(Garbage.is_error());
    assert!(!OtherStatement.is_error());
}

#[test]
fn language_roundtrip() {
    for kind in [ParenOpen, KwClass, Id, TypeBody, OtherStatement] {
        let raw = TsLang::kind_to_raw(kind);
        assert_eq!(TsLang::kind_from_raw(raw), kind);
    }
}
