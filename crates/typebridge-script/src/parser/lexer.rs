//! Lexer for the TypeScript declaration subset.
//!
//! Tokens carry a kind and a span; text is sliced from the source on demand.
//! A run of characters no rule accepts becomes one `Garbage` token.

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::cst::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

fn offset(at: usize) -> TextSize {
    TextSize::from(at as u32)
}

pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    // Start of the garbage run being accumulated.
    let mut garbage: Option<usize> = None;

    for (result, span) in SyntaxKind::lexer(source).spanned() {
        match result {
            Ok(kind) => {
                flush(&mut tokens, &mut garbage, span.start);
                tokens.push(Token {
                    kind,
                    span: TextRange::new(offset(span.start), offset(span.end)),
                });
            }
            Err(()) => {
                garbage.get_or_insert(span.start);
            }
        }
    }
    flush(&mut tokens, &mut garbage, source.len());

    tokens
}

/// Close a pending garbage run at `end`.
fn flush(tokens: &mut Vec<Token>, garbage: &mut Option<usize>, end: usize) {
    if let Some(start) = garbage.take() {
        tokens.push(Token {
            kind: SyntaxKind::Garbage,
            span: TextRange::new(offset(start), offset(end)),
        });
    }
}

#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
