//! TypeScript parser producing a lossless Rowan tree.
//!
//! # Recovery
//!
//! The parser always produces a tree. Declaration shapes (modules, import
//! aliases, classes, interfaces, members) are parsed structurally; anything
//! else is consumed as a balanced token run inside an `OtherStatement`.
//!
//! 1. Unexpected tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing tokens emit a diagnostic without consuming
//! 3. Unclosed delimiters report the opening position as related info
//!
//! Exceeding the nesting limit is fatal and returns `Err`.

pub mod ast;
pub mod cst;
pub mod lexer;
pub mod printer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod cst_tests;
#[cfg(test)]
mod grammar_tests;
#[cfg(test)]
mod lexer_tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    ClassDecl, ImportAlias, InterfaceDecl, Member, MethodMember, ModuleDecl, PropertyMember,
    SourceFile, Stmt, TypeRef,
};

pub use core::Parser;
pub use printer::CstPrinter;

use crate::PassResult;
use lexer::lex;

/// Parse result holding the green tree.
///
/// Diagnostics are returned alongside; error nodes in the tree mark
/// recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    pub fn root(&self) -> SourceFile {
        SourceFile::cast(self.syntax()).expect("parser always produces a SourceFile root")
    }

    pub fn printer(&self) -> CstPrinter {
        CstPrinter::new(self.syntax())
    }
}

/// Main entry point. Returns `Err` when nesting exceeds the recursion limit.
pub fn parse(source: &str) -> PassResult<Parse> {
    parse_with_parser(Parser::new(source, lex(source)))
}

/// Parse with a pre-configured parser (for custom recursion limits).
pub fn parse_with_parser(mut parser: Parser) -> PassResult<Parse> {
    parser.parse_root();
    let (cst, diagnostics) = parser.finish()?;
    Ok((Parse { cst }, diagnostics))
}
