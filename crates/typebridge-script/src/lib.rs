//! TypeScript front end for typebridge.
//!
//! Parses TypeScript source into a lossless syntax tree and extracts every
//! exported class into the shared type model.
//!
//! # Example
//!
//! ```
//! use typebridge_script::extract_source;
//!
//! let source = r#"
//!     namespace App {
//!         export class CustomerDialog extends Serenity.EntityDialog<CustomerRow, any> {
//!             protected form: CustomerForm;
//!         }
//!     }
//! "#;
//!
//! let (types, diagnostics) = extract_source(source, "app.ts").expect("nesting too deep");
//! assert!(diagnostics.is_empty());
//! assert_eq!(types[0].full_name(), "App.CustomerDialog");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod extract;
pub mod parser;


pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use extract::{AliasScope, extract_source, extract_types};
pub use parser::{Parse, parse};

/// Result type for passes that produce both output and diagnostics.
///
/// Syntax errors are diagnostics; the outer `Result` carries fatal errors.
pub type PassResult<T> = std::result::Result<(T, Diagnostics), Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Declarations nested deeper than the parser's recursion limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

pub type Result<T> = std::result::Result<T, Error>;
