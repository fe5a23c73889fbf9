//! typebridge compiler: server and script type metadata in, TypeScript
//! declarations out.
//!
//! - `translate` maps type signatures to [`TsType`] expressions
//! - `resolve` shortens type names relative to the namespace being emitted
//! - `legacy` rewrites script base types whose arity changed
//! - `classify` and `emit` turn each discovered type into a declaration
//! - `GenerationContext` drives the worklist until every reachable type is
//!   emitted
//!
//! # Example
//!
//! ```
//! use typebridge_compiler::{Config, Generator, ModelBuilder};
//!
//! let mut builder = ModelBuilder::new();
//! builder.add_server_json("App.dll", r#"{
//!     "Name": "App",
//!     "Types": [{
//!         "Namespace": "App", "Name": "Status", "IsEnum": true,
//!         "Fields": [{ "Name": "Open", "Value": 1 }, { "Name": "Closed", "Value": 2 }]
//!     }]
//! }"#)?;
//! let model = builder.build();
//! let config = Config::default();
//!
//! let output = Generator::new(&model, &config).generate()?;
//! assert!(output.render().contains("export enum Status {"));
//! # Ok::<(), typebridge_compiler::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod classify;
pub mod config;
mod context;
mod emit;
mod error;
pub mod generator;
pub mod legacy;
pub mod output;
pub mod resolve;
pub mod translate;
pub mod ts;
pub mod worklist;

#[cfg(test)]
mod generator_tests;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod translate_tests;
#[cfg(test)]
mod ts_tests;
#[cfg(test)]
mod worklist_tests;

pub use classify::{Classification, classify};
pub use config::{Config, RuntimeHooks};
pub use context::GenerationContext;
pub use error::{Error, Result};
pub use generator::{Generator, ModelBuilder};
pub use output::{Declaration, GeneratedOutput};
pub use resolve::Resolver;
pub use translate::{DeclarationLookup, Scope, Translator};
pub use ts::TsType;
pub use worklist::Worklist;
