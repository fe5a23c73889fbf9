//! Core data structures for typebridge.
//!
//! This crate contains the language-neutral type model shared by the
//! extraction pipelines and the declaration compiler:
//! - `ExternalType` and its member records, tagged with an [`Origin`]
//! - `TypeModel`, the append-only registry keyed by full type name
//! - `TypeSig`, the parsed form of a textual type signature

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod model;
mod registry;
mod signature;
pub mod utils;

#[cfg(test)]
mod model_tests;
#[cfg(test)]
mod registry_tests;
#[cfg(test)]
mod signature_tests;

pub use model::{
    AttributeArgument, ExternalArgument, ExternalAttribute, ExternalMember, ExternalMethod,
    ExternalProperty, ExternalType, Origin, RowField, RowMetadata,
};
pub use registry::{Assembly, TypeModel};
pub use signature::{SignatureError, TypeSig, split_generic_arguments};
