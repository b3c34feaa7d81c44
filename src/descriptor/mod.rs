//! Component descriptors — the immutable output of extraction.
//!
//! - [`ComponentDescriptor`] — one per component type
//! - [`TagMatchingRule`], [`RequiredAttribute`] — how elements are recognized
//! - [`BoundAttribute`], [`DictionaryConfig`] — how attributes map to properties
//! - [`Diagnostic`], [`DiagnosticCollector`] — declaration problems

mod diagnostics;
#[cfg(feature = "interchange")]
mod interchange;
mod types;

pub use diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticKind, Severity, codes};
#[cfg(feature = "interchange")]
pub use interchange::{descriptor_to_json, descriptors_to_json};
pub use types::{
    AllowedChildTag, BoundAttribute, ComponentDescriptor, DictionaryConfig, NameComparison,
    RequiredAttribute, TagMatchingRule, TagStructure, ValueComparison,
};
