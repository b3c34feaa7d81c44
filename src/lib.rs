//! # tagbind-base
//!
//! Component descriptor extraction for markup template compilers.
//!
//! Given the resolved symbol metadata of a compiled component type, tagbind
//! produces a [`ComponentDescriptor`](descriptor::ComponentDescriptor): which
//! elements the component matches, which attributes bind to which
//! properties, and which declaration problems were found on the way.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extract     → Member walk, tag rules, bound attributes, assembly, discovery
//!   ↓
//! descriptor  → Immutable output model + diagnostics
//!   ↓
//! symbols     → Host symbol metadata, SymbolProvider, annotation lookups
//!   ↓
//! base        → Well-known identities, naming conventions, options, errors
//! ```

// ============================================================================
// MODULES (dependency order: base → symbols → descriptor → extract)
// ============================================================================

/// Foundation types: constants, naming conventions, options, errors
pub mod base;

/// Symbol metadata supplied by the host compiler
pub mod symbols;

/// Component descriptors and diagnostics
pub mod descriptor;

/// Descriptor extraction
pub mod extract;

// Re-export the common entry points
pub use base::{ExtractError, ExtractionOptions};
pub use descriptor::{BoundAttribute, ComponentDescriptor, Diagnostic, DiagnosticKind, TagMatchingRule};
pub use extract::{DescriptorFactory, discover, extract_descriptor, extract_named};
pub use symbols::{SymbolProvider, SymbolTable};
