//! Foundation types for the tagbind toolchain.
//!
//! This module provides the pieces every other layer leans on:
//! - [`constants`] - Well-known annotation identities, argument keys, sentinels
//! - [`to_lower_hyphen`], [`strip_convention_suffix`] - Naming conventions
//! - [`ExtractionOptions`] - Construction-time policy flags
//! - [`ExtractError`] - Contract violations at the top-level entry points
//!
//! This module has NO dependencies on other tagbind modules.

pub mod constants;
mod error;
mod naming;
mod options;

pub use error::ExtractError;
pub use naming::{simple_name, strip_convention_suffix, to_lower_hyphen};
pub use options::ExtractionOptions;
