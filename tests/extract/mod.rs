//! Extraction tests
//!
//! End-to-end tests of descriptor extraction:
//! - Tag matching rules (annotations and naming convention)
//! - Member walk (admission, shadowing, hidden members)
//! - Bound attributes and dictionary prefixes
//! - Diagnostics
//! - Discovery across a symbol table

pub mod tests_bound_attributes;
pub mod tests_member_walk;
pub mod tests_tag_rules;
#[cfg(feature = "interchange")]
pub mod tests_interchange;
