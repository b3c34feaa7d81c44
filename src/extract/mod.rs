//! Descriptor extraction — pure functions from symbol metadata to descriptors.
//!
//! # Module structure
//!
//! - [`members`] — Member Walker: hierarchy walk, admission, shadowing
//! - [`rules`] — Tag Matching Rule Builder
//! - [`required_attributes`] — the `Attributes` constraint grammar
//! - [`attributes`] — Bound Attribute Builder and the dictionary shape
//! - [`assemble`] — Descriptor Assembler
//! - [`discover`] — inclusion filter and parallel discovery
//!
//! ```text
//! DescriptorFactory::create(type)
//!     ├── build_rules(type)                    ← annotations or convention
//!     ├── collect_properties(type)             ← most-derived first
//!     │       └── build_bound_attribute(prop)  ← diagnostics collected locally
//!     ├── allowed children / output hint / documentation
//!     ▼
//! ComponentDescriptor (immutable)
//! ```

mod assemble;
mod attributes;
mod discover;
mod members;
mod required_attributes;
mod rules;


pub use assemble::{DescriptorFactory, extract_descriptor, extract_named};
pub use attributes::{build_bound_attribute, dictionary_type_arguments, is_potential_dictionary_property};
pub use discover::{discover, discover_in_assembly, is_component_type};
pub use members::{collect_properties, hierarchy, is_hidden};
pub use required_attributes::parse_required_attributes;
pub use rules::{build_rules, convention_tag_name};
