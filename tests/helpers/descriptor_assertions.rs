//! Assertion helpers over descriptors.

use tagbind::descriptor::{BoundAttribute, ComponentDescriptor, DiagnosticKind};

/// Names of all bound attributes, in descriptor order.
pub fn attribute_names(descriptor: &ComponentDescriptor) -> Vec<&str> {
    descriptor.attributes.iter().map(|a| a.name.as_ref()).collect()
}

/// The bound attribute named `name`, panicking with the available names.
pub fn attribute<'a>(descriptor: &'a ComponentDescriptor, name: &str) -> &'a BoundAttribute {
    descriptor.attribute(name).unwrap_or_else(|| {
        panic!(
            "no attribute '{}' on {}; have {:?}",
            name,
            descriptor.type_name,
            attribute_names(descriptor)
        )
    })
}

/// Kinds of every diagnostic on the descriptor.
pub fn diagnostic_kinds(descriptor: &ComponentDescriptor) -> Vec<DiagnosticKind> {
    descriptor.diagnostics.iter().map(|d| d.kind).collect()
}

/// Tag names of every rule.
pub fn rule_tags(descriptor: &ComponentDescriptor) -> Vec<&str> {
    descriptor.rules.iter().map(|r| r.tag_name.as_str()).collect()
}
