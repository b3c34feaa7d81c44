//! Bound Attribute Builder — one [`BoundAttribute`] per admitted property.
//!
//! The builder resolves the attribute name, decides whether the property is
//! directly bindable, derives dictionary semantics, and records
//! [`Diagnostic`](crate::descriptor::Diagnostic)s for inconsistent
//! declarations. It never skips a property it is handed.

use std::sync::Arc;

use crate::base::{ExtractionOptions, constants, to_lower_hyphen};
use crate::descriptor::{BoundAttribute, DiagnosticCollector, DictionaryConfig};
use crate::symbols::{AnnotationValue, ComponentType, PropertyMember, TypeRef, first_annotation};

// ============================================================================
// DICTIONARY SHAPE
// ============================================================================

/// Key and value types of a dictionary-shaped type.
///
/// The type itself is checked first, then its implemented interfaces.
pub fn dictionary_type_arguments(ty: &TypeRef) -> Option<(&TypeRef, &TypeRef)> {
    std::iter::once(ty)
        .chain(ty.interfaces.iter())
        .find(|t| t.is_constructed_from(constants::DICTIONARY_INTERFACE, 2))
        .map(|t| (&t.type_arguments[0], &t.type_arguments[1]))
}

/// Whether `property` is a string-keyed dictionary property.
pub fn is_potential_dictionary_property(property: &PropertyMember) -> bool {
    dictionary_type_arguments(&property.ty).is_some_and(|(key, _)| key.is_string())
}

// ============================================================================
// NAME RESOLUTION
// ============================================================================

/// The resolved public name of an attribute.
struct AttributeName {
    name: String,
    explicit: bool,
}

fn resolve_attribute_name(property: &PropertyMember) -> AttributeName {
    let explicit = first_annotation(property, constants::ATTRIBUTE_NAME)
        .and_then(|a| a.positional(0))
        .and_then(AnnotationValue::as_str)
        .filter(|name| !name.is_empty());
    match explicit {
        Some(name) => AttributeName {
            name: name.to_string(),
            explicit: true,
        },
        None => AttributeName {
            name: to_lower_hyphen(&property.name),
            explicit: false,
        },
    }
}

/// State of the `DictionaryAttributePrefix` named argument.
enum PrefixArgument<'a> {
    Absent,
    /// Present but null (or not a string).
    Null,
    Value(&'a str),
}

impl PrefixArgument<'_> {
    fn is_set(&self) -> bool {
        !matches!(self, PrefixArgument::Absent)
    }

    fn value(&self) -> Option<&str> {
        match self {
            PrefixArgument::Value(v) => Some(v),
            _ => None,
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Build the bound attribute for `property`, declared somewhere in `owner`'s hierarchy.
pub fn build_bound_attribute(
    property: &PropertyMember,
    owner: &ComponentType,
    options: &ExtractionOptions,
) -> BoundAttribute {
    let mut diagnostics = DiagnosticCollector::new();
    let owner_name = owner.qualified_name.as_ref();
    let naming = first_annotation(property, constants::ATTRIBUTE_NAME);
    let AttributeName { name, explicit } = resolve_attribute_name(property);
    let has_public_setter = property.has_public_setter();

    let mut is_enum = false;
    let mut documentation = None;
    if has_public_setter {
        is_enum = property.ty.is_enum();
        if options.include_documentation {
            documentation = property.documentation.clone();
        }
    } else if explicit && !is_potential_dictionary_property(property) {
        diagnostics.invalid_attribute_name(owner_name, &property.name);
    }

    let prefix = match naming.and_then(|a| a.named_arg(constants::DICTIONARY_ATTRIBUTE_PREFIX)) {
        None => PrefixArgument::Absent,
        Some(AnnotationValue::Str(s)) => PrefixArgument::Value(s),
        Some(_) => PrefixArgument::Null,
    };

    let mut dictionary = None;
    if let Some((key, value)) = dictionary_type_arguments(&property.ty) {
        if key.is_string() {
            let effective = match &prefix {
                PrefixArgument::Absent => Some(format!("{}-", name)),
                PrefixArgument::Null => None,
                PrefixArgument::Value(v) => Some(v.to_string()),
            };
            dictionary = effective.map(|prefix| DictionaryConfig {
                prefix: Arc::from(prefix),
                value_type_name: value.name.clone(),
            });
            if !has_public_setter && naming.is_some() && !prefix.is_set() {
                diagnostics.invalid_prefix_null(owner_name, &property.name);
            }
        } else if prefix.value().is_some() {
            diagnostics.invalid_prefix_not_null(owner_name, &property.name);
        }
    } else if prefix.value().is_some() {
        diagnostics.invalid_prefix_not_null(owner_name, &property.name);
    }

    tracing::trace!(
        "[BOUND_ATTR] {}.{} -> '{}' (setter: {}, dictionary: {:?})",
        owner_name,
        property.name,
        name,
        has_public_setter,
        dictionary.as_ref().map(|d: &DictionaryConfig| d.prefix.as_ref())
    );

    BoundAttribute {
        name: Arc::from(name),
        property_name: property.name.clone(),
        type_name: property.ty.name.clone(),
        display_name: Arc::from(format!("{} {}.{}", property.ty.name, owner.name, property.name)),
        has_public_setter,
        is_enum,
        documentation,
        dictionary,
        diagnostics: diagnostics.finish(),
    }
}
