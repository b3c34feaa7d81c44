//! Member Walker — candidate properties across a type's hierarchy.

use rustc_hash::FxHashSet;

use super::attributes::is_potential_dictionary_property;
use crate::base::{ExtractionOptions, constants};
use crate::symbols::{
    Annotated, AnnotationValue, ComponentType, PropertyMember, SymbolProvider, first_annotation,
    has_annotation,
};

/// The levels of `ty`'s hierarchy, most-derived first.
///
/// The walk stops at the first base type the provider cannot resolve. A
/// cyclic base chain is cut at the first repeated type.
pub fn hierarchy<'a, P: SymbolProvider + ?Sized>(
    provider: &'a P,
    ty: &'a ComponentType,
) -> Vec<&'a ComponentType> {
    let mut levels = vec![ty];
    let mut seen = FxHashSet::default();
    seen.insert(ty.qualified_name.as_ref());

    let mut current = ty;
    while let Some(base) = provider.base_type(current) {
        if !seen.insert(base.qualified_name.as_ref()) {
            tracing::warn!(
                "[MEMBERS] cyclic base chain detected at '{}' while walking '{}'",
                base.qualified_name,
                ty.qualified_name
            );
            break;
        }
        levels.push(base);
        current = base;
    }
    levels
}

/// Whether `symbol` is hidden from editors and `options` asks to exclude such symbols.
pub fn is_hidden<S: Annotated + ?Sized>(symbol: &S, options: &ExtractionOptions) -> bool {
    if !options.exclude_hidden {
        return false;
    }
    let Some(annotation) = first_annotation(symbol, constants::EDITOR_BROWSABLE) else {
        return false;
    };
    match annotation.positional(0) {
        Some(AnnotationValue::Int(state)) => *state == constants::EDITOR_BROWSABLE_NEVER,
        Some(AnnotationValue::Str(state)) => state.as_ref() == constants::EDITOR_BROWSABLE_NEVER_NAME,
        _ => false,
    }
}

fn is_bindable_candidate(property: &PropertyMember) -> bool {
    property.parameter_count == 0
        && property.has_public_getter()
        && !has_annotation(property, constants::ATTRIBUTE_NOT_BOUND)
        && (has_annotation(property, constants::ATTRIBUTE_NAME)
            || property.has_public_setter()
            || is_potential_dictionary_property(property))
}

/// Collect the bindable properties of `ty`, most-derived first.
///
/// A property shadows every same-named property further up the hierarchy.
/// Only admitted properties shadow; a derived property excluded by the
/// admission rules leaves a same-named base property visible. Hidden
/// properties are dropped after shadowing, so they still shadow.
pub fn collect_properties<'a, P: SymbolProvider + ?Sized>(
    provider: &'a P,
    ty: &'a ComponentType,
    options: &ExtractionOptions,
) -> Vec<&'a PropertyMember> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut properties = Vec::new();

    for level in hierarchy(provider, ty) {
        for property in &level.members {
            if !is_bindable_candidate(property) {
                tracing::trace!("[MEMBERS] skipping {}.{}", level.qualified_name, property.name);
                continue;
            }
            if !seen.insert(property.name.as_ref()) {
                tracing::trace!(
                    "[MEMBERS] {}.{} is shadowed by a derived property",
                    level.qualified_name,
                    property.name
                );
                continue;
            }
            properties.push(property);
        }
    }

    properties.retain(|property| !is_hidden(*property, options));
    properties
}
