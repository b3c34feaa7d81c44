//! Descriptor Assembler — orchestrates one type's extraction.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::attributes::build_bound_attribute;
use super::members::{collect_properties, is_hidden};
use super::rules::build_rules;
use crate::base::{ExtractError, ExtractionOptions, constants};
use crate::descriptor::{AllowedChildTag, BoundAttribute, ComponentDescriptor, DiagnosticCollector};
use crate::symbols::{AnnotationValue, ComponentType, SymbolProvider, first_annotation};

/// Builds [`ComponentDescriptor`]s under a fixed [`ExtractionOptions`] policy.
///
/// The factory holds no per-type state; one instance can serve any number of
/// extractions, concurrently or not.
#[derive(Clone, Copy, Debug, Default)]
pub struct DescriptorFactory {
    options: ExtractionOptions,
}

impl DescriptorFactory {
    pub fn new(options: ExtractionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractionOptions {
        &self.options
    }

    /// Extract the descriptor of `ty`.
    ///
    /// Returns `None` only when `ty` itself is hidden under the current policy.
    pub fn create<P: SymbolProvider + ?Sized>(
        &self,
        provider: &P,
        ty: &ComponentType,
    ) -> Option<ComponentDescriptor> {
        if is_hidden(ty, &self.options) {
            tracing::debug!("[DESCRIPTOR] skipping hidden type '{}'", ty.qualified_name);
            return None;
        }

        let rules = build_rules(ty);

        let mut diagnostics = DiagnosticCollector::new();
        let mut attributes: Vec<BoundAttribute> = Vec::new();
        let mut seen_names: FxHashSet<String> = FxHashSet::default();
        for property in collect_properties(provider, ty, &self.options) {
            let attribute = build_bound_attribute(property, ty, &self.options);
            if !seen_names.insert(attribute.name.to_ascii_lowercase()) {
                tracing::trace!(
                    "[DESCRIPTOR] dropping {}.{}: attribute '{}' already bound by a derived property",
                    ty.qualified_name,
                    property.name,
                    attribute.name
                );
                continue;
            }
            diagnostics.extend(attribute.diagnostics.iter().cloned());
            attributes.push(attribute);
        }

        let documentation = if self.options.include_documentation {
            ty.documentation.clone()
        } else {
            None
        };

        let descriptor = ComponentDescriptor {
            type_name: ty.qualified_name.clone(),
            namespace: ty.namespace.clone(),
            assembly: ty.assembly.clone(),
            type_identifier: ty.name.clone(),
            display_name: ty.qualified_name.clone(),
            rules,
            attributes,
            allowed_children: allowed_children(ty),
            documentation,
            output_element_hint: output_element_hint(ty),
            diagnostics: diagnostics.finish(),
        };

        tracing::debug!(
            "[DESCRIPTOR] built '{}': {} rule(s), {} attribute(s), {} diagnostic(s)",
            descriptor.type_name,
            descriptor.rules.len(),
            descriptor.attributes.len(),
            descriptor.diagnostics.len()
        );
        Some(descriptor)
    }
}

/// Child tags allowed by a restrict-children annotation, in declaration order.
fn allowed_children(ty: &ComponentType) -> Option<Vec<AllowedChildTag>> {
    let annotation = first_annotation(ty, constants::RESTRICT_CHILDREN)?;
    let first = annotation.positional(0).and_then(AnnotationValue::as_str);
    let rest = annotation
        .positional(1)
        .and_then(AnnotationValue::as_array)
        .unwrap_or_default()
        .iter()
        .filter_map(AnnotationValue::as_str);

    Some(
        first
            .into_iter()
            .chain(rest)
            .map(|name| AllowedChildTag {
                name: SmolStr::new(name),
            })
            .collect(),
    )
}

fn output_element_hint(ty: &ComponentType) -> Option<SmolStr> {
    first_annotation(ty, constants::OUTPUT_ELEMENT_HINT)
        .and_then(|a| a.positional(0))
        .and_then(AnnotationValue::as_str)
        .map(SmolStr::new)
}

/// Extract the descriptor of `ty` under `options`.
pub fn extract_descriptor<P: SymbolProvider + ?Sized>(
    provider: &P,
    ty: &ComponentType,
    options: &ExtractionOptions,
) -> Option<ComponentDescriptor> {
    DescriptorFactory::new(*options).create(provider, ty)
}

/// Resolve `qualified_name` through `provider` and extract its descriptor.
pub fn extract_named<P: SymbolProvider + ?Sized>(
    provider: &P,
    qualified_name: &str,
    options: &ExtractionOptions,
) -> Result<Option<ComponentDescriptor>, ExtractError> {
    let ty = provider
        .resolve_type(qualified_name)
        .ok_or_else(|| ExtractError::unknown_type(qualified_name))?;
    Ok(extract_descriptor(provider, ty, options))
}
