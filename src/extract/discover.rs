//! Component discovery across everything a provider knows.

use rayon::prelude::*;

use super::assemble::DescriptorFactory;
use crate::base::{ExtractionOptions, constants};
use crate::descriptor::ComponentDescriptor;
use crate::symbols::{ComponentType, SymbolProvider};

/// Whether `ty` can surface as a markup component at all.
///
/// Components are public, concrete, non-generic types implementing the
/// component interface.
pub fn is_component_type(ty: &ComponentType) -> bool {
    ty.accessibility.is_public()
        && !ty.is_abstract
        && !ty.is_generic
        && ty.implements(constants::COMPONENT_INTERFACE)
}

fn discover_where<P, F>(provider: &P, options: &ExtractionOptions, filter: F) -> Vec<ComponentDescriptor>
where
    P: SymbolProvider + ?Sized,
    F: Fn(&ComponentType) -> bool,
{
    let candidates: Vec<&ComponentType> = provider
        .types()
        .filter(|ty| is_component_type(ty) && filter(ty))
        .collect();

    let factory = DescriptorFactory::new(*options);
    let descriptors: Vec<_> = candidates
        .par_iter()
        .filter_map(|ty| factory.create(provider, ty))
        .collect();

    tracing::debug!(
        "[DISCOVER] {} component(s) from {} candidate type(s)",
        descriptors.len(),
        candidates.len()
    );
    descriptors
}

/// Extract a descriptor for every component type the provider knows.
///
/// Extraction runs in parallel; results keep the provider's enumeration order.
pub fn discover<P: SymbolProvider + ?Sized>(
    provider: &P,
    options: &ExtractionOptions,
) -> Vec<ComponentDescriptor> {
    discover_where(provider, options, |_| true)
}

/// Like [`discover`], restricted to types compiled into `assembly`.
pub fn discover_in_assembly<P: SymbolProvider + ?Sized>(
    provider: &P,
    assembly: &str,
    options: &ExtractionOptions,
) -> Vec<ComponentDescriptor> {
    discover_where(provider, options, |ty| ty.assembly.as_ref() == assembly)
}
