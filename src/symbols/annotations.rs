//! Annotation Reader — pure lookups over a symbol's annotations.
//!
//! Kinds are matched by fully-qualified identity. Annotations whose class the
//! host could not resolve never match any kind, so they behave as if absent.

use super::types::{Annotation, ComponentType, PropertyMember};

/// A symbol that carries annotations.
pub trait Annotated {
    fn annotations(&self) -> &[Annotation];
}

impl Annotated for ComponentType {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl Annotated for PropertyMember {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// All annotations of `kind` on `symbol`, in declaration order.
pub fn annotations_of<'a, S: Annotated + ?Sized + 'a>(
    symbol: &'a S,
    kind: &'a str,
) -> impl Iterator<Item = &'a Annotation> + 'a {
    symbol.annotations().iter().filter(move |a| a.is_kind(kind))
}

/// The first annotation of `kind` on `symbol`.
pub fn first_annotation<'a, S: Annotated + ?Sized>(symbol: &'a S, kind: &str) -> Option<&'a Annotation> {
    symbol.annotations().iter().find(|a| a.is_kind(kind))
}

/// Whether `symbol` carries at least one annotation of `kind`.
pub fn has_annotation<S: Annotated + ?Sized>(symbol: &S, kind: &str) -> bool {
    first_annotation(symbol, kind).is_some()
}
