//! Symbol metadata — the read-only input to descriptor extraction.
//!
//! # Module structure
//!
//! - [`types`] — ComponentType, PropertyMember, TypeRef, Annotation
//! - [`provider`] — SymbolProvider trait and the in-memory SymbolTable
//! - [`annotations`] — Annotation Reader lookups

mod annotations;
mod provider;
mod types;

pub use annotations::{Annotated, annotations_of, first_annotation, has_annotation};
pub use provider::{SymbolProvider, SymbolTable};
pub use types::{
    Accessibility, Annotation, AnnotationClass, AnnotationValue, ComponentType, PropertyMember,
    TypeKind, TypeRef,
};
