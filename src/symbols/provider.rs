//! Host symbol provider — the read-only query interface extraction runs against.

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use super::types::ComponentType;

/// Read-only access to resolved symbol metadata.
///
/// Implementations must be safe to share across threads; extraction of
/// different types may run in parallel against the same provider.
pub trait SymbolProvider: Sync {
    /// Resolve a type by fully-qualified name.
    fn resolve_type(&self, qualified_name: &str) -> Option<&ComponentType>;

    /// Every type the provider knows, in a stable order.
    fn types(&self) -> Box<dyn Iterator<Item = &ComponentType> + '_>;

    /// Resolve the direct base type of `ty`, if it has one the provider knows.
    fn base_type(&self, ty: &ComponentType) -> Option<&ComponentType> {
        ty.base_type
            .as_deref()
            .and_then(|base| self.resolve_type(base))
    }
}

/// In-memory symbol table keyed by qualified name.
///
/// Enumeration follows insertion order; re-inserting a type replaces it in
/// place.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    types: IndexMap<Arc<str>, ComponentType, FxBuildHasher>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a type.
    pub fn insert(&mut self, ty: ComponentType) {
        self.types.insert(ty.qualified_name.clone(), ty);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_type(mut self, ty: ComponentType) -> Self {
        self.insert(ty);
        self
    }

    /// Remove a type, e.g. after it was deleted by a recompilation.
    pub fn remove(&mut self, qualified_name: &str) -> Option<ComponentType> {
        self.types.shift_remove(qualified_name)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Load a table from a JSON array of types.
    #[cfg(feature = "interchange")]
    pub fn from_json(text: &str) -> Result<Self, crate::base::ExtractError> {
        let types: Vec<ComponentType> = serde_json::from_str(text)
            .map_err(|e| crate::base::ExtractError::Interchange(e.to_string()))?;
        Ok(types.into_iter().collect())
    }
}

impl FromIterator<ComponentType> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = ComponentType>>(iter: I) -> Self {
        let mut table = SymbolTable::new();
        for ty in iter {
            table.insert(ty);
        }
        table
    }
}

impl SymbolProvider for SymbolTable {
    fn resolve_type(&self, qualified_name: &str) -> Option<&ComponentType> {
        self.types.get(qualified_name)
    }

    fn types(&self) -> Box<dyn Iterator<Item = &ComponentType> + '_> {
        Box::new(self.types.values())
    }
}
