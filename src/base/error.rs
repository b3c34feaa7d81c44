//! Error types for the extraction entry points.
//!
//! Problems found in symbol metadata are never errors; they are recorded as
//! diagnostics on the descriptor. These variants cover contract violations
//! by the caller only.

use thiserror::Error;

/// Errors returned by the top-level extraction calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The requested type is not known to the symbol provider.
    #[error("Unknown component type: {0}")]
    UnknownType(String),

    /// Serialized input or output could not be processed.
    #[error("Interchange error: {0}")]
    Interchange(String),
}

impl ExtractError {
    /// Create an unknown type error.
    pub fn unknown_type(name: impl Into<String>) -> Self {
        Self::UnknownType(name.into())
    }
}
