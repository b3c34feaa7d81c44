//! Diagnostics — declaration problems recorded during extraction.
//!
//! Extraction never fails because of bad metadata. Every problem becomes a
//! [`Diagnostic`] value that travels with the descriptor it was found in.

use std::fmt;
use std::sync::Arc;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum Severity {
    Error,
    Warning,
}

/// The closed set of problems extraction can report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum DiagnosticKind {
    /// Explicit attribute name on a property with no public setter and no
    /// dictionary fallback.
    InvalidAttributeNameNullOrEmpty,
    /// Dictionary prefix supplied on a property whose dictionary key is not a string.
    InvalidAttributePrefixNotNull,
    /// Explicitly named, string-keyed dictionary property without a setter
    /// and without a prefix.
    InvalidAttributePrefixNull,
}

impl DiagnosticKind {
    /// Stable diagnostic code.
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::InvalidAttributeNameNullOrEmpty => codes::INVALID_ATTRIBUTE_NAME,
            DiagnosticKind::InvalidAttributePrefixNotNull => codes::INVALID_PREFIX_NOT_NULL,
            DiagnosticKind::InvalidAttributePrefixNull => codes::INVALID_PREFIX_NULL,
        }
    }

    pub fn severity(self) -> Severity {
        Severity::Error
    }
}

/// A problem found in one component type's declaration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Error code (e.g., "TB3001").
    pub code: &'static str,
    /// Qualified name of the type that owns the offending declaration.
    pub owner: Arc<str>,
    /// The offending property, when the problem is property-level.
    pub property: Option<Arc<str>>,
    pub message: Arc<str>,
}

impl Diagnostic {
    /// Create a diagnostic of `kind` for `owner`.
    pub fn new(kind: DiagnosticKind, owner: impl Into<Arc<str>>, message: impl Into<Arc<str>>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            code: kind.code(),
            owner: owner.into(),
            property: None,
            message: message.into(),
        }
    }

    /// Attach the offending property name.
    pub fn with_property(mut self, property: impl Into<Arc<str>>) -> Self {
        self.property = Some(property.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Diagnostic codes for component declaration errors.
///
/// ## Error Code Ranges
///
/// - **TB3001-TB3099**: Bound attribute declaration errors
pub mod codes {
    /// Explicit attribute name without a usable setter.
    pub const INVALID_ATTRIBUTE_NAME: &str = "TB3001";
    /// Dictionary prefix on a non-string-keyed dictionary.
    pub const INVALID_PREFIX_NOT_NULL: &str = "TB3002";
    /// Missing dictionary prefix on a setter-less dictionary.
    pub const INVALID_PREFIX_NULL: &str = "TB3003";
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics while one bound attribute or descriptor is built.
///
/// A collector is local to a single construction; it is folded into the
/// immutable result when that construction finishes.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Add many diagnostics.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// An explicit attribute name was given but the property cannot be bound.
    pub fn invalid_attribute_name(&mut self, owner: &str, property: &str) {
        self.add(
            Diagnostic::new(
                DiagnosticKind::InvalidAttributeNameNullOrEmpty,
                owner,
                format!(
                    "invalid bound attribute '{}.{}': an explicit attribute name requires a public setter",
                    owner, property
                ),
            )
            .with_property(property),
        );
    }

    /// A dictionary prefix was given on a property not keyed by string.
    pub fn invalid_prefix_not_null(&mut self, owner: &str, property: &str) {
        self.add(
            Diagnostic::new(
                DiagnosticKind::InvalidAttributePrefixNotNull,
                owner,
                format!(
                    "invalid bound attribute '{}.{}': a dictionary attribute prefix is only valid on a string-keyed dictionary property",
                    owner, property
                ),
            )
            .with_property(property),
        );
    }

    /// A setter-less, explicitly named dictionary property has no prefix.
    pub fn invalid_prefix_null(&mut self, owner: &str, property: &str) {
        self.add(
            Diagnostic::new(
                DiagnosticKind::InvalidAttributePrefixNull,
                owner,
                format!(
                    "invalid bound attribute '{}.{}': a dictionary attribute prefix is required when the property has no public setter",
                    owner, property
                ),
            )
            .with_property(property),
        );
    }

    /// Get all diagnostics.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Check if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Consume the collector, yielding the diagnostics in insertion order.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
