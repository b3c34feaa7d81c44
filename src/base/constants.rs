//! Well-known symbol identities.
//!
//! Annotation kinds are compared by fully-qualified identity, never by short
//! name, so an unrelated `TargetElementAttribute` in some other namespace is
//! not mistaken for ours.

// ============================================================================
// ANNOTATION KINDS
// ============================================================================

/// Declares which markup elements a component binds to.
pub const TARGET_ELEMENT: &str = "Markup.Components.TargetElementAttribute";

/// Overrides the markup attribute name of a property.
pub const ATTRIBUTE_NAME: &str = "Markup.Components.AttributeNameAttribute";

/// Excludes a property from attribute binding.
pub const ATTRIBUTE_NOT_BOUND: &str = "Markup.Components.AttributeNotBoundAttribute";

/// Restricts the child elements a component accepts.
pub const RESTRICT_CHILDREN: &str = "Markup.Components.RestrictChildrenAttribute";

/// Names the element a component renders in place of its own tag.
pub const OUTPUT_ELEMENT_HINT: &str = "Markup.Components.OutputElementHintAttribute";

/// Editor visibility annotation.
pub const EDITOR_BROWSABLE: &str = "System.ComponentModel.EditorBrowsableAttribute";

// ============================================================================
// NAMED ARGUMENT KEYS
// ============================================================================

/// `TargetElementAttribute.Attributes`
pub const TARGET_ELEMENT_ATTRIBUTES: &str = "Attributes";
/// `TargetElementAttribute.ParentTag`
pub const TARGET_ELEMENT_PARENT_TAG: &str = "ParentTag";
/// `TargetElementAttribute.TagStructure`
pub const TARGET_ELEMENT_TAG_STRUCTURE: &str = "TagStructure";
/// `AttributeNameAttribute.DictionaryAttributePrefix`
pub const DICTIONARY_ATTRIBUTE_PREFIX: &str = "DictionaryAttributePrefix";

// ============================================================================
// TYPE IDENTITIES
// ============================================================================

/// Interface every component type implements.
pub const COMPONENT_INTERFACE: &str = "Markup.Components.IComponent";

/// Generic definition of the dictionary shape (`IDictionary<TKey, TValue>`).
pub const DICTIONARY_INTERFACE: &str = "System.Collections.Generic.IDictionary`2";

// ============================================================================
// SENTINELS
// ============================================================================

/// Tag name matching every element.
pub const ELEMENT_CATCH_ALL: &str = "*";

/// Suffix stripped from type names before deriving a convention tag name.
pub const COMPONENT_NAME_SUFFIX: &str = "Component";

/// `EditorBrowsableState.Never`
pub const EDITOR_BROWSABLE_NEVER: i64 = 1;
/// Member name form of [`EDITOR_BROWSABLE_NEVER`].
pub const EDITOR_BROWSABLE_NEVER_NAME: &str = "Never";
