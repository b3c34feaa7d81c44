//! Component descriptor types handed to the markup compiler.

use std::sync::Arc;

use smol_str::SmolStr;

use super::diagnostics::Diagnostic;

// ============================================================================
// TAG MATCHING
// ============================================================================

/// Structure a matched element is expected to have.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum TagStructure {
    #[default]
    Unspecified,
    /// `<tag></tag>` or `<tag />`.
    NormalOrSelfClosing,
    /// `<tag>` only, with no end tag.
    NormalElement,
}

impl TagStructure {
    /// Map an annotation's enum value (by number or member name).
    pub fn from_value(number: Option<i64>, name: Option<&str>) -> Self {
        match (number, name) {
            (Some(1), _) | (_, Some("NormalOrSelfClosing")) => TagStructure::NormalOrSelfClosing,
            (Some(2), _) | (_, Some("NormalElement")) => TagStructure::NormalElement,
            _ => TagStructure::Unspecified,
        }
    }
}

/// How a required attribute's name is compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum NameComparison {
    #[default]
    FullMatch,
    /// Written as `name*`: any attribute starting with `name`.
    PrefixMatch,
}

/// How a required attribute's value is compared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub enum ValueComparison {
    /// Only the attribute's presence is required.
    #[default]
    None,
    /// `[name=value]`
    FullMatch,
    /// `[name^=value]`
    PrefixMatch,
    /// `[name$=value]`
    SuffixMatch,
}

/// An attribute an element must carry for a rule to match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct RequiredAttribute {
    pub name: SmolStr,
    pub name_comparison: NameComparison,
    pub value: Option<SmolStr>,
    pub value_comparison: ValueComparison,
}

impl RequiredAttribute {
    /// Whether an attribute `name="value"` satisfies this requirement.
    pub fn matches(&self, name: &str, value: &str) -> bool {
        let name_ok = match self.name_comparison {
            NameComparison::FullMatch => name.eq_ignore_ascii_case(&self.name),
            NameComparison::PrefixMatch => {
                name.len() >= self.name.len()
                    && name.is_char_boundary(self.name.len())
                    && name[..self.name.len()].eq_ignore_ascii_case(&self.name)
            }
        };
        if !name_ok {
            return false;
        }
        let expected = self.value.as_deref().unwrap_or_default();
        match self.value_comparison {
            ValueComparison::None => true,
            ValueComparison::FullMatch => value == expected,
            ValueComparison::PrefixMatch => value.starts_with(expected),
            ValueComparison::SuffixMatch => value.ends_with(expected),
        }
    }
}

/// A predicate identifying markup elements that bind to a component.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct TagMatchingRule {
    /// Tag name, compared case-insensitively by the consumer. `*` matches any tag.
    pub tag_name: SmolStr,
    pub parent_tag: Option<SmolStr>,
    pub tag_structure: TagStructure,
    pub attributes: Vec<RequiredAttribute>,
}

impl TagMatchingRule {
    /// A rule for `tag_name` with no further constraints.
    pub fn new(tag_name: impl Into<SmolStr>) -> Self {
        Self {
            tag_name: tag_name.into(),
            parent_tag: None,
            tag_structure: TagStructure::Unspecified,
            attributes: Vec::new(),
        }
    }

    pub fn is_catch_all(&self) -> bool {
        self.tag_name == crate::base::constants::ELEMENT_CATCH_ALL
    }
}

// ============================================================================
// BOUND ATTRIBUTES
// ============================================================================

/// Dictionary semantics of a bound attribute: every markup attribute starting
/// with `prefix` becomes one entry of the backing dictionary.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct DictionaryConfig {
    pub prefix: Arc<str>,
    pub value_type_name: Arc<str>,
}

/// A markup attribute mapped to a backing property.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct BoundAttribute {
    /// Public attribute name (explicit or convention-derived).
    pub name: Arc<str>,
    pub property_name: Arc<str>,
    /// Display name of the property's declared type.
    pub type_name: Arc<str>,
    /// `"<type> <Owner>.<Property>"`, for tooling.
    pub display_name: Arc<str>,
    /// Whether the attribute binds directly through a public setter.
    pub has_public_setter: bool,
    pub is_enum: bool,
    pub documentation: Option<Arc<str>>,
    pub dictionary: Option<DictionaryConfig>,
    pub diagnostics: Vec<Diagnostic>,
}

impl BoundAttribute {
    /// Whether this attribute can be written as a single markup attribute.
    pub fn is_directly_bindable(&self) -> bool {
        self.has_public_setter
    }

    pub fn is_dictionary(&self) -> bool {
        self.dictionary.is_some()
    }

    /// Prefix of the dictionary attribute family, if any.
    pub fn dictionary_prefix(&self) -> Option<&str> {
        self.dictionary.as_ref().map(|d| d.prefix.as_ref())
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// A tag name a restricted component accepts as a child.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct AllowedChildTag {
    pub name: SmolStr,
}

// ============================================================================
// COMPONENT DESCRIPTOR
// ============================================================================

/// Everything the markup compiler needs to know about one component type.
///
/// Built once per observed type and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize))]
pub struct ComponentDescriptor {
    /// Fully-qualified type name.
    pub type_name: Arc<str>,
    pub namespace: Arc<str>,
    pub assembly: Arc<str>,
    /// Simple type name.
    pub type_identifier: Arc<str>,
    pub display_name: Arc<str>,
    /// Never empty.
    pub rules: Vec<TagMatchingRule>,
    pub attributes: Vec<BoundAttribute>,
    /// `None` means children are unrestricted. `Some` with an empty list
    /// means no child tag is allowed.
    pub allowed_children: Option<Vec<AllowedChildTag>>,
    pub documentation: Option<Arc<str>>,
    pub output_element_hint: Option<SmolStr>,
    /// Every diagnostic found, including those of the bound attributes.
    pub diagnostics: Vec<Diagnostic>,
}

impl ComponentDescriptor {
    /// Find a bound attribute by public name (case-insensitive).
    pub fn attribute(&self, name: &str) -> Option<&BoundAttribute> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Find a bound attribute by backing property name.
    pub fn attribute_for_property(&self, property: &str) -> Option<&BoundAttribute> {
        self.attributes
            .iter()
            .find(|a| a.property_name.as_ref() == property)
    }

    /// Names of the allowed child tags, if children are restricted.
    pub fn allowed_child_names(&self) -> Option<Vec<&str>> {
        self.allowed_children
            .as_ref()
            .map(|tags| tags.iter().map(|t| t.name.as_str()).collect())
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}
