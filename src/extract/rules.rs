//! Tag Matching Rule Builder.

use smol_str::SmolStr;

use super::required_attributes::parse_required_attributes;
use crate::base::{constants, strip_convention_suffix, to_lower_hyphen};
use crate::descriptor::{TagMatchingRule, TagStructure};
use crate::symbols::{Annotation, AnnotationValue, ComponentType, annotations_of};

/// Tag name a type gets when it has no target-element annotation.
pub fn convention_tag_name(type_name: &str) -> String {
    to_lower_hyphen(strip_convention_suffix(
        type_name,
        constants::COMPONENT_NAME_SUFFIX,
    ))
}

fn rule_from_annotation(annotation: &Annotation) -> TagMatchingRule {
    let tag_name = annotation
        .positional(0)
        .and_then(AnnotationValue::as_str)
        .unwrap_or(constants::ELEMENT_CATCH_ALL);

    let parent_tag = annotation
        .named_arg(constants::TARGET_ELEMENT_PARENT_TAG)
        .and_then(AnnotationValue::as_str)
        .map(SmolStr::new);

    let tag_structure = annotation
        .named_arg(constants::TARGET_ELEMENT_TAG_STRUCTURE)
        .map(|v| TagStructure::from_value(v.as_int(), v.as_str()))
        .unwrap_or_default();

    let attributes = annotation
        .named_arg(constants::TARGET_ELEMENT_ATTRIBUTES)
        .and_then(AnnotationValue::as_str)
        .map(parse_required_attributes)
        .unwrap_or_default();

    TagMatchingRule {
        tag_name: SmolStr::new(tag_name),
        parent_tag,
        tag_structure,
        attributes,
    }
}

/// Build the tag matching rules of `ty`. The result is never empty.
pub fn build_rules(ty: &ComponentType) -> Vec<TagMatchingRule> {
    let rules: Vec<_> = annotations_of(ty, constants::TARGET_ELEMENT)
        .map(rule_from_annotation)
        .collect();
    if !rules.is_empty() {
        return rules;
    }
    vec![TagMatchingRule::new(convention_tag_name(&ty.name))]
}
