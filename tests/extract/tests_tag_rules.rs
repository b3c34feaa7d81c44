//! Tag matching rule tests.

use rstest::rstest;
use tagbind::base::constants;
use tagbind::descriptor::{NameComparison, TagStructure, ValueComparison};
use tagbind::symbols::Annotation;

use crate::helpers::descriptor_assertions::*;
use crate::helpers::fixtures::*;

// =============================================================================
// NAMING CONVENTION
// =============================================================================

#[rstest]
#[case("AutoCompleteBoxComponent", "auto-complete-box")]
#[case("DatePickercomponent", "date-picker")]
#[case("Card", "card")]
#[case("V2Banner", "v2-banner")]
fn test_convention_rule(#[case] type_name: &str, #[case] expected: &str) {
    let d = extract_from(vec![component(type_name)], type_name);
    assert_eq!(rule_tags(&d), vec![expected]);
    let rule = &d.rules[0];
    assert_eq!(rule.parent_tag, None);
    assert_eq!(rule.tag_structure, TagStructure::Unspecified);
    assert!(rule.attributes.is_empty());
}

// =============================================================================
// TARGET ELEMENT ANNOTATIONS
// =============================================================================

#[test]
fn test_one_rule_per_target_element() {
    let ty = component("LinkComponent")
        .annotated(target_element("a"))
        .annotated(target_element("area"));
    let d = extract_from(vec![ty], "LinkComponent");
    assert_eq!(rule_tags(&d), vec!["a", "area"]);
}

#[test]
fn test_target_element_suppresses_convention() {
    let ty = component("ButtonComponent").annotated(target_element("btn"));
    let d = extract_from(vec![ty], "ButtonComponent");
    assert_eq!(rule_tags(&d), vec!["btn"]);
}

#[test]
fn test_target_element_without_tag_matches_everything() {
    let ty = component("TrackingComponent").annotated(
        Annotation::new(constants::TARGET_ELEMENT)
            .named(constants::TARGET_ELEMENT_ATTRIBUTES, "track-*"),
    );
    let d = extract_from(vec![ty], "TrackingComponent");
    assert_eq!(rule_tags(&d), vec!["*"]);
    let attr = &d.rules[0].attributes[0];
    assert_eq!(attr.name, "track-");
    assert_eq!(attr.name_comparison, NameComparison::PrefixMatch);
}

#[test]
fn test_rule_constraints() {
    let ty = component("OptionComponent").annotated(
        target_element("option")
            .named(constants::TARGET_ELEMENT_PARENT_TAG, "select")
            .named(constants::TARGET_ELEMENT_TAG_STRUCTURE, "NormalOrSelfClosing")
            .named(constants::TARGET_ELEMENT_ATTRIBUTES, "[value^=opt-], selected"),
    );
    let d = extract_from(vec![ty], "OptionComponent");
    let rule = &d.rules[0];
    assert_eq!(rule.parent_tag.as_deref(), Some("select"));
    assert_eq!(rule.tag_structure, TagStructure::NormalOrSelfClosing);
    assert_eq!(rule.attributes.len(), 2);
    assert_eq!(rule.attributes[0].value.as_deref(), Some("opt-"));
    assert_eq!(rule.attributes[0].value_comparison, ValueComparison::PrefixMatch);
    assert_eq!(rule.attributes[1].name, "selected");
}

#[test]
fn test_malformed_constraint_keeps_rule() {
    let ty = component("BrokenComponent").annotated(
        target_element("broken").named(constants::TARGET_ELEMENT_ATTRIBUTES, "[unclosed"),
    );
    let d = extract_from(vec![ty], "BrokenComponent");
    assert_eq!(rule_tags(&d), vec!["broken"]);
    assert!(d.rules[0].attributes.is_empty());
    assert!(d.diagnostics.is_empty());
}

#[test]
fn test_unresolved_target_element_falls_back_to_convention() {
    let ty = component("GhostComponent").annotated(Annotation::unresolved("TargetElement").arg("ghost-tag"));
    let d = extract_from(vec![ty], "GhostComponent");
    assert_eq!(rule_tags(&d), vec!["ghost"]);
}

#[test]
fn test_same_short_name_from_other_namespace_is_ignored() {
    let ty = component("PanelComponent")
        .annotated(Annotation::new("Legacy.Markup.TargetElementAttribute").arg("legacy"));
    let d = extract_from(vec![ty], "PanelComponent");
    assert_eq!(rule_tags(&d), vec!["panel"]);
}
