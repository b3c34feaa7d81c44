//! Member walk tests: hierarchy order, shadowing, admission, hidden members.

use tagbind::ExtractionOptions;
use tagbind::base::constants;
use tagbind::symbols::{Accessibility, Annotation, PropertyMember, TypeRef};

use crate::helpers::descriptor_assertions::*;
use crate::helpers::fixtures::*;

#[test]
fn test_most_derived_first() {
    let types = vec![
        component("RootComponent").with_member(PropertyMember::new("Id", TypeRef::string())),
        component("MiddleComponent")
            .with_base(qualified("RootComponent"))
            .with_member(PropertyMember::new("Title", TypeRef::string())),
        component("LeafComponent")
            .with_base(qualified("MiddleComponent"))
            .with_member(PropertyMember::new("Size", int())),
    ];
    let d = extract_from(types, "LeafComponent");
    assert_eq!(attribute_names(&d), vec!["size", "title", "id"]);
}

#[test]
fn test_override_with_explicit_name_shadows_base() {
    let types = vec![
        component("BaseComponent").with_member(PropertyMember::new("Value", int())),
        component("DerivedComponent")
            .with_base(qualified("BaseComponent"))
            .with_member(PropertyMember::new("Value", int()).annotated(attribute_name("val"))),
    ];
    let d = extract_from(types, "DerivedComponent");
    assert_eq!(attribute_names(&d), vec!["val"]);
    assert!(d.attribute("value").is_none());
}

#[test]
fn test_excluded_derived_property_does_not_shadow() {
    let types = vec![
        component("BaseComponent").with_member(PropertyMember::new("Mode", TypeRef::string())),
        component("DerivedComponent")
            .with_base(qualified("BaseComponent"))
            .with_member(
                PropertyMember::new("Mode", TypeRef::string())
                    .annotated(Annotation::new(constants::ATTRIBUTE_NOT_BOUND)),
            ),
    ];
    let d = extract_from(types, "DerivedComponent");
    assert_eq!(attribute_names(&d), vec!["mode"]);
}

#[test]
fn test_base_outside_symbol_table_ends_walk() {
    let types = vec![
        component("AdapterComponent")
            .with_base("External.Library.BaseWidget")
            .with_member(PropertyMember::new("Src", TypeRef::string())),
    ];
    let d = extract_from(types, "AdapterComponent");
    assert_eq!(attribute_names(&d), vec!["src"]);
}

#[test]
fn test_read_only_string_dictionary_is_admitted() {
    let types = vec![
        component("RouteComponent")
            .with_member(read_only("RouteValues", dictionary(TypeRef::string(), TypeRef::string())))
            .with_member(read_only("Counts", dictionary(int(), int())))
            .with_member(read_only("Names", list(TypeRef::string()))),
    ];
    let d = extract_from(types, "RouteComponent");
    assert_eq!(attribute_names(&d), vec!["route-values"]);
}

#[test]
fn test_non_public_accessors() {
    let types = vec![
        component("AccessComponent")
            .with_member(
                PropertyMember::new("Protected", TypeRef::string())
                    .with_getter(Some(Accessibility::Protected)),
            )
            .with_member(
                PropertyMember::new("WriteOnly", TypeRef::string()).with_getter(None),
            )
            .with_member(PropertyMember::new("Item", TypeRef::string()).with_parameters(1)),
    ];
    let d = extract_from(types, "AccessComponent");
    assert!(d.attributes.is_empty());
}

#[test]
fn test_hidden_property_excluded_only_when_requested() {
    let types = || {
        vec![
            component("GridComponent")
                .with_member(PropertyMember::new("Rows", int()))
                .with_member(
                    PropertyMember::new("InternalState", TypeRef::string())
                        .annotated(Annotation::new(constants::EDITOR_BROWSABLE).arg(1i64)),
                ),
        ]
    };
    let shown = extract_from(types(), "GridComponent");
    assert_eq!(attribute_names(&shown), vec!["rows", "internal-state"]);

    let hidden = extract_with(
        types(),
        "GridComponent",
        ExtractionOptions::new().with_exclude_hidden(true),
    );
    assert_eq!(attribute_names(&hidden), vec!["rows"]);
}
