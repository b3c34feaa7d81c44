//! Bound attribute tests: naming, enum flag, documentation, dictionaries.

use tagbind::ExtractionOptions;
use tagbind::symbols::{PropertyMember, TypeKind, TypeRef};

use crate::helpers::descriptor_assertions::*;
use crate::helpers::fixtures::*;

#[test]
fn test_property_fields() {
    let ty = component("InputComponent").with_member(
        PropertyMember::new("InputKind", TypeRef::new("Shop.InputKind", TypeKind::Enum))
            .documented("How the input renders."),
    );
    let d = extract_with(vec![ty], "InputComponent", ExtractionOptions::new().with_documentation(true));
    let attr = attribute(&d, "input-kind");
    assert_eq!(attr.property_name.as_ref(), "InputKind");
    assert_eq!(attr.type_name.as_ref(), "Shop.InputKind");
    assert!(attr.is_enum);
    assert!(attr.is_directly_bindable());
    assert_eq!(attr.documentation.as_deref(), Some("How the input renders."));
    assert!(!attr.is_dictionary());
}

#[test]
fn test_explicit_name_is_used_verbatim() {
    let ty = component("ImageComponent")
        .with_member(PropertyMember::new("SourceUrl", TypeRef::string()).annotated(attribute_name("src")));
    let d = extract_from(vec![ty], "ImageComponent");
    assert_eq!(attribute_names(&d), vec!["src"]);
}

#[test]
fn test_dictionary_default_prefix() {
    let ty = component("LinkComponent")
        .with_member(read_only("Items", dictionary(TypeRef::string(), TypeRef::string())));
    let d = extract_from(vec![ty], "LinkComponent");
    let attr = attribute(&d, "items");
    assert_eq!(attr.dictionary_prefix(), Some("items-"));
    assert!(!attr.is_directly_bindable());
    assert!(d.diagnostics.is_empty());
}

#[test]
fn test_dictionary_explicit_prefix() {
    let ty = component("LinkComponent").with_member(
        read_only("Items", dictionary(TypeRef::string(), int()))
            .annotated(attribute_name_with_prefix("items", "entry-")),
    );
    let d = extract_from(vec![ty], "LinkComponent");
    let attr = attribute(&d, "items");
    assert_eq!(attr.dictionary_prefix(), Some("entry-"));
    assert_eq!(attr.dictionary.as_ref().unwrap().value_type_name.as_ref(), "int");
    assert!(d.diagnostics.is_empty());
}

#[test]
fn test_dictionary_prefix_follows_explicit_name() {
    let ty = component("FormComponent").with_member(
        PropertyMember::new("RouteValues", idictionary(TypeRef::string(), TypeRef::string()))
            .annotated(attribute_name("route")),
    );
    let d = extract_from(vec![ty], "FormComponent");
    let attr = attribute(&d, "route");
    assert!(attr.is_directly_bindable());
    assert_eq!(attr.dictionary_prefix(), Some("route-"));
}

#[test]
fn test_settable_dictionary_is_both_direct_and_prefixed() {
    let ty = component("MetaComponent")
        .with_member(PropertyMember::new("Data", dictionary(TypeRef::string(), TypeRef::string())));
    let d = extract_from(vec![ty], "MetaComponent");
    let attr = attribute(&d, "data");
    assert!(attr.is_directly_bindable());
    assert_eq!(attr.dictionary_prefix(), Some("data-"));
}

#[test]
fn test_non_string_keyed_dictionary_has_no_dictionary_config() {
    let ty = component("ChartComponent")
        .with_member(PropertyMember::new("Series", dictionary(int(), TypeRef::string())));
    let d = extract_from(vec![ty], "ChartComponent");
    let attr = attribute(&d, "series");
    assert!(!attr.is_dictionary());
    assert!(d.diagnostics.is_empty());
}
