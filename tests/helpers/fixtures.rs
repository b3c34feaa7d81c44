//! Fixture builders for symbol metadata.

use tagbind::base::constants;
use tagbind::descriptor::ComponentDescriptor;
use tagbind::symbols::{Annotation, ComponentType, PropertyMember, SymbolTable, TypeKind, TypeRef};
use tagbind::{ExtractionOptions, extract_named};

pub const NAMESPACE: &str = "Shop.Components";
pub const ASSEMBLY: &str = "Shop.Web.dll";

/// A public component type in [`NAMESPACE`].
pub fn component(name: &str) -> ComponentType {
    ComponentType::new(NAMESPACE, name, ASSEMBLY).implementing(constants::COMPONENT_INTERFACE)
}

/// Qualified name of a fixture component.
pub fn qualified(name: &str) -> String {
    format!("{}.{}", NAMESPACE, name)
}

/// `IDictionary<key, value>` as an interface type.
pub fn idictionary(key: TypeRef, value: TypeRef) -> TypeRef {
    let name = format!("System.Collections.Generic.IDictionary<{}, {}>", key.name, value.name);
    TypeRef::new(name, TypeKind::Interface).constructed(constants::DICTIONARY_INTERFACE, [key, value])
}

/// `Dictionary<key, value>` implementing `IDictionary<key, value>`.
pub fn dictionary(key: TypeRef, value: TypeRef) -> TypeRef {
    let name = format!("System.Collections.Generic.Dictionary<{}, {}>", key.name, value.name);
    TypeRef::new(name, TypeKind::Class).implementing(idictionary(key, value))
}

/// `List<item>`, which is a collection but not dictionary-shaped.
pub fn list(item: TypeRef) -> TypeRef {
    let name = format!("System.Collections.Generic.List<{}>", item.name);
    TypeRef::new(name, TypeKind::Class)
        .constructed("System.Collections.Generic.List`1", [item])
}

pub fn int() -> TypeRef {
    TypeRef::primitive("int")
}

/// `[AttributeName(name)]`
pub fn attribute_name(name: &str) -> Annotation {
    Annotation::new(constants::ATTRIBUTE_NAME).arg(name)
}

/// `[AttributeName(name, DictionaryAttributePrefix = prefix)]`
pub fn attribute_name_with_prefix(name: &str, prefix: &str) -> Annotation {
    attribute_name(name).named(constants::DICTIONARY_ATTRIBUTE_PREFIX, prefix)
}

/// `[TargetElement(tag)]`
pub fn target_element(tag: &str) -> Annotation {
    Annotation::new(constants::TARGET_ELEMENT).arg(tag)
}

/// A read-only property.
pub fn read_only(name: &str, ty: TypeRef) -> PropertyMember {
    PropertyMember::new(name, ty).read_only()
}

/// Build a table from `types` and extract the descriptor of `name`.
pub fn extract_from(types: Vec<ComponentType>, name: &str) -> ComponentDescriptor {
    extract_with(types, name, ExtractionOptions::default())
}

pub fn extract_with(types: Vec<ComponentType>, name: &str, options: ExtractionOptions) -> ComponentDescriptor {
    let table: SymbolTable = types.into_iter().collect();
    extract_named(&table, &qualified(name), &options)
        .expect("type should be known")
        .expect("type should not be hidden")
}
