//! JSON interchange tests (feature `interchange`).

use tagbind::descriptor::descriptors_to_json;
use tagbind::{ExtractionOptions, SymbolTable, discover};

#[test]
fn test_symbol_table_from_json_and_descriptor_export() {
    let input = r#"[
        {
            "qualified_name": "Shop.Components.BadgeComponent",
            "name": "BadgeComponent",
            "namespace": "Shop.Components",
            "assembly": "Shop.Web.dll",
            "interfaces": ["Markup.Components.IComponent"],
            "members": [
                {
                    "name": "Count",
                    "ty": { "name": "int", "kind": "Primitive" },
                    "getter": "Public",
                    "setter": "Public"
                }
            ]
        }
    ]"#;

    let table = SymbolTable::from_json(input).unwrap();
    let descriptors = discover(&table, &ExtractionOptions::default());
    assert_eq!(descriptors.len(), 1);

    let json = descriptors_to_json(&descriptors).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value[0]["rules"][0]["tag_name"], "badge");
    assert_eq!(value[0]["attributes"][0]["name"], "count");
}

#[test]
fn test_malformed_table_is_an_error() {
    assert!(SymbolTable::from_json("{").is_err());
}
