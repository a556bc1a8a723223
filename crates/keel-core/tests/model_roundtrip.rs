//! Serde roundtrip and JsonSchema validation tests for the schema model.

use keel_core::{ObjectSchema, Property, PropertyType, Schema};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            pretty_assertions::assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn person() -> ObjectSchema {
    let mut id = Property::new("id", PropertyType::Int);
    id.is_primary = true;
    id.is_indexed = true;

    let mut nickname = Property::new("nickname", PropertyType::String);
    nickname.is_nullable = true;

    ObjectSchema {
        name: "Person".into(),
        properties: vec![
            id,
            nickname,
            Property::new("birthday", PropertyType::Date),
            Property::new("avatar", PropertyType::Data),
            Property::list("dogs", "Dog"),
            Property::object("spouse", "Person"),
        ],
        primary_key: Some("id".into()),
    }
}

roundtrip_and_validate!(
    property_roundtrip,
    Property,
    Property::new("weight", PropertyType::Double)
);

roundtrip_and_validate!(
    list_property_roundtrip,
    Property,
    Property::list("tags", "Tag")
);

roundtrip_and_validate!(object_schema_roundtrip, ObjectSchema, person());

roundtrip_and_validate!(
    schema_roundtrip,
    Schema,
    Schema::new(vec![person(), ObjectSchema::new("Dog")])
);

#[test]
fn property_type_field_serializes_as_type() {
    let json = serde_json::to_value(Property::object("owner", "Person")).unwrap();
    assert_eq!(json["type"], "object");
    assert_eq!(json["object_type"], "Person");
    assert_eq!(json["is_nullable"], true);
}

#[test]
fn schema_serializes_as_plain_array() {
    let json = serde_json::to_value(Schema::new(vec![ObjectSchema::new("Dog")])).unwrap();
    assert!(json.is_array());
    assert_eq!(json[0]["name"], "Dog");
}

#[test]
fn missing_flags_deserialize_as_false() {
    let prop: Property = serde_json::from_value(serde_json::json!({
        "name": "age",
        "type": "int"
    }))
    .unwrap();
    pretty_assertions::assert_eq!(prop, Property::new("age", PropertyType::Int));
}
