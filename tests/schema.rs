//! Tests for schema types, the parameter type mapper, and the step keywords.
use flowlens::docs::ParamType;
use flowlens::schema::{
    ANY_ARRAY_SCHEMA, ANY_OBJECT_SCHEMA, ANY_SCHEMA, BOOLEAN_SCHEMA, INTEGER_SCHEMA,
    ObjectSchema, STEP_KEYWORDS, STRING_SCHEMA, ScalarKind, SchemaField, SchemaType,
    param_schema, step_element_schema,
};

#[test]
fn test_mapper_covers_the_closed_set() {
    assert_eq!(param_schema(ParamType::String), &STRING_SCHEMA);
    assert_eq!(param_schema(ParamType::Boolean), &BOOLEAN_SCHEMA);
    assert_eq!(param_schema(ParamType::Number), &INTEGER_SCHEMA);
    assert_eq!(param_schema(ParamType::Array), &ANY_ARRAY_SCHEMA);
    assert_eq!(param_schema(ParamType::Object), &ANY_OBJECT_SCHEMA);
    assert_eq!(param_schema(ParamType::Unknown), &ANY_SCHEMA);
}

#[test]
fn test_mapper_is_referentially_stable() {
    // Same singleton pointer on repeated calls, for every enum case.
    for ty in [
        ParamType::String,
        ParamType::Boolean,
        ParamType::Number,
        ParamType::Array,
        ParamType::Object,
        ParamType::Unknown,
    ] {
        assert!(std::ptr::eq(param_schema(ty), param_schema(ty)));
    }
}

#[test]
fn test_object_schema_field_lookup_is_exact() {
    let schema = SchemaType::Object(ObjectSchema::new(
        "t",
        vec![SchemaField {
            name: "name".to_string(),
            ty: &STRING_SCHEMA,
        }],
    ));

    assert_eq!(schema.field("name"), Some(&STRING_SCHEMA));
    assert_eq!(schema.field("Name"), None);
    assert_eq!(schema.field("nam"), None);
    assert_eq!(schema.field("names"), None);
}

#[test]
fn test_field_names_keep_documented_order() {
    let schema = SchemaType::Object(ObjectSchema::new(
        "t",
        vec![
            SchemaField {
                name: "z".to_string(),
                ty: &STRING_SCHEMA,
            },
            SchemaField {
                name: "a".to_string(),
                ty: &INTEGER_SCHEMA,
            },
        ],
    ));
    assert_eq!(schema.field_names(), vec!["z", "a"]);
}

#[test]
fn test_any_object_accepts_every_field() {
    assert!(ANY_OBJECT_SCHEMA.accepts_any_field());
    assert_eq!(ANY_OBJECT_SCHEMA.field("whatever"), Some(&ANY_SCHEMA));
    assert!(ANY_OBJECT_SCHEMA.field_names().is_empty());
}

#[test]
fn test_any_of_tries_alternatives_in_order() {
    let schema = SchemaType::AnyOf(vec![
        SchemaType::Expression,
        SchemaType::Object(ObjectSchema::new(
            "t",
            vec![SchemaField {
                name: "p1".to_string(),
                ty: &STRING_SCHEMA,
            }],
        )),
    ]);

    assert!(schema.accepts_expression());
    assert!(!schema.accepts_any_field());
    assert_eq!(schema.field("p1"), Some(&STRING_SCHEMA));
    assert_eq!(schema.field("p2"), None);
    assert_eq!(schema.field_names(), vec!["p1"]);
}

#[test]
fn test_scalar_kinds() {
    assert_eq!(STRING_SCHEMA, SchemaType::Scalar(ScalarKind::String));
    assert_eq!(BOOLEAN_SCHEMA, SchemaType::Scalar(ScalarKind::Boolean));
    assert_eq!(INTEGER_SCHEMA, SchemaType::Scalar(ScalarKind::Integer));
}

#[test]
fn test_step_element_schema_offers_the_keyword_set() {
    let schema = step_element_schema();
    assert_eq!(schema.field_names(), STEP_KEYWORDS.to_vec());
    assert_eq!(schema.field("call"), Some(&ANY_SCHEMA));
    assert_eq!(schema.field("logYaml"), Some(&ANY_SCHEMA));
    assert_eq!(schema.field("notAStep"), None);

    // The step schema is itself a shared singleton.
    assert!(std::ptr::eq(step_element_schema(), step_element_schema()));
}

#[test]
fn test_display_output() {
    assert_eq!(STRING_SCHEMA.to_string(), "string");
    assert_eq!(ANY_OBJECT_SCHEMA.to_string(), "object");

    let object = SchemaType::Object(ObjectSchema::new(
        "deploy in params",
        vec![
            SchemaField {
                name: "name".to_string(),
                ty: &STRING_SCHEMA,
            },
            SchemaField {
                name: "replicas".to_string(),
                ty: &INTEGER_SCHEMA,
            },
        ],
    ));
    assert_eq!(
        object.to_string(),
        "deploy in params {name: string, replicas: integer}"
    );

    let any_of = SchemaType::AnyOf(vec![SchemaType::Expression, SchemaType::AnyObject]);
    assert_eq!(any_of.to_string(), "[expression|object]");
}
