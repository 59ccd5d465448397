use indexmap::IndexMap;
use serde_json::json;
use std::sync::Arc;

use gqlcanon_schema::{
    schema_to_value, Argument, Field, NamedType, ObjectType, ObjectTypeConfig, ScalarType,
    ScalarTypeConfig, Schema, SchemaConfig, SchemaError, TypeName, TypeRef,
};

fn scalar(name: &str) -> Arc<NamedType> {
    Arc::new(NamedType::Scalar(ScalarType::new(ScalarTypeConfig {
        name: TypeName::parse(name).unwrap(),
        description: None,
        specified_by_url: None,
    })))
}

fn field(ty: TypeRef) -> Field {
    Field {
        description: None,
        ty,
        args: IndexMap::new(),
        deprecation_reason: None,
    }
}

fn object(name: &str, fields: Vec<(&str, Field)>) -> Arc<NamedType> {
    Arc::new(NamedType::Object(ObjectType::new(ObjectTypeConfig {
        name: TypeName::parse(name).unwrap(),
        description: None,
        interfaces: Vec::new(),
        fields: fields
            .into_iter()
            .map(|(name, field)| (name.to_string(), field))
            .collect(),
    })))
}

#[test]
fn type_names_follow_the_name_grammar() {
    assert!(TypeName::parse("_Entity").is_ok());
    assert!(TypeName::parse("fooBar2").is_ok());
    assert!(TypeName::parse("__Schema").is_ok());
    assert!(TypeName::parse("9lives").is_err());
    assert!(TypeName::parse("foo-bar").is_err());
    assert!(TypeName::parse("").is_err());
}

#[test]
fn duplicate_type_names_are_rejected() {
    let result = Schema::new(SchemaConfig {
        description: None,
        types: vec![scalar("Date"), scalar("Date")],
        directives: Vec::new(),
        query: None,
        mutation: None,
        subscription: None,
    });
    assert!(matches!(
        result,
        Err(SchemaError::DuplicateType { name }) if name == "Date"
    ));
}

#[test]
fn root_operations_must_be_objects() {
    let date = scalar("Date");
    let result = Schema::new(SchemaConfig {
        description: None,
        types: vec![Arc::clone(&date)],
        directives: Vec::new(),
        query: Some(date),
        mutation: None,
        subscription: None,
    });
    assert!(matches!(
        result,
        Err(SchemaError::RootNotObject { operation: "query", .. })
    ));
}

#[test]
fn object_config_round_trips() {
    let date = scalar("Date");
    let mut args = IndexMap::new();
    args.insert(
        "tz".to_string(),
        Argument {
            description: Some("IANA zone".to_string()),
            ty: TypeRef::named(Arc::clone(&date)),
            default_value: Some(json!("UTC")),
        },
    );
    let original = ObjectType::new(ObjectTypeConfig {
        name: TypeName::parse("Query").unwrap(),
        description: Some("root".to_string()),
        interfaces: Vec::new(),
        fields: IndexMap::from([(
            "now".to_string(),
            Field {
                description: None,
                ty: TypeRef::non_null(TypeRef::named(date)),
                args,
                deprecation_reason: None,
            },
        )]),
    });

    let rebuilt = ObjectType::new(original.to_config());
    assert_eq!(rebuilt.name().as_ref(), "Query");
    assert_eq!(rebuilt.description(), Some("root"));
    let now = &rebuilt.fields()["now"];
    assert_eq!(now.ty.to_string(), "Date!");
    assert_eq!(now.args["tz"].default_value, Some(json!("UTC")));
}

#[test]
fn deferred_bodies_resolve_on_access() {
    let date = scalar("Date");
    let deferred = ObjectType::deferred(
        TypeName::parse("Query").unwrap(),
        None,
        Vec::new,
        move || {
            IndexMap::from([(
                "now".to_string(),
                field(TypeRef::named(date)),
            )])
        },
    );
    assert_eq!(deferred.fields()["now"].ty.to_string(), "Date");
    assert!(deferred.interfaces().is_empty());
}

#[test]
fn type_ref_display_uses_wrapped_notation() {
    let date = scalar("Date");
    let reference = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named(
        Arc::clone(&date),
    ))));
    assert_eq!(reference.to_string(), "[Date!]!");
    assert!(Arc::ptr_eq(reference.named_type(), &date));
}

#[test]
fn snapshot_matches_golden_shape() {
    let date = scalar("Date");
    let query = object(
        "Query",
        vec![("now", field(TypeRef::non_null(TypeRef::named(date.clone()))))],
    );
    let schema = Schema::new(SchemaConfig {
        description: None,
        types: vec![Arc::clone(&query), date],
        directives: Vec::new(),
        query: Some(query),
        mutation: None,
        subscription: None,
    })
    .unwrap();

    let expected = json!({
        "description": null,
        "types": [
            {
                "kind": "OBJECT",
                "name": "Query",
                "description": null,
                "interfaces": [],
                "fields": [
                    {
                        "name": "now",
                        "description": null,
                        "type": "Date!",
                        "args": [],
                        "deprecation_reason": null,
                    }
                ],
            },
            {
                "kind": "SCALAR",
                "name": "Date",
                "description": null,
                "specified_by_url": null,
            }
        ],
        "directives": [],
        "query": "Query",
        "mutation": null,
        "subscription": null,
    });
    assert_eq!(schema_to_value(&schema), expected);
}
