//! Deterministic JSON rendering of a schema.
//!
//! Every ordered collection (types, fields, arguments, enum values,
//! interfaces, union members, directive locations) renders as a JSON array
//! in stored order, and every type reference renders as its wrapped
//! notation string (`[Episode!]!`), which keeps the output finite for
//! recursive type graphs. Two schemas are observably identical exactly
//! when their snapshots are equal.

use serde_json::{json, Value};
use std::sync::Arc;

use crate::directive::Directive;
use crate::schema::Schema;
use crate::types::{Argument, EnumValue, Field, InputField, NamedType};

/// Renders a schema to its deterministic JSON snapshot.
pub fn schema_to_value(schema: &Schema) -> Value {
    json!({
        "description": schema.description(),
        "types": schema
            .type_map()
            .values()
            .map(named_type_to_value)
            .collect::<Vec<_>>(),
        "directives": schema
            .directives()
            .iter()
            .map(directive_to_value)
            .collect::<Vec<_>>(),
        "query": schema.query_type().map(|ty| ty.name().as_ref().to_string()),
        "mutation": schema.mutation_type().map(|ty| ty.name().as_ref().to_string()),
        "subscription": schema.subscription_type().map(|ty| ty.name().as_ref().to_string()),
    })
}

/// Renders one named type.
pub fn named_type_to_value(ty: &Arc<NamedType>) -> Value {
    match ty.as_ref() {
        NamedType::Scalar(scalar) => json!({
            "kind": "SCALAR",
            "name": scalar.name().as_ref(),
            "description": scalar.description(),
            "specified_by_url": scalar.specified_by_url(),
        }),
        NamedType::Object(object) => json!({
            "kind": "OBJECT",
            "name": object.name().as_ref(),
            "description": object.description(),
            "interfaces": named_type_names(object.interfaces()),
            "fields": fields_to_value(object.fields()),
        }),
        NamedType::Interface(interface) => json!({
            "kind": "INTERFACE",
            "name": interface.name().as_ref(),
            "description": interface.description(),
            "interfaces": named_type_names(interface.interfaces()),
            "fields": fields_to_value(interface.fields()),
        }),
        NamedType::Union(union_type) => json!({
            "kind": "UNION",
            "name": union_type.name().as_ref(),
            "description": union_type.description(),
            "members": named_type_names(union_type.members()),
        }),
        NamedType::Enum(enum_type) => json!({
            "kind": "ENUM",
            "name": enum_type.name().as_ref(),
            "description": enum_type.description(),
            "values": enum_type
                .values()
                .iter()
                .map(|(name, value)| enum_value_to_value(name, value))
                .collect::<Vec<_>>(),
        }),
        NamedType::InputObject(input) => json!({
            "kind": "INPUT_OBJECT",
            "name": input.name().as_ref(),
            "description": input.description(),
            "fields": input
                .fields()
                .iter()
                .map(|(name, field)| input_field_to_value(name, field))
                .collect::<Vec<_>>(),
        }),
        NamedType::Introspection(meta) => json!({
            "kind": "INTROSPECTION",
            "name": meta.name().as_ref(),
            "payload": meta.payload(),
        }),
    }
}

/// Renders one directive definition.
pub fn directive_to_value(directive: &Directive) -> Value {
    json!({
        "name": directive.name().as_ref(),
        "description": directive.description(),
        "locations": directive
            .locations()
            .iter()
            .map(|location| location.as_ref())
            .collect::<Vec<_>>(),
        "args": args_to_value(directive.args()),
        "repeatable": directive.repeatable(),
    })
}

fn named_type_names(types: &[Arc<NamedType>]) -> Vec<String> {
    types
        .iter()
        .map(|ty| ty.name().as_ref().to_string())
        .collect()
}

fn fields_to_value(fields: &indexmap::IndexMap<String, Field>) -> Vec<Value> {
    fields
        .iter()
        .map(|(name, field)| {
            json!({
                "name": name,
                "description": field.description,
                "type": field.ty.to_string(),
                "args": args_to_value(&field.args),
                "deprecation_reason": field.deprecation_reason,
            })
        })
        .collect()
}

fn args_to_value(args: &indexmap::IndexMap<String, Argument>) -> Vec<Value> {
    args.iter()
        .map(|(name, arg)| {
            json!({
                "name": name,
                "description": arg.description,
                "type": arg.ty.to_string(),
                "default_value": arg.default_value,
            })
        })
        .collect()
}

fn enum_value_to_value(name: &str, value: &EnumValue) -> Value {
    json!({
        "name": name,
        "description": value.description,
        "deprecation_reason": value.deprecation_reason,
    })
}

fn input_field_to_value(name: &str, field: &InputField) -> Value {
    json!({
        "name": name,
        "description": field.description,
        "type": field.ty.to_string(),
        "default_value": field.default_value,
        "deprecation_reason": field.deprecation_reason,
    })
}
