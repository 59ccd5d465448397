//! Schema type-system model for the gqlcanon canonicalizer.
//!
//! This crate owns the object model the canonicalizer consumes and
//! produces: named types in seven kinds, wrapped type references,
//! directives, and the schema registry that ties them together. Every
//! entity supports config extraction (`to_config`) and reconstruction
//! from a config with round-trip fidelity; reference-carrying bodies may
//! be supplied as thunks so recursive type graphs can be assembled
//! registry-first.
//!
#![deny(missing_docs)]

/// One-shot deferred cells backing lazily built type bodies.
pub mod deferred;
/// Directive definitions and location tags.
pub mod directive;
/// Model validation errors.
pub mod error;
/// Validated name newtypes.
pub mod name;
/// Wrapped type references.
pub mod reference;
/// Schema registry and config extraction.
pub mod schema;
/// Deterministic JSON snapshot rendering.
pub mod snapshot;
/// Named type definitions per kind.
pub mod types;

pub use deferred::Deferred;
pub use directive::{Directive, DirectiveConfig, DirectiveLocation};
pub use error::SchemaError;
pub use name::{DirectiveName, TypeName};
pub use reference::TypeRef;
pub use schema::{Schema, SchemaConfig};
pub use snapshot::{directive_to_value, named_type_to_value, schema_to_value};
pub use types::{
    Argument, EnumType, EnumTypeConfig, EnumValue, Field, InputField, InputObjectType,
    InputObjectTypeConfig, InterfaceType, InterfaceTypeConfig, IntrospectionType, NamedType,
    ObjectType, ObjectTypeConfig, ScalarType, ScalarTypeConfig, UnionType, UnionTypeConfig,
};
