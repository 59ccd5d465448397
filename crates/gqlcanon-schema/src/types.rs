//! Named type definitions and their member records.
//!
//! Each kind struct exposes the same three-part surface: an eager
//! constructor from a config snapshot, accessors over its members, and
//! `to_config` for round-trip extraction. Object, Interface, Union, and
//! InputObject additionally offer a `deferred` constructor whose bodies
//! are thunks, so recursive type graphs can be built registry-first.

use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

use crate::deferred::Deferred;
use crate::name::TypeName;
use crate::reference::TypeRef;

/// Output field definition: type reference plus an argument map.
#[derive(Debug, Clone)]
pub struct Field {
    /// Optional description; passes through canonicalization verbatim.
    pub description: Option<String>,
    /// Type of the field value, possibly wrapped.
    pub ty: TypeRef,
    /// Arguments keyed by argument name, in declaration order.
    pub args: IndexMap<String, Argument>,
    /// Deprecation reason, if the field is deprecated.
    pub deprecation_reason: Option<String>,
}

/// Argument definition for a field or directive.
#[derive(Debug, Clone)]
pub struct Argument {
    /// Optional description.
    pub description: Option<String>,
    /// Type of the argument value, possibly wrapped.
    pub ty: TypeRef,
    /// Default value literal, if declared.
    pub default_value: Option<Value>,
}

/// Input object field definition.
#[derive(Debug, Clone)]
pub struct InputField {
    /// Optional description.
    pub description: Option<String>,
    /// Type of the field value, possibly wrapped.
    pub ty: TypeRef,
    /// Default value literal, if declared.
    pub default_value: Option<Value>,
    /// Deprecation reason, if the field is deprecated.
    pub deprecation_reason: Option<String>,
}

/// Enum value definition; carries no type references.
#[derive(Debug, Clone)]
pub struct EnumValue {
    /// Optional description.
    pub description: Option<String>,
    /// Deprecation reason, if the value is deprecated.
    pub deprecation_reason: Option<String>,
}

/// Config snapshot of a scalar type.
#[derive(Debug, Clone)]
pub struct ScalarTypeConfig {
    /// Type name.
    pub name: TypeName,
    /// Optional description.
    pub description: Option<String>,
    /// Optional URL pointing at the scalar's specification.
    pub specified_by_url: Option<String>,
}

/// Leaf scalar type; carries no rewritable internal structure.
#[derive(Debug)]
pub struct ScalarType {
    name: TypeName,
    description: Option<String>,
    specified_by_url: Option<String>,
}

impl ScalarType {
    /// Constructs a scalar from its config snapshot.
    pub fn new(config: ScalarTypeConfig) -> Self {
        Self {
            name: config.name,
            description: config.description,
            specified_by_url: config.specified_by_url,
        }
    }

    /// Type name.
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Optional specification URL.
    pub fn specified_by_url(&self) -> Option<&str> {
        self.specified_by_url.as_deref()
    }

    /// Extracts the full constructor-visible state.
    pub fn to_config(&self) -> ScalarTypeConfig {
        ScalarTypeConfig {
            name: self.name.clone(),
            description: self.description.clone(),
            specified_by_url: self.specified_by_url.clone(),
        }
    }
}

/// Built-in introspection/meta type, passed through canonicalization opaquely.
#[derive(Debug)]
pub struct IntrospectionType {
    name: TypeName,
    payload: Value,
}

impl IntrospectionType {
    /// Constructs an introspection type from its name and opaque payload.
    pub fn new(name: TypeName, payload: Value) -> Self {
        Self { name, payload }
    }

    /// Type name (double-underscore prefixed by convention).
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Opaque payload; never inspected by consumers.
    pub fn payload(&self) -> &Value {
        &self.payload
    }
}

/// Config snapshot of an object type.
#[derive(Debug, Clone)]
pub struct ObjectTypeConfig {
    /// Type name.
    pub name: TypeName,
    /// Optional description.
    pub description: Option<String>,
    /// Implemented interfaces, in declaration order.
    pub interfaces: Vec<Arc<NamedType>>,
    /// Fields keyed by field name, in declaration order.
    pub fields: IndexMap<String, Field>,
}

/// Object type: fields plus implemented interfaces.
#[derive(Debug)]
pub struct ObjectType {
    name: TypeName,
    description: Option<String>,
    interfaces: Deferred<Vec<Arc<NamedType>>>,
    fields: Deferred<IndexMap<String, Field>>,
}

impl ObjectType {
    /// Constructs an object type from an eager config snapshot.
    pub fn new(config: ObjectTypeConfig) -> Self {
        Self {
            name: config.name,
            description: config.description,
            interfaces: Deferred::ready(config.interfaces),
            fields: Deferred::ready(config.fields),
        }
    }

    /// Constructs an object type whose bodies are computed on first access.
    pub fn deferred(
        name: TypeName,
        description: Option<String>,
        interfaces: impl FnOnce() -> Vec<Arc<NamedType>> + Send + 'static,
        fields: impl FnOnce() -> IndexMap<String, Field> + Send + 'static,
    ) -> Self {
        Self {
            name,
            description,
            interfaces: Deferred::new(interfaces),
            fields: Deferred::new(fields),
        }
    }

    /// Type name.
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Implemented interfaces; forces a deferred body.
    pub fn interfaces(&self) -> &[Arc<NamedType>] {
        self.interfaces.get()
    }

    /// Field map; forces a deferred body.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.fields.get()
    }

    /// Extracts the full constructor-visible state, forcing deferred bodies.
    pub fn to_config(&self) -> ObjectTypeConfig {
        ObjectTypeConfig {
            name: self.name.clone(),
            description: self.description.clone(),
            interfaces: self.interfaces().to_vec(),
            fields: self.fields().clone(),
        }
    }
}

/// Config snapshot of an interface type.
#[derive(Debug, Clone)]
pub struct InterfaceTypeConfig {
    /// Type name.
    pub name: TypeName,
    /// Optional description.
    pub description: Option<String>,
    /// Implemented interfaces, in declaration order.
    pub interfaces: Vec<Arc<NamedType>>,
    /// Fields keyed by field name, in declaration order.
    pub fields: IndexMap<String, Field>,
}

/// Interface type: same shape as an object type.
#[derive(Debug)]
pub struct InterfaceType {
    name: TypeName,
    description: Option<String>,
    interfaces: Deferred<Vec<Arc<NamedType>>>,
    fields: Deferred<IndexMap<String, Field>>,
}

impl InterfaceType {
    /// Constructs an interface type from an eager config snapshot.
    pub fn new(config: InterfaceTypeConfig) -> Self {
        Self {
            name: config.name,
            description: config.description,
            interfaces: Deferred::ready(config.interfaces),
            fields: Deferred::ready(config.fields),
        }
    }

    /// Constructs an interface type whose bodies are computed on first access.
    pub fn deferred(
        name: TypeName,
        description: Option<String>,
        interfaces: impl FnOnce() -> Vec<Arc<NamedType>> + Send + 'static,
        fields: impl FnOnce() -> IndexMap<String, Field> + Send + 'static,
    ) -> Self {
        Self {
            name,
            description,
            interfaces: Deferred::new(interfaces),
            fields: Deferred::new(fields),
        }
    }

    /// Type name.
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Implemented interfaces; forces a deferred body.
    pub fn interfaces(&self) -> &[Arc<NamedType>] {
        self.interfaces.get()
    }

    /// Field map; forces a deferred body.
    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.fields.get()
    }

    /// Extracts the full constructor-visible state, forcing deferred bodies.
    pub fn to_config(&self) -> InterfaceTypeConfig {
        InterfaceTypeConfig {
            name: self.name.clone(),
            description: self.description.clone(),
            interfaces: self.interfaces().to_vec(),
            fields: self.fields().clone(),
        }
    }
}

/// Config snapshot of a union type.
#[derive(Debug, Clone)]
pub struct UnionTypeConfig {
    /// Type name.
    pub name: TypeName,
    /// Optional description.
    pub description: Option<String>,
    /// Member types, in declaration order; each must be Object-kind.
    pub members: Vec<Arc<NamedType>>,
}

/// Union type: a list of Object-kind member types.
#[derive(Debug)]
pub struct UnionType {
    name: TypeName,
    description: Option<String>,
    members: Deferred<Vec<Arc<NamedType>>>,
}

impl UnionType {
    /// Constructs a union type from an eager config snapshot.
    pub fn new(config: UnionTypeConfig) -> Self {
        Self {
            name: config.name,
            description: config.description,
            members: Deferred::ready(config.members),
        }
    }

    /// Constructs a union type whose member list is computed on first access.
    pub fn deferred(
        name: TypeName,
        description: Option<String>,
        members: impl FnOnce() -> Vec<Arc<NamedType>> + Send + 'static,
    ) -> Self {
        Self {
            name,
            description,
            members: Deferred::new(members),
        }
    }

    /// Type name.
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Member types; forces a deferred body.
    pub fn members(&self) -> &[Arc<NamedType>] {
        self.members.get()
    }

    /// Extracts the full constructor-visible state, forcing the deferred body.
    pub fn to_config(&self) -> UnionTypeConfig {
        UnionTypeConfig {
            name: self.name.clone(),
            description: self.description.clone(),
            members: self.members().to_vec(),
        }
    }
}

/// Config snapshot of an enum type.
#[derive(Debug, Clone)]
pub struct EnumTypeConfig {
    /// Type name.
    pub name: TypeName,
    /// Optional description.
    pub description: Option<String>,
    /// Values keyed by value name, in declaration order.
    pub values: IndexMap<String, EnumValue>,
}

/// Enum type: a map of value definitions.
#[derive(Debug)]
pub struct EnumType {
    name: TypeName,
    description: Option<String>,
    values: IndexMap<String, EnumValue>,
}

impl EnumType {
    /// Constructs an enum type from its config snapshot.
    pub fn new(config: EnumTypeConfig) -> Self {
        Self {
            name: config.name,
            description: config.description,
            values: config.values,
        }
    }

    /// Type name.
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Value map, in stored order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    /// Extracts the full constructor-visible state.
    pub fn to_config(&self) -> EnumTypeConfig {
        EnumTypeConfig {
            name: self.name.clone(),
            description: self.description.clone(),
            values: self.values.clone(),
        }
    }
}

/// Config snapshot of an input object type.
#[derive(Debug, Clone)]
pub struct InputObjectTypeConfig {
    /// Type name.
    pub name: TypeName,
    /// Optional description.
    pub description: Option<String>,
    /// Fields keyed by field name, in declaration order.
    pub fields: IndexMap<String, InputField>,
}

/// Input object type: a map of input field definitions.
#[derive(Debug)]
pub struct InputObjectType {
    name: TypeName,
    description: Option<String>,
    fields: Deferred<IndexMap<String, InputField>>,
}

impl InputObjectType {
    /// Constructs an input object type from an eager config snapshot.
    pub fn new(config: InputObjectTypeConfig) -> Self {
        Self {
            name: config.name,
            description: config.description,
            fields: Deferred::ready(config.fields),
        }
    }

    /// Constructs an input object type whose fields are computed on first access.
    pub fn deferred(
        name: TypeName,
        description: Option<String>,
        fields: impl FnOnce() -> IndexMap<String, InputField> + Send + 'static,
    ) -> Self {
        Self {
            name,
            description,
            fields: Deferred::new(fields),
        }
    }

    /// Type name.
    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Field map; forces a deferred body.
    pub fn fields(&self) -> &IndexMap<String, InputField> {
        self.fields.get()
    }

    /// Extracts the full constructor-visible state, forcing the deferred body.
    pub fn to_config(&self) -> InputObjectTypeConfig {
        InputObjectTypeConfig {
            name: self.name.clone(),
            description: self.description.clone(),
            fields: self.fields().clone(),
        }
    }
}

/// Tagged union over every named type kind.
///
/// Marked `#[non_exhaustive]`: a future model revision may introduce a new
/// kind, and downstream crates must surface such a value as a fatal
/// classification failure rather than silently misfiling it.
#[derive(Debug)]
#[non_exhaustive]
pub enum NamedType {
    /// Leaf scalar type.
    Scalar(ScalarType),
    /// Object type.
    Object(ObjectType),
    /// Interface type.
    Interface(InterfaceType),
    /// Union type.
    Union(UnionType),
    /// Enum type.
    Enum(EnumType),
    /// Input object type.
    InputObject(InputObjectType),
    /// Built-in introspection/meta type.
    Introspection(IntrospectionType),
}

impl NamedType {
    /// Name of the type, regardless of kind.
    pub fn name(&self) -> &TypeName {
        match self {
            NamedType::Scalar(ty) => ty.name(),
            NamedType::Object(ty) => ty.name(),
            NamedType::Interface(ty) => ty.name(),
            NamedType::Union(ty) => ty.name(),
            NamedType::Enum(ty) => ty.name(),
            NamedType::InputObject(ty) => ty.name(),
            NamedType::Introspection(ty) => ty.name(),
        }
    }

    /// Whether this type is an Object.
    pub fn is_object(&self) -> bool {
        matches!(self, NamedType::Object(_))
    }
}
