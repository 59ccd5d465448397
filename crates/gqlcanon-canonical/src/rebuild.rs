//! Per-category reconstruction of named type bodies.
//!
//! Rebuilding runs in two phases. [`rebuild_named_type`] produces the
//! canonical shell for one type: scalars and introspection types pass
//! through untouched, every other kind gets deferred bodies whose thunks
//! sort members and resolve references against the shared registry.
//! [`finalize`] forces those bodies once the registry holds every shell.
//! Nothing here validates; inputs are assumed well-formed by the model.

use gqlcanon_schema::{
    Argument, EnumType, EnumTypeConfig, Field, InputField, InputObjectType, InterfaceType,
    NamedType, ObjectType, UnionType,
};
use indexmap::IndexMap;
use std::sync::Arc;

use crate::compare::camel_case_cmp;
use crate::error::CanonicalError;
use crate::resolve::TypeRegistry;

/// Builds the canonical shell for one named type.
///
/// The wildcard arm mirrors the classifier: an unknown kind aborts the
/// canonicalization. In practice the input has already been classified,
/// so the arm is unreachable.
pub fn rebuild_named_type(
    ty: &Arc<NamedType>,
    registry: &Arc<TypeRegistry>,
) -> Result<Arc<NamedType>, CanonicalError> {
    match ty.as_ref() {
        NamedType::Scalar(_) | NamedType::Introspection(_) => Ok(Arc::clone(ty)),
        NamedType::Object(object) => {
            let config = object.to_config();
            let interfaces = config.interfaces;
            let fields = config.fields;
            let registry_for_interfaces = Arc::clone(registry);
            let registry_for_fields = Arc::clone(registry);
            Ok(Arc::new(NamedType::Object(ObjectType::deferred(
                config.name,
                config.description,
                move || sort_named_refs(interfaces, &registry_for_interfaces),
                move || sort_fields(fields, &registry_for_fields),
            ))))
        }
        NamedType::Interface(interface) => {
            let config = interface.to_config();
            let interfaces = config.interfaces;
            let fields = config.fields;
            let registry_for_interfaces = Arc::clone(registry);
            let registry_for_fields = Arc::clone(registry);
            Ok(Arc::new(NamedType::Interface(InterfaceType::deferred(
                config.name,
                config.description,
                move || sort_named_refs(interfaces, &registry_for_interfaces),
                move || sort_fields(fields, &registry_for_fields),
            ))))
        }
        NamedType::Union(union_type) => {
            let config = union_type.to_config();
            let members = config.members;
            let registry = Arc::clone(registry);
            Ok(Arc::new(NamedType::Union(UnionType::deferred(
                config.name,
                config.description,
                move || sort_named_refs(members, &registry),
            ))))
        }
        NamedType::Enum(enum_type) => {
            let config = enum_type.to_config();
            Ok(Arc::new(NamedType::Enum(EnumType::new(EnumTypeConfig {
                name: config.name,
                description: config.description,
                values: sort_object_map(config.values, |value| value),
            }))))
        }
        NamedType::InputObject(input) => {
            let config = input.to_config();
            let fields = config.fields;
            let registry = Arc::clone(registry);
            Ok(Arc::new(NamedType::InputObject(InputObjectType::deferred(
                config.name,
                config.description,
                move || sort_input_fields(fields, &registry),
            ))))
        }
        other => Err(CanonicalError::UnclassifiableType {
            name: other.name().as_ref().to_string(),
        }),
    }
}

/// Forces the deferred bodies of a rebuilt type (phase 2).
pub fn finalize(ty: &NamedType) {
    match ty {
        NamedType::Object(object) => {
            object.interfaces();
            object.fields();
        }
        NamedType::Interface(interface) => {
            interface.interfaces();
            interface.fields();
        }
        NamedType::Union(union_type) => {
            union_type.members();
        }
        NamedType::InputObject(input) => {
            input.fields();
        }
        _ => {}
    }
}

/// Sorts a list of named references and swaps each for its canonical
/// instance. Used for implemented-interface lists and union members.
fn sort_named_refs(
    mut types: Vec<Arc<NamedType>>,
    registry: &TypeRegistry,
) -> Vec<Arc<NamedType>> {
    types.sort_by(|a, b| camel_case_cmp(a.name().as_ref(), b.name().as_ref()));
    types
        .into_iter()
        .map(|ty| registry.resolve_named(ty.name().as_ref()))
        .collect()
}

/// Sorts a field map and resolves each field's type reference and
/// argument map.
fn sort_fields(
    fields: IndexMap<String, Field>,
    registry: &TypeRegistry,
) -> IndexMap<String, Field> {
    sort_object_map(fields, |field| {
        let Field {
            description,
            ty,
            args,
            deprecation_reason,
        } = field;
        Field {
            description,
            ty: registry.resolve_ref(&ty),
            args: sort_args(args, registry),
            deprecation_reason,
        }
    })
}

/// Sorts an input field map and resolves each field's type reference.
fn sort_input_fields(
    fields: IndexMap<String, InputField>,
    registry: &TypeRegistry,
) -> IndexMap<String, InputField> {
    sort_object_map(fields, |field| {
        let InputField {
            description,
            ty,
            default_value,
            deprecation_reason,
        } = field;
        InputField {
            description,
            ty: registry.resolve_ref(&ty),
            default_value,
            deprecation_reason,
        }
    })
}

/// Sorts an argument map and resolves each argument's type reference.
/// Shared with directive reconstruction.
pub(crate) fn sort_args(
    args: IndexMap<String, Argument>,
    registry: &TypeRegistry,
) -> IndexMap<String, Argument> {
    sort_object_map(args, |arg| {
        let Argument {
            description,
            ty,
            default_value,
        } = arg;
        Argument {
            description,
            ty: registry.resolve_ref(&ty),
            default_value,
        }
    })
}

/// Reorders a string-keyed map with the camelCase comparator, rebuilding
/// each value on the way through.
fn sort_object_map<V, R>(
    map: IndexMap<String, V>,
    mut rebuild_value: impl FnMut(V) -> R,
) -> IndexMap<String, R> {
    map.sorted_by(|left, _, right, _| camel_case_cmp(left, right))
        .map(|(key, value)| (key, rebuild_value(value)))
        .collect()
}
