use indexmap::IndexMap;
use std::sync::Arc;

use crate::directive::Directive;
use crate::error::SchemaError;
use crate::name::TypeName;
use crate::types::NamedType;

/// Config snapshot of a schema: the flat, fully-populated view consumed by
/// canonicalization and reproduced by [`Schema::new`].
#[derive(Debug, Clone)]
pub struct SchemaConfig {
    /// Optional description.
    pub description: Option<String>,
    /// Named types, in registry order.
    pub types: Vec<Arc<NamedType>>,
    /// Directive definitions, in stored order.
    pub directives: Vec<Directive>,
    /// Query root, if declared.
    pub query: Option<Arc<NamedType>>,
    /// Mutation root, if declared.
    pub mutation: Option<Arc<NamedType>>,
    /// Subscription root, if declared.
    pub subscription: Option<Arc<NamedType>>,
}

/// Schema: a name-keyed registry of named types, a directive list, and up
/// to three root operation references.
///
/// Registry invariant: each type name maps to exactly one shared instance,
/// and every reference elsewhere in the schema resolves by name to that
/// instance. The constructor rejects duplicate names; reference consistency
/// is the responsibility of whoever assembles the config.
#[derive(Debug)]
pub struct Schema {
    description: Option<String>,
    types: IndexMap<TypeName, Arc<NamedType>>,
    directives: Vec<Directive>,
    query: Option<Arc<NamedType>>,
    mutation: Option<Arc<NamedType>>,
    subscription: Option<Arc<NamedType>>,
}

impl Schema {
    /// Builds a schema from a config snapshot.
    ///
    /// Fails on a duplicate type name or a root operation that does not
    /// reference an Object-kind type.
    pub fn new(config: SchemaConfig) -> Result<Self, SchemaError> {
        let mut types = IndexMap::with_capacity(config.types.len());
        for ty in config.types {
            let name = ty.name().clone();
            if types.insert(name.clone(), ty).is_some() {
                return Err(SchemaError::DuplicateType {
                    name: name.as_ref().to_string(),
                });
            }
        }
        check_root("query", config.query.as_deref())?;
        check_root("mutation", config.mutation.as_deref())?;
        check_root("subscription", config.subscription.as_deref())?;
        Ok(Self {
            description: config.description,
            types,
            directives: config.directives,
            query: config.query,
            mutation: config.mutation,
            subscription: config.subscription,
        })
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Name-keyed type registry, in stored order.
    pub fn type_map(&self) -> &IndexMap<TypeName, Arc<NamedType>> {
        &self.types
    }

    /// Looks up a named type by name.
    pub fn get_type(&self, name: &str) -> Option<&Arc<NamedType>> {
        self.types.get(name)
    }

    /// Directive definitions, in stored order.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// Query root, if declared.
    pub fn query_type(&self) -> Option<&Arc<NamedType>> {
        self.query.as_ref()
    }

    /// Mutation root, if declared.
    pub fn mutation_type(&self) -> Option<&Arc<NamedType>> {
        self.mutation.as_ref()
    }

    /// Subscription root, if declared.
    pub fn subscription_type(&self) -> Option<&Arc<NamedType>> {
        self.subscription.as_ref()
    }

    /// Extracts the full constructor-visible state.
    pub fn to_config(&self) -> SchemaConfig {
        SchemaConfig {
            description: self.description.clone(),
            types: self.types.values().cloned().collect(),
            directives: self.directives.clone(),
            query: self.query.clone(),
            mutation: self.mutation.clone(),
            subscription: self.subscription.clone(),
        }
    }
}

fn check_root(operation: &'static str, root: Option<&NamedType>) -> Result<(), SchemaError> {
    match root {
        None => Ok(()),
        Some(ty) if ty.is_object() => Ok(()),
        Some(ty) => Err(SchemaError::RootNotObject {
            operation,
            name: ty.name().as_ref().to_string(),
        }),
    }
}
