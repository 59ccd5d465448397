//! Canonical type registry and reference resolution.
//!
//! Canonicalization is two-phase: phase 1 constructs a rebuilt shell for
//! every named type (bodies deferred) and seeds the registry with all of
//! them; phase 2 forces the bodies, which resolve their references through
//! the registry. Lookups never force a body, so a type whose field refers
//! to itself (or to a type that refers back) resolves to the single
//! canonical instance without re-entering the rebuild.

use gqlcanon_schema::{NamedType, TypeName, TypeRef};
use indexmap::IndexMap;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Name-keyed registry of canonical type instances.
///
/// Seeded exactly once, after which it is read-only. Consulting the
/// registry before it is seeded, or resolving a name it does not hold, is
/// a programming error in the caller, not a recoverable condition.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: OnceCell<IndexMap<TypeName, Arc<NamedType>>>,
}

impl TypeRegistry {
    /// Creates an empty, unseeded registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the full canonical type map. May be called once.
    pub fn seed(&self, types: IndexMap<TypeName, Arc<NamedType>>) {
        self.types
            .set(types)
            .ok()
            .expect("type registry seeded twice");
    }

    /// Looks up the canonical instance for a type name.
    pub fn resolve_named(&self, name: &str) -> Arc<NamedType> {
        let types = self
            .types
            .get()
            .expect("type registry consulted before it was seeded");
        let ty = types
            .get(name)
            .unwrap_or_else(|| panic!("type '{name}' is missing from the canonical registry"));
        Arc::clone(ty)
    }

    /// Rebuilds a wrapped reference against the registry, preserving the
    /// nesting depth and order of List/NonNull wrappers.
    pub fn resolve_ref(&self, reference: &TypeRef) -> TypeRef {
        match reference {
            TypeRef::List(inner) => TypeRef::list(self.resolve_ref(inner)),
            TypeRef::NonNull(inner) => TypeRef::non_null(self.resolve_ref(inner)),
            TypeRef::Named(ty) => TypeRef::named(self.resolve_named(ty.name().as_ref())),
        }
    }

    /// Resolves an optional named reference; absence passes through.
    pub fn resolve_optional(&self, ty: Option<&Arc<NamedType>>) -> Option<Arc<NamedType>> {
        ty.map(|ty| self.resolve_named(ty.name().as_ref()))
    }
}
