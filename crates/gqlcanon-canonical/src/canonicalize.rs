//! Top-level canonicalization entry point.

use gqlcanon_schema::{Directive, DirectiveConfig, Schema, SchemaConfig};
use indexmap::IndexMap;
use std::sync::Arc;

use crate::classify::group_and_sort;
use crate::compare::plain_cmp;
use crate::error::CanonicalError;
use crate::rebuild::{finalize, rebuild_named_type, sort_args};
use crate::resolve::TypeRegistry;

/// Canonicalizes a schema into its deterministic, fully-ordered form.
///
/// The output is a new schema whose type list is grouped and sorted, whose
/// directive list and every nested member map are sorted, and whose type
/// references (including self- and mutually-recursive ones) all point at
/// the freshly rebuilt instances. Semantic content (descriptions,
/// deprecations, default values) passes through verbatim; identical input
/// always yields a structurally identical output.
///
/// # Errors
///
/// Returns [`CanonicalError::UnclassifiableType`] if a named type matches
/// none of the recognized kinds.
pub fn canonicalize(schema: &Schema) -> Result<Schema, CanonicalError> {
    let config = schema.to_config();

    // Canonical name ordering over the flat type list.
    let sorted = group_and_sort(&config.types)?;

    // Phase 1: every rebuilt shell enters the registry before any body runs.
    let registry = Arc::new(TypeRegistry::new());
    let mut types = IndexMap::with_capacity(sorted.len());
    for ty in &sorted {
        types.insert(ty.name().clone(), rebuild_named_type(ty, &registry)?);
    }
    registry.seed(types.clone());

    // Phase 2: force the bodies, resolving references through the registry.
    for ty in types.values() {
        finalize(ty);
    }

    let mut directives = config.directives;
    directives.sort_by(|a, b| plain_cmp(a.name().as_ref(), b.name().as_ref()));
    let directives = directives
        .into_iter()
        .map(|directive| rebuild_directive(directive, &registry))
        .collect();

    let schema = Schema::new(SchemaConfig {
        description: config.description,
        types: types.into_values().collect(),
        directives,
        query: registry.resolve_optional(config.query.as_ref()),
        mutation: registry.resolve_optional(config.mutation.as_ref()),
        subscription: registry.resolve_optional(config.subscription.as_ref()),
    })?;
    Ok(schema)
}

/// Rebuilds one directive: locations sorted with the plain comparator,
/// argument keys with the camelCase comparator, argument types resolved.
fn rebuild_directive(directive: Directive, registry: &TypeRegistry) -> Directive {
    let DirectiveConfig {
        name,
        description,
        mut locations,
        args,
        repeatable,
    } = directive.to_config();
    locations.sort_by(|a, b| plain_cmp(a.as_ref(), b.as_ref()));
    Directive::new(DirectiveConfig {
        name,
        description,
        locations,
        args: sort_args(args, registry),
        repeatable,
    })
}
