//! Partitioning of named types into fixed display-order buckets.

use gqlcanon_schema::NamedType;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::compare::camel_case_cmp;
use crate::error::CanonicalError;

/// Category bucket for a named type.
///
/// Variant declaration order is the display order and is load-bearing: it
/// reproduces an external tool's grouping convention, and it is not
/// derivable from the category names. Do not reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TypeBucket {
    /// Built-in introspection/meta types.
    Introspection,
    /// Interface types.
    Interface,
    /// Union types.
    Union,
    /// Object types.
    Object,
    /// Enum types.
    Enum,
    /// Input object types.
    InputObject,
    /// Scalar types.
    Scalar,
}

/// Assigns a named type to its bucket.
///
/// The wildcard arm is the model's escape hatch: `NamedType` is
/// non-exhaustive, and a kind added upstream without updating this crate
/// must abort the canonicalization rather than land in a wrong bucket.
pub fn classify(ty: &NamedType) -> Result<TypeBucket, CanonicalError> {
    match ty {
        NamedType::Introspection(_) => Ok(TypeBucket::Introspection),
        NamedType::Interface(_) => Ok(TypeBucket::Interface),
        NamedType::Union(_) => Ok(TypeBucket::Union),
        NamedType::Object(_) => Ok(TypeBucket::Object),
        NamedType::Enum(_) => Ok(TypeBucket::Enum),
        NamedType::InputObject(_) => Ok(TypeBucket::InputObject),
        NamedType::Scalar(_) => Ok(TypeBucket::Scalar),
        other => Err(CanonicalError::UnclassifiableType {
            name: other.name().as_ref().to_string(),
        }),
    }
}

/// Produces the canonical type ordering: types grouped by bucket, sorted
/// within each bucket by the camelCase comparator on type name, buckets
/// concatenated in declaration order.
pub fn group_and_sort(
    types: &[Arc<NamedType>],
) -> Result<Vec<Arc<NamedType>>, CanonicalError> {
    let mut buckets: BTreeMap<TypeBucket, Vec<Arc<NamedType>>> = BTreeMap::new();
    for ty in types {
        buckets.entry(classify(ty)?).or_default().push(Arc::clone(ty));
    }
    let mut ordered = Vec::with_capacity(types.len());
    for (_, mut bucket) in buckets {
        bucket.sort_by(|a, b| camel_case_cmp(a.name().as_ref(), b.name().as_ref()));
        ordered.extend(bucket);
    }
    Ok(ordered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_order_is_pinned() {
        let order = [
            TypeBucket::Introspection,
            TypeBucket::Interface,
            TypeBucket::Union,
            TypeBucket::Object,
            TypeBucket::Enum,
            TypeBucket::InputObject,
            TypeBucket::Scalar,
        ];
        for pair in order.windows(2) {
            assert!(pair[0] < pair[1], "{:?} must precede {:?}", pair[0], pair[1]);
        }
    }
}
