use crate::types::NamedType;
use std::fmt;
use std::sync::Arc;

/// Reference to a type, possibly wrapped in List/NonNull modifiers.
///
/// Wrappers nest to arbitrary depth; the innermost layer is always a
/// shared handle to a named type. Rendered in wrapped notation, e.g.
/// `[Episode!]!`.
#[derive(Clone)]
pub enum TypeRef {
    /// Direct reference to a named type.
    Named(Arc<NamedType>),
    /// List wrapper around another reference.
    List(Box<TypeRef>),
    /// Non-null wrapper around another reference.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Wraps a named type in a direct reference.
    pub fn named(ty: Arc<NamedType>) -> Self {
        TypeRef::Named(ty)
    }

    /// Applies a List modifier.
    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// Applies a NonNull modifier.
    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// Returns the named type under every wrapper.
    pub fn named_type(&self) -> &Arc<NamedType> {
        match self {
            TypeRef::Named(ty) => ty,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(ty) => f.write_str(ty.name().as_ref()),
            TypeRef::List(inner) => write!(f, "[{}]", inner),
            TypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

// Named types can contain references back to themselves; Debug prints the
// wrapped notation instead of descending into the referenced type.
impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeRef({})", self)
    }
}
