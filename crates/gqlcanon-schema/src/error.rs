use thiserror::Error;

/// Validation errors raised while constructing model values.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// When a name does not match the schema name grammar.
    #[error("{kind} name ('{value}') is not allowed")]
    InvalidName {
        /// Which kind of name failed validation.
        kind: &'static str,
        /// Offending value.
        value: String,
    },
    /// When two named types share the same name.
    #[error("duplicate named type '{name}' in schema registry")]
    DuplicateType {
        /// Name that appeared more than once.
        name: String,
    },
    /// When a root operation references a non-Object type.
    #[error("{operation} root must reference an Object type, got '{name}'")]
    RootNotObject {
        /// Root operation slot (query, mutation, subscription).
        operation: &'static str,
        /// Name of the offending type.
        name: String,
    },
}
