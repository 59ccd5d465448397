use gqlcanon_schema::SchemaError;
use thiserror::Error;

/// Errors raised while canonicalizing a schema.
#[derive(Debug, Error)]
pub enum CanonicalError {
    /// A named type matched none of the recognized kinds. This means the
    /// model grew a kind this crate does not know about; the invocation
    /// aborts rather than misfiling the type.
    #[error("unclassifiable named type: {name}")]
    UnclassifiableType {
        /// Name of the offending type.
        name: String,
    },
    /// Reassembling the output schema failed.
    #[error("schema reconstruction failed: {0}")]
    Schema(#[from] SchemaError),
    /// The canonical snapshot could not be serialized for hashing.
    #[error("canonical serialization failed: {0}")]
    Serialization(String),
    /// A digest value failed pattern validation.
    #[error("digest value ('{value}') is not base64url")]
    Digest {
        /// Offending value.
        value: String,
    },
}
