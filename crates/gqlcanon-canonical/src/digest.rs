//! Schema digests over canonical snapshot bytes.
//!
//! A digest is computed as `sha256(domain_separator ||
//! canonical_bytes(snapshot))` where the snapshot is the deterministic
//! JSON rendering of the schema and the canonical bytes follow RFC 8785.
//! Two equivalent schemas therefore digest identically once canonicalized.

use canonical_json::to_string;
use gqlcanon_schema::{schema_to_value, Schema};
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as Sha2Digest, Sha256};

use crate::error::CanonicalError;

/// Domain separator for schema digests: `b"gqlcanon:schema:v1\0"`.
const SCHEMA_DOMAIN_SEPARATOR: &[u8] = b"gqlcanon:schema:v1\0";

/// Supported digest algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-256 (the current default).
    #[serde(rename = "sha-256")]
    Sha256,
}

/// Algorithm + bytes digest, encoded as base64url without padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    /// Digest algorithm (currently always `sha-256`).
    pub alg: DigestAlg,
    /// Base64URL (no padding) digest bytes.
    #[serde(rename = "b64")]
    pub b64: String,
}

impl Digest {
    /// Constructs a validated digest.
    pub fn new(alg: DigestAlg, b64: impl Into<String>) -> Result<Self, CanonicalError> {
        let b64 = b64.into();
        let re = Regex::new(r"^[A-Za-z0-9_-]{43,44}$").expect("invalid regex");
        if !re.is_match(&b64) {
            return Err(CanonicalError::Digest { value: b64 });
        }
        Ok(Digest { alg, b64 })
    }
}

/// Computes the digest of a schema's canonical snapshot.
///
/// The schema should already be canonicalized; digesting a non-canonical
/// schema is deterministic but will not match the digest of its canonical
/// form, since member order participates in the snapshot bytes.
///
/// # Errors
///
/// Returns [`CanonicalError::Serialization`] if the snapshot cannot be
/// rendered to canonical JSON.
pub fn schema_digest(schema: &Schema) -> Result<Digest, CanonicalError> {
    let value = schema_to_value(schema);
    let canonical =
        to_string(&value).map_err(|err| CanonicalError::Serialization(err.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(SCHEMA_DOMAIN_SEPARATOR);
    hasher.update(canonical.as_bytes());
    let hash_bytes = hasher.finalize();

    use base64::Engine;
    let b64 = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(hash_bytes);
    Digest::new(DigestAlg::Sha256, b64)
}

/// Verifies that a claimed digest matches the schema's computed digest.
///
/// # Errors
///
/// Returns [`CanonicalError`] if computation fails.
pub fn verify_schema_digest(schema: &Schema, claimed: &Digest) -> Result<bool, CanonicalError> {
    let computed = schema_digest(schema)?;
    Ok(claimed == &computed)
}
