//! Deterministic schema canonicalization.
//!
//! This crate rewrites a schema into a fully-ordered canonical form:
//! named types grouped into fixed category buckets and sorted with a
//! camelCase-aware comparator, every nested member map sorted, directives
//! and their location tags sorted, and every type reference (including
//! self- and mutually-recursive ones) rebuilt against a freshly sorted
//! registry. Two equivalent schemas canonicalize to structurally identical
//! values, so they serialize identically and share a digest.
//!
//! The transformation is synchronous, side-effect-free, and all-or-nothing
//! per invocation; the input schema is never mutated.
//!
#![deny(missing_docs)]

/// Top-level canonicalization entry point.
pub mod canonicalize;
/// Category buckets and type classification.
pub mod classify;
/// Name comparators.
pub mod compare;
/// Digests over canonical snapshot bytes.
pub mod digest;
/// Error types for canonicalization.
pub mod error;
/// Per-category reconstruction of type bodies.
pub mod rebuild;
/// Canonical registry and reference resolution.
pub mod resolve;

pub use canonicalize::canonicalize;
pub use classify::{classify, group_and_sort, TypeBucket};
pub use compare::{camel_case_cmp, plain_cmp};
pub use digest::{schema_digest, verify_schema_digest, Digest, DigestAlg};
pub use error::CanonicalError;
pub use rebuild::{finalize, rebuild_named_type};
pub use resolve::TypeRegistry;
