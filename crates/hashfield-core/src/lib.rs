//! # hashfield-core — Foundational Types for Hashed Fields
//!
//! This crate is the leaf of the hashed-field workspace. It defines the
//! primitives every field type is built from; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalText` newtype.** All hash input flows through
//!    `CanonicalText`, produced by the scalar coercion pipeline. Aggregates
//!    and nulls never become hash input.
//!
//! 2. **`sha256_digest()` accepts only `&CanonicalText`.** Compile-time
//!    enforcement that every stored digest was computed over coerced text.
//!
//! 3. **Fixed-length `FieldDigest`.** Always 32 bytes, constant-time equality,
//!    lowercase hex rendering. One-way: there is no inverse.
//!
//! 4. **Absence is `Option::None`.** No sentinel values. Absence is never
//!    coerced and never hashed.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hashfield-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O and no shared state: every function is pure.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod kind;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalText;
pub use digest::{
    sha256_digest, sha256_digest_bytes, sha256_hex, DigestAlgorithm, FieldDigest, DIGEST_LEN,
};
pub use error::{CastError, HashError, HashFieldError};
pub use kind::StorageKind;
