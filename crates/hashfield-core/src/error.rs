//! # Error Types — Cast and Hash Failures
//!
//! Defines the error types raised along the hashed-field pipeline. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Cast errors are raised by validate-input and block the enclosing write.
//! - Hash errors only arise when reading a persisted digest back into a
//!   typed `FieldDigest`. Hashing text itself cannot fail.
//! - Equality comparison has no error type: it always yields a boolean.

use thiserror::Error;

/// Top-level error type for hashed fields.
#[derive(Error, Debug)]
pub enum HashFieldError {
    /// The source value has no canonical textual form.
    #[error("cast error: {0}")]
    Cast(#[from] CastError),

    /// A persisted digest could not be interpreted.
    #[error("hash error: {0}")]
    Hash(#[from] HashError),
}

/// Error coercing a source value to canonical text.
#[derive(Error, Debug)]
pub enum CastError {
    /// Arrays and objects have no canonical textual form.
    #[error("cannot cast {kind} to text: aggregate values have no canonical text form")]
    Aggregate {
        /// The JSON kind of the rejected value (`"array"` or `"object"`).
        kind: &'static str,
    },

    /// A null reached the coercion step. Absence must be handled by the caller.
    #[error("cannot cast null to text: absent values are never coerced")]
    Absent,

    /// The value could not be serialized for inspection.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error interpreting bytes as a field digest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The byte sequence is not exactly one digest long.
    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required digest length in bytes.
        expected: usize,
        /// Length of the rejected input.
        actual: usize,
    },

    /// The hex rendering is not exactly two characters per digest byte.
    #[error("invalid hex digest length: expected {expected} characters, got {actual}")]
    InvalidHexLength {
        /// Required number of hex characters.
        expected: usize,
        /// Character count of the rejected input.
        actual: usize,
    },

    /// The hex rendering contains a non-hex character.
    #[error("invalid hex digest: non-hex character at offset {offset}")]
    InvalidHex {
        /// Byte offset of the first offending character.
        offset: usize,
    },
}
