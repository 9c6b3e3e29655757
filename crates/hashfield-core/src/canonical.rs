//! # Canonical Text — The Hash Input
//!
//! This module defines `CanonicalText`, the sole construction path for text
//! fed to the field digest.
//!
//! ## Security Invariant
//!
//! The `CanonicalText` newtype has a private inner field. It is produced either
//! by `CanonicalText::new()`, which applies the scalar coercion rules below, or
//! by `CanonicalText::from_text()` for input that is already text. Any function
//! requiring hash input must accept `&CanonicalText`, so every digest in the
//! system is computed over coerced text.
//!
//! ## Coercion Rules
//!
//! The value is first serialized to a `serde_json::Value`, then:
//!
//! 1. **Strings** pass through unchanged.
//! 2. **Booleans** become `"true"` / `"false"`.
//! 3. **Numbers** become their decimal rendering. Integers print without a
//!    fraction; floats use the shortest round-trip form (`1.5` → `"1.5"`).
//! 4. **Null** is rejected with `CastError::Absent`. Absence never reaches
//!    coercion; callers map it before calling in.
//! 5. **Arrays and objects** are rejected with `CastError::Aggregate`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CastError;

/// Text produced by scalar coercion, ready to be hashed.
///
/// # Invariants
///
/// - Never constructed from an aggregate (array/object) or a null.
/// - Coercion is deterministic: the same source value always yields the
///   same text, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalText(String);

impl CanonicalText {
    /// Coerce any serializable scalar to canonical text.
    ///
    /// # Errors
    ///
    /// Returns `CastError::Aggregate` for arrays and objects,
    /// `CastError::Absent` for null, and `CastError::Serialization` if the
    /// value cannot be serialized at all.
    pub fn new(obj: &impl Serialize) -> Result<Self, CastError> {
        let value = serde_json::to_value(obj)?;
        Self::from_value(&value)
    }

    /// Coerce an already-materialized JSON value to canonical text.
    pub fn from_value(value: &Value) -> Result<Self, CastError> {
        coerce_scalar(value).map(Self)
    }

    /// Wrap text that needs no coercion.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Borrow the canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Access the UTF-8 bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Returns the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<[u8]> for CanonicalText {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl std::fmt::Display for CanonicalText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn coerce_scalar(value: &Value) -> Result<String, CastError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Err(CastError::Absent),
        Value::Array(_) => Err(CastError::Aggregate { kind: "array" }),
        Value::Object(_) => Err(CastError::Aggregate { kind: "object" }),
    }
}
