//! # Tagged Field Values
//!
//! `FieldValue` marks whether a hashed-field operand is still plaintext or is
//! already a digest. Comparing tagged values never re-hashes a digest, which
//! removes the text/digest ambiguity of the byte-level equality heuristic.

use hashfield_core::{sha256_digest, CanonicalText, FieldDigest, HashError};
use serde::{Deserialize, Serialize};

/// A hashed-field operand with its representation made explicit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// Canonical text that has not been hashed.
    Plain(CanonicalText),
    /// A digest as computed by prepare-for-storage.
    Digest(FieldDigest),
}

impl FieldValue {
    /// Tag text as plaintext.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(CanonicalText::from_text(text))
    }

    /// Tag bytes read from a hashed column as a digest.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidLength` if the bytes are not a full digest.
    pub fn from_stored(bytes: &[u8]) -> Result<Self, HashError> {
        FieldDigest::from_slice(bytes).map(Self::Digest)
    }

    /// The digest this value denotes, hashing only if it is plaintext.
    pub fn resolve(&self) -> FieldDigest {
        match self {
            Self::Plain(text) => sha256_digest(text),
            Self::Digest(digest) => *digest,
        }
    }

    /// Returns true if this value still needs hashing.
    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain(_))
    }
}

impl From<CanonicalText> for FieldValue {
    fn from(text: CanonicalText) -> Self {
        Self::Plain(text)
    }
}

impl From<FieldDigest> for FieldValue {
    fn from(digest: FieldDigest) -> Self {
        Self::Digest(digest)
    }
}
