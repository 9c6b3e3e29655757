//! # Field Digest — The Stored Representation
//!
//! Defines `FieldDigest` and `DigestAlgorithm`: the fixed-length, one-way
//! digest persisted in place of a plaintext value.
//!
//! ## Security Invariant
//!
//! The digest function is deterministic and unkeyed. No salt, no secret, no
//! per-call randomness: two invocations over the same canonical text must
//! produce byte-identical output so the digest can serve as an equality
//! lookup key. There is no inverse operation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::canonical::CanonicalText;
use crate::error::HashError;

/// Length of every field digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// The hash algorithm used to produce a field digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    /// SHA-256.
    Sha256,
}

impl DigestAlgorithm {
    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A 32-byte SHA-256 digest of a field's canonical text.
///
/// Equality is constant-time. Serializes as a lowercase hex string.
#[derive(Clone, Copy)]
pub struct FieldDigest([u8; DIGEST_LEN]);

impl FieldDigest {
    /// Wrap raw digest bytes.
    ///
    /// Prefer [`sha256_digest()`] for computing a digest from text.
    pub fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Interpret persisted bytes as a digest.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidLength` unless `bytes` is exactly
    /// [`DIGEST_LEN`] long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, HashError> {
        let array: [u8; DIGEST_LEN] = bytes.try_into().map_err(|_| HashError::InvalidLength {
            expected: DIGEST_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }

    /// Parse a 64-character hex rendering (either case).
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidHexLength` with the character count when the
    /// input is not exactly 64 characters, and `HashError::InvalidHex` at the
    /// first non-hex character.
    pub fn from_hex(hex: &str) -> Result<Self, HashError> {
        let raw = hex.as_bytes();
        if raw.len() != DIGEST_LEN * 2 {
            return Err(HashError::InvalidHexLength {
                expected: DIGEST_LEN * 2,
                actual: raw.len(),
            });
        }
        let mut bytes = [0u8; DIGEST_LEN];
        for (i, pair) in raw.chunks_exact(2).enumerate() {
            let hi = hex_val(pair[0]).ok_or(HashError::InvalidHex { offset: i * 2 })?;
            let lo = hex_val(pair[1]).ok_or(HashError::InvalidHex { offset: i * 2 + 1 })?;
            bytes[i] = (hi << 4) | lo;
        }
        Ok(Self(bytes))
    }

    /// The algorithm that produced this digest.
    pub fn algorithm(&self) -> DigestAlgorithm {
        DigestAlgorithm::Sha256
    }

    /// Borrow the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Copy the digest out as an owned byte vector, the column representation.
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Consume and return the raw digest bytes.
    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl PartialEq for FieldDigest {
    fn eq(&self, other: &Self) -> bool {
        self.0[..].ct_eq(&other.0[..]).into()
    }
}

impl Eq for FieldDigest {}

impl std::hash::Hash for FieldDigest {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl AsRef<[u8]> for FieldDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for FieldDigest {
    type Error = HashError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl From<FieldDigest> for Vec<u8> {
    fn from(digest: FieldDigest) -> Self {
        digest.to_vec()
    }
}

impl std::fmt::Debug for FieldDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FieldDigest({})", self.to_hex())
    }
}

impl std::fmt::Display for FieldDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm(), self.to_hex())
    }
}

impl Serialize for FieldDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for FieldDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

/// Compute the SHA-256 field digest of canonical text.
///
/// The function signature enforces that only coerced text is hashed. The
/// output is always [`DIGEST_LEN`] bytes regardless of input length; the
/// empty text hashes like any other.
pub fn sha256_digest(text: &CanonicalText) -> FieldDigest {
    sha256_digest_bytes(text.as_bytes())
}

/// Compute the SHA-256 field digest of raw bytes.
///
/// Used by the equality predicate for operands that decode as text but were
/// never wrapped in `CanonicalText`.
pub fn sha256_digest_bytes(bytes: &[u8]) -> FieldDigest {
    let hash = Sha256::digest(bytes);
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hash);
    FieldDigest(out)
}

/// Compute the SHA-256 hex string of canonical text.
pub fn sha256_hex(text: &CanonicalText) -> String {
    sha256_digest(text).to_hex()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Digest length never depends on input length.
        #[test]
        fn digest_length_constant(s in ".{0,512}") {
            let digest = sha256_digest(&CanonicalText::from_text(s));
            prop_assert_eq!(digest.as_bytes().len(), DIGEST_LEN);
        }

        /// The text and raw-byte paths agree.
        #[test]
        fn text_and_byte_paths_agree(s in ".*") {
            let ct = CanonicalText::from_text(s.clone());
            prop_assert_eq!(sha256_digest(&ct), sha256_digest_bytes(s.as_bytes()));
        }

        /// Equal texts always produce equal digests; distinct texts differ.
        #[test]
        fn digest_equality_tracks_text_equality(a in ".{0,32}", b in ".{0,32}") {
            let da = sha256_digest(&CanonicalText::from_text(a.clone()));
            let db = sha256_digest(&CanonicalText::from_text(b.clone()));
            prop_assert_eq!(da == db, a == b);
        }
    }
}
