//! # Hashed Field
//!
//! A field type that stores the SHA-256 digest of a value's canonical text
//! instead of the value, so equality lookups run against the digest column
//! without ever decrypting or persisting the plaintext.
//!
//! ## Pipeline
//!
//! ```text
//! source value ──validate──▶ CanonicalText ──prepare──▶ FieldDigest (32 bytes)
//!                                                          │
//!                                   stored bytes ◀─restore─┘ (identity)
//! ```
//!
//! ## Equality Heuristic
//!
//! `compare_for_equality` accepts operands without knowing whether each one
//! is still plaintext or already a digest. An operand that decodes as UTF-8
//! is hashed; any other operand is used as-is. A digest that happens to be
//! valid UTF-8 is therefore hashed a second time and compares wrongly. Use
//! `compare_tagged` with [`FieldValue`] where the caller knows which side is
//! which, or `FieldType::matches_stored` when one side came from storage.

use hashfield_core::{
    sha256_digest, sha256_digest_bytes, CanonicalText, CastError, FieldDigest, HashFieldError,
    StorageKind,
};
use serde_json::Value;
use std::borrow::Cow;

use crate::traits::FieldType;
use crate::value::FieldValue;

/// Field type persisting a one-way SHA-256 digest of its input.
///
/// Stateless and `Copy`: share one instance across every column and thread.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashedField;

impl HashedField {
    /// Registry name of this field type.
    pub const NAME: &'static str = "hashed";

    /// Create a new hashed field type.
    pub fn new() -> Self {
        Self
    }

    /// Hashed columns are raw binary.
    pub fn storage_kind(&self) -> StorageKind {
        StorageKind::Binary
    }

    /// Coerce a source value to canonical text.
    ///
    /// Absence (`None` or JSON `null`) passes through as `None`. Strings,
    /// numbers, and booleans are accepted.
    ///
    /// # Errors
    ///
    /// Returns `CastError::Aggregate` for arrays and objects.
    pub fn validate_input(
        &self,
        value: Option<&Value>,
    ) -> Result<Option<CanonicalText>, CastError> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(v) => CanonicalText::from_value(v).map(Some),
        }
    }

    /// Compute the digest to persist. Absence is never hashed.
    pub fn prepare_for_storage(&self, value: Option<&CanonicalText>) -> Option<FieldDigest> {
        value.map(sha256_digest)
    }

    /// Stored bytes are already the final digest.
    pub fn restore_from_storage<T>(&self, stored: Option<T>) -> Option<T> {
        stored
    }

    /// Whether `a` and `b` denote the same underlying value.
    ///
    /// Each operand is hashed if it is valid UTF-8 and used unchanged
    /// otherwise; the resulting byte sequences are compared exactly.
    pub fn compare_for_equality(&self, a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
        let lhs = normalize(a.as_ref());
        let rhs = normalize(b.as_ref());
        tracing::trace!(
            lhs_hashed = matches!(lhs, Cow::Owned(_)),
            rhs_hashed = matches!(rhs, Cow::Owned(_)),
            "compared hashed field operands"
        );
        lhs == rhs
    }

    /// Compare operands whose representation is known.
    ///
    /// Only `FieldValue::Plain` operands are hashed, so a digest is never
    /// hashed twice.
    pub fn compare_tagged(&self, a: &FieldValue, b: &FieldValue) -> bool {
        a.resolve() == b.resolve()
    }

    /// The digest an equality query must match for `value`.
    ///
    /// This is `prepare_for_storage(validate_input(value))`.
    pub fn lookup_key(&self, value: &Value) -> Result<Option<FieldDigest>, CastError> {
        let text = self.validate_input(Some(value))?;
        Ok(self.prepare_for_storage(text.as_ref()))
    }

    /// Whether `stored` is the persisted digest of `value`.
    ///
    /// An absent `value` never matches.
    ///
    /// # Errors
    ///
    /// Returns `HashFieldError::Cast` if `value` has no canonical text and
    /// `HashFieldError::Hash` if `stored` is not a full digest.
    pub fn verify(&self, value: &Value, stored: &[u8]) -> Result<bool, HashFieldError> {
        let key = self.lookup_key(value)?;
        let stored = FieldDigest::from_slice(stored)?;
        Ok(key.is_some_and(|key| key == stored))
    }
}

fn normalize(operand: &[u8]) -> Cow<'_, [u8]> {
    if std::str::from_utf8(operand).is_ok() {
        Cow::Owned(sha256_digest_bytes(operand).to_vec())
    } else {
        Cow::Borrowed(operand)
    }
}

impl FieldType for HashedField {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn storage_kind(&self) -> StorageKind {
        HashedField::storage_kind(self)
    }

    fn validate(&self, value: Option<&Value>) -> Result<Option<CanonicalText>, CastError> {
        self.validate_input(value)
    }

    fn prepare(&self, value: Option<&CanonicalText>) -> Option<Vec<u8>> {
        self.prepare_for_storage(value).map(Vec::from)
    }

    fn restore(&self, stored: Option<Vec<u8>>) -> Option<Vec<u8>> {
        if let Some(bytes) = &stored {
            if bytes.len() != hashfield_core::DIGEST_LEN {
                tracing::warn!(
                    len = bytes.len(),
                    expected = hashfield_core::DIGEST_LEN,
                    "hashed column holds a value that is not a full digest"
                );
            }
        }
        self.restore_from_storage(stored)
    }

    fn equals(&self, a: &[u8], b: &[u8]) -> bool {
        self.compare_for_equality(a, b)
    }

    /// The stored side is always a digest, so only the candidate is hashed.
    fn matches_stored(&self, candidate: &CanonicalText, stored: &[u8]) -> bool {
        FieldDigest::from_slice(stored)
            .is_ok_and(|stored| sha256_digest(candidate) == stored)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Hashing any text through the pipeline yields its 32-byte digest.
        #[test]
        fn pipeline_yields_digest(s in ".*") {
            let field = HashedField::new();
            let text = field.validate_input(Some(&Value::String(s.clone()))).unwrap().unwrap();
            let digest = field.prepare_for_storage(Some(&text)).unwrap();
            prop_assert_eq!(digest, sha256_digest_bytes(s.as_bytes()));
            prop_assert_eq!(digest.as_bytes().len(), 32);
        }

        /// Plaintext always matches its own digest under the tagged comparison.
        #[test]
        fn plain_matches_digest_tagged(s in ".*") {
            let field = HashedField::new();
            let d = sha256_digest(&CanonicalText::from_text(s.clone()));
            prop_assert!(field.compare_tagged(&FieldValue::plain(s), &FieldValue::Digest(d)));
        }

        /// Plaintext matches its own digest under the byte heuristic, directly
        /// and through the trait object.
        #[test]
        fn plain_matches_own_digest(s in ".*") {
            let field = HashedField::new();
            let d = sha256_digest(&CanonicalText::from_text(s.clone()));
            prop_assume!(std::str::from_utf8(d.as_bytes()).is_err());
            prop_assert!(field.compare_for_equality(&s, d));
            let dynamic: &dyn FieldType = &field;
            prop_assert!(dynamic.equals(s.as_bytes(), &d.to_vec()));
        }

        /// Digest-to-digest comparison under the heuristic tracks text equality.
        #[test]
        fn digest_comparison_tracks_equality(a in ".{0,16}", b in ".{0,16}") {
            let field = HashedField::new();
            let da = sha256_digest(&CanonicalText::from_text(a.clone()));
            let db = sha256_digest(&CanonicalText::from_text(b.clone()));
            prop_assume!(std::str::from_utf8(da.as_bytes()).is_err());
            prop_assume!(std::str::from_utf8(db.as_bytes()).is_err());
            prop_assert_eq!(field.compare_for_equality(da, db), a == b);
            let dynamic: &dyn FieldType = &field;
            prop_assert_eq!(dynamic.equals(&da.to_vec(), &db.to_vec()), a == b);
        }

        /// Restore is the identity for arbitrary bytes.
        #[test]
        fn restore_identity(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let field = HashedField::new();
            prop_assert_eq!(field.restore_from_storage(Some(bytes.clone())), Some(bytes));
        }

        /// Plaintext-to-plaintext comparison tracks text equality.
        #[test]
        fn plain_comparison_tracks_equality(a in ".{0,16}", b in ".{0,16}") {
            let field = HashedField::new();
            prop_assert_eq!(field.compare_for_equality(&a, &b), a == b);
        }
    }
}
