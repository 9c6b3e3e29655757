//! # Hashed Field Contract Tests
//!
//! Exercises the five field-type operations through the public API of
//! `hashfield-types`, both directly and through `&dyn FieldType` as the
//! mapping layer sees them.

use hashfield_core::{sha256_digest, CanonicalText, FieldDigest, StorageKind};
use hashfield_types::{FieldType, FieldValue, HashedField};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Helper: digest of plain text.
fn digest(s: &str) -> FieldDigest {
    sha256_digest(&CanonicalText::from_text(s))
}

/// Helper: whether a digest decodes as UTF-8 and so is misread by the heuristic.
fn is_text_shaped(d: &FieldDigest) -> bool {
    std::str::from_utf8(d.as_bytes()).is_ok()
}

/// Helper: run validate then prepare through the trait object.
fn store(field: &dyn FieldType, value: &Value) -> Option<Vec<u8>> {
    let text = field.validate(Some(value)).expect("scalar should validate");
    field.prepare(text.as_ref())
}

// ---------------------------------------------------------------------------
// Concrete scenario: "hello"
// ---------------------------------------------------------------------------

#[test]
fn test_hello_end_to_end() {
    let field: &dyn FieldType = &HashedField::new();
    assert_eq!(field.storage_kind(), StorageKind::Binary);

    let text = field.validate(Some(&json!("hello"))).unwrap().unwrap();
    assert_eq!(text.as_str(), "hello");

    let stored = field.prepare(Some(&text)).unwrap();
    assert_eq!(
        FieldDigest::from_slice(&stored).unwrap().to_hex(),
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );

    let restored = field.restore(Some(stored.clone())).unwrap();
    assert_eq!(restored, stored);
    assert!(field.equals(b"hello", &restored));
}

// ---------------------------------------------------------------------------
// Absence
// ---------------------------------------------------------------------------

#[test]
fn test_absence_at_every_stage() {
    let field: &dyn FieldType = &HashedField::new();
    assert!(field.validate(None).unwrap().is_none());
    assert!(field.validate(Some(&Value::Null)).unwrap().is_none());
    assert!(field.prepare(None).is_none());
    assert!(field.restore(None).is_none());
}

// ---------------------------------------------------------------------------
// Equality
// ---------------------------------------------------------------------------

#[test]
fn test_equality_table() {
    let field = HashedField::new();
    assert!(!field.compare_for_equality("a", "b"));
    assert!(field.compare_for_equality("x", digest("x")));
    assert!(!field.compare_for_equality(digest("x"), digest("y")));
    assert!(field.compare_for_equality(digest("x"), digest("x")));
}

#[test]
fn test_numeric_input_matches_its_text() {
    let field: &dyn FieldType = &HashedField::new();
    let stored = store(field, &json!(1234)).unwrap();
    assert!(field.equals(b"1234", &stored));
    assert!(!field.equals(b"1234.0", &stored));
}

#[test]
fn test_double_hash_does_not_match() {
    // Feeding a stored digest back through prepare as if it were text
    // produces a different digest.
    let field = HashedField::new();
    let once = digest("hello");
    let again = field
        .prepare_for_storage(Some(&CanonicalText::from_text(once.to_hex())))
        .unwrap();
    assert_ne!(once, again);
    assert!(!field.compare_for_equality("hello", again));
}

#[test]
fn test_tagged_comparison_agrees_on_ordinary_digests() {
    let field = HashedField::new();
    for s in ["", "x", "hello", "alice@example.com"] {
        let d = digest(s);
        assert_eq!(
            field.compare_for_equality(s, d),
            field.compare_tagged(&FieldValue::plain(s), &FieldValue::Digest(d))
        );
    }
}

#[test]
fn test_stored_match_handles_text_shaped_digest() {
    // SHA-256 of "k4182658" is valid UTF-8.
    let field: &dyn FieldType = &HashedField::new();
    let stored = store(field, &json!("k4182658")).unwrap();
    assert_eq!(
        FieldDigest::from_slice(&stored).unwrap().to_hex(),
        "643242cdb2465f1e116b47384b7ec6820113780d6520415943764f515120583a"
    );
    assert!(std::str::from_utf8(&stored).is_ok());

    let candidate = CanonicalText::from_text("k4182658");
    assert!(!field.equals(candidate.as_bytes(), &stored));
    assert!(field.matches_stored(&candidate, &stored));
    assert!(!field.changed(&stored, &candidate));
}

proptest! {
    /// prepare(validate(s)) is the 32-byte digest of s.
    #[test]
    fn prop_prepare_is_digest(s in ".*") {
        let field: &dyn FieldType = &HashedField::new();
        let stored = store(field, &Value::String(s.clone())).unwrap();
        prop_assert_eq!(stored.len(), 32);
        prop_assert_eq!(stored, digest(&s).to_vec());
    }

    /// restore is the identity.
    #[test]
    fn prop_restore_identity(bytes in prop::collection::vec(any::<u8>(), 0..48)) {
        let field: &dyn FieldType = &HashedField::new();
        prop_assert_eq!(field.restore(Some(bytes.clone())), Some(bytes));
    }

    /// Digest-to-digest comparison tracks plaintext equality.
    #[test]
    fn prop_digest_comparison(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
        let field = HashedField::new();
        let (da, db) = (digest(&a), digest(&b));
        prop_assert_eq!(
            field.compare_tagged(&FieldValue::Digest(da), &FieldValue::Digest(db)),
            a == b
        );
    }

    /// Plaintext matches its own digest under the byte heuristic, on the
    /// concrete type and through the trait object.
    #[test]
    fn prop_plain_matches_digest_heuristic(s in ".*") {
        let field = HashedField::new();
        let d = digest(&s);
        prop_assume!(!is_text_shaped(&d));
        prop_assert!(field.compare_for_equality(&s, d));
        prop_assert!(field.compare_for_equality(d, &s));
        let dynamic: &dyn FieldType = &field;
        prop_assert!(dynamic.equals(s.as_bytes(), d.as_ref()));
    }

    /// Digest-to-digest comparison under the byte heuristic tracks
    /// plaintext equality.
    #[test]
    fn prop_digest_comparison_heuristic(a in ".{0,16}", b in ".{0,16}") {
        let field = HashedField::new();
        let (da, db) = (digest(&a), digest(&b));
        prop_assume!(!is_text_shaped(&da) && !is_text_shaped(&db));
        prop_assert_eq!(field.compare_for_equality(da, db), a == b);
        let dynamic: &dyn FieldType = &field;
        prop_assert_eq!(dynamic.equals(da.as_ref(), db.as_ref()), a == b);
    }

    /// A stored digest matches exactly the text it was prepared from.
    #[test]
    fn prop_matches_stored_tracks_equality(a in ".{0,16}", b in ".{0,16}") {
        let field: &dyn FieldType = &HashedField::new();
        let stored = store(field, &Value::String(a.clone())).unwrap();
        let candidate = CanonicalText::from_text(b.clone());
        prop_assert_eq!(field.matches_stored(&candidate, &stored), a == b);
    }
}
