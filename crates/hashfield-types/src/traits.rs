//! # Field Type Trait
//!
//! Defines the contract a pluggable field type exposes to the mapping layer.
//! The mapping layer calls these operations at fixed pipeline stages: input
//! validation, immediately before a write, and immediately after a read.
//!
//! ## Security Invariant
//!
//! The trait requires `Send + Sync` and every operation takes `&self`, so a
//! single registered instance may be shared across any number of callers.
//! Implementations hold no mutable state and perform no I/O.

use hashfield_core::{CanonicalText, CastError, StorageKind};
use serde_json::Value;

/// A pluggable column type.
///
/// Absence is `None` at every stage and must propagate unchanged. The trait
/// is object-safe so the mapping layer can hold `Arc<dyn FieldType>`.
pub trait FieldType: Send + Sync + std::fmt::Debug {
    /// Registry name of this field type.
    fn name(&self) -> &'static str;

    /// Declare the column representation this type persists.
    fn storage_kind(&self) -> StorageKind;

    /// Coerce external input to canonical text.
    ///
    /// `None` and JSON `null` both mean absence and yield `Ok(None)`.
    fn validate(&self, value: Option<&Value>) -> Result<Option<CanonicalText>, CastError>;

    /// Transform a validated value into its stored bytes.
    fn prepare(&self, value: Option<&CanonicalText>) -> Option<Vec<u8>>;

    /// Transform bytes read back from storage.
    fn restore(&self, stored: Option<Vec<u8>>) -> Option<Vec<u8>>;

    /// Whether two representations denote the same underlying value.
    ///
    /// Either side may be canonical text bytes or stored bytes. Never fails.
    fn equals(&self, a: &[u8], b: &[u8]) -> bool;

    /// Whether persisted `stored` bytes hold the value `candidate` denotes.
    ///
    /// Unlike [`FieldType::equals`] the caller states which operand came from
    /// storage. Defaults to `equals` over the candidate's text bytes.
    fn matches_stored(&self, candidate: &CanonicalText, stored: &[u8]) -> bool {
        self.equals(candidate.as_bytes(), stored)
    }

    /// Whether writing `candidate` would replace what `stored` holds.
    fn changed(&self, stored: &[u8], candidate: &CanonicalText) -> bool {
        !self.matches_stored(candidate, stored)
    }
}
