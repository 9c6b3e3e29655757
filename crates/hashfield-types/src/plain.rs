//! # Plain Text Field
//!
//! A pass-through field type: validated text is stored as its UTF-8 bytes.
//! Registered next to `HashedField` so a schema can hold an ordinary column
//! beside a hashed one.

use hashfield_core::{CanonicalText, CastError, StorageKind};
use serde_json::Value;

use crate::traits::FieldType;

/// Field type storing canonical text verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainTextField;

impl PlainTextField {
    /// Registry name of this field type.
    pub const NAME: &'static str = "text";

    /// Create a new plain text field type.
    pub fn new() -> Self {
        Self
    }
}

impl FieldType for PlainTextField {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn storage_kind(&self) -> StorageKind {
        StorageKind::Text
    }

    fn validate(&self, value: Option<&Value>) -> Result<Option<CanonicalText>, CastError> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(v) => CanonicalText::from_value(v).map(Some),
        }
    }

    fn prepare(&self, value: Option<&CanonicalText>) -> Option<Vec<u8>> {
        value.map(|text| text.as_bytes().to_vec())
    }

    fn restore(&self, stored: Option<Vec<u8>>) -> Option<Vec<u8>> {
        stored
    }

    fn equals(&self, a: &[u8], b: &[u8]) -> bool {
        a == b
    }
}
