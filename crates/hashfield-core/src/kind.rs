//! # Storage Kind
//!
//! The column representation a field type asks the mapping layer to allocate.

use serde::{Deserialize, Serialize};

/// Underlying storage representation of a field type's persisted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Raw bytes. Used for digests.
    Binary,
    /// UTF-8 text.
    Text,
}

impl StorageKind {
    /// Returns the storage kind identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
