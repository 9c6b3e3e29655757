//! # Schema Configuration
//!
//! Serde-deserializable description of a table's columns. Each column names
//! a field type registered in the [`TypeRegistry`](crate::TypeRegistry).
//!
//! ```yaml
//! table: users
//! columns:
//!   - name: email_bidx
//!     field_type: hashed
//!   - name: nickname
//!     field_type: text
//!     nullable: true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// A table declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SchemaConfig {
    /// Table name, used in errors and log events.
    pub table: String,
    /// Columns in declaration order.
    pub columns: Vec<ColumnConfig>,
}

/// A single column declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    /// Column name.
    pub name: String,
    /// Registered field-type name, e.g. `"hashed"`.
    pub field_type: String,
    /// Whether the column accepts absence. Defaults to `true`.
    #[serde(default = "default_nullable")]
    pub nullable: bool,
}

fn default_nullable() -> bool {
    true
}

impl SchemaConfig {
    /// Parse a YAML schema declaration.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, MappingError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a JSON schema declaration.
    pub fn from_json_str(json: &str) -> Result<Self, MappingError> {
        Ok(serde_json::from_str(json)?)
    }
}
