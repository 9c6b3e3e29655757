//! # Mapping Errors
//!
//! Failures raised by the mapping layer while building a schema or pushing a
//! row through the field-type pipeline.

use hashfield_core::CastError;
use thiserror::Error;

/// Error in schema construction or row processing.
#[derive(Error, Debug)]
pub enum MappingError {
    /// A row or query named a column the schema does not declare.
    #[error("unknown column {column:?} in table {table:?}")]
    UnknownColumn {
        /// Table being accessed.
        table: String,
        /// The undeclared column.
        column: String,
    },

    /// Configuration named a field type that is not registered.
    #[error("unknown field type {0:?}")]
    UnknownFieldType(String),

    /// A column was declared twice.
    #[error("column {0:?} declared more than once")]
    DuplicateColumn(String),

    /// A non-nullable column received an absent value.
    #[error("column {0:?} is not nullable")]
    MissingValue(String),

    /// No row exists with the given id.
    #[error("no row with id {0}")]
    UnknownRow(u64),

    /// A column value could not be cast to canonical text.
    #[error("column {column:?}: {source}")]
    Cast {
        /// The column whose value was rejected.
        column: String,
        /// The underlying cast failure.
        #[source]
        source: CastError,
    },

    /// Schema configuration is not valid YAML for the expected shape.
    #[error("invalid YAML schema configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Schema configuration is not valid JSON for the expected shape.
    #[error("invalid JSON schema configuration: {0}")]
    Json(#[from] serde_json::Error),
}
