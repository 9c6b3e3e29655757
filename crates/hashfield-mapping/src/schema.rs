//! # Schema and Row Pipeline
//!
//! A `Schema` binds column names to field types and runs rows through the
//! field-type pipeline at the stages the mapping layer owns:
//!
//! 1. **Validate**: external input is coerced to canonical text per column.
//!    A cast failure on any column rejects the whole row.
//! 2. **Prepare**: validated values are transformed to their stored bytes
//!    immediately before a write.
//! 3. **Restore**: stored bytes are handed back through the field type
//!    immediately after a read.

use std::collections::BTreeMap;
use std::sync::Arc;

use hashfield_core::CanonicalText;
use hashfield_types::FieldType;
use serde_json::Value;

use crate::config::SchemaConfig;
use crate::error::MappingError;
use crate::registry::TypeRegistry;

/// Source values keyed by column. Missing columns are absent.
pub type Row = BTreeMap<String, Value>;

/// Validated values keyed by column. `None` is absence.
pub type ValidatedRow = BTreeMap<String, Option<CanonicalText>>;

/// Stored bytes keyed by column. `None` is absence.
pub type StoredRow = BTreeMap<String, Option<Vec<u8>>>;

/// A column bound to its field type.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    field_type: Arc<dyn FieldType>,
    nullable: bool,
}

impl Column {
    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field type handling this column.
    pub fn field_type(&self) -> &dyn FieldType {
        self.field_type.as_ref()
    }

    /// Whether the column accepts absence.
    pub fn nullable(&self) -> bool {
        self.nullable
    }

    /// Validate one value for this column.
    pub fn validate(&self, value: Option<&Value>) -> Result<Option<CanonicalText>, MappingError> {
        let text = self
            .field_type
            .validate(value)
            .map_err(|source| MappingError::Cast {
                column: self.name.clone(),
                source,
            })?;
        if text.is_none() && !self.nullable {
            return Err(MappingError::MissingValue(self.name.clone()));
        }
        Ok(text)
    }
}

/// Columns of one table, in declaration order.
#[derive(Debug, Clone)]
pub struct Schema {
    table: String,
    columns: Vec<Column>,
}

impl Schema {
    /// Create a schema with no columns.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
        }
    }

    /// Build a schema from configuration, resolving field types by name.
    pub fn from_config(
        config: &SchemaConfig,
        registry: &TypeRegistry,
    ) -> Result<Self, MappingError> {
        let mut schema = Self::new(config.table.clone());
        for column in &config.columns {
            let field_type = registry.get(&column.field_type)?;
            schema = schema.with_column(column.name.clone(), field_type, column.nullable)?;
        }
        tracing::debug!(
            table = %schema.table,
            columns = schema.columns.len(),
            "built schema from configuration"
        );
        Ok(schema)
    }

    /// Add a column bound to `field_type`.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        field_type: Arc<dyn FieldType>,
        nullable: bool,
    ) -> Result<Self, MappingError> {
        let name = name.into();
        if self.columns.iter().any(|c| c.name == name) {
            return Err(MappingError::DuplicateColumn(name));
        }
        self.columns.push(Column {
            name,
            field_type,
            nullable,
        });
        Ok(self)
    }

    /// Table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&Column, MappingError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| MappingError::UnknownColumn {
                table: self.table.clone(),
                column: name.to_string(),
            })
    }

    /// Validate every column of `row`. Columns missing from `row` are absent.
    pub fn validate_row(&self, row: &Row) -> Result<ValidatedRow, MappingError> {
        self.reject_unknown(row.keys())?;
        self.columns
            .iter()
            .map(|column| Ok((column.name.clone(), column.validate(row.get(&column.name))?)))
            .collect()
    }

    /// Validate only the columns present in `row`.
    pub fn validate_partial(&self, row: &Row) -> Result<ValidatedRow, MappingError> {
        self.reject_unknown(row.keys())?;
        row.iter()
            .map(|(name, value)| {
                let column = self.column(name)?;
                Ok((name.clone(), column.validate(Some(value))?))
            })
            .collect()
    }

    /// Transform validated values to their stored bytes.
    pub fn prepare_row(&self, row: &ValidatedRow) -> Result<StoredRow, MappingError> {
        row.iter()
            .map(|(name, text)| {
                let column = self.column(name)?;
                Ok((name.clone(), column.field_type.prepare(text.as_ref())))
            })
            .collect()
    }

    /// Hand stored bytes back through each column's field type.
    pub fn restore_row(&self, row: StoredRow) -> Result<StoredRow, MappingError> {
        row.into_iter()
            .map(|(name, stored)| {
                let column = self.column(&name)?;
                let restored = column.field_type.restore(stored);
                Ok((name, restored))
            })
            .collect()
    }

    fn reject_unknown<'a>(
        &self,
        names: impl Iterator<Item = &'a String>,
    ) -> Result<(), MappingError> {
        for name in names {
            self.column(name)?;
        }
        Ok(())
    }
}
