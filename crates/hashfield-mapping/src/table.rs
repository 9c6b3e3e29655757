//! # In-Memory Table
//!
//! Stores prepared rows and answers equality lookups through each column's
//! field type. For a hashed column a lookup compares the queried plaintext
//! against persisted digests without recovering any plaintext.
//!
//! On update, a column's stored value is recomputed in full only when its
//! field type reports the candidate as changed; unchanged columns keep their
//! persisted bytes.

use std::collections::BTreeMap;

use hashfield_core::CanonicalText;

use crate::error::MappingError;
use crate::schema::{Row, Schema, StoredRow};

/// Identifier assigned to an inserted row.
pub type RowId = u64;

/// Rows of one schema, held in memory.
#[derive(Debug, Clone)]
pub struct Table {
    schema: Schema,
    rows: BTreeMap<RowId, StoredRow>,
    next_id: RowId,
}

impl Table {
    /// Create an empty table for `schema`.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// The table's schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows are stored.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Validate, prepare, and store a new row.
    pub fn insert(&mut self, row: &Row) -> Result<RowId, MappingError> {
        let validated = self.schema.validate_row(row)?;
        let stored = self.schema.prepare_row(&validated)?;
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(
            table = self.schema.table(),
            row_id = id,
            columns = stored.len(),
            "inserted row"
        );
        self.rows.insert(id, stored);
        Ok(id)
    }

    /// Apply the columns present in `changes` to an existing row.
    ///
    /// Returns the names of the columns whose stored value was recomputed.
    pub fn update(&mut self, id: RowId, changes: &Row) -> Result<Vec<String>, MappingError> {
        let validated = self.schema.validate_partial(changes)?;
        let current = self.rows.get(&id).ok_or(MappingError::UnknownRow(id))?;

        let mut recomputed = Vec::new();
        let mut next = current.clone();
        for (name, candidate) in &validated {
            let column = self.schema.column(name)?;
            let stored = current.get(name).and_then(|v| v.as_deref());
            let changed = match (stored, candidate) {
                (None, None) => false,
                (Some(stored), Some(text)) => column.field_type().changed(stored, text),
                _ => true,
            };
            if changed {
                next.insert(name.clone(), column.field_type().prepare(candidate.as_ref()));
                recomputed.push(name.clone());
            }
        }

        tracing::debug!(
            table = self.schema.table(),
            row_id = id,
            recomputed = ?recomputed,
            "updated row"
        );
        self.rows.insert(id, next);
        Ok(recomputed)
    }

    /// Read a row back through the field types.
    pub fn get(&self, id: RowId) -> Result<StoredRow, MappingError> {
        let stored = self.rows.get(&id).ok_or(MappingError::UnknownRow(id))?;
        self.schema.restore_row(stored.clone())
    }

    /// Remove a row, returning its stored bytes.
    pub fn delete(&mut self, id: RowId) -> Result<StoredRow, MappingError> {
        self.rows.remove(&id).ok_or(MappingError::UnknownRow(id))
    }

    /// Ids of rows whose `column` equals `value`, in insertion order.
    ///
    /// `value` is validated like input. An absent value matches rows where
    /// the column is absent. Stored bytes are compared with
    /// [`hashfield_types::FieldType::matches_stored`], so a hashed column
    /// never re-hashes a persisted digest.
    pub fn find_by(
        &self,
        column: &str,
        value: &serde_json::Value,
    ) -> Result<Vec<RowId>, MappingError> {
        let column = self.schema.column(column)?;
        let candidate: Option<CanonicalText> = column
            .field_type()
            .validate(Some(value))
            .map_err(|source| MappingError::Cast {
                column: column.name().to_string(),
                source,
            })?;

        let matches = self
            .rows
            .iter()
            .filter(|(_, row)| {
                let stored = row.get(column.name()).and_then(|v| v.as_deref());
                match (stored, &candidate) {
                    (None, None) => true,
                    (Some(stored), Some(text)) => column.field_type().matches_stored(text, stored),
                    _ => false,
                }
            })
            .map(|(id, _)| *id)
            .collect();
        Ok(matches)
    }
}
