//! # hashfield-mapping — Host Mapping Layer
//!
//! The data-mapping layer that consumes field types. It owns every pipeline
//! stage; field types only answer when called.
//!
//! - **Registry** (`registry.rs`): `TypeRegistry` maps configured type names
//!   to shared `Arc<dyn FieldType>` instances.
//! - **Config** (`config.rs`): `SchemaConfig`, read from YAML or JSON.
//! - **Schema** (`schema.rs`): `Schema` binds columns to field types and runs
//!   the validate → prepare → restore row pipeline.
//! - **Table** (`table.rs`): `Table` keeps prepared rows in memory, tracks
//!   changed columns on update, and answers equality lookups.
//!
//! Transaction boundaries, persistence, and query planning belong to the
//! embedding application.

pub mod config;
pub mod error;
pub mod registry;
pub mod schema;
pub mod table;

pub use config::{ColumnConfig, SchemaConfig};
pub use error::MappingError;
pub use registry::TypeRegistry;
pub use schema::{Column, Row, Schema, StoredRow, ValidatedRow};
pub use table::{RowId, Table};
