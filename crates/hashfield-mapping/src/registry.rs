//! # Field Type Registry
//!
//! Maps field-type names used in schema configuration to shared field-type
//! instances. Registration is explicit: a type is reachable only after it has
//! been passed to [`TypeRegistry::register`].

use std::collections::BTreeMap;
use std::sync::Arc;

use hashfield_types::{FieldType, HashedField, PlainTextField};

use crate::error::MappingError;

/// Named field types available to schema configuration.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: BTreeMap<&'static str, Arc<dyn FieldType>>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `"hashed"` and `"text"`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(HashedField::new()));
        registry.register(Arc::new(PlainTextField::new()));
        registry
    }

    /// Register a field type under its own name, replacing any previous entry.
    pub fn register(&mut self, field_type: Arc<dyn FieldType>) {
        let name = field_type.name();
        if self.types.insert(name, field_type).is_some() {
            tracing::debug!(field_type = name, "replaced registered field type");
        }
    }

    /// Look up a field type by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn FieldType>, MappingError> {
        self.types
            .get(name)
            .cloned()
            .ok_or_else(|| MappingError::UnknownFieldType(name.to_string()))
    }

    /// Names of all registered field types, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }
}
