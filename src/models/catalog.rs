use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::schema::{Model, ModelSchema};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("no data-model definitions are registered")]
    NoModels,
    #[error("collection `{0}` is claimed by more than one model")]
    DuplicateCollection(String),
}

type SchemaFn = fn() -> ModelSchema;

/// Registry of the data-model types exposed by `GET /schema`.
#[derive(Clone, Debug, Default)]
pub struct ModelCatalog {
    entries: Vec<(&'static str, SchemaFn)>,
}

impl ModelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<M: Model>(mut self) -> Self {
        self.entries.push((M::NAME, M::schema));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reflects every registered model, keyed (and ordered) by type name.
    pub fn load(&self) -> Result<BTreeMap<String, ModelSchema>, SchemaError> {
        if self.is_empty() {
            return Err(SchemaError::NoModels);
        }

        let mut schemas = BTreeMap::new();
        let mut collections = Vec::with_capacity(self.entries.len());

        for (name, schema_fn) in &self.entries {
            let schema = schema_fn();
            if collections.contains(&schema.collection) {
                return Err(SchemaError::DuplicateCollection(schema.collection));
            }
            collections.push(schema.collection.clone());
            schemas.insert(name.to_string(), schema);
        }

        Ok(schemas)
    }
}
