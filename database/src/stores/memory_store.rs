use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use super::KeyValueStore;
use crate::DatabaseError;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, DatabaseError> {
        Ok(self.values.get(key).cloned())
    }

    async fn set_many(&mut self, entries: &[(&str, Value)]) -> Result<(), DatabaseError> {
        self.values.extend(
            entries
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone())),
        );
        Ok(())
    }
}
