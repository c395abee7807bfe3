use async_trait::async_trait;
use serde_json::Value;

use crate::DatabaseError;

/// Named-field persistence for the statistics.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` for a key that was never written.
    async fn get(&self, key: &str) -> Result<Option<Value>, DatabaseError>;

    /// Writes every entry or none of them.
    async fn set_many(&mut self, entries: &[(&str, Value)]) -> Result<(), DatabaseError>;
}
