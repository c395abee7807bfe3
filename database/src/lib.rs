pub mod config;
pub mod error;
pub mod models;
pub mod retry;
pub mod statistics;
pub mod stores;

pub use config::{DatabaseConfig, DEFAULT_DATABASE_URL};
pub use error::DatabaseError;
pub use models::{StatKey, StatisticsAggregate};
pub use retry::retry_with_backoff;
pub use statistics::StatisticsStore;
pub use stores::{KeyValueStore, MemoryStore, SqliteStore};
