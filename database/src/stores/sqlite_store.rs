use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{Row, SqlitePool};

use super::KeyValueStore;
use crate::{retry_with_backoff, DatabaseConfig, DatabaseError};

const MAX_WRITE_RETRIES: usize = 3;
const INITIAL_RETRY_DELAY: Duration = Duration::from_millis(50);

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database described by `config` and brings its schema up to date.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let pool = config
            .create_pool()
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        let store = Self::new(pool);
        store.run_migrations().await?;
        tracing::info!("Statistics database ready at {}", config.url);
        Ok(store)
    }

    pub async fn run_migrations(&self) -> Result<(), DatabaseError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DatabaseError::Migration(e.to_string()))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

async fn write_rows(pool: SqlitePool, rows: Vec<(String, String)>) -> Result<(), DatabaseError> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| DatabaseError::Transaction(e.to_string()))?;

    for (key, value) in &rows {
        sqlx::query(
            "INSERT INTO statistics (key, value, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .execute(&mut *tx)
        .await
        .map_err(|e| DatabaseError::Query(e.to_string()))?;
    }

    tx.commit()
        .await
        .map_err(|e| DatabaseError::Transaction(e.to_string()))?;
    Ok(())
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, DatabaseError> {
        let row = sqlx::query("SELECT value FROM statistics WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DatabaseError::Query(e.to_string()))?;

        Ok(match row {
            Some(r) => {
                let raw: String = r
                    .try_get("value")
                    .map_err(|e| DatabaseError::Query(e.to_string()))?;
                Some(serde_json::from_str(&raw)?)
            }
            None => None,
        })
    }

    async fn set_many(&mut self, entries: &[(&str, Value)]) -> Result<(), DatabaseError> {
        let rows = entries
            .iter()
            .map(|(key, value)| Ok((key.to_string(), serde_json::to_string(value)?)))
            .collect::<Result<Vec<_>, DatabaseError>>()?;

        let pool = self.pool.clone();
        retry_with_backoff(
            || write_rows(pool.clone(), rows.clone()),
            MAX_WRITE_RETRIES,
            INITIAL_RETRY_DELAY,
        )
        .await?;
        tracing::debug!("Wrote {} statistics keys", rows.len());
        Ok(())
    }
}
