use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub const DEFAULT_DATABASE_URL: &str = "movie_quiz.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pool_size: 4,
        }
    }

    pub fn from_cli_or_env_or_yaml(cli_arg: Option<String>, yaml_config: Option<String>) -> Self {
        let url = if let Some(arg) = cli_arg {
            arg
        } else if let Ok(env) = std::env::var("DATABASE_URL") {
            env
        } else if let Some(yaml) = yaml_config {
            yaml
        } else {
            DEFAULT_DATABASE_URL.to_string()
        };

        Self::new(url)
    }

    pub fn is_in_memory(&self) -> bool {
        matches!(self.url.as_str(), ":memory:" | "sqlite::memory:")
    }

    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        // every connection to a private in-memory database would see its own copy
        if self.is_in_memory() {
            return SqlitePoolOptions::new()
                .max_connections(1)
                .connect_with(SqliteConnectOptions::from_str("sqlite::memory:")?)
                .await;
        }

        let filename = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))
            .unwrap_or(&self.url);
        SqlitePoolOptions::new()
            .max_connections(self.pool_size)
            .connect_with(
                SqliteConnectOptions::new()
                    .filename(filename)
                    .create_if_missing(true),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_arg_wins() {
        let config = DatabaseConfig::from_cli_or_env_or_yaml(
            Some("cli.sqlite3".to_string()),
            Some("yaml.sqlite3".to_string()),
        );
        assert_eq!(config.url, "cli.sqlite3");
    }

    #[test]
    fn test_in_memory_detection() {
        assert!(DatabaseConfig::new("sqlite::memory:").is_in_memory());
        assert!(DatabaseConfig::new(":memory:").is_in_memory());
        assert!(!DatabaseConfig::new(DEFAULT_DATABASE_URL).is_in_memory());
    }
}
