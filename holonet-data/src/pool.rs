use std::str::FromStr;
use std::time::Duration;

use holonet_core::config::{ConfigError, ConfigSection, HolonetConfig};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::DataError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db";

/// Settings under the `database` prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
    /// How long a statement waits for another connection's write lock.
    pub busy_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            pool_size: 5,
            busy_timeout: Duration::from_secs(5),
        }
    }
}

impl DatabaseConfig {
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            ..Self::default()
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }
}

impl ConfigSection for DatabaseConfig {
    fn prefix() -> &'static str {
        "database"
    }

    fn from_config(config: &HolonetConfig) -> Result<Self, ConfigError> {
        let defaults = DatabaseConfig::default();
        let url: String = config.get_or("database.url", defaults.url)?;
        if !url.starts_with("sqlite:") {
            return Err(ConfigError::Invalid {
                key: "database.url".into(),
                message: format!("only sqlite: URLs are supported, got '{url}'"),
            });
        }
        let pool_size = config.get_or("database.pool.size", defaults.pool_size)?;
        if pool_size == 0 {
            return Err(ConfigError::Invalid {
                key: "database.pool.size".into(),
                message: "must be at least 1".into(),
            });
        }
        let busy_timeout_ms: u64 = config.get_or(
            "database.busy.timeout",
            defaults.busy_timeout.as_millis() as u64,
        )?;
        Ok(DatabaseConfig {
            url,
            pool_size,
            busy_timeout: Duration::from_millis(busy_timeout_ms),
        })
    }
}

/// Open a pool for `config`.
///
/// The database file is created if missing, runs in WAL mode and enforces
/// foreign keys. An in-memory database lives as long as its single
/// connection, so that connection is never reaped.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DataError> {
    let mut options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(config.busy_timeout);
    if !config.is_in_memory() {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(config.pool_size)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!(url = %config.url, pool_size = config.pool_size, "database pool ready");
    Ok(pool)
}
