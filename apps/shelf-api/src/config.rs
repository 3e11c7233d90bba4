//! Shelf API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                        | Default      |
//! |---------------------------------|--------------|
//! | `SHELF_HOST`                    | `0.0.0.0`    |
//! | `SHELF_PORT`                    | `8000`       |
//! | `SHELF_DATABASE_PATH`           | `./shelf.db` |
//! | `SHELF_DB_MAX_CONNECTIONS`      | `5`          |
//! | `SHELF_DB_ACQUIRE_TIMEOUT_SECS` | `30`         |
//! | `SHELF_DB_BUSY_TIMEOUT_SECS`    | `5`          |
//! | `SHELF_DEFAULT_LIST_LIMIT`      | `100`        |

use shelf_core::DEFAULT_LIST_LIMIT;
use shelf_db::DbConfig;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Shelf API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address
    pub host: String,

    /// HTTP port
    pub port: u16,

    /// SQLite database file (`:memory:` for a throwaway database)
    pub database_path: PathBuf,

    /// Maximum pooled connections
    pub db_max_connections: u32,

    /// How long a request waits for a connection
    pub db_acquire_timeout_secs: u64,

    /// How long SQLite waits on a locked database
    pub db_busy_timeout_secs: u64,

    /// `limit` used by `GET /products/` when the query omits it
    pub default_list_limit: i64,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = ApiConfig {
            host: lookup("SHELF_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),

            port: parse_var(&lookup, "SHELF_PORT", 8000)?,

            database_path: lookup("SHELF_DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./shelf.db")),

            db_max_connections: parse_var(&lookup, "SHELF_DB_MAX_CONNECTIONS", 5)?,

            db_acquire_timeout_secs: parse_var(&lookup, "SHELF_DB_ACQUIRE_TIMEOUT_SECS", 30)?,

            db_busy_timeout_secs: parse_var(&lookup, "SHELF_DB_BUSY_TIMEOUT_SECS", 5)?,

            default_list_limit: parse_var(&lookup, "SHELF_DEFAULT_LIST_LIMIT", DEFAULT_LIST_LIMIT)?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "SHELF_DB_MAX_CONNECTIONS".to_string(),
            ));
        }

        if config.default_list_limit < 0 {
            return Err(ConfigError::InvalidValue(
                "SHELF_DEFAULT_LIST_LIMIT".to_string(),
            ));
        }

        Ok(config)
    }

    /// `host:port` string for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the storage configuration.
    ///
    /// `:memory:` maps to [`DbConfig::in_memory`], which pins the pool to a
    /// single connection.
    pub fn db_config(&self) -> DbConfig {
        let config = DbConfig::new(&self.database_path);
        if config.is_in_memory() {
            return DbConfig::in_memory();
        }

        config
            .max_connections(self.db_max_connections)
            .acquire_timeout(Duration::from_secs(self.db_acquire_timeout_secs))
            .busy_timeout(Duration::from_secs(self.db_busy_timeout_secs))
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
