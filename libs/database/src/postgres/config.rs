use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

#[cfg(feature = "config")]
use core_config::{env_or_default, env_required, ConfigError, FromEnv};

/// PostgreSQL connection pool configuration
///
/// Construct manually or, with the `config` feature, load from environment
/// variables via `PostgresConfig::from_env()`.
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    /// Database connection URL (required)
    pub url: String,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of connections in the pool
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Connection idle timeout in seconds
    pub idle_timeout_secs: u64,

    /// Connection max lifetime in seconds
    pub max_lifetime_secs: u64,

    /// Enable SQL query logging
    pub sqlx_logging: bool,
}

impl PostgresConfig {
    /// Create a config with default pool settings for the given URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 100,
            min_connections: 5,
            connect_timeout_secs: 8,
            acquire_timeout_secs: 8,
            idle_timeout_secs: 8,
            max_lifetime_secs: 8,
            sqlx_logging: true,
        }
    }

    /// Convert this config into SeaORM [`ConnectOptions`]
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(&self.url);
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(self.max_lifetime_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(LevelFilter::Debug);
        opt
    }
}

#[cfg(feature = "config")]
fn env_u32(key: &str, default: &str) -> Result<u32, ConfigError> {
    env_or_default(key, default)
        .parse()
        .map_err(|e| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        })
}

#[cfg(feature = "config")]
fn env_u64(key: &str, default: &str) -> Result<u64, ConfigError> {
    env_or_default(key, default)
        .parse()
        .map_err(|e| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        })
}

#[cfg(feature = "config")]
impl FromEnv for PostgresConfig {
    /// Requires DATABASE_URL; pool settings fall back to defaults.
    ///
    /// - `DB_MAX_CONNECTIONS` (default 100)
    /// - `DB_MIN_CONNECTIONS` (default 5)
    /// - `DB_CONNECT_TIMEOUT_SECS` / `DB_ACQUIRE_TIMEOUT_SECS` /
    ///   `DB_IDLE_TIMEOUT_SECS` / `DB_MAX_LIFETIME_SECS` (default 8)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("DATABASE_URL")?,
            max_connections: env_u32("DB_MAX_CONNECTIONS", "100")?,
            min_connections: env_u32("DB_MIN_CONNECTIONS", "5")?,
            connect_timeout_secs: env_u64("DB_CONNECT_TIMEOUT_SECS", "8")?,
            acquire_timeout_secs: env_u64("DB_ACQUIRE_TIMEOUT_SECS", "8")?,
            idle_timeout_secs: env_u64("DB_IDLE_TIMEOUT_SECS", "8")?,
            max_lifetime_secs: env_u64("DB_MAX_LIFETIME_SECS", "8")?,
            sqlx_logging: env_or_default("DB_SQLX_LOGGING", "true") == "true",
        })
    }
}
