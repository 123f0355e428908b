//! Environment-driven configuration.

use std::str::FromStr;

use crate::server::error::config::ConfigError;

/// Default size of the database connection pool.
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
/// Default `tracing` filter directive when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration read from the environment (after loading `.env` with `dotenvy`).
///
/// | Variable | Required | Default |
/// |---|---|---|
/// | `DATABASE_URL` | yes | |
/// | `DATABASE_MAX_CONNECTIONS` | no | 10 |
/// | `DATABASE_SQL_LOGGING` | no | false |
/// | `RUST_LOG` | no | `info` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Database connection string, e.g. `postgres://...` or `sqlite://events.db?mode=rwc`
    pub database_url: String,
    /// Maximum number of pooled database connections
    pub database_max_connections: u32,
    /// Whether sqlx logs every statement
    pub database_sql_logging: bool,
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        Ok(Self {
            database_url,
            database_max_connections: parse_or(
                &lookup,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            database_sql_logging: parse_or(&lookup, "DATABASE_SQL_LOGGING", false)?,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: e.to_string(),
            }),
    }
}
