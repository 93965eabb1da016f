//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use photoboard_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_or(env::var("DB_MAX_CONNECTIONS").ok(), 10),
            min_connections: parse_or(env::var("DB_MIN_CONNECTIONS").ok(), 1),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or(env::var("PORT").ok(), 3002),
            database,
        }
    }
}

/// Parse an optional setting, falling back to `default` when it is unset or
/// unparsable.
fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    match value {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, "Invalid configuration value, using default");
            default
        }),
        None => default,
    }
}
