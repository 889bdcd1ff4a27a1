//! Configuration module for the Maglinc backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

/// Allowed cross-origin request sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin, no credentials
    Any,
    /// Explicit list, credentials allowed
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse a comma-separated list. `*` anywhere, or an empty list, means any origin.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Configuration that could not be parsed.
#[derive(Debug)]
pub enum ConfigError {
    InvalidBindAddr(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBindAddr(value) => write!(f, "Invalid BIND_ADDR format: {}", value),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Document store connection URL
    pub database_url: String,
    /// Database name; namespaces every collection in the store
    pub db_name: String,
    /// Allowed CORS origins
    pub cors_origins: CorsOrigins,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://./data/maglinc.sqlite".to_string());

        let db_name = env::var("DB_NAME").unwrap_or_else(|_| "maglinc".to_string());

        let cors_origins = CorsOrigins::parse(&env::var("CORS_ORIGINS").unwrap_or_default());

        let bind_addr_raw = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8001".to_string());
        let bind_addr = bind_addr_raw
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr_raw))?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            database_url,
            db_name,
            cors_origins,
            bind_addr,
            log_level,
            log_format,
        })
    }
}
