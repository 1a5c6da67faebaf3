//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. The service is stateless beyond the connection
//! pool: entities live in SQLite, composed views are computed per request.

use sqlx::SqlitePool;

/// Runtime configuration, assembled from the environment in `main`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port to bind (`PORT`, default 8080).
    pub port: u16,
    /// SQLite database URL (`DATABASE_URL`, default `sqlite:franq.db`).
    pub database_url: String,
    /// Request-scoped deadline in seconds (`REQUEST_TIMEOUT_SECS`, default 30).
    ///
    /// Applied at the HTTP boundary as a tower-http timeout layer; the
    /// persistence operations themselves carry no timeout of their own.
    pub request_timeout_secs: u64,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for anything absent or unparseable.
    pub fn from_env() -> Self {
        Self {
            port: env_parsed("PORT").unwrap_or(8080),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:franq.db".to_string()),
            request_timeout_secs: env_parsed("REQUEST_TIMEOUT_SECS").unwrap_or(30),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            database_url: "sqlite:franq.db".to_string(),
            request_timeout_secs: 30,
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: AppConfig) -> Self {
        Self { pool, config }
    }
}
