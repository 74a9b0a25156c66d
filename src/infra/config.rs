//! Centralized configuration (environment variables + defaults).
//!
//! Loaded once at startup into an immutable [`AppConfig`] that is passed to
//! components at construction time.

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string (required, no default for safety).
    pub database_url: String,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Maximum number of pooled database connections.
    pub max_connections: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let max_connections = match std::env::var("DB_MAX_CONNECTIONS") {
            Ok(v) => v
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a valid u32")?
                .max(1),
            Err(_) => 5,
        };
        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}
