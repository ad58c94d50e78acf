//! Environment-driven settings. `.env` is loaded by the binary before this runs.

use crate::error::ApiError;

/// Embedded database file, created on first start when nothing else is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/ease_tec.db?mode=rwc";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct Settings {
    /// `sqlite:` selects the embedded backend, `postgres:` the remote one.
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
}

impl Settings {
    /// Read settings from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self, ApiError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let port = match std::env::var("PORT") {
            Ok(v) => v
                .parse()
                .map_err(|_| ApiError::Config(format!("invalid PORT: {}", v)))?,
            Err(_) => DEFAULT_PORT,
        };
        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(v) => v
                .parse()
                .map_err(|_| ApiError::Config(format!("invalid DATABASE_MAX_CONNECTIONS: {}", v)))?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };
        Ok(Settings {
            database_url,
            port,
            max_connections,
        })
    }
}
