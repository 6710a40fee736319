//! Environment-driven server configuration.

use crate::server::error::config::ConfigError;

static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db?mode=rwc";
static DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Server configuration loaded from environment variables.
pub struct Config {
    /// Database connection URL (`DATABASE_URL`), defaults to a local SQLite file
    pub database_url: String,
    /// Address to bind the HTTP listener to (`HOST`)
    pub host: String,
    /// Port to bind the HTTP listener to (`PORT`)
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment, applying defaults for unset variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Configuration ready for startup
    /// - `Err(ConfigError::InvalidEnvValue)` - `PORT` is set but not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map(|url| normalize_database_url(&url))
            .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => parse_port(&value)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}

/// Rewrites the legacy `postgres://` scheme some hosting providers hand out to `postgresql://`.
pub fn normalize_database_url(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{}", rest),
        None => url.to_string(),
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: "PORT".to_string(),
            reason: e.to_string(),
        })
}
