//! Configuration loading from environment.

use std::env;
use std::time::Duration;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub database_url: String,
    pub active_service_url: String,
    pub client_service_url: String,
    pub lookup_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

        let active_service_url = env::var("ACTIVE_SERVICE_URL")
            .map_err(|_| anyhow::anyhow!("ACTIVE_SERVICE_URL environment variable is required"))?;

        let client_service_url = env::var("CLIENT_SERVICE_URL")
            .map_err(|_| anyhow::anyhow!("CLIENT_SERVICE_URL environment variable is required"))?;

        let lookup_timeout = Duration::from_secs(
            env::var("LOOKUP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()?,
        );

        Ok(Self {
            port,
            database_url,
            active_service_url,
            client_service_url,
            lookup_timeout,
        })
    }
}
