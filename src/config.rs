use dotenvy::dotenv;
use std::{env, net::SocketAddr};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("Invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Signing key for admin tokens.
    pub secret: String,
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let var_or = |name: &str, default: &str| env::var(name).unwrap_or_else(|_| default.to_owned());

        let database_url = var_or("DATABASE_URL", "sqlite://storefront.db?mode=rwc");
        let bind_addr = var_or("BIND_ADDR", "0.0.0.0:3000")
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: err.to_string(),
            })?;
        let secret = env::var("SECRET").map_err(|_| ConfigError::Missing("SECRET"))?;
        if secret.is_empty() {
            return Err(ConfigError::Invalid {
                name: "SECRET",
                reason: "must not be empty".into(),
            });
        }

        let config = Config {
            database_url,
            bind_addr,
            secret,
            admin_username: var_or("ADMIN_USERNAME", "admin"),
            admin_password: var_or("ADMIN_PASSWORD", "admin123"),
        };
        info!(bind_addr = %config.bind_addr, "Configuration loaded");
        Ok(config)
    }
}
