//! Runtime configuration read from the environment (after `.env` is loaded).

use std::net::SocketAddr;
use std::path::PathBuf;

use pinboard_api::password::{PasswordPolicy, UnknownPasswordPolicy};
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub password_policy: PasswordPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PINBOARD_PORT must be a port number, got '{0}'")]
    InvalidPort(String),

    #[error(transparent)]
    PasswordPolicy(#[from] UnknownPasswordPolicy),

    #[error("invalid listen address {0}")]
    InvalidAddr(String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup so parsing can be tested without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("PINBOARD_HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = match lookup("PINBOARD_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        let db_path = lookup("PINBOARD_DB_PATH")
            .unwrap_or_else(|| "pinboard.db".into())
            .into();

        let password_policy = match lookup("PINBOARD_PASSWORD_STORAGE") {
            Some(raw) => raw.parse()?,
            None => PasswordPolicy::default(),
        };

        Ok(Self {
            host,
            port,
            db_path,
            password_policy,
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddr(addr))
    }
}
