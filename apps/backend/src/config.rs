//! Server configuration from environment variables.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cards_path: PathBuf,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Env vars:
    /// - HOST: bind address (default "0.0.0.0")
    /// - PORT: bind port (default 3000)
    /// - CARDS_PATH: deck JSON file (default "cards.json")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        let cards_path = lookup("CARDS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("cards.json"));

        Ok(Self {
            host,
            port,
            cards_path,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
