//! Server settings loaded from the environment.

use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Largest accepted request body.
    pub body_limit_bytes: usize,
    /// Append timestamped log lines to this file (e.g. `app.log`) instead of stdout. Defaults
    /// to stdout so container and systemd deployments keep their usual log capture; set
    /// `LOG_FILE=app.log` for file logging.
    pub log_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://items.db".into(),
            host: "0.0.0.0".into(),
            port: 8080,
            max_connections: 5,
            body_limit_bytes: 64 * 1024,
            log_file: None,
        }
    }
}

impl ServerConfig {
    /// | Env var            | Default             |
    /// |--------------------|---------------------|
    /// | `DATABASE_URL`     | `sqlite://items.db` |
    /// | `HOST`             | `0.0.0.0`           |
    /// | `PORT`             | `8080`              |
    /// | `MAX_CONNECTIONS`  | `5`                 |
    /// | `BODY_LIMIT_BYTES` | `65536`             |
    /// | `LOG_FILE`         | unset (stdout)      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            max_connections: parse_or(&lookup, "MAX_CONNECTIONS", defaults.max_connections)?,
            body_limit_bytes: parse_or(&lookup, "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
            log_file: lookup("LOG_FILE").filter(|s| !s.is_empty()).map(PathBuf::from),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}
