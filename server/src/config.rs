//! Server settings read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `TODO_HOST` | `127.0.0.1` |
//! | `TODO_PORT` (falls back to `PORT`) | `3000` |
//! | `TODO_CORS_ORIGINS` (comma separated) | `http://localhost:3001` |
//! | `RUST_LOG` | `todo_server=info,tower_http=info` |

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3001";
pub const DEFAULT_LOG_FILTER: &str = "todo_server=info,tower_http=info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("TODO_HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }

        let port = ["TODO_PORT", "PORT"]
            .into_iter()
            .find_map(|var| lookup(var).map(|value| (var, value)));
        if let Some((var, value)) = port {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { var, value })?;
        }

        if let Some(origins) = lookup("TODO_CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(filter) = lookup("RUST_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// `host:port`, resolved by the listener so host names work too.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
