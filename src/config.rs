// 🔧 Server Configuration
// Loaded from environment variables with fallback to defaults

use serde::{Deserialize, Serialize};
use std::env;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to (RECEIPTS_BIND_ADDR)
    pub bind_addr: SocketAddr,

    /// Allow any origin (RECEIPTS_CORS_PERMISSIVE)
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_permissive: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("RECEIPTS_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("RECEIPTS_BIND_ADDR".to_string()))?;

        let cors_permissive = match lookup("RECEIPTS_CORS_PERMISSIVE") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue("RECEIPTS_CORS_PERMISSIVE".to_string()))?,
            None => false,
        };

        Ok(ServerConfig {
            bind_addr,
            cors_permissive,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
