//! Receipt API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";

/// Receipt API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Interface to listen on
    pub bind_addr: String,

    /// HTTP server port
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// - `RECEIPT_API_BIND_ADDR` - interface (default: 0.0.0.0)
    /// - `RECEIPT_API_PORT` - port (default: 8080)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = ApiConfig {
            bind_addr: lookup("RECEIPT_API_BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),

            port: match lookup("RECEIPT_API_PORT") {
                Some(port) => port
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_PORT".to_string()))?,
                None => DEFAULT_PORT,
            },
        };

        // Fail at startup rather than at bind time
        config.socket_addr()?;

        Ok(config)
    }

    /// Returns the full socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidValue("RECEIPT_API_BIND_ADDR".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[("RECEIPT_API_BIND_ADDR", "127.0.0.1"), ("RECEIPT_API_PORT", "9000")])
            .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("RECEIPT_API_PORT", "http")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPT_API_PORT");

        let err = load(&[("RECEIPT_API_PORT", "70000")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPT_API_PORT");

        let err = load(&[("RECEIPT_API_BIND_ADDR", "not an address")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPT_API_BIND_ADDR");
    }
}
