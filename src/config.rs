//! Process configuration, read once at startup

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Default location of the persisted message document
pub const DEFAULT_MESSAGES_FILE: &str = "messages.json";

/// Default listen port; the server binds all interfaces
pub const DEFAULT_PORT: u16 = 8000;

/// Errors that prevent the service from starting
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("API_KEY environment variable must be set")]
    MissingApiKey,

    #[error("invalid {name} value '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// Size limits applied by the message service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Maximum body length in characters
    pub max_message_length: usize,
    /// Maximum number of stored messages; create is rejected at this size
    pub max_messages: usize,
    /// Number of newest messages kept by cleanup
    pub cleanup_retain: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_message_length: 500,
            max_messages: 1000,
            cleanup_retain: 900,
        }
    }
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared secret expected in the `X-API-Key` header
    pub api_key: String,

    /// Path of the JSON message document
    pub messages_file: PathBuf,

    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,

    /// Public base URL advertised in the schema document
    pub public_url: Option<String>,

    pub limits: Limits,
}

impl Config {
    /// Build a configuration with the given secret and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            messages_file: PathBuf::from(DEFAULT_MESSAGES_FILE),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            public_url: None,
            limits: Limits::default(),
        }
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = get("API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key);

        if let Some(path) = get("MESSAGES_FILE") {
            config.messages_file = PathBuf::from(path);
        }

        config.bind_addr = match (get("BIND_ADDR"), get("PORT")) {
            (Some(addr), _) => addr.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                name: "BIND_ADDR",
                value: addr,
            })?,
            (None, Some(port)) => {
                let port: u16 = port.parse().map_err(|_| ConfigError::InvalidValue {
                    name: "PORT",
                    value: port,
                })?;
                SocketAddr::from(([0, 0, 0, 0], port))
            }
            (None, None) => config.bind_addr,
        };

        config.public_url = get("PUBLIC_URL").map(|url| url.trim_end_matches('/').to_string());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
        assert!(err.to_string().contains("API_KEY"));
    }

    #[test]
    fn test_empty_api_key_is_missing() {
        let err = Config::from_lookup(lookup(&[("API_KEY", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingApiKey);
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("API_KEY", "secret")])).unwrap();
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.messages_file, PathBuf::from("messages.json"));
        assert_eq!(config.bind_addr, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert!(config.public_url.is_none());
        assert_eq!(config.limits, Limits::default());
    }

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_message_length, 500);
        assert_eq!(limits.max_messages, 1000);
        assert_eq!(limits.cleanup_retain, 900);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("API_KEY", "secret"),
            ("MESSAGES_FILE", "/data/messages.json"),
            ("BIND_ADDR", "127.0.0.1:3030"),
            ("PUBLIC_URL", "https://messages.example.com/"),
        ]))
        .unwrap();
        assert_eq!(config.messages_file, PathBuf::from("/data/messages.json"));
        assert_eq!(config.bind_addr, "127.0.0.1:3030".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.public_url.as_deref(),
            Some("https://messages.example.com")
        );
    }

    #[test]
    fn test_port_used_when_bind_addr_unset() {
        let config =
            Config::from_lookup(lookup(&[("API_KEY", "secret"), ("PORT", "10000")])).unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:10000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_bind_addr_wins_over_port() {
        let config = Config::from_lookup(lookup(&[
            ("API_KEY", "secret"),
            ("BIND_ADDR", "127.0.0.1:9000"),
            ("PORT", "10000"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_invalid_port() {
        let err =
            Config::from_lookup(lookup(&[("API_KEY", "secret"), ("PORT", "eighty")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_bind_addr() {
        let err = Config::from_lookup(lookup(&[("API_KEY", "secret"), ("BIND_ADDR", "nowhere")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "BIND_ADDR", .. }));
    }
}
