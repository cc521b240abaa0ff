//! Configuration management for the todo server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! A `.env` file, if present, is loaded into the environment by the binary
//! before [`Config::from_env`] runs.

use std::env;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Default log filter when `RUST_LOG` is unset (trace, debug, info, warn, error)
    pub log_level: String,
    /// Whether to install the Prometheus recorder behind `GET /metrics`
    pub metrics_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            metrics_enabled: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | variable | default |
    /// |---|---|
    /// | `HOST` | `0.0.0.0` |
    /// | `PORT` | `8080` |
    /// | `LOG_LEVEL` | `info` |
    /// | `METRICS_ENABLED` | `true` |
    ///
    /// Values that fail to parse fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            metrics_enabled: lookup("METRICS_ENABLED")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.metrics_enabled),
        }
    }

    /// Address to bind the listener to, as `host:port`
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
