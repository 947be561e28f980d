//! Gate and logging configuration.
//!
//! Only operational knobs live here. The origin allowlists are compiled in
//! (see [`super::tiers`]) and cannot be overridden.

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyringConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Permission gate configuration
    pub gate: GateConfig,
}

impl KeyringConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            logging: LoggingConfig::from_env(),
            gate: GateConfig::from_env(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.logging.validate()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log filter directive (trace, debug, info, warn, error, or a full
    /// `EnvFilter` directive)
    pub log_level: String,
    /// Emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl LoggingConfig {
    /// # Environment Variables
    ///
    /// - `KEYRING_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `KEYRING_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: env::var("KEYRING_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            json_logs: env_flag("KEYRING_JSON_LOGS").unwrap_or(defaults.json_logs),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::InvalidLogLevel("log level cannot be empty".into()));
        }
        EnvFilter::try_new(&self.log_level)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidLogLevel(e.to_string()))
    }
}

/// Permission gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Log denied calls at warn level
    pub log_denials: bool,
    /// Log granted calls at debug level
    pub log_grants: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            log_denials: true,
            log_grants: false,
        }
    }
}

impl GateConfig {
    /// # Environment Variables
    ///
    /// - `KEYRING_LOG_DENIALS`: Log denied calls (default: true)
    /// - `KEYRING_LOG_GRANTS`: Log granted calls (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_denials: env_flag("KEYRING_LOG_DENIALS").unwrap_or(defaults.log_denials),
            log_grants: env_flag("KEYRING_LOG_GRANTS").unwrap_or(defaults.log_grants),
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name).ok().and_then(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}
