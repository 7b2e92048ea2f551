//! Core configuration type definitions.

use super::defaults::{default_log_level, default_pad};
use super::validation::{validate, ValidationError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "ALPHACOUNTER_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Command line tool configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Counter formatting defaults.
    #[serde(default)]
    pub counter: CounterConfig,
    /// Logging defaults.
    #[serde(default)]
    pub log: LogConfig,
}

/// Counter formatting defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CounterConfig {
    /// Padding used when `--pad` is not given (0 = no padding).
    #[serde(default = "default_pad")]
    pub pad: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self { pad: default_pad() }
    }
}

/// Logging defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }

    /// Load from an explicit path, else from the path in [`CONFIG_ENV`],
    /// else fall back to defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }
}
