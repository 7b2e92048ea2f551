//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Largest accepted padding. Anything wider is almost certainly a typo.
pub const MAX_PAD: usize = 4096;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("counter.pad must be at most {max}, got {0}", max = MAX_PAD)]
    PadTooWide(usize),
    #[error("log.level is not a valid filter directive: '{0}'")]
    InvalidLogLevel(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.counter.pad > MAX_PAD {
        errors.push(ValidationError::PadTooWide(config.counter.pad));
    }

    if EnvFilter::try_new(&config.log.level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(config.log.level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
