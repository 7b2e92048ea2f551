//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, CounterConfig, LogConfig)
//! - [`defaults`]: serde default value functions
//! - [`validation`]: checks run after parsing

mod defaults;
mod types;
mod validation;

pub use types::Config;
pub use validation::MAX_PAD;
