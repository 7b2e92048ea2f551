//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

/// Padding applied when neither the config nor `--pad` sets one.
pub fn default_pad() -> usize {
    0
}

/// Log filter used when `RUST_LOG` is unset. Stays quiet so that stdout
/// output is all a script sees.
pub fn default_log_level() -> String {
    "warn".to_string()
}
