//! Logging setup and span constructors.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_level` (from the config
/// file) is used. Logs go to stderr so stdout carries only results.
pub fn init(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, debug_span};

    /// Create a span for a subcommand execution.
    pub fn command(name: &str, pad: usize) -> Span {
        debug_span!("command", name = %name, pad = pad)
    }
}
