//! Command line definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about, version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to $ALPHACOUNTER_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Minimum output width, overriding the config file (0 = no padding)
    #[arg(short, long, global = true, value_name = "N")]
    pub pad: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the counter that follows COUNTER (omit to start at zero)
    Inc {
        /// Counter to increment
        counter: Option<String>,
    },

    /// Print the counter that precedes COUNTER
    Dec {
        /// Counter to decrement
        counter: String,
    },

    /// Encode a number as a counter
    From {
        /// Hex digits (optionally 0x-prefixed), or a decimal with --decimal
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Parse VALUE as a base-10 integer instead of detecting hex
        #[arg(short, long)]
        decimal: bool,
    },

    /// Print the decimal value of a counter
    To {
        /// Counter to decode
        counter: String,
    },

    /// Print the inverted counter, for descending sort keys
    Invert {
        /// Counter to invert (omit for zero)
        counter: Option<String>,
    },

    /// Compare two counters by value and print lt, eq or gt
    Cmp {
        /// Left-hand counter
        a: String,
        /// Right-hand counter
        b: String,
    },

    /// Print successive counters
    Seq {
        /// Counter to start after (omit to start at zero)
        #[arg(long, value_name = "COUNTER")]
        start: Option<String>,

        /// Number of counters to print
        #[arg(short = 'n', long, default_value = "10", value_name = "N")]
        count: usize,
    },
}

impl Command {
    /// Subcommand name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Inc { .. } => "inc",
            Command::Dec { .. } => "dec",
            Command::From { .. } => "from",
            Command::To { .. } => "to",
            Command::Invert { .. } => "invert",
            Command::Cmp { .. } => "cmp",
            Command::Seq { .. } => "seq",
        }
    }
}
