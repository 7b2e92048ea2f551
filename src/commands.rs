//! Subcommand handlers.
//!
//! Handlers write one result per line to the writer they are given, so
//! long sequences stream instead of being buffered.

use std::cmp::Ordering;
use std::io::Write;

use alphacounter::{BigInt, Counter};
use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::Command;
use crate::telemetry::spans;

/// Run a subcommand with the effective padding, writing its output lines
/// to `out`. Returns the number of lines written.
pub fn run<W: Write>(command: &Command, pad: usize, out: &mut W) -> Result<usize> {
    let _span = spans::command(command.name(), pad).entered();

    let lines = match command {
        Command::Inc { counter } => {
            let input = counter.as_deref().unwrap_or_default();
            let next = alphacounter::increment(input, pad)
                .with_context(|| format!("cannot increment `{input}`"))?;
            writeln!(out, "{next}")?;
            1
        }
        Command::Dec { counter } => {
            let prev = alphacounter::decrement(counter, pad)
                .with_context(|| format!("cannot decrement `{counter}`"))?;
            writeln!(out, "{prev}")?;
            1
        }
        Command::From { value, decimal } => {
            let encoded = if *decimal {
                let number: BigInt = value
                    .parse()
                    .with_context(|| format!("`{value}` is not a decimal integer"))?;
                alphacounter::from_number(number, pad)
            } else {
                alphacounter::from_text(value, pad)
            }
            .with_context(|| format!("cannot encode `{value}`"))?;
            writeln!(out, "{encoded}")?;
            1
        }
        Command::To { counter } => {
            let value = alphacounter::to_number(counter)
                .with_context(|| format!("cannot decode `{counter}`"))?;
            writeln!(out, "{value}")?;
            1
        }
        Command::Invert { counter } => {
            let input = counter.as_deref().unwrap_or_default();
            let inverted = alphacounter::invert(input, pad)
                .with_context(|| format!("cannot invert `{input}`"))?;
            writeln!(out, "{inverted}")?;
            1
        }
        Command::Cmp { a, b } => {
            let word = match alphacounter::compare(a, b) {
                Ordering::Less => "lt",
                Ordering::Equal => "eq",
                Ordering::Greater => "gt",
            };
            writeln!(out, "{word}")?;
            1
        }
        Command::Seq { start, count } => {
            let input = start.as_deref().unwrap_or_default();
            let start: Counter = input
                .parse()
                .with_context(|| format!("invalid start counter `{input}`"))?;
            let mut written = 0;
            for counter in start.successors(pad).take(*count) {
                writeln!(out, "{counter}")?;
                written += 1;
            }
            written
        }
    };

    debug!(lines, "command finished");
    Ok(lines)
}
