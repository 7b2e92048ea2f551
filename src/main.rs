//! alphacounter - command line front end for sortable base-62 counters.
//!
//! Every library operation is available as a subcommand; results go to
//! stdout one per line, logs and errors go to stderr.

mod cli;
mod commands;
mod config;
mod telemetry;

use crate::cli::Cli;
use crate::config::{Config, MAX_PAD};
use anyhow::Context;
use clap::Parser;
use std::io::{self, Write};
use tracing::{debug, error};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::resolve(cli.config.as_deref()).context("failed to load configuration")?;

    telemetry::init(&config.log.level);

    let pad = cli.pad.unwrap_or(config.counter.pad);
    if pad > MAX_PAD {
        anyhow::bail!("--pad must be at most {MAX_PAD}, got {pad}");
    }

    debug!(
        command = cli.command.name(),
        pad,
        config = ?cli.config,
        "Starting alphacounter"
    );

    let mut stdout = io::BufWriter::new(io::stdout().lock());
    commands::run(&cli.command, pad, &mut stdout).inspect_err(|e| {
        error!(command = cli.command.name(), error = %e, "Command failed");
    })?;
    stdout.flush()?;

    Ok(())
}
