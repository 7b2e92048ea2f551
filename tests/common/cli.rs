//! Test binary management.
//!
//! Runs the `alphacounter` binary with an isolated environment and an
//! optional config file.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Captured result of one invocation.
pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    /// Stdout lines, for commands that print one result per line.
    #[allow(dead_code)]
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }
}

/// A test harness for the binary.
pub struct TestCli {
    dir: TempDir,
    config: Option<PathBuf>,
}

impl TestCli {
    /// A harness with no config file.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
            config: None,
        })
    }

    /// A harness whose invocations pass `--config` pointing at `content`.
    #[allow(dead_code)]
    pub fn with_config(content: &str) -> anyhow::Result<Self> {
        let mut cli = Self::new()?;
        let path = cli.dir.path().join("alphacounter.toml");
        std::fs::write(&path, content)?;
        cli.config = Some(path);
        Ok(cli)
    }

    /// Directory for scratch files.
    #[allow(dead_code)]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Run the binary with `args`.
    pub fn run(&self, args: &[&str]) -> anyhow::Result<CliOutput> {
        self.run_with_env(args, &[])
    }

    /// Run the binary with `args` and extra environment variables.
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> anyhow::Result<CliOutput> {
        let mut command = Command::new(env!("CARGO_BIN_EXE_alphacounter"));
        command
            .env_remove("RUST_LOG")
            .env_remove("ALPHACOUNTER_CONFIG")
            .env("NO_COLOR", "1");
        if let Some(ref config) = self.config {
            command.arg("--config").arg(config);
        }
        command.args(args);
        for (key, value) in env {
            command.env(key, value);
        }

        let output = command.output()?;
        Ok(CliOutput {
            success: output.status.success(),
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8(output.stderr)?,
        })
    }

    /// Run and return stdout of a command expected to succeed.
    pub fn stdout(&self, args: &[&str]) -> anyhow::Result<String> {
        let output = self.run(args)?;
        if !output.success {
            anyhow::bail!("{args:?} failed: {}", output.stderr);
        }
        Ok(output.stdout.trim_end().to_string())
    }
}
