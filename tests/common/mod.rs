//! Integration test common infrastructure.
//!
//! Provides a wrapper for running the `alphacounter` binary and asserting
//! on its output.

pub mod cli;

#[allow(unused_imports)]
pub use cli::{CliOutput, TestCli};
