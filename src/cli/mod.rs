//! CLI module
//!
//! The binary takes no options that change the dataset; `--verbose` only
//! raises the log level.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
