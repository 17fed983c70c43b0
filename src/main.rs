//! FOCUS Parquet generator CLI
//!
//! Writes demo.parquet to the current directory.

use clap::Parser;
use focus_parquet_gen::cli::{Cli, Runner};
use std::io::IsTerminal;

fn main() {
    let runner = Runner::new(Cli::parse());

    // Logs go to stderr so stdout carries only the summary line
    let stderr = std::io::stderr();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(runner.log_level().into()),
        )
        .with_ansi(stderr.is_terminal())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = runner.run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
