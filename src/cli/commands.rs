//! CLI argument parsing

use clap::Parser;

/// Generate a synthetic FOCUS cost and usage dataset as demo.parquet
#[derive(Parser, Debug)]
#[command(name = "focus-parquet-gen")]
#[command(author, version = crate::VERSION, about, long_about = None)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
