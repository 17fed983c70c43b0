//! CLI runner

use super::commands::Cli;
use crate::config::GeneratorConfig;
use crate::pipeline::{self, GenerationReport};
use anyhow::Context;
use tracing::Level;

/// Runs the generator for a parsed command line
pub struct Runner {
    cli: Cli,
    config: GeneratorConfig,
}

impl Runner {
    /// Create a runner with the fixed generator configuration
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            config: GeneratorConfig::default(),
        }
    }

    /// Replace the generator configuration
    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Default log level for this invocation
    ///
    /// A plain run only surfaces warnings, so stdout's summary line is the
    /// only output of a successful run.
    pub fn log_level(&self) -> Level {
        if self.cli.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    /// Run the pipeline and print the summary line
    pub fn run(&self) -> anyhow::Result<GenerationReport> {
        let report = pipeline::run(&self.config).with_context(|| {
            format!("Failed to generate {}", self.config.output().display())
        })?;
        println!("{}", report.summary());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_log_level_follows_verbose() {
        let quiet = Runner::new(Cli::try_parse_from(["focus-parquet-gen"]).unwrap());
        assert_eq!(quiet.log_level(), Level::WARN);

        let verbose = Runner::new(Cli::try_parse_from(["focus-parquet-gen", "--verbose"]).unwrap());
        assert_eq!(verbose.log_level(), Level::DEBUG);
    }
}
