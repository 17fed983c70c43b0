//! Generation pipeline
//!
//! Runs the stages once, in order:
//!
//! ```text
//! Idle -> Rows Built -> Schema Inferred -> Columns Built -> Written -> Closed
//! ```
//!
//! Any error aborts the run. The output file is owned by the Parquet writer
//! and released when it goes out of scope, on success or failure.

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::generator::generate_rows;
use crate::output::{records_to_arrow, write_batch_to_parquet};
use crate::schema::{focus_schema, infer_schema};
use std::path::PathBuf;
use tracing::{info, warn};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Rows written
    pub rows: usize,
    /// Columns per row
    pub columns: usize,
    /// Output file
    pub path: PathBuf,
}

impl GenerationReport {
    /// Console line reported on success
    pub fn summary(&self) -> String {
        format!("Generated {} rows into {}", self.rows, self.path.display())
    }
}

/// Generate the dataset and write it to the configured output
pub fn run(config: &GeneratorConfig) -> Result<GenerationReport> {
    let rows = generate_rows(config.range());
    info!(rows = rows.len(), "Rows built");

    let schema = infer_schema(&rows)?;
    let diffs = schema.differences(focus_schema());
    if !diffs.is_empty() {
        warn!(?diffs, "Inferred schema diverges from declared FOCUS schema");
    }
    info!(columns = schema.len(), "Schema inferred");

    let batch = records_to_arrow(&schema, &rows)?;
    info!(columns = batch.num_columns(), "Columns built");

    let written = write_batch_to_parquet(config.output(), &batch)?;
    info!(
        rows = written.rows,
        row_groups = written.row_groups,
        path = %config.output().display(),
        "Written and closed"
    );

    Ok(GenerationReport {
        rows: written.rows,
        columns: schema.len(),
        path: config.output().to_path_buf(),
    })
}
