//! Parquet file writer
//!
//! The whole dataset goes out as one RecordBatch, written as one row group.

use crate::error::{Error, Result};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// What ended up on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrittenFile {
    pub rows: usize,
    pub row_groups: usize,
}

/// Properties that keep `rows` rows in a single SNAPPY row group
fn single_row_group_properties(rows: usize) -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .set_max_row_group_size(rows.max(1))
        .build()
}

/// Write `batch` to `path` as a single row group
///
/// The file handle lives inside the `ArrowWriter`. If any step fails the
/// writer is dropped and the handle released, leaving a file without a footer.
pub fn write_batch_to_parquet(path: impl AsRef<Path>, batch: &RecordBatch) -> Result<WrittenFile> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::Output {
        message: format!("Failed to create file {}: {e}", path.display()),
    })?;

    let props = single_row_group_properties(batch.num_rows());
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props)).map_err(|e| {
        Error::Output {
            message: format!("Failed to create Parquet writer: {e}"),
        }
    })?;

    writer.write(batch).map_err(|e| Error::Output {
        message: format!("Failed to write batch: {e}"),
    })?;

    let metadata = writer.close().map_err(|e| Error::Output {
        message: format!("Failed to close Parquet writer: {e}"),
    })?;

    let written = WrittenFile {
        rows: batch.num_rows(),
        row_groups: metadata.row_groups.len(),
    };
    debug!(
        rows = written.rows,
        row_groups = written.row_groups,
        path = %path.display(),
        "Closed Parquet file"
    );
    Ok(written)
}
