//! Output module
//!
//! Handles Arrow RecordBatch creation and Parquet file writing.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Transposing generated records into typed Arrow columns
//! - Writing a batch to Parquet as a single row group
//! - Reading a written file back into records

mod columns;
mod reader;
mod writer;

pub use columns::records_to_arrow;
pub use reader::{arrow_to_records, read_parquet, read_records, row_group_count};
pub use writer::{write_batch_to_parquet, WrittenFile};
