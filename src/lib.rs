// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # FOCUS Parquet Generator
//!
//! Builds a small synthetic dataset of FOCUS-style cloud cost and usage rows
//! and writes it to `demo.parquet` as a single row group.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use focus_parquet_gen::{pipeline, GeneratorConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let report = pipeline::run(&GeneratorConfig::default())?;
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐    ┌──────────────┐    ┌───────────────────────────┐
//! │ generator  │ -> │    schema    │ -> │          output           │
//! │ Vec<Record>│    │ first record │    │ columns -> RecordBatch -> │
//! │ 2 per day  │    │ ColumnSchema │    │ Parquet (1 row group)     │
//! └────────────┘    └──────────────┘    └───────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Record and field value types
pub mod types;

/// Date range and output configuration
pub mod config;

/// Synthetic row generation
pub mod generator;

/// Column schema inference
pub mod schema;

/// Arrow/Parquet output
pub mod output;

/// End-to-end generation run
pub mod pipeline;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{DateRange, GeneratorConfig};
pub use error::{Error, Result};
pub use types::{FieldKind, FieldValue, Record};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
