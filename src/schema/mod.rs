//! Schema module
//!
//! Column schema for the generated dataset.
//!
//! # Features
//!
//! - **First-row inference**: Derives column types from the first record only
//! - **Declared FOCUS schema**: Static column list the inferred schema is checked against
//! - **Arrow mapping**: Text -> Utf8, Number -> nullable Float64, Date -> Date32

mod inference;
mod types;

pub use inference::{focus_schema, infer_schema};
pub use types::{ColumnField, ColumnSchema};
