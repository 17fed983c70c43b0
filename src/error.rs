//! Error types for the FOCUS dataset generator
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Nothing in the crate recovers from an error: every failure unwinds to
//! `main` and aborts the run.

use crate::types::FieldKind;
use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the generator
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Column Encoding Errors
    // ============================================================================
    #[error("Unsupported field: {field} ({kind}, nullable={nullable})")]
    UnsupportedFieldType {
        field: String,
        kind: FieldKind,
        nullable: bool,
    },

    #[error(
        "Field '{field}' in row {row} holds a {found} value, schema expects {expected} (nullable={nullable})"
    )]
    FieldTypeMismatch {
        field: String,
        row: usize,
        expected: FieldKind,
        nullable: bool,
        found: FieldKind,
    },

    #[error("Field '{field}' is missing from row {row}")]
    MissingField { field: String, row: usize },

    #[error("Cannot infer a schema from an empty dataset")]
    EmptyDataset,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    // ============================================================================
    // Arrow/Parquet Errors
    // ============================================================================
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    #[error("Output error: {message}")]
    Output { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an unsupported field type error
    pub fn unsupported(field: impl Into<String>, kind: FieldKind, nullable: bool) -> Self {
        Self::UnsupportedFieldType {
            field: field.into(),
            kind,
            nullable,
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>, row: usize) -> Self {
        Self::MissingField {
            field: field.into(),
            row,
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }
}

/// Result type alias for the generator
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unsupported("BilledCost", FieldKind::Number, false);
        assert_eq!(
            err.to_string(),
            "Unsupported field: BilledCost (number, nullable=false)"
        );

        let err = Error::missing_field("Tags", 3);
        assert_eq!(err.to_string(), "Field 'Tags' is missing from row 3");

        let err = Error::FieldTypeMismatch {
            field: "BilledCost".to_string(),
            row: 7,
            expected: FieldKind::Number,
            nullable: true,
            found: FieldKind::Text,
        };
        assert_eq!(
            err.to_string(),
            "Field 'BilledCost' in row 7 holds a text value, schema expects number (nullable=true)"
        );
    }
}
