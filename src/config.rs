//! Generator configuration
//!
//! The dataset shape is fixed at build time. `GeneratorConfig::default()` is
//! what the binary runs; the builder exists for library callers and tests.

use crate::error::{Error, Result};
use chrono::{Days, NaiveDate};
use std::path::{Path, PathBuf};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "demo.parquet";

// ============================================================================
// Date Range
// ============================================================================

/// Inclusive range of calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `end < start`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering a single day
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, both ends included
    pub fn days(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    /// Iterate each day in order
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        std::iter::successors(Some(self.start), |day| day.checked_add_days(Days::new(1)))
            .take_while(move |day| *day <= end)
    }
}

impl Default for DateRange {
    fn default() -> Self {
        // 2025-01-01 ..= 2026-12-31
        Self {
            start: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap_or(NaiveDate::MIN),
        }
    }
}

// ============================================================================
// Generator Config
// ============================================================================

/// Configuration for a generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    range: DateRange,
    output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            range: DateRange::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date range
    #[must_use]
    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    /// Set the output file path
    #[must_use]
    pub fn with_output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = path.as_ref().to_path_buf();
        self
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}
