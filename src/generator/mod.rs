//! Row generator
//!
//! Emits two synthetic FOCUS cost and usage records per calendar day, one per
//! [`ServiceVariant`]. Every value is derived from the record identifier, the
//! day and the service, so a run is fully reproducible.

mod rows;

pub use rows::{focus_record, generate_rows, ServiceVariant, FIELD_COUNT};

#[cfg(test)]
mod tests;
