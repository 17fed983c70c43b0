//! Record to column transposition
//!
//! Each schema column is built by walking every record in order and pulling
//! that column's value, so position `i` in every array belongs to record `i`.

use crate::error::{Error, Result};
use crate::schema::{ColumnField, ColumnSchema};
use crate::types::{FieldKind, FieldValue, Record};
use arrow::array::{ArrayRef, Date32Array, Float64Array, StringArray};
use arrow::datatypes::Date32Type;
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Convert records to an Arrow RecordBatch matching `schema`
pub fn records_to_arrow(schema: &ColumnSchema, records: &[Record]) -> Result<RecordBatch> {
    let arrow_schema = Arc::new(schema.to_arrow());

    if records.is_empty() {
        return Ok(RecordBatch::new_empty(arrow_schema));
    }

    let columns = schema
        .fields()
        .iter()
        .map(|field| build_column(field, records))
        .collect::<Result<Vec<_>>>()?;

    RecordBatch::try_new(arrow_schema, columns).map_err(|e| Error::Output {
        message: format!("Failed to create RecordBatch: {e}"),
    })
}

/// Build one typed column
fn build_column(field: &ColumnField, records: &[Record]) -> Result<ArrayRef> {
    match (field.kind, field.nullable) {
        (FieldKind::Text, false) => {
            let values = records
                .iter()
                .enumerate()
                .map(|(row, record)| match value_at(field, record, row)? {
                    FieldValue::Text(s) => Ok(s.as_str()),
                    other => Err(mismatch(field, row, other)),
                })
                .collect::<Result<Vec<&str>>>()?;
            Ok(Arc::new(StringArray::from(values)))
        }

        (FieldKind::Number, true) => {
            let values = records
                .iter()
                .enumerate()
                .map(|(row, record)| match value_at(field, record, row)? {
                    FieldValue::Number(n) => Ok(*n),
                    other => Err(mismatch(field, row, other)),
                })
                .collect::<Result<Vec<Option<f64>>>>()?;
            Ok(Arc::new(Float64Array::from(values)))
        }

        (FieldKind::Date, false) => {
            let values = records
                .iter()
                .enumerate()
                .map(|(row, record)| match value_at(field, record, row)? {
                    FieldValue::Date(d) => Ok(Date32Type::from_naive_date(*d)),
                    other => Err(mismatch(field, row, other)),
                })
                .collect::<Result<Vec<i32>>>()?;
            Ok(Arc::new(Date32Array::from(values)))
        }

        (kind, nullable) => Err(Error::unsupported(&field.name, kind, nullable)),
    }
}

fn value_at<'a>(field: &ColumnField, record: &'a Record, row: usize) -> Result<&'a FieldValue> {
    record
        .get(&field.name)
        .ok_or_else(|| Error::missing_field(&field.name, row))
}

fn mismatch(field: &ColumnField, row: usize, found: &FieldValue) -> Error {
    Error::FieldTypeMismatch {
        field: field.name.clone(),
        row,
        expected: field.kind,
        nullable: field.nullable,
        found: found.kind(),
    }
}
