//! Parquet read-back
//!
//! Used to verify that a written file reproduces the generated records.

use crate::error::{Error, Result};
use crate::types::{FieldValue, Record};
use arrow::array::{Array, Date32Array, Float64Array, StringArray};
use arrow::datatypes::{DataType, Date32Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Read every RecordBatch from a Parquet file
pub fn read_parquet(path: impl AsRef<Path>) -> Result<Vec<RecordBatch>> {
    let file = File::open(path.as_ref())?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;

    reader
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(Error::from)
}

/// Read a Parquet file back into records
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for batch in read_parquet(path)? {
        records.extend(arrow_to_records(&batch)?);
    }
    Ok(records)
}

/// Number of row groups in a Parquet file
pub fn row_group_count(path: impl AsRef<Path>) -> Result<usize> {
    let file = File::open(path.as_ref())?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    Ok(builder.metadata().num_row_groups())
}

/// Convert an Arrow RecordBatch to records
///
/// Accepts the three column types the generator writes.
pub fn arrow_to_records(batch: &RecordBatch) -> Result<Vec<Record>> {
    let schema = batch.schema();
    let mut records: Vec<Record> = (0..batch.num_rows())
        .map(|_| Record::with_capacity(schema.fields().len()))
        .collect();

    for (col_idx, field) in schema.fields().iter().enumerate() {
        let column = batch.column(col_idx);
        for (row, record) in records.iter_mut().enumerate() {
            let value = array_value(column.as_ref(), row, field.name())?;
            record.set(field.name().clone(), value);
        }
    }

    Ok(records)
}

/// Convert a single array element to a field value
fn array_value(array: &dyn Array, row: usize, name: &str) -> Result<FieldValue> {
    match array.data_type() {
        DataType::Float64 => {
            let arr = array
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(|| Error::output("Failed to downcast to Float64Array"))?;
            Ok(FieldValue::Number(
                (!arr.is_null(row)).then(|| arr.value(row)),
            ))
        }

        DataType::Utf8 => {
            let arr = array
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| Error::output("Failed to downcast to StringArray"))?;
            if arr.is_null(row) {
                return Err(Error::output(format!("Unexpected null in text column {name}")));
            }
            Ok(FieldValue::text(arr.value(row)))
        }

        DataType::Date32 => {
            let arr = array
                .as_any()
                .downcast_ref::<Date32Array>()
                .ok_or_else(|| Error::output("Failed to downcast to Date32Array"))?;
            if arr.is_null(row) {
                return Err(Error::output(format!("Unexpected null in date column {name}")));
            }
            Ok(FieldValue::Date(Date32Type::to_naive_date(arr.value(row))))
        }

        other => Err(Error::output(format!(
            "Unsupported column type for {name}: {other}"
        ))),
    }
}
