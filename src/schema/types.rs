//! Schema types

use crate::types::FieldKind;
use arrow::datatypes::{DataType, Field, Schema};

/// One column of the output schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnField {
    pub name: String,
    pub kind: FieldKind,
    pub nullable: bool,
}

impl ColumnField {
    /// Column with the default nullability for `kind`
    ///
    /// Numbers are nullable, text and dates are not.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            nullable: kind == FieldKind::Number,
        }
    }

    /// Override nullability
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Arrow type for this column's kind
    pub fn arrow_type(&self) -> DataType {
        match self.kind {
            FieldKind::Text => DataType::Utf8,
            FieldKind::Number => DataType::Float64,
            FieldKind::Date => DataType::Date32,
        }
    }

    pub fn to_arrow(&self) -> Field {
        Field::new(&self.name, self.arrow_type(), self.nullable)
    }
}

/// Ordered column list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSchema {
    fields: Vec<ColumnField>,
}

impl ColumnSchema {
    pub fn new(fields: Vec<ColumnField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[ColumnField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Find a column by name
    pub fn field(&self, name: &str) -> Option<&ColumnField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Column names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Columns whose name, kind or nullability differ from `other`
    ///
    /// Also reports columns present in only one of the two schemas.
    pub fn differences(&self, other: &ColumnSchema) -> Vec<String> {
        let mut diffs = Vec::new();

        for (i, field) in self.fields.iter().enumerate() {
            match other.fields.get(i) {
                Some(o) if o == field => {}
                Some(o) => diffs.push(format!(
                    "column {i}: {} ({}, nullable={}) vs {} ({}, nullable={})",
                    field.name, field.kind, field.nullable, o.name, o.kind, o.nullable
                )),
                None => diffs.push(format!("column {i}: {} missing from other", field.name)),
            }
        }
        for (i, o) in other.fields.iter().enumerate().skip(self.fields.len()) {
            diffs.push(format!("column {i}: {} only in other", o.name));
        }

        diffs
    }

    /// Convert to an Arrow schema, preserving column order
    pub fn to_arrow(&self) -> Schema {
        Schema::new(
            self.fields
                .iter()
                .map(ColumnField::to_arrow)
                .collect::<Vec<_>>(),
        )
    }
}
