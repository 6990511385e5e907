//! Schema compatibility checks and column conformance for catalog tables.
//!
//! Catalog files are produced by spreadsheet exports, so column types drift: numeric
//! bounds arrive as doubles or text, ages as 32- or 64-bit integers, strings as
//! `LargeUtf8`. Batches are conformed to the expected schema before deserialization.

pub mod compatibility;

use std::sync::Arc;

use arrow::array::{ArrayRef, new_null_array};
use arrow::compute::kernels::cast::{can_cast_types, cast};
use arrow::datatypes::{Field, Schema};
use arrow::record_batch::RecordBatch;
use log::debug;

pub use compatibility::{TypeCompatibility, check_type_compatibility};

use crate::error::{Error, Result};

/// A struct that represents the compatibility between an expected and an actual schema
#[derive(Debug, Default)]
pub struct SchemaCompatibilityReport {
    /// Whether the schemas are compatible
    pub compatible: bool,
    /// List of incompatibility issues, if any
    pub issues: Vec<SchemaIssue>,
}

impl SchemaCompatibilityReport {
    /// Issue descriptions, for logging and error messages
    #[must_use]
    pub fn descriptions(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.description.clone()).collect()
    }
}

/// A schema compatibility issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// The column concerned
    pub column: String,
    /// Description of the incompatibility
    pub description: String,
}

/// Compare an on-disk schema against the schema a table expects.
///
/// Columns that are not nullable in `expected` must exist. Type differences are issues
/// only when no conversion exists; convertible differences are reported at debug level.
#[must_use]
pub fn check_schema(expected: &Schema, actual: &Schema) -> SchemaCompatibilityReport {
    let mut issues = Vec::new();

    for field in expected.fields() {
        match actual.field_with_name(field.name()) {
            Ok(actual_field) => {
                match check_type_compatibility(actual_field.data_type(), field.data_type()) {
                    TypeCompatibility::Exact => {}
                    TypeCompatibility::Compatible => debug!(
                        "Column '{}' stored as {:?}, will convert to {:?}",
                        field.name(),
                        actual_field.data_type(),
                        field.data_type()
                    ),
                    TypeCompatibility::Incompatible => issues.push(SchemaIssue {
                        column: field.name().clone(),
                        description: format!(
                            "Field type mismatch for '{}': {:?} vs {:?}",
                            field.name(),
                            actual_field.data_type(),
                            field.data_type()
                        ),
                    }),
                }
            }
            Err(_) if !field.is_nullable() => issues.push(SchemaIssue {
                column: field.name().clone(),
                description: format!("Required field '{}' is missing", field.name()),
            }),
            Err(_) => {}
        }
    }

    SchemaCompatibilityReport {
        compatible: issues.is_empty(),
        issues,
    }
}

/// Conform a record batch to `expected`: select columns in schema order, cast differing
/// types, and fill absent optional columns with nulls.
///
/// Every field of the returned batch is nullable, so missing cells survive until row
/// validation decides what to do with them.
pub fn conform_batch(
    table: &'static str,
    batch: &RecordBatch,
    expected: &Schema,
) -> Result<RecordBatch> {
    let source = batch.schema();
    let mut fields = Vec::with_capacity(expected.fields().len());
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(expected.fields().len());

    for field in expected.fields() {
        let target = field.data_type();
        let column = match source.index_of(field.name()) {
            Ok(idx) => {
                let column = batch.column(idx);
                if column.data_type() == target {
                    Arc::clone(column)
                } else if can_cast_types(column.data_type(), target) {
                    cast(column, target).map_err(Error::from)?
                } else {
                    return Err(Error::ColumnCast {
                        table,
                        column: field.name().clone(),
                        from: column.data_type().clone(),
                        to: target.clone(),
                    }
                    .into());
                }
            }
            Err(_) if field.is_nullable() => new_null_array(target, batch.num_rows()),
            Err(_) => {
                return Err(Error::ColumnNotFound {
                    table,
                    column: field.name().clone(),
                }
                .into());
            }
        };
        fields.push(Field::new(field.name(), target.clone(), true));
        columns.push(column);
    }

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).map_err(Error::from)?)
}
