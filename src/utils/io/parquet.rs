//! Parquet file operations
//!
//! Reading catalog tables into Arrow record batches with an optional column projection,
//! and writing record batches back out.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use parquet::arrow::ArrowWriter;
use parquet::arrow::{ProjectionMask, arrow_reader::ParquetRecordBatchReaderBuilder};

use crate::error::Result;
use crate::error::util::safe_open_file;
use crate::utils::logging::log_warning;

/// Helper for creating projection mask from schema
///
/// # Returns
/// `None` when no expected column exists in the file, in which case every column is read
#[must_use]
pub fn create_projection(
    schema: &Schema,
    file_schema: &Schema,
    parquet_schema: &parquet::schema::types::SchemaDescriptor,
) -> Option<ProjectionMask> {
    let projection = schema
        .fields()
        .iter()
        .filter_map(|f| {
            let field_name = f.name();
            file_schema.index_of(field_name).map_or_else(
                |_| {
                    log_warning(
                        &format!("Field {field_name} not found in parquet file, skipping"),
                        None,
                    );
                    None
                },
                Some,
            )
        })
        .sorted()
        .collect_vec();

    if projection.is_empty() {
        log_warning(
            "No matching fields found in schema projection, reading all columns",
            None,
        );
        None
    } else {
        Some(ProjectionMask::leaves(parquet_schema, projection))
    }
}

/// Read a parquet file into Arrow record batches
///
/// # Arguments
/// * `path` - Path to the Parquet file
/// * `schema` - Optional Arrow Schema for projecting specific columns
/// * `batch_size` - Rows per batch
pub fn read_parquet(
    path: &Path,
    schema: Option<&Schema>,
    batch_size: usize,
) -> Result<Vec<RecordBatch>> {
    let file = safe_open_file(path, "reading parquet file")?;

    let reader_builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .with_context(|| format!("Failed to read parquet file: {}", path.display()))?
        .with_batch_size(batch_size);

    let projection = schema.and_then(|schema| {
        create_projection(
            schema,
            reader_builder.schema(),
            reader_builder.parquet_schema(),
        )
    });

    let reader = match projection {
        Some(mask) => reader_builder.with_projection(mask).build(),
        None => reader_builder.build(),
    }
    .with_context(|| format!("Failed to build parquet reader for {}", path.display()))?;

    let mut batches = Vec::new();
    for batch_result in reader {
        let batch = batch_result
            .with_context(|| format!("Failed to read record batch from {}", path.display()))?;
        batches.push(batch);
    }

    Ok(batches)
}

/// Write a record batch to a parquet file, replacing any existing file
pub fn write_parquet(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create parquet file: {}", path.display()))?;

    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)
        .with_context(|| format!("Failed to create parquet writer for {}", path.display()))?;
    writer
        .write(batch)
        .with_context(|| format!("Failed to write record batch to {}", path.display()))?;
    writer
        .close()
        .with_context(|| format!("Failed to finalize parquet file {}", path.display()))?;

    Ok(())
}
