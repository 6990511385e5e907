//! Loading and writing reference tables as Parquet files

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use arrow::datatypes::FieldRef;

use super::tables::{
    CatalogTable, CatalogTables, DependencyRow, FoodRow, NeedRow, ParameterDetailRow,
    ParameterRow, RangeRow, RdaRow,
};
use crate::config::{CatalogConfig, CatalogFiles};
use crate::error::util::validate_directory;
use crate::error::{Error, Result};
use crate::schema::{check_schema, conform_batch};
use crate::utils::io::{read_parquet, write_parquet};
use crate::utils::logging::{log_table_loaded, log_table_start, log_warning};

/// Load one table, conforming every batch to the table's schema before decoding rows
pub fn load_table<T: CatalogTable>(path: &Path, config: &CatalogConfig) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(Error::TableNotFound {
            table: T::TABLE_NAME,
            path: path.to_path_buf(),
        }
        .into());
    }

    let start = Instant::now();
    log_table_start(T::TABLE_NAME, path);

    let expected = T::schema();
    let batches = read_parquet(path, Some(expected.as_ref()), config.batch_size)?;

    let mut rows = Vec::new();
    for (idx, batch) in batches.iter().enumerate() {
        if config.validate_schema && idx == 0 {
            let report = check_schema(&expected, &batch.schema());
            if !report.compatible {
                if config.fail_on_schema_incompatibility {
                    return Err(Error::SchemaIncompatible {
                        table: T::TABLE_NAME,
                        issues: report.descriptions(),
                    }
                    .into());
                }
                for issue in &report.issues {
                    log_warning(
                        &format!("{} table: {}", T::TABLE_NAME, issue.description),
                        Some(path),
                    );
                }
            }
        }

        let conformed = conform_batch(T::TABLE_NAME, batch, &expected)
            .with_context(|| format!("Failed to conform batch {idx} of {}", path.display()))?;
        let decoded: Vec<T> = serde_arrow::from_record_batch(&conformed).with_context(|| {
            format!("Failed to decode {} rows from {}", T::TABLE_NAME, path.display())
        })?;
        rows.extend(decoded);
    }

    log_table_loaded(T::TABLE_NAME, path, rows.len(), Some(start.elapsed()));
    Ok(rows)
}

/// Like [`load_table`], but a missing file yields an empty table
pub fn load_optional_table<T: CatalogTable>(
    path: &Path,
    config: &CatalogConfig,
) -> Result<Vec<T>> {
    if path.exists() {
        load_table(path, config)
    } else {
        log_warning(
            &format!("Optional {} table not found, using an empty table", T::TABLE_NAME),
            Some(path),
        );
        Ok(Vec::new())
    }
}

/// Load every reference table of a catalog directory in parallel
pub fn load_tables(config: &CatalogConfig) -> Result<CatalogTables> {
    validate_directory(&config.dir, "loading reference catalogs")?;
    let files = &config.files;

    let ((parameters, ranges), ((parameter_details, needs), (dependencies, (rda, foods)))) =
        rayon::join(
            || {
                rayon::join(
                    || load_table::<ParameterRow>(&config.path_for(&files.parameters), config),
                    || load_table::<RangeRow>(&config.path_for(&files.ranges), config),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || {
                                load_optional_table::<ParameterDetailRow>(
                                    &config.path_for(&files.parameter_details),
                                    config,
                                )
                            },
                            || {
                                load_table::<NeedRow>(
                                    &config.path_for(&files.nutrient_needs),
                                    config,
                                )
                            },
                        )
                    },
                    || {
                        rayon::join(
                            || {
                                load_table::<DependencyRow>(
                                    &config.path_for(&files.nutrient_dependencies),
                                    config,
                                )
                            },
                            || {
                                rayon::join(
                                    || load_table::<RdaRow>(&config.path_for(&files.rda), config),
                                    || {
                                        load_table::<FoodRow>(
                                            &config.path_for(&files.food_nutrients),
                                            config,
                                        )
                                    },
                                )
                            },
                        )
                    },
                )
            },
        );

    Ok(CatalogTables {
        parameters: parameters?,
        ranges: ranges?,
        parameter_details: parameter_details?,
        needs: needs?,
        dependencies: dependencies?,
        rda: rda?,
        foods: foods?,
    })
}

/// Write rows of one table to a Parquet file
pub fn write_table<T: CatalogTable>(path: &Path, rows: &[T]) -> Result<()> {
    let fields: Vec<FieldRef> = T::schema()
        .fields()
        .iter()
        .map(|f| Arc::new(f.as_ref().clone().with_nullable(true)))
        .collect();

    let batch = serde_arrow::to_record_batch(&fields, &rows)
        .with_context(|| format!("Failed to encode {} rows", T::TABLE_NAME))?;
    write_parquet(path, &batch)
}

/// Write every table into `dir` using the given file names
pub fn write_tables(dir: &Path, files: &CatalogFiles, tables: &CatalogTables) -> Result<()> {
    write_table(&dir.join(&files.parameters), &tables.parameters)?;
    write_table(&dir.join(&files.ranges), &tables.ranges)?;
    write_table(&dir.join(&files.parameter_details), &tables.parameter_details)?;
    write_table(&dir.join(&files.nutrient_needs), &tables.needs)?;
    write_table(&dir.join(&files.nutrient_dependencies), &tables.dependencies)?;
    write_table(&dir.join(&files.rda), &tables.rda)?;
    write_table(&dir.join(&files.food_nutrients), &tables.foods)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test::fixtures::sample_tables;

    #[test]
    fn test_tables_survive_parquet() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::new(dir.path());
        let tables = sample_tables();
        write_tables(dir.path(), &config.files, &tables).unwrap();

        let loaded = load_tables(&config).unwrap();
        assert_eq!(loaded, tables);
    }

    #[test]
    fn test_missing_required_table() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::new(dir.path());
        let tables = sample_tables();
        write_tables(dir.path(), &config.files, &tables).unwrap();
        std::fs::remove_file(dir.path().join(&config.files.rda)).unwrap();

        let err = load_tables(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::TableNotFound { table: "rda", .. })
        ));
    }

    #[test]
    fn test_missing_details_table_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = CatalogConfig::new(dir.path());
        let tables = sample_tables();
        write_tables(dir.path(), &config.files, &tables).unwrap();
        std::fs::remove_file(dir.path().join(&config.files.parameter_details)).unwrap();

        let loaded = load_tables(&config).unwrap();
        assert!(loaded.parameter_details.is_empty());
        assert_eq!(loaded.ranges, tables.ranges);
    }
}
