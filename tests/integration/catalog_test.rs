use std::sync::Arc;

use arrow::array::{Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use nutri_graph::algorithm::classify;
use nutri_graph::catalog::load_tables;
use nutri_graph::utils::test::{sample_tables, write_catalog};
use nutri_graph::{CatalogConfig, Error, RdaValue, ReferenceCatalogs, Status, write_parquet};

use crate::utils::sample_catalogs_from_disk;

fn ranges_batch(with_max: bool) -> RecordBatch {
    let mut fields = vec![
        Field::new("general_name", DataType::Utf8, false),
        Field::new("min_normal_range", DataType::Float64, true),
    ];
    let mut columns: Vec<arrow::array::ArrayRef> = vec![
        Arc::new(StringArray::from(vec!["Hemoglobin", "Vitamin D"])),
        Arc::new(Float64Array::from(vec![12.0, 20.0])),
    ];
    if with_max {
        fields.push(Field::new("max_normal_range", DataType::Float64, true));
        columns.push(Arc::new(Float64Array::from(vec![16.0, 50.0])));
    }
    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).unwrap()
}

/// Test that catalogs loaded from Parquet answer like the in-memory fixture
#[test]
fn test_catalog_survives_parquet() -> nutri_graph::Result<()> {
    let (_dir, catalogs) = sample_catalogs_from_disk()?;
    let in_memory = ReferenceCatalogs::from_tables(sample_tables());

    assert_eq!(
        catalogs.parameter_by_alias("hb"),
        in_memory.parameter_by_alias("hb")
    );
    assert_eq!(catalogs.range("Hemoglobin"), in_memory.range("Hemoglobin"));
    assert_eq!(catalogs.needs("Ferritin"), in_memory.needs("Ferritin"));
    assert_eq!(catalogs.foods("Iron"), in_memory.foods("Iron"));
    assert_eq!(
        catalogs.dependencies_with_child("Iron").count(),
        in_memory.dependencies_with_child("Iron").count()
    );
    Ok(())
}

/// Test numeric bound columns are converted to text and parsed back
#[test]
fn test_numeric_range_columns() -> nutri_graph::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = write_catalog(dir.path(), &sample_tables())?;
    write_parquet(&config.path_for(&config.files.ranges), &ranges_batch(true))?;

    let catalogs = ReferenceCatalogs::load(&config)?;
    let assessment = classify(&catalogs, "Hemoglobin", 9.0).unwrap();
    assert_eq!(assessment.status, Status::Risk);
    assert_eq!(assessment.normal_range, "12.0 - 16.0");
    assert_eq!(
        classify(&catalogs, "Vitamin D", 50.0).unwrap().status,
        Status::Normal
    );
    Ok(())
}

/// Test a missing required column is fatal at load time
#[test]
fn test_missing_required_column() -> nutri_graph::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = write_catalog(dir.path(), &sample_tables())?;
    write_parquet(&config.path_for(&config.files.ranges), &ranges_batch(false))?;

    let err = load_tables(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::ColumnNotFound { table: "ranges", column }) if column == "max_normal_range"
    ));

    let strict = CatalogConfig {
        fail_on_schema_incompatibility: true,
        ..config
    };
    let err = load_tables(&strict).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::SchemaIncompatible { table: "ranges", .. })
    ));
    Ok(())
}

/// Test loading from a directory that does not exist
#[test]
fn test_missing_catalog_directory() {
    let config = CatalogConfig::new("/no/such/catalog");
    assert!(ReferenceCatalogs::load(&config).is_err());
}

/// Test the RDA sentinel survives the full load path
#[test]
fn test_rda_not_available_after_load() -> nutri_graph::Result<()> {
    let (_dir, catalogs) = sample_catalogs_from_disk()?;
    let profile = nutri_graph::DemographicProfile::new(25, "female", "moderate");
    assert_eq!(
        nutri_graph::algorithm::rda(&catalogs, "Iron", &profile),
        RdaValue::NotAvailable
    );
    Ok(())
}
