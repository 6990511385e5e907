use nutri_graph::utils::test::{sample_tables, write_catalog};
use nutri_graph::{CatalogTables, ReferenceCatalogs, Result};
use tempfile::TempDir;

/// Write `tables` to a fresh directory and load them back as catalogs.
/// The directory lives as long as the returned guard.
pub fn catalogs_from_disk(tables: &CatalogTables) -> Result<(TempDir, ReferenceCatalogs)> {
    let dir = tempfile::tempdir()?;
    let config = write_catalog(dir.path(), tables)?;
    let catalogs = ReferenceCatalogs::load(&config)?;
    Ok((dir, catalogs))
}

/// The sample catalog, loaded through Parquet
pub fn sample_catalogs_from_disk() -> Result<(TempDir, ReferenceCatalogs)> {
    catalogs_from_disk(&sample_tables())
}
