//! Test helper functions
//!
//! Writing fixture catalogs to disk and timing catalog operations.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::catalog::{CatalogTables, write_tables};
use crate::config::CatalogConfig;
use crate::error::Result;

/// Write `tables` as Parquet files into `dir` and return a configuration pointing at them
pub fn write_catalog(dir: &Path, tables: &CatalogTables) -> Result<CatalogConfig> {
    let config = CatalogConfig::new(dir);
    write_tables(dir, &config.files, tables)?;
    Ok(config)
}

/// Run `func` and report how long it took
pub fn timed_execution<F, T>(func: F) -> (Duration, T)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = func();
    (start.elapsed(), result)
}
