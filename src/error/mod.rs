//! Error handling for catalog loading and engine configuration.
//!
//! Data-level problems found while analysing readings are never errors: they are
//! logged and turned into sentinel outcomes by the engine. Only failures that leave
//! the engine without its reference data surface through this module.

pub mod util;

use std::path::PathBuf;

use arrow::datatypes::DataType;
use arrow::error::ArrowError;
use parquet::errors::ParquetError;

/// Typed failures raised while loading reference catalogs
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required catalog file does not exist
    #[error("Catalog table '{table}' not found at {}", path.display())]
    TableNotFound {
        /// Table name
        table: &'static str,
        /// Expected location of the file
        path: PathBuf,
    },

    /// A required column is absent from a catalog file
    #[error("Column '{column}' not found in table '{table}'")]
    ColumnNotFound {
        /// Table name
        table: &'static str,
        /// Missing column
        column: String,
    },

    /// A column exists but cannot be cast to the expected type
    #[error("Column '{column}' in table '{table}' cannot be converted from {from} to {to}")]
    ColumnCast {
        /// Table name
        table: &'static str,
        /// Column being converted
        column: String,
        /// Type found in the file
        from: DataType,
        /// Type the catalog expects
        to: DataType,
    },

    /// Schema validation found issues and the configuration forbids continuing
    #[error("Schema of table '{table}' is incompatible: {}", issues.join("; "))]
    SchemaIncompatible {
        /// Table name
        table: &'static str,
        /// Human-readable issue descriptions
        issues: Vec<String>,
    },

    /// Engine or catalog configuration could not be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet error
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),
}

/// Result type used by fallible operations in this crate
pub type Result<T> = anyhow::Result<T>;
