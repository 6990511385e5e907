//! Configuration for catalog loading and the deficiency engine.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming the catalog directory
pub const CATALOG_DIR_ENV: &str = "NUTRI_CATALOG_DIR";

/// Environment variable overriding the Parquet batch size
pub const BATCH_SIZE_ENV: &str = "NUTRI_BATCH_SIZE";

/// Default batch size for Parquet reading
pub const DEFAULT_BATCH_SIZE: usize = 8192;

/// File names of the reference tables inside the catalog directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFiles {
    pub parameters: String,
    pub ranges: String,
    pub parameter_details: String,
    pub nutrient_needs: String,
    pub nutrient_dependencies: String,
    pub rda: String,
    pub food_nutrients: String,
}

impl Default for CatalogFiles {
    fn default() -> Self {
        Self {
            parameters: "parameters.parquet".to_string(),
            ranges: "ranges.parquet".to_string(),
            parameter_details: "parameter_details.parquet".to_string(),
            nutrient_needs: "nutrient_needs.parquet".to_string(),
            nutrient_dependencies: "nutrient_dependencies.parquet".to_string(),
            rda: "rda.parquet".to_string(),
            food_nutrients: "food_nutrients.parquet".to_string(),
        }
    }
}

/// Configuration for loading the reference catalogs
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Directory holding one Parquet file per table
    pub dir: PathBuf,
    /// File names per table
    pub files: CatalogFiles,
    /// Whether to compare on-disk schemas against the expected schemas
    pub validate_schema: bool,
    /// Whether to fail on schema incompatibility instead of logging it
    pub fail_on_schema_incompatibility: bool,
    /// Rows per record batch when reading
    pub batch_size: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("catalog"),
            files: CatalogFiles::default(),
            validate_schema: true,
            fail_on_schema_incompatibility: false,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl CatalogConfig {
    /// Configuration rooted at `dir` with default file names
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Default::default()
        }
    }

    /// Build a configuration from `NUTRI_CATALOG_DIR` and `NUTRI_BATCH_SIZE`
    pub fn from_env() -> Result<Self> {
        let dir = std::env::var(CATALOG_DIR_ENV).map_err(|_| {
            Error::InvalidConfig(format!("{CATALOG_DIR_ENV} is not set"))
        })?;
        let mut config = Self::new(dir);
        if let Some(batch_size) = get_batch_size() {
            config.batch_size = batch_size;
        }
        Ok(config)
    }

    /// Full path of a table file
    #[must_use]
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }
}

/// Helper function to get batch size from environment
#[must_use]
pub fn get_batch_size() -> Option<usize> {
    std::env::var(BATCH_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0)
}

/// Orientation of nutrient-to-nutrient edges in the dependency graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    /// Look up rows where the nutrient is the child; edges point at the parent.
    /// Rows without a parent produce a fallback edge to the child.
    #[default]
    TowardParent,
    /// Look up rows where the nutrient is the parent; edges point at the child.
    TowardChild,
}

/// How far nutrient dependencies are expanded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionDepth {
    /// Only the nutrients implicated by parameters are expanded
    #[default]
    OneLevel,
    /// Newly reached nutrients are expanded too, each at most once
    Transitive,
}

/// How nutrient lists are combined across abnormal parameters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedAggregation {
    /// Plain concatenation in parameter order, duplicates kept
    #[default]
    Concatenate,
    /// First occurrence of each nutrient wins (case-insensitive)
    Deduplicate,
}

/// Configuration for the deficiency engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub edge_direction: EdgeDirection,
    pub expansion: ExpansionDepth,
    pub need_aggregation: NeedAggregation,
}

impl EngineConfig {
    /// Read an engine configuration from a JSON file; absent keys take defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = crate::error::util::safe_read_to_string(path, "engine configuration")?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse engine configuration {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_documented_rules() {
        let config = EngineConfig::default();
        assert_eq!(config.edge_direction, EdgeDirection::TowardParent);
        assert_eq!(config.expansion, ExpansionDepth::OneLevel);
        assert_eq!(config.need_aggregation, NeedAggregation::Concatenate);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"edge_direction": "toward_child"}"#).unwrap();
        assert_eq!(config.edge_direction, EdgeDirection::TowardChild);
        assert_eq!(config.expansion, ExpansionDepth::OneLevel);
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        std::fs::write(
            &path,
            r#"{"expansion": "transitive", "need_aggregation": "deduplicate"}"#,
        )
        .unwrap();

        let config = EngineConfig::from_json_file(&path).unwrap();
        assert_eq!(config.expansion, ExpansionDepth::Transitive);
        assert_eq!(config.need_aggregation, NeedAggregation::Deduplicate);
    }

    #[test]
    fn test_catalog_paths() {
        let config = CatalogConfig::new("/data/catalog");
        assert_eq!(
            config.path_for(&config.files.ranges),
            PathBuf::from("/data/catalog/ranges.parquet")
        );
    }
}
