//! A Rust library for resolving nutrient deficiencies from health-parameter readings.
//!
//! Reference catalogs are read from Parquet files once, indexed, and shared read-only.
//! Each analysis classifies readings against normal ranges, maps abnormal parameters to
//! nutrients, and builds a nutrient dependency graph with a textual trace.

pub mod algorithm;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod schema;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use catalog::{CatalogTables, ReferenceCatalogs};
pub use config::{CatalogConfig, EdgeDirection, EngineConfig, ExpansionDepth, NeedAggregation};
pub use error::{Error, Result};

// Engine
pub use algorithm::{AnalysisReport, DeficiencyEngine};
pub use models::{
    DeficiencyMap, DeficiencyOutcome, DemographicProfile, DependencyEdge, DependencyGraph,
    EdgeKind, FoodPlan, NutrientRecommendation, ParameterAssessment, ParameterDetails,
    ParameterReading, RdaValue, Status,
};

// Schema validation
pub use schema::{SchemaCompatibilityReport, SchemaIssue};

// Utility functions
pub use config::DEFAULT_BATCH_SIZE;
pub use utils::{read_parquet, write_parquet};
