//! Domain models for the deficiency engine
//!
//! Catalog entities (parameters, ranges, dependencies, RDA entries, foods) are built once
//! when catalogs load and never change. Per-analysis entities (readings, assessments,
//! deficiencies, graphs, recommendations) are created fresh for every analysis.

pub mod assessment;
pub mod deficiency;
pub mod dependency;
pub mod details;
pub mod graph;
pub mod parameter;
pub mod profile;
pub mod recommendation;

pub use assessment::{ParameterAssessment, Status};
pub use deficiency::{DeficiencyMap, DeficiencyOutcome, NutrientNeed};
pub use dependency::{NO_PARENT, NutrientDependency};
pub use details::{DetailKind, ParameterDetails};
pub use graph::{DependencyEdge, DependencyGraph, EdgeKind, GraphNode, NodeKind};
pub use parameter::{CanonicalParameter, ParameterRange, ParameterReading};
pub use profile::DemographicProfile;
pub use recommendation::{
    FoodPlan, FoodRecommendation, NO_RECOMMENDATIONS, NutrientRecommendation, PlanDay,
    RDA_NOT_AVAILABLE, RdaEntry, RdaValue,
};

/// Case-insensitive key used by every catalog index
#[must_use]
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}
