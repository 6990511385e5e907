//! End-to-end deficiency analysis
//!
//! A [`DeficiencyEngine`] borrows the shared catalogs and runs the whole pipeline
//! synchronously: extraction, classification, need mapping, graph building and the
//! narrative. Every analysis owns its results; nothing is shared between analyses.

use std::time::Instant;

use serde::Serialize;

use super::classifier::assess;
use super::details::parameter_details;
use super::extraction::{extract_from_lines, extract_readings};
use super::graph::{build_for_root, build_graph};
use super::narrative::render;
use super::needs::map_deficiencies;
use super::recommend::recommend;
use crate::catalog::ReferenceCatalogs;
use crate::config::EngineConfig;
use crate::models::{
    DeficiencyMap, DeficiencyOutcome, DemographicProfile, DependencyGraph, NutrientRecommendation,
    ParameterAssessment, ParameterDetails, ParameterReading,
};

/// Structured and textual results of one analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub readings: Vec<ParameterReading>,
    pub assessments: Vec<ParameterAssessment>,
    pub deficiencies: DeficiencyMap,
    pub outcome: DeficiencyOutcome,
    pub graph: DependencyGraph,
    pub narrative: String,
}

impl AnalysisReport {
    /// Assessments with Risk or Concern status
    pub fn flagged(&self) -> impl Iterator<Item = &ParameterAssessment> {
        self.assessments.iter().filter(|a| a.status.is_abnormal())
    }
}

/// Runs analyses against shared reference catalogs
#[derive(Debug, Clone, Copy)]
pub struct DeficiencyEngine<'a> {
    catalogs: &'a ReferenceCatalogs,
    config: &'a EngineConfig,
}

impl<'a> DeficiencyEngine<'a> {
    #[must_use]
    pub const fn new(catalogs: &'a ReferenceCatalogs, config: &'a EngineConfig) -> Self {
        Self { catalogs, config }
    }

    #[must_use]
    pub const fn catalogs(&self) -> &'a ReferenceCatalogs {
        self.catalogs
    }

    #[must_use]
    pub const fn config(&self) -> &'a EngineConfig {
        self.config
    }

    /// Analyze raw label/value pairs
    pub fn analyze<I, L, V>(&self, pairs: I) -> AnalysisReport
    where
        I: IntoIterator<Item = (L, V)>,
        L: AsRef<str>,
        V: AsRef<str>,
    {
        self.analyze_readings(extract_readings(self.catalogs, pairs))
    }

    /// Analyze lines of report text
    pub fn analyze_lines<'l, I>(&self, lines: I) -> AnalysisReport
    where
        I: IntoIterator<Item = &'l str>,
    {
        self.analyze_readings(extract_from_lines(self.catalogs, lines))
    }

    /// Analyze readings that are already resolved
    #[must_use]
    pub fn analyze_readings(&self, readings: Vec<ParameterReading>) -> AnalysisReport {
        let start = Instant::now();

        let assessments = assess(self.catalogs, &readings);
        let deficiencies = map_deficiencies(self.catalogs, &assessments);
        let outcome = deficiencies.outcome();
        let graph = build_graph(self.catalogs, &deficiencies, self.config);
        let narrative = render(self.catalogs, &deficiencies, self.config.edge_direction);

        log::info!(
            "Analyzed {} readings: {} assessed, {} flagged, graph with {} nodes in {:?}",
            readings.len(),
            assessments.len(),
            deficiencies.len(),
            graph.node_count(),
            start.elapsed()
        );

        AnalysisReport {
            readings,
            assessments,
            deficiencies,
            outcome,
            graph,
            narrative,
        }
    }

    /// RDA values and foods for the nutrients of an analysis
    #[must_use]
    pub fn recommend(
        &self,
        deficiencies: &DeficiencyMap,
        profile: &DemographicProfile,
    ) -> Vec<NutrientRecommendation> {
        recommend(self.catalogs, deficiencies, profile, self.config.need_aggregation)
    }

    #[must_use]
    pub fn details(&self, parameter: &str) -> ParameterDetails {
        parameter_details(self.catalogs, parameter)
    }

    /// Dependency graph rooted at a single nutrient
    #[must_use]
    pub fn graph_for_root(&self, nutrient: &str) -> DependencyGraph {
        build_for_root(self.catalogs, nutrient, self.config)
    }
}
