use nutri_graph::algorithm::{nutrients_for, resolve};
use nutri_graph::{
    DeficiencyEngine, DeficiencyOutcome, DemographicProfile, EdgeDirection, EdgeKind,
    EngineConfig, ExpansionDepth, NeedAggregation, RdaValue, Status,
};

use crate::utils::sample_catalogs_from_disk;

/// Test a low hemoglobin reading is flagged with its catalog nutrients
#[test]
fn test_low_hemoglobin_is_risk() -> nutri_graph::Result<()> {
    let (_dir, catalogs) = sample_catalogs_from_disk()?;
    let config = EngineConfig::default();
    let engine = DeficiencyEngine::new(&catalogs, &config);

    let report = engine.analyze([("Hemoglobin", "9.0")]);
    assert_eq!(report.assessments[0].status, Status::Risk);
    assert_eq!(report.assessments[0].normal_range, "12.0 - 16.0");
    assert_eq!(
        report.deficiencies.get("Hemoglobin"),
        Some(nutrients_for(&catalogs, "Hemoglobin").as_slice())
    );
    Ok(())
}

/// Test a normal vitamin D reading contributes nothing to the graph
#[test]
fn test_normal_vitamin_d_is_left_out() -> nutri_graph::Result<()> {
    let (_dir, catalogs) = sample_catalogs_from_disk()?;
    let config = EngineConfig::default();
    let engine = DeficiencyEngine::new(&catalogs, &config);

    let report = engine.analyze([("Vitamin D", "45.0")]);
    assert_eq!(report.assessments[0].status, Status::Normal);
    assert!(report.deficiencies.get("Vitamin D").is_none());
    assert!(!report.graph.contains_node("Vitamin D"));
    assert_eq!(report.outcome, DeficiencyOutcome::NoDeficiencies);
    Ok(())
}

/// Test a dependency row becomes an edge from child to parent with its comment
#[test]
fn test_dependency_edge_points_at_parent() -> nutri_graph::Result<()> {
    let (_dir, catalogs) = sample_catalogs_from_disk()?;
    let config = EngineConfig::default();
    let engine = DeficiencyEngine::new(&catalogs, &config);

    let report = engine.analyze([("Hemoglobin", "9.0")]);
    let edge = report.graph.edge("Iron", "Hemoglobin").unwrap();
    assert_eq!(edge.kind, EdgeKind::Dependency);
    assert_eq!(
        edge.comment.as_deref(),
        Some("Iron is required to build hemoglobin")
    );
    assert!(report.graph.contains_edge("Hemoglobin", "Iron"));
    Ok(())
}

/// Test recommendations fall back to the sentinel when no RDA row matches
#[test]
fn test_iron_rda_not_available() -> nutri_graph::Result<()> {
    let (_dir, catalogs) = sample_catalogs_from_disk()?;
    let config = EngineConfig::default();
    let engine = DeficiencyEngine::new(&catalogs, &config);

    let report = engine.analyze([("Hemoglobin", "9.0")]);
    let profile = DemographicProfile::new(25, "female", "moderate").with_weight(61.5);
    let recommendations = engine.recommend(&report.deficiencies, &profile);

    let iron = recommendations.iter().find(|r| r.nutrient == "Iron").unwrap();
    assert_eq!(iron.rda, RdaValue::NotAvailable);
    assert_eq!(iron.rda.to_string(), "RDA not available");
    assert_eq!(iron.foods.len(), 3);
    Ok(())
}

/// Test alias spellings analyze exactly like the canonical name
#[test]
fn test_alias_matches_canonical() -> nutri_graph::Result<()> {
    let (_dir, catalogs) = sample_catalogs_from_disk()?;
    let config = EngineConfig::default();
    let engine = DeficiencyEngine::new(&catalogs, &config);

    assert_eq!(resolve(&catalogs, "HB"), resolve(&catalogs, "hemoglobin"));
    let canonical = engine.analyze([("Hemoglobin", "9.0")]);
    for label in ["hb", "HAEMOGLOBIN", " Hb "] {
        assert_eq!(engine.analyze([(label, "9.0")]), canonical);
    }
    Ok(())
}

/// Test an all-normal report ends in the no-deficiency outcome
#[test]
fn test_all_normal_report() -> nutri_graph::Result<()> {
    let (_dir, catalogs) = sample_catalogs_from_disk()?;
    let config = EngineConfig::default();
    let engine = DeficiencyEngine::new(&catalogs, &config);

    let report = engine.analyze_lines(
        "Hemoglobin 13.5 g/dL\nVitamin D 30 ng/mL\nFerritin 120 ng/mL\nGlucose 90 mg/dL".lines(),
    );
    assert_eq!(report.assessments.len(), 4);
    assert!(report.assessments.iter().all(|a| a.status == Status::Normal));
    assert!(report.deficiencies.is_empty());
    assert_eq!(report.graph.node_count(), 0);
    assert_eq!(report.narrative, "No deficiencies found.");

    let profile = DemographicProfile::new(25, "female", "moderate");
    assert!(engine.recommend(&report.deficiencies, &profile).is_empty());
    Ok(())
}

/// Test transitive expansion over the calcium/magnesium cycle terminates
#[test]
fn test_cycle_terminates() -> nutri_graph::Result<()> {
    let (_dir, catalogs) = sample_catalogs_from_disk()?;
    for edge_direction in [EdgeDirection::TowardParent, EdgeDirection::TowardChild] {
        let config = EngineConfig {
            edge_direction,
            expansion: ExpansionDepth::Transitive,
            need_aggregation: NeedAggregation::Deduplicate,
        };
        let engine = DeficiencyEngine::new(&catalogs, &config);
        let report = engine.analyze([("Vitamin D", "5.0")]);

        assert!(report.graph.contains_edge("Calcium", "Magnesium"));
        assert!(report.graph.contains_edge("Magnesium", "Calcium"));
    }
    Ok(())
}

/// Test repeated analyses produce identical graphs and narratives
#[test]
fn test_analysis_is_deterministic() -> nutri_graph::Result<()> {
    let (_dir, catalogs) = sample_catalogs_from_disk()?;
    let config = EngineConfig::default();
    let engine = DeficiencyEngine::new(&catalogs, &config);

    let readings = [("Hemoglobin", "9.0"), ("Ferritin", "8"), ("Vitamin D", "10")];
    let first = engine.analyze(readings);
    for _ in 0..5 {
        let again = engine.analyze(readings);
        assert_eq!(again.graph, first.graph);
        assert_eq!(again.narrative, first.narrative);
        assert_eq!(again.graph.to_dot(), first.graph.to_dot());
    }
    Ok(())
}
