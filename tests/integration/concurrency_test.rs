use std::thread;

use nutri_graph::utils::test::timed_execution;
use nutri_graph::{DeficiencyEngine, DemographicProfile, EngineConfig, ReferenceCatalogs};

use crate::utils::sample_catalogs_from_disk;

fn assert_send_sync<T: Send + Sync>() {}

/// Test catalogs can be shared across threads without locking
#[test]
fn test_catalogs_are_shareable() {
    assert_send_sync::<ReferenceCatalogs>();
    assert_send_sync::<EngineConfig>();
}

/// Test concurrent analyses over one catalog agree with a sequential run
#[test]
fn test_concurrent_analyses() -> nutri_graph::Result<()> {
    let (_dir, catalogs) = sample_catalogs_from_disk()?;
    let config = EngineConfig::default();
    let engine = DeficiencyEngine::new(&catalogs, &config);

    let inputs: Vec<Vec<(String, String)>> = (0..16)
        .map(|i| {
            vec![
                ("Hb".to_string(), format!("{}", 8 + i % 10)),
                ("Ferritin".to_string(), format!("{}", 10 + i * 20)),
                ("Vitamin D".to_string(), format!("{}", 5 + i * 4)),
            ]
        })
        .collect();

    let sequential: Vec<_> = inputs.iter().map(|pairs| engine.analyze(pairs.clone())).collect();

    let (elapsed, concurrent) = timed_execution(|| {
        thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|pairs| scope.spawn(move || engine.analyze(pairs.clone())))
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .collect::<Vec<_>>()
        })
    });
    println!("Ran {} concurrent analyses in {elapsed:?}", concurrent.len());

    assert_eq!(concurrent, sequential);

    let profile = &DemographicProfile::new(25, "female", "moderate");
    let aggregation = config.need_aggregation;
    thread::scope(|scope| {
        for report in &concurrent {
            scope.spawn(move || {
                let recommendations = engine.recommend(&report.deficiencies, profile);
                assert_eq!(
                    recommendations.is_empty(),
                    report.deficiencies.aggregate(aggregation).is_empty()
                );
            });
        }
    });
    Ok(())
}
