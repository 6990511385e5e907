//! RDA and food lookups

use rustc_hash::FxHashSet;

use crate::catalog::ReferenceCatalogs;
use crate::config::NeedAggregation;
use crate::models::{
    DeficiencyMap, DemographicProfile, FoodRecommendation, NutrientRecommendation, RdaValue,
};

/// Recommended daily allowance of `nutrient` for `profile`.
/// The first matching row in catalog order wins.
#[must_use]
pub fn rda(catalogs: &ReferenceCatalogs, nutrient: &str, profile: &DemographicProfile) -> RdaValue {
    match catalogs.rda_entries(nutrient).iter().find(|e| e.matches(profile)) {
        Some(entry) => RdaValue::Available(entry.rda_value),
        None => {
            log::debug!(
                "No RDA row for {nutrient} (age {}, {}, {})",
                profile.age,
                profile.gender,
                profile.activity_level
            );
            RdaValue::NotAvailable
        }
    }
}

/// Foods supplying `nutrient`, in catalog order
#[must_use]
pub fn foods<'a>(catalogs: &'a ReferenceCatalogs, nutrient: &str) -> &'a [FoodRecommendation] {
    catalogs.foods(nutrient)
}

/// RDA and foods for every aggregated nutrient, one entry per distinct nutrient name.
///
/// Entries are keyed by the exact nutrient string under either aggregation mode, so
/// `Concatenate` never yields repeated entries. `Deduplicate` additionally folds
/// spellings that differ only in case before the entries are built.
#[must_use]
pub fn recommend(
    catalogs: &ReferenceCatalogs,
    deficiencies: &DeficiencyMap,
    profile: &DemographicProfile,
    aggregation: NeedAggregation,
) -> Vec<NutrientRecommendation> {
    let nutrients = deficiencies.aggregate(aggregation);
    log::info!("Fetching recommended foods for nutrients: {nutrients:?}");

    let mut seen = FxHashSet::default();
    let recommendations: Vec<_> = nutrients
        .into_iter()
        .filter(|n| seen.insert(n.clone()))
        .map(|nutrient| NutrientRecommendation {
            rda: rda(catalogs, &nutrient, profile),
            foods: foods(catalogs, &nutrient).to_vec(),
            nutrient,
        })
        .collect();

    if recommendations.iter().all(|r| r.foods.is_empty()) && !recommendations.is_empty() {
        log::warn!("No recommended foods found for the given nutrients");
    }
    recommendations
}
