//! Nutrient need mapping for abnormal parameters

use crate::catalog::ReferenceCatalogs;
use crate::models::{DeficiencyMap, ParameterAssessment};

/// Nutrients implicated by `parameter`, in catalog order
#[must_use]
pub fn nutrients_for(catalogs: &ReferenceCatalogs, parameter: &str) -> Vec<String> {
    catalogs.needs(parameter).to_vec()
}

/// Map every Risk or Concern assessment to its nutrients, in assessment order.
/// Normal assessments trigger no lookup.
#[must_use]
pub fn map_deficiencies(
    catalogs: &ReferenceCatalogs,
    assessments: &[ParameterAssessment],
) -> DeficiencyMap {
    let mut deficiencies = DeficiencyMap::new();
    for assessment in assessments.iter().filter(|a| a.status.is_abnormal()) {
        let nutrients = nutrients_for(catalogs, &assessment.parameter);
        log::info!(
            "Parameter: {}, Status: {}, Nutrients Needed: {:?}",
            assessment.parameter,
            assessment.status,
            nutrients
        );
        deficiencies.insert(&assessment.parameter, nutrients);
    }
    deficiencies
}
