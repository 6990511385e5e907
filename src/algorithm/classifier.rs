//! Range classification of resolved readings

use crate::catalog::ReferenceCatalogs;
use crate::models::{ParameterAssessment, ParameterReading, Status};

/// Classify one reading against its parameter's normal range.
/// Parameters without a range are excluded and yield `None`.
#[must_use]
pub fn classify(
    catalogs: &ReferenceCatalogs,
    parameter: &str,
    value: f64,
) -> Option<ParameterAssessment> {
    let Some(range) = catalogs.range(parameter) else {
        log::debug!("No normal range for '{parameter}', excluding it from the assessment");
        return None;
    };
    let status = Status::from_range(value, range);
    log::debug!("{parameter} = {value}: {status}");

    Some(ParameterAssessment {
        parameter: parameter.to_string(),
        value,
        status,
        normal_range: range.formatted(),
    })
}

/// Classify every reading, keeping reading order
#[must_use]
pub fn assess(catalogs: &ReferenceCatalogs, readings: &[ParameterReading]) -> Vec<ParameterAssessment> {
    readings
        .iter()
        .filter_map(|r| classify(catalogs, &r.parameter, r.value))
        .collect()
}
