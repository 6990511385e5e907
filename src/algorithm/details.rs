//! Causes, effects and things to avoid for a parameter

use super::resolver::resolve;
use crate::catalog::ReferenceCatalogs;
use crate::models::ParameterDetails;

/// Details for `name`, which may be a canonical name or an alias.
/// Unknown parameters yield empty details.
#[must_use]
pub fn parameter_details(catalogs: &ReferenceCatalogs, name: &str) -> ParameterDetails {
    let canonical = resolve(catalogs, name).map_or(name, |p| p.name.as_str());
    catalogs.details(canonical).cloned().unwrap_or_default()
}
