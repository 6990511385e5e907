//! Parameter identity resolution
//!
//! Raw labels are matched case-insensitively against canonical names first and aliases
//! second. There is no fuzzy matching: a label that matches neither is unresolved.

use crate::catalog::ReferenceCatalogs;
use crate::models::CanonicalParameter;

/// Resolve a raw label to its canonical parameter
#[must_use]
pub fn resolve<'a>(catalogs: &'a ReferenceCatalogs, raw_label: &str) -> Option<&'a CanonicalParameter> {
    let label = raw_label.trim();
    if label.is_empty() {
        return None;
    }

    let resolved = catalogs
        .parameter_by_name(label)
        .or_else(|| catalogs.parameter_by_alias(label));
    match resolved {
        Some(parameter) => log::debug!("Resolved '{label}' to '{}'", parameter.name),
        None => log::debug!("No parameter matches '{label}'"),
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test::sample_catalogs;

    #[test]
    fn test_canonical_and_alias_agree() {
        let catalogs = sample_catalogs();
        let canonical = resolve(&catalogs, "Hemoglobin").unwrap();
        for label in ["hemoglobin", " HEMOGLOBIN ", "Hb", "hb", "haemoglobin"] {
            assert_eq!(resolve(&catalogs, label), Some(canonical), "label {label:?}");
        }
    }

    #[test]
    fn test_unknown_labels() {
        let catalogs = sample_catalogs();
        assert!(resolve(&catalogs, "Hemoglobn").is_none());
        assert!(resolve(&catalogs, "").is_none());
        assert!(resolve(&catalogs, "   ").is_none());
    }
}
