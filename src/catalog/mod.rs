//! Reference catalogs
//!
//! The reference tables are loaded once at start-up and indexed into immutable
//! lookup structures. A [`ReferenceCatalogs`] value is `Send + Sync` and is shared by
//! reference across any number of concurrent analyses.
//!
//! Malformed rows are skipped with a warning while indexing:
//! - rows missing a required cell
//! - ranges whose bounds do not parse or whose minimum exceeds the maximum
//! - dependency rows whose parent equals their child
//! - RDA rows whose minimum age exceeds the maximum age

pub mod loader;
pub mod tables;

use rustc_hash::FxHashMap;

pub use loader::{load_table, load_tables, write_table, write_tables};
pub use tables::{
    CatalogTable, CatalogTables, DependencyRow, FoodRow, NeedRow, ParameterDetailRow,
    ParameterRow, RangeRow, RdaRow,
};

use crate::config::CatalogConfig;
use crate::error::Result;
use crate::models::{
    CanonicalParameter, DetailKind, FoodRecommendation, NutrientDependency, ParameterDetails,
    ParameterRange, RdaEntry, normalize_key,
};
use crate::utils::logging::log_row_skipped;

/// Indexed, read-only reference data
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalogs {
    parameters: Vec<CanonicalParameter>,
    by_name: FxHashMap<String, usize>,
    by_alias: FxHashMap<String, usize>,
    ranges: FxHashMap<String, ParameterRange>,
    details: FxHashMap<String, ParameterDetails>,
    needs: FxHashMap<String, Vec<String>>,
    dependencies: Vec<NutrientDependency>,
    dependencies_by_child: FxHashMap<String, Vec<usize>>,
    dependencies_by_parent: FxHashMap<String, Vec<usize>>,
    rda: FxHashMap<String, Vec<RdaEntry>>,
    foods: FxHashMap<String, Vec<FoodRecommendation>>,
}

/// Trimmed, non-empty text of an optional cell
fn cell(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Parse a bound; text that is not a finite real is malformed
fn parse_bound(raw: Option<&String>) -> Option<f64> {
    cell(raw)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

impl ReferenceCatalogs {
    /// Load the tables named by `config` and index them
    pub fn load(config: &CatalogConfig) -> Result<Self> {
        let tables = load_tables(config)?;
        Ok(Self::from_tables(tables))
    }

    /// Index decoded tables, skipping malformed rows
    #[must_use]
    pub fn from_tables(tables: CatalogTables) -> Self {
        let mut catalogs = Self::default();
        catalogs.index_parameters(&tables.parameters);
        catalogs.index_ranges(&tables.ranges);
        catalogs.index_details(&tables.parameter_details);
        catalogs.index_needs(&tables.needs);
        catalogs.index_dependencies(&tables.dependencies);
        catalogs.index_rda(&tables.rda);
        catalogs.index_foods(&tables.foods);

        log::info!(
            "Indexed {} parameters, {} ranges, {} dependencies, {} RDA nutrients, {} food nutrients",
            catalogs.parameters.len(),
            catalogs.ranges.len(),
            catalogs.dependencies.len(),
            catalogs.rda.len(),
            catalogs.foods.len()
        );
        catalogs
    }

    fn index_parameters(&mut self, rows: &[ParameterRow]) {
        // Canonical names first, so an alias can never shadow a canonical name
        for (row_idx, row) in rows.iter().enumerate() {
            let Some(name) = cell(row.general_name.as_ref()) else {
                log_row_skipped(ParameterRow::TABLE_NAME, row_idx, "missing general_name");
                continue;
            };
            let key = normalize_key(name);
            let unit = cell(row.unit.as_ref()).map(str::to_string);
            match self.by_name.get(&key) {
                Some(&idx) => {
                    let parameter = &mut self.parameters[idx];
                    if parameter.unit.is_none() {
                        parameter.unit = unit;
                    }
                }
                None => {
                    self.by_name.insert(key, self.parameters.len());
                    self.parameters.push(CanonicalParameter::new(name, unit));
                }
            }
        }

        for row in rows {
            let (Some(name), Some(alias)) =
                (cell(row.general_name.as_ref()), cell(row.alt_name.as_ref()))
            else {
                continue;
            };
            let Some(&idx) = self.by_name.get(&normalize_key(name)) else {
                continue;
            };
            let alias_key = normalize_key(alias);
            match self.by_alias.get(&alias_key) {
                Some(&owner) if owner != idx => log::warn!(
                    "Alias '{alias}' already belongs to '{}', ignoring it for '{name}'",
                    self.parameters[owner].name
                ),
                Some(_) => {}
                None => {
                    self.by_alias.insert(alias_key, idx);
                    self.parameters[idx].aliases.push(alias.to_string());
                }
            }
        }
    }

    fn index_ranges(&mut self, rows: &[RangeRow]) {
        for (row_idx, row) in rows.iter().enumerate() {
            let Some(name) = cell(row.general_name.as_ref()) else {
                log_row_skipped(RangeRow::TABLE_NAME, row_idx, "missing general_name");
                continue;
            };
            let (Some(min_normal), Some(max_normal)) = (
                parse_bound(row.min_normal_range.as_ref()),
                parse_bound(row.max_normal_range.as_ref()),
            ) else {
                log_row_skipped(
                    RangeRow::TABLE_NAME,
                    row_idx,
                    &format!("unparseable bounds for '{name}'"),
                );
                continue;
            };
            if min_normal > max_normal {
                log_row_skipped(
                    RangeRow::TABLE_NAME,
                    row_idx,
                    &format!("min_normal {min_normal} exceeds max_normal {max_normal} for '{name}'"),
                );
                continue;
            }
            self.ranges
                .entry(normalize_key(name))
                .or_insert(ParameterRange {
                    min_normal,
                    max_normal,
                });
        }
    }

    fn index_details(&mut self, rows: &[ParameterDetailRow]) {
        for (row_idx, row) in rows.iter().enumerate() {
            let (Some(name), Some(label), Some(text)) = (
                cell(row.general_name.as_ref()),
                cell(row.detail_type.as_ref()),
                cell(row.what_how.as_ref()),
            ) else {
                log_row_skipped(ParameterDetailRow::TABLE_NAME, row_idx, "missing cell");
                continue;
            };
            if let Some(kind) = DetailKind::from_label(label) {
                self.details
                    .entry(normalize_key(name))
                    .or_default()
                    .push(kind, text.to_string());
            }
        }
    }

    fn index_needs(&mut self, rows: &[NeedRow]) {
        for (row_idx, row) in rows.iter().enumerate() {
            let (Some(name), Some(nutrient)) =
                (cell(row.general_name.as_ref()), cell(row.nutrient.as_ref()))
            else {
                log_row_skipped(NeedRow::TABLE_NAME, row_idx, "missing general_name or nutrient");
                continue;
            };
            self.needs
                .entry(normalize_key(name))
                .or_default()
                .push(nutrient.to_string());
        }
    }

    fn index_dependencies(&mut self, rows: &[DependencyRow]) {
        for (row_idx, row) in rows.iter().enumerate() {
            let Some(child) = cell(row.child_nutrient.as_ref()) else {
                log_row_skipped(DependencyRow::TABLE_NAME, row_idx, "missing child_nutrient");
                continue;
            };
            let parent = NutrientDependency::parse_parent(row.parent_nutrient.as_deref());
            if parent
                .as_deref()
                .is_some_and(|p| normalize_key(p) == normalize_key(child))
            {
                log_row_skipped(
                    DependencyRow::TABLE_NAME,
                    row_idx,
                    &format!("'{child}' is listed as its own parent"),
                );
                continue;
            }

            let idx = self.dependencies.len();
            self.dependencies_by_child
                .entry(normalize_key(child))
                .or_default()
                .push(idx);
            if let Some(parent) = &parent {
                self.dependencies_by_parent
                    .entry(normalize_key(parent))
                    .or_default()
                    .push(idx);
            }
            self.dependencies.push(NutrientDependency {
                parent,
                child: child.to_string(),
                relation_type: cell(row.relation_type.as_ref()).map(str::to_string),
                comments: cell(row.comments.as_ref()).map(str::to_string),
                body_signs: cell(row.body_signs.as_ref()).map(str::to_string),
            });
        }
    }

    fn index_rda(&mut self, rows: &[RdaRow]) {
        for (row_idx, row) in rows.iter().enumerate() {
            let (
                Some(nutrient),
                Some(min_age),
                Some(max_age),
                Some(gender),
                Some(activity_level),
                Some(rda_value),
            ) = (
                cell(row.nutrient.as_ref()),
                row.min_age,
                row.max_age,
                cell(row.gender.as_ref()),
                cell(row.activity_level.as_ref()),
                row.rda_value,
            )
            else {
                log_row_skipped(RdaRow::TABLE_NAME, row_idx, "missing cell");
                continue;
            };
            if min_age > max_age {
                log_row_skipped(
                    RdaRow::TABLE_NAME,
                    row_idx,
                    &format!("min_age {min_age} exceeds max_age {max_age} for '{nutrient}'"),
                );
                continue;
            }
            self.rda.entry(normalize_key(nutrient)).or_default().push(RdaEntry {
                nutrient: nutrient.to_string(),
                min_age,
                max_age,
                gender: gender.to_string(),
                activity_level: activity_level.to_string(),
                rda_value,
            });
        }
    }

    fn index_foods(&mut self, rows: &[FoodRow]) {
        for (row_idx, row) in rows.iter().enumerate() {
            let (Some(nutrient), Some(food_name)) =
                (cell(row.nutrient.as_ref()), cell(row.food_name.as_ref()))
            else {
                log_row_skipped(FoodRow::TABLE_NAME, row_idx, "missing nutrient or food_name");
                continue;
            };
            self.foods
                .entry(normalize_key(nutrient))
                .or_default()
                .push(FoodRecommendation {
                    nutrient: nutrient.to_string(),
                    food_name: food_name.to_string(),
                    nutrient_value: row.nutrient_value,
                    nutrient_unit: cell(row.nutrient_unit.as_ref()).map(str::to_string),
                });
        }
    }

    /// Parameter whose canonical name equals `name`, ignoring case
    #[must_use]
    pub fn parameter_by_name(&self, name: &str) -> Option<&CanonicalParameter> {
        self.by_name
            .get(&normalize_key(name))
            .map(|&idx| &self.parameters[idx])
    }

    /// Parameter owning the alias `alias`, ignoring case
    #[must_use]
    pub fn parameter_by_alias(&self, alias: &str) -> Option<&CanonicalParameter> {
        self.by_alias
            .get(&normalize_key(alias))
            .map(|&idx| &self.parameters[idx])
    }

    #[must_use]
    pub fn range(&self, parameter: &str) -> Option<&ParameterRange> {
        self.ranges.get(&normalize_key(parameter))
    }

    #[must_use]
    pub fn details(&self, parameter: &str) -> Option<&ParameterDetails> {
        self.details.get(&normalize_key(parameter))
    }

    /// Nutrients mapped to `parameter`, in catalog order
    #[must_use]
    pub fn needs(&self, parameter: &str) -> &[String] {
        self.needs
            .get(&normalize_key(parameter))
            .map_or(&[], Vec::as_slice)
    }

    /// Dependency rows whose child is `nutrient`, in catalog order
    pub fn dependencies_with_child<'a>(
        &'a self,
        nutrient: &str,
    ) -> impl Iterator<Item = &'a NutrientDependency> + 'a {
        self.dependency_rows(self.dependencies_by_child.get(&normalize_key(nutrient)))
    }

    /// Dependency rows whose parent is `nutrient`, in catalog order
    pub fn dependencies_with_parent<'a>(
        &'a self,
        nutrient: &str,
    ) -> impl Iterator<Item = &'a NutrientDependency> + 'a {
        self.dependency_rows(self.dependencies_by_parent.get(&normalize_key(nutrient)))
    }

    fn dependency_rows<'a>(
        &'a self,
        indices: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a NutrientDependency> + 'a {
        indices
            .into_iter()
            .flatten()
            .map(move |&idx| &self.dependencies[idx])
    }

    /// RDA rows for `nutrient`, in catalog order
    #[must_use]
    pub fn rda_entries(&self, nutrient: &str) -> &[RdaEntry] {
        self.rda
            .get(&normalize_key(nutrient))
            .map_or(&[], Vec::as_slice)
    }

    /// Food rows for `nutrient`, in catalog order
    #[must_use]
    pub fn foods(&self, nutrient: &str) -> &[FoodRecommendation] {
        self.foods
            .get(&normalize_key(nutrient))
            .map_or(&[], Vec::as_slice)
    }
}
