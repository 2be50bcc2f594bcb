use super::{FloorPlan, Project, Unit};
use crate::error::DatasetError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;

/// The static, read-only collection every view is derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub projects: Vec<Project>,
    pub units: Vec<Unit>,
    #[serde(default)]
    pub floor_plans: Vec<FloorPlan>,
}

impl Dataset {
    /// Loads and validates a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::FileRead`] if the file cannot be read,
    /// [`DatasetError::InvalidJson`] if it does not match the schema, or one
    /// of the validation variants (see [`Dataset::validate`]).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(&path).map_err(|source| DatasetError::FileRead {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json(&content)?;
        tracing::info!(
            path = %path.as_ref().display(),
            projects = dataset.projects.len(),
            units = dataset.units.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn from_json(content: &str) -> Result<Self, DatasetError> {
        let dataset: Self = serde_json::from_str(content)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Checks the record invariants: unique project names, unique unit ids,
    /// every unit owned by a known project, and `min_size <= max_size`.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let mut names = HashSet::new();
        for project in &self.projects {
            if !names.insert(project.name.as_str()) {
                return Err(DatasetError::DuplicateProject {
                    name: project.name.clone(),
                });
            }
        }

        let mut ids = HashSet::new();
        for unit in &self.units {
            if !ids.insert(unit.id.as_str()) {
                return Err(DatasetError::DuplicateUnit {
                    id: unit.id.clone(),
                });
            }
            if !names.contains(unit.project.as_str()) {
                return Err(DatasetError::UnknownProject {
                    unit: unit.id.clone(),
                    project: unit.project.clone(),
                });
            }
            if unit.min_size > unit.max_size {
                return Err(DatasetError::InvertedSize {
                    unit: unit.id.clone(),
                    min: unit.min_size,
                    max: unit.max_size,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn project(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    pub fn project_names(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.name.as_str())
    }

    #[must_use]
    pub fn units_of(&self, project: &str) -> Vec<&Unit> {
        self.units.iter().filter(|u| u.project == project).collect()
    }

    #[must_use]
    pub fn floor_plan(&self, project: &str) -> Option<&FloorPlan> {
        self.floor_plans.iter().find(|f| f.project == project)
    }

    /// Sorted, distinct unit categories.
    #[must_use]
    pub fn all_categories(&self) -> Vec<String> {
        sorted_distinct(self.units.iter().map(|u| u.category.as_str()))
    }

    /// Sorted, distinct unit sub-categories.
    #[must_use]
    pub fn all_sub_categories(&self) -> Vec<String> {
        sorted_distinct(self.units.iter().map(|u| u.sub_category.as_str()))
    }

    /// Sorted, distinct facility tags across all projects.
    #[must_use]
    pub fn all_facilities(&self) -> Vec<String> {
        sorted_distinct(
            self.projects
                .iter()
                .flat_map(|p| p.facilities.iter().map(String::as_str)),
        )
    }

    /// `(floor(min), ceil(max))` over every unit's min and max size, or
    /// `(0, 0)` when there are no units.
    #[must_use]
    pub fn size_bounds(&self) -> (i64, i64) {
        let sizes = self.units.iter().flat_map(|u| [u.min_size, u.max_size]);
        let (min, max) = sizes.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s), hi.max(s))
        });
        if min.is_finite() && max.is_finite() {
            (min.floor() as i64, max.ceil() as i64)
        } else {
            (0, 0)
        }
    }
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed::{CORALINA, SERENITY, SIERRA};
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_is_valid() {
        let dataset = Dataset::builtin();
        dataset.validate().unwrap();
        assert_eq!(
            dataset.project_names().collect::<Vec<_>>(),
            vec![CORALINA, SERENITY, SIERRA]
        );
        assert_eq!(dataset.units.len(), 31);
    }

    #[test]
    fn builtin_size_bounds() {
        assert_eq!(Dataset::builtin().size_bounds(), (26, 128));
    }

    #[test]
    fn empty_dataset_bounds() {
        let dataset = Dataset {
            projects: Vec::new(),
            units: Vec::new(),
            floor_plans: Vec::new(),
        };
        assert_eq!(dataset.size_bounds(), (0, 0));
    }

    #[test]
    fn catalogs_are_sorted_and_distinct() {
        let dataset = Dataset::builtin();
        assert_eq!(
            dataset.all_categories(),
            vec![
                "1 Bedroom",
                "1 Bedroom Plus",
                "2 Bedroom",
                "2 Bedroom Plus",
                "3 Bedroom",
                "3 Bedroom Penthouse",
            ]
        );
        assert_eq!(
            dataset.all_sub_categories(),
            vec!["C", "L", "M", "Penthouse", "Plus", "S", "Standard"]
        );
        assert_eq!(dataset.all_facilities().len(), 16);
    }

    #[test]
    fn json_round_trip_keeps_everything() {
        let dataset = Dataset::builtin();
        let json = serde_json::to_string(&dataset).unwrap();
        assert_eq!(Dataset::from_json(&json).unwrap(), dataset);
    }

    #[test]
    fn rejects_duplicate_project() {
        let mut dataset = Dataset::builtin();
        let copy = dataset.projects[0].clone();
        dataset.projects.push(copy);
        let err = dataset.validate().unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateProject { name } if name == CORALINA));
    }

    #[test]
    fn rejects_orphan_unit() {
        let mut dataset = Dataset::builtin();
        dataset.units[0].project = "Atlantis".to_string();
        assert!(matches!(dataset.validate(), Err(DatasetError::UnknownProject { .. })));
    }

    #[test]
    fn rejects_inverted_unit() {
        let mut dataset = Dataset::builtin();
        dataset.units[3].min_size = 90.0;
        assert!(matches!(dataset.validate(), Err(DatasetError::InvertedSize { .. })));
    }

    #[test]
    fn rejects_duplicate_unit() {
        let mut dataset = Dataset::builtin();
        dataset.units[1].id = dataset.units[0].id.clone();
        assert!(matches!(dataset.validate(), Err(DatasetError::DuplicateUnit { .. })));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Dataset::load("/nonexistent/estate.json").unwrap_err();
        assert!(matches!(err, DatasetError::FileRead { .. }));
    }

    #[test]
    fn load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"projects\": [").unwrap();
        assert!(matches!(Dataset::load(&path), Err(DatasetError::InvalidJson { .. })));
    }
}
