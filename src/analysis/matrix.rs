//! Facility presence grid, grouped by theme.

use crate::i18n::{Language, FACILITIES, FACILITY_GROUPS};
use crate::model::{Facility, FacilityGroup, Project};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub facility: Facility,
    pub label: String,
    /// One flag per project column.
    pub present: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixGroup {
    pub group: FacilityGroup,
    pub label: String,
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilitiesMatrix {
    pub projects: Vec<String>,
    pub groups: Vec<MatrixGroup>,
}

impl FacilitiesMatrix {
    #[must_use]
    pub fn build(projects: &[&Project], lang: Language) -> Self {
        let groups = FacilityGroup::ALL
            .iter()
            .map(|&group| MatrixGroup {
                group,
                label: FACILITY_GROUPS.translate(group.key(), lang).to_string(),
                rows: group
                    .members()
                    .iter()
                    .map(|&facility| MatrixRow {
                        facility,
                        label: FACILITIES.translate(facility.as_str(), lang).to_string(),
                        present: projects
                            .iter()
                            .map(|p| p.has_facility(facility.as_str()))
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            projects: projects.iter().map(|p| p.name.clone()).collect(),
            groups,
        }
    }

    /// Facilities every project column has.
    pub fn shared(&self) -> impl Iterator<Item = &MatrixRow> {
        self.groups
            .iter()
            .flat_map(|g| &g.rows)
            .filter(|row| !row.present.is_empty() && row.present.iter().all(|&p| p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dataset;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_cover_every_facility_once() {
        let dataset = Dataset::builtin();
        let projects: Vec<&Project> = dataset.projects.iter().collect();
        let matrix = FacilitiesMatrix::build(&projects, Language::En);

        assert_eq!(matrix.groups.len(), 4);
        let rows: usize = matrix.groups.iter().map(|g| g.rows.len()).sum();
        assert_eq!(rows, Facility::ALL.len());
        assert_eq!(matrix.groups[0].label, "Wellness & Active");
    }

    #[test]
    fn presence_flags() {
        let dataset = Dataset::builtin();
        let projects: Vec<&Project> = dataset.projects.iter().collect();
        let matrix = FacilitiesMatrix::build(&projects, Language::Ru);

        let library = matrix
            .groups
            .iter()
            .flat_map(|g| &g.rows)
            .find(|r| r.facility == Facility::Library)
            .unwrap();
        assert_eq!(library.label, "Библиотека");
        assert_eq!(library.present, vec![true, false, false]);

        let shared: Vec<Facility> = matrix.shared().map(|r| r.facility).collect();
        assert_eq!(
            shared,
            vec![
                Facility::SwimmingPool,
                Facility::Gym,
                Facility::SteamRoom,
                Facility::CoWorking,
                Facility::GameRoom,
                Facility::KidsZone,
                Facility::Laundry,
            ]
        );
    }

    #[test]
    fn no_projects_no_shared_rows() {
        let matrix = FacilitiesMatrix::build(&[], Language::En);
        assert!(matrix.projects.is_empty());
        assert_eq!(matrix.shared().count(), 0);
    }
}
