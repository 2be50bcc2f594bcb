//! Filtered views of the dataset.
//!
//! Filters are not all live at once. Each [`AnalysisMode`] owns a row in a
//! predicate table ([`AnalysisMode::gates`]) naming which project and unit
//! predicates apply. Unit-level filters left over from the units view stay
//! inert in the whole-project views.

use super::state::{AnalysisMode, FilterState};
use crate::analysis::sets::LabeledSet;
use crate::model::{Dataset, Project, Unit};
use indexmap::IndexSet;
use std::collections::HashSet;

pub type ProjectPredicate = fn(&Project, &FilterState) -> bool;
pub type UnitPredicate = fn(&Unit, &FilterState) -> bool;

/// Which per-project labels feed the set analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetSource {
    Facilities,
    /// Distinct categories of the project's filtered units.
    Categories,
}

/// One row of the per-mode predicate table.
#[derive(Debug, Clone, Copy)]
pub struct ModeGates {
    pub project_predicates: &'static [ProjectPredicate],
    /// Applied on top of project validity.
    pub unit_predicates: &'static [UnitPredicate],
    pub set_source: SetSource,
}

impl ModeGates {
    #[must_use]
    pub fn applies_facility_filter(&self) -> bool {
        self.project_predicates.len() > PROJECT_ONLY.len()
    }

    #[must_use]
    pub fn applies_unit_filters(&self) -> bool {
        !self.unit_predicates.is_empty()
    }
}

const PROJECT_ONLY: &[ProjectPredicate] = &[is_selected];
const PROJECT_WITH_FACILITIES: &[ProjectPredicate] = &[is_selected, has_every_selected_facility];

const NO_UNIT_FILTERS: &[UnitPredicate] = &[];
const UNIT_ATTRIBUTE_FILTERS: &[UnitPredicate] =
    &[category_matches, sub_category_matches, size_overlaps];

impl AnalysisMode {
    #[must_use]
    pub const fn gates(self) -> ModeGates {
        match self {
            Self::Facilities => ModeGates {
                project_predicates: PROJECT_WITH_FACILITIES,
                unit_predicates: NO_UNIT_FILTERS,
                set_source: SetSource::Facilities,
            },
            Self::Units | Self::Audience => ModeGates {
                project_predicates: PROJECT_ONLY,
                unit_predicates: UNIT_ATTRIBUTE_FILTERS,
                set_source: SetSource::Categories,
            },
            Self::Masterplan | Self::Floorplans => ModeGates {
                project_predicates: PROJECT_ONLY,
                unit_predicates: NO_UNIT_FILTERS,
                set_source: SetSource::Categories,
            },
        }
    }
}

fn is_selected(project: &Project, state: &FilterState) -> bool {
    state.selected_projects.contains(&project.name)
}

/// AND semantics: the project must offer every selected facility.
fn has_every_selected_facility(project: &Project, state: &FilterState) -> bool {
    state
        .selected_facilities
        .iter()
        .all(|tag| project.has_facility(tag))
}

fn category_matches(unit: &Unit, state: &FilterState) -> bool {
    state.selected_categories.is_empty() || state.selected_categories.contains(&unit.category)
}

fn sub_category_matches(unit: &Unit, state: &FilterState) -> bool {
    state.selected_sub_categories.is_empty()
        || state.selected_sub_categories.contains(&unit.sub_category)
}

fn size_overlaps(unit: &Unit, state: &FilterState) -> bool {
    state.size_range.admits(unit)
}

/// Projects passing the active mode's project predicates, in dataset order.
#[must_use]
pub fn filtered_projects<'a>(dataset: &'a Dataset, state: &FilterState) -> Vec<&'a Project> {
    let gates = state.analysis_mode.gates();
    let projects: Vec<&Project> = dataset
        .projects
        .iter()
        .filter(|p| gates.project_predicates.iter().all(|pred| pred(p, state)))
        .collect();
    tracing::trace!(
        mode = state.analysis_mode.key(),
        kept = projects.len(),
        total = dataset.projects.len(),
        "filtered projects"
    );
    projects
}

/// Units of the filtered projects that pass the active mode's unit
/// predicates, in dataset order.
#[must_use]
pub fn filtered_units<'a>(dataset: &'a Dataset, state: &FilterState) -> Vec<&'a Unit> {
    units_of_projects(dataset, state, &filtered_projects(dataset, state))
}

fn units_of_projects<'a>(
    dataset: &'a Dataset,
    state: &FilterState,
    projects: &[&Project],
) -> Vec<&'a Unit> {
    let valid: HashSet<&str> = projects.iter().map(|p| p.name.as_str()).collect();
    let gates = state.analysis_mode.gates();
    let units: Vec<&Unit> = dataset
        .units
        .iter()
        .filter(|u| valid.contains(u.project.as_str()))
        .filter(|u| gates.unit_predicates.iter().all(|pred| pred(u, state)))
        .collect();
    tracing::trace!(
        mode = state.analysis_mode.key(),
        kept = units.len(),
        total = dataset.units.len(),
        "filtered units"
    );
    units
}

/// One labeled set per dataset project, in dataset order. Projects that were
/// filtered out contribute an empty set.
#[must_use]
pub fn set_inputs(
    dataset: &Dataset,
    state: &FilterState,
    projects: &[&Project],
    units: &[&Unit],
) -> Vec<LabeledSet> {
    let source = state.analysis_mode.gates().set_source;
    dataset
        .projects
        .iter()
        .map(|project| {
            let visible = projects.iter().any(|p| p.name == project.name);
            let items: IndexSet<String> = if visible {
                match source {
                    SetSource::Facilities => project.facilities.iter().cloned().collect(),
                    SetSource::Categories => units
                        .iter()
                        .filter(|u| u.project == project.name)
                        .map(|u| u.category.clone())
                        .collect(),
                }
            } else {
                IndexSet::new()
            };
            LabeledSet::new(project.name.clone(), items)
        })
        .collect()
}

/// Everything derived from one state snapshot.
#[derive(Debug, Clone)]
pub struct View<'a> {
    pub mode: AnalysisMode,
    pub projects: Vec<&'a Project>,
    pub units: Vec<&'a Unit>,
    pub set_inputs: Vec<LabeledSet>,
}

impl<'a> View<'a> {
    #[must_use]
    pub fn derive(dataset: &'a Dataset, state: &FilterState) -> Self {
        let projects = filtered_projects(dataset, state);
        let units = units_of_projects(dataset, state, &projects);
        let set_inputs = set_inputs(dataset, state, &projects, &units);
        tracing::debug!(
            mode = state.analysis_mode.key(),
            projects = projects.len(),
            units = units.len(),
            "derived view"
        );
        Self {
            mode: state.analysis_mode,
            projects,
            units,
            set_inputs,
        }
    }

    /// Filtered units belonging to `project`.
    #[must_use]
    pub fn units_of(&self, project: &str) -> Vec<&'a Unit> {
        self.units
            .iter()
            .copied()
            .filter(|u| u.project == project)
            .collect()
    }
}
