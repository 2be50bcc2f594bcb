//! Single write path for [`FilterState`].
//!
//! Every mutation is a [`FilterAction`] reduced into a fresh state value.
//! Readers take [`FilterStore::snapshot`] and never see a half-applied change.

use super::state::{parse_size_bound, AnalysisMode, FilterState, SizeBound};
use crate::i18n::Language;
use crate::model::Dataset;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    ToggleProject(String),
    ToggleCategory(String),
    ToggleSubCategory(String),
    ToggleFacility(String),
    /// Raw user text; parsed leniently, with failures becoming 0.
    SetSizeBound { which: SizeBound, raw: String },
    SetAnalysisMode(AnalysisMode),
    SetLanguage(Language),
    SetHighlightedCategory(Option<String>),
}

impl FilterState {
    /// Pure reducer: returns the state after `action`, leaving `self` untouched.
    #[must_use]
    pub fn apply(&self, action: &FilterAction) -> Self {
        let mut next = self.clone();
        match action {
            FilterAction::ToggleProject(name) => {
                next.selected_projects = toggled(&self.selected_projects, name);
            }
            FilterAction::ToggleCategory(category) => {
                next.selected_categories = toggled(&self.selected_categories, category);
            }
            FilterAction::ToggleSubCategory(sub) => {
                next.selected_sub_categories = toggled(&self.selected_sub_categories, sub);
            }
            FilterAction::ToggleFacility(facility) => {
                next.selected_facilities = toggled(&self.selected_facilities, facility);
            }
            FilterAction::SetSizeBound { which, raw } => {
                next.size_range = self.size_range.with_bound(*which, parse_size_bound(raw));
            }
            FilterAction::SetAnalysisMode(mode) => next.analysis_mode = *mode,
            FilterAction::SetLanguage(lang) => next.language = *lang,
            FilterAction::SetHighlightedCategory(category) => {
                next.highlighted_category.clone_from(category);
            }
        }
        next
    }
}

/// Set XOR with a single element.
fn toggled(set: &BTreeSet<String>, value: &str) -> BTreeSet<String> {
    let mut next = set.clone();
    if !next.remove(value) {
        next.insert(value.to_string());
    }
    next
}

/// Owns the current [`FilterState`].
#[derive(Debug, Clone)]
pub struct FilterStore {
    state: FilterState,
}

impl FilterStore {
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        Self::from_state(FilterState::new(dataset))
    }

    #[must_use]
    pub fn from_state(state: FilterState) -> Self {
        Self { state }
    }

    pub fn dispatch(&mut self, action: &FilterAction) {
        self.state = self.state.apply(action);
        tracing::debug!(
            ?action,
            projects = self.state.selected_projects.len(),
            categories = self.state.selected_categories.len(),
            sub_categories = self.state.selected_sub_categories.len(),
            facilities = self.state.selected_facilities.len(),
            mode = self.state.analysis_mode.key(),
            "filter state updated"
        );
    }

    #[must_use]
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    #[must_use]
    pub fn snapshot(&self) -> FilterState {
        self.state.clone()
    }

    pub fn toggle_project(&mut self, name: &str) {
        self.dispatch(&FilterAction::ToggleProject(name.to_string()));
    }

    pub fn toggle_category(&mut self, category: &str) {
        self.dispatch(&FilterAction::ToggleCategory(category.to_string()));
    }

    pub fn toggle_sub_category(&mut self, sub: &str) {
        self.dispatch(&FilterAction::ToggleSubCategory(sub.to_string()));
    }

    pub fn toggle_facility(&mut self, facility: &str) {
        self.dispatch(&FilterAction::ToggleFacility(facility.to_string()));
    }

    pub fn set_size_bound(&mut self, which: SizeBound, raw: &str) {
        let action = FilterAction::SetSizeBound {
            which,
            raw: raw.to_string(),
        };
        self.dispatch(&action);
    }

    pub fn set_analysis_mode(&mut self, mode: AnalysisMode) {
        self.dispatch(&FilterAction::SetAnalysisMode(mode));
    }

    pub fn set_language(&mut self, lang: Language) {
        self.dispatch(&FilterAction::SetLanguage(lang));
    }

    pub fn set_highlighted_category(&mut self, category: Option<&str>) {
        let action = FilterAction::SetHighlightedCategory(category.map(str::to_string));
        self.dispatch(&action);
    }
}
