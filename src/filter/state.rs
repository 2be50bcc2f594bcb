use crate::i18n::{Language, MODES};
use crate::model::{Dataset, Unit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The active lens. It decides which filters are live (see [`AnalysisMode::gates`]).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    #[default]
    Facilities,
    Units,
    Masterplan,
    Audience,
    Floorplans,
}

impl AnalysisMode {
    pub const ALL: [AnalysisMode; 5] = [
        Self::Facilities,
        Self::Units,
        Self::Masterplan,
        Self::Audience,
        Self::Floorplans,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Facilities => "facilities",
            Self::Units => "units",
            Self::Masterplan => "masterplan",
            Self::Audience => "audience",
            Self::Floorplans => "floorplans",
        }
    }

    #[must_use]
    pub fn label(self, lang: Language) -> &'static str {
        MODES.translate(self.key(), lang)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBound {
    Min,
    Max,
}

/// Unit size window in square metres.
///
/// The current bounds are not clamped to the global ones or to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeRange {
    pub global_min: i64,
    pub global_max: i64,
    pub current_min: i64,
    pub current_max: i64,
}

impl SizeRange {
    #[must_use]
    pub const fn new(global_min: i64, global_max: i64) -> Self {
        Self {
            global_min,
            global_max,
            current_min: global_min,
            current_max: global_max,
        }
    }

    #[must_use]
    pub const fn is_inverted(&self) -> bool {
        self.current_min > self.current_max
    }

    #[must_use]
    pub fn admits(&self, unit: &Unit) -> bool {
        unit.overlaps(self.current_min as f64, self.current_max as f64)
    }

    #[must_use]
    pub const fn with_bound(self, which: SizeBound, value: i64) -> Self {
        match which {
            SizeBound::Min => Self {
                current_min: value,
                ..self
            },
            SizeBound::Max => Self {
                current_max: value,
                ..self
            },
        }
    }
}

/// Everything the user has selected. Replaced wholesale on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub selected_projects: BTreeSet<String>,
    /// Empty means no restriction.
    pub selected_categories: BTreeSet<String>,
    /// Empty means no restriction.
    pub selected_sub_categories: BTreeSet<String>,
    /// Empty means no restriction.
    pub selected_facilities: BTreeSet<String>,
    pub size_range: SizeRange,
    pub analysis_mode: AnalysisMode,
    pub language: Language,
    /// Hover link between charts; never used for filtering.
    pub highlighted_category: Option<String>,
}

impl FilterState {
    /// Defaults: every project selected, nothing else restricted, size window
    /// spanning the whole dataset.
    #[must_use]
    pub fn new(dataset: &Dataset) -> Self {
        let (min, max) = dataset.size_bounds();
        Self {
            selected_projects: dataset.project_names().map(str::to_string).collect(),
            selected_categories: BTreeSet::new(),
            selected_sub_categories: BTreeSet::new(),
            selected_facilities: BTreeSet::new(),
            size_range: SizeRange::new(min, max),
            analysis_mode: AnalysisMode::default(),
            language: Language::default(),
            highlighted_category: None,
        }
    }
}

/// Lenient integer parse for size inputs.
///
/// Leading whitespace is skipped, an optional sign and the leading run of
/// ASCII digits are read, and anything after them is ignored. No digits, or
/// a value that does not fit in `i64`, gives `0`. So `"42abc"` is 42 and
/// `"abc"` is 0.
#[must_use]
pub fn parse_size_bound(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let digits = &rest[..digits_len];

    match digits.parse::<i64>() {
        Ok(value) if negative => -value,
        Ok(value) => value,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_plain_and_signed() {
        assert_eq!(parse_size_bound("45"), 45);
        assert_eq!(parse_size_bound("  30"), 30);
        assert_eq!(parse_size_bound("-5"), -5);
        assert_eq!(parse_size_bound("+12"), 12);
    }

    #[test]
    fn parse_ignores_trailing_garbage() {
        assert_eq!(parse_size_bound("42abc"), 42);
        assert_eq!(parse_size_bound("35.7"), 35);
    }

    #[test]
    fn parse_failure_is_zero() {
        assert_eq!(parse_size_bound(""), 0);
        assert_eq!(parse_size_bound("abc"), 0);
        assert_eq!(parse_size_bound("-"), 0);
        assert_eq!(parse_size_bound("99999999999999999999999"), 0);
    }

    #[test]
    fn parse_reads_decimal_digits_only() {
        assert_eq!(parse_size_bound("0x1A"), 0);
        assert_eq!(parse_size_bound("1e3"), 1);
        assert_eq!(parse_size_bound("- 5"), 0);
        assert_eq!(parse_size_bound("9223372036854775807"), i64::MAX);
    }

    #[test]
    fn defaults_from_dataset() {
        let dataset = Dataset::builtin();
        let state = FilterState::new(&dataset);
        assert_eq!(state.selected_projects.len(), 3);
        assert!(state.selected_categories.is_empty());
        assert_eq!(state.size_range, SizeRange::new(26, 128));
        assert_eq!(state.analysis_mode, AnalysisMode::Facilities);
        assert_eq!(state.language, Language::En);
        assert_eq!(state.highlighted_category, None);
    }

    #[test]
    fn with_bound_does_not_clamp() {
        let range = SizeRange::new(26, 128).with_bound(SizeBound::Min, 500);
        assert_eq!(range.current_min, 500);
        assert_eq!(range.current_max, 128);
        assert!(range.is_inverted());
    }
}
