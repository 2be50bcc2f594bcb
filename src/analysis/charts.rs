//! Tabular series behind the comparison charts.
//!
//! Every series takes its project columns from the caller, so a filtered-out
//! project simply has no column.

use super::rules::round_half_up;
use crate::i18n::{Language, CATEGORIES};
use crate::model::{Project, Unit};
use indexmap::IndexSet;
use serde::Serialize;

/// Mean `max_size` per project for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySizeRow {
    pub category: String,
    pub display: String,
    /// Aligned with [`CategorySizeChart::projects`]; 0 when the project has
    /// no unit in this category.
    pub averages: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySizeChart {
    pub projects: Vec<String>,
    pub rows: Vec<CategorySizeRow>,
}

/// Average unit size per category, one decimal place.
///
/// Categories appear in first-seen order, then are stably sorted ascending
/// by the `sort_by` project's column when that project is one of `projects`.
#[must_use]
pub fn average_size_by_category(
    units: &[&Unit],
    projects: &[&str],
    sort_by: Option<&str>,
    lang: Language,
) -> CategorySizeChart {
    let categories: IndexSet<&str> = units.iter().map(|u| u.category.as_str()).collect();

    let mut rows: Vec<CategorySizeRow> = categories
        .into_iter()
        .map(|category| CategorySizeRow {
            category: category.to_string(),
            display: CATEGORIES.translate(category, lang).to_string(),
            averages: projects
                .iter()
                .map(|project| {
                    let sizes: Vec<f64> = units
                        .iter()
                        .filter(|u| u.project == *project && u.category == category)
                        .map(|u| u.max_size)
                        .collect();
                    if sizes.is_empty() {
                        0.0
                    } else {
                        one_decimal(sizes.iter().sum::<f64>() / sizes.len() as f64)
                    }
                })
                .collect(),
        })
        .collect();

    if let Some(column) = sort_by.and_then(|name| projects.iter().position(|p| *p == name)) {
        rows.sort_by(|a, b| a.averages[column].total_cmp(&b.averages[column]));
    }

    CategorySizeChart {
        projects: projects.iter().map(|p| (*p).to_string()).collect(),
        rows,
    }
}

fn one_decimal(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// A closed `max_size` interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBin {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

impl SizeBin {
    const fn new(label: &'static str, min: f64, max: f64) -> Self {
        Self { label, min, max }
    }

    #[must_use]
    pub fn contains(&self, unit: &Unit) -> bool {
        unit.max_size >= self.min && unit.max_size <= self.max
    }

    #[must_use]
    pub fn display(&self, lang: Language) -> String {
        let unit = match lang {
            Language::En => "sqm",
            Language::Ru => "м²",
        };
        format!("{} {unit}", self.label)
    }
}

/// Bin edges are inclusive and leave hairline gaps (29.99..30, 45..45.01).
pub const SIZE_BINS: [SizeBin; 5] = [
    SizeBin::new("< 30", 0.0, 29.99),
    SizeBin::new("30 - 45", 30.0, 45.0),
    SizeBin::new("45 - 60", 45.01, 60.0),
    SizeBin::new("60 - 90", 60.01, 90.0),
    SizeBin::new("> 90", 90.01, 9999.0),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinCount {
    pub range: String,
    /// One count per requested project, in order.
    pub counts: Vec<usize>,
}

/// Unit counts per size bin and project.
#[must_use]
pub fn size_distribution(units: &[&Unit], projects: &[&str], lang: Language) -> Vec<BinCount> {
    SIZE_BINS
        .iter()
        .map(|bin| BinCount {
            range: bin.display(lang),
            counts: projects
                .iter()
                .map(|project| {
                    units
                        .iter()
                        .filter(|u| u.project == *project && bin.contains(u))
                        .count()
                })
                .collect(),
        })
        .collect()
}

/// Density against common area, sized by green space.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicPoint {
    pub project: String,
    pub density: f64,
    pub common_area_per_unit: f64,
    pub green_space_ratio: f64,
}

#[must_use]
pub fn strategic_points(projects: &[&Project]) -> Vec<StrategicPoint> {
    projects
        .iter()
        .map(|p| StrategicPoint {
            project: p.name.clone(),
            density: p.master_plan.units_per_rai,
            common_area_per_unit: p.master_plan.common_area_per_unit,
            green_space_ratio: p.master_plan.green_space_ratio,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed::{CORALINA, SERENITY, SIERRA};
    use crate::model::Dataset;
    use pretty_assertions::assert_eq;

    const ALL: [&str; 3] = [CORALINA, SERENITY, SIERRA];

    fn row<'a>(chart: &'a CategorySizeChart, category: &str) -> &'a CategorySizeRow {
        chart.rows.iter().find(|r| r.category == category).unwrap()
    }

    #[test]
    fn averages_sorted_by_reference_column() {
        let dataset = Dataset::builtin();
        let units: Vec<&Unit> = dataset.units.iter().collect();
        let chart = average_size_by_category(&units, &ALL, Some(SERENITY), Language::En);

        let order: Vec<&str> = chart.rows.iter().map(|r| r.category.as_str()).collect();
        // Serenity has no Plus or Penthouse units, so those sort first in
        // first-seen order.
        assert_eq!(
            order,
            vec![
                "1 Bedroom Plus",
                "2 Bedroom Plus",
                "3 Bedroom Penthouse",
                "1 Bedroom",
                "2 Bedroom",
                "3 Bedroom",
            ]
        );

        // Coralina: (26*4 + 27 + 31*2 + 35 + 33 + 30) / 10 = 29.1
        assert_eq!(row(&chart, "1 Bedroom").averages, vec![29.1, 33.0, 29.7]);
        let penthouse = row(&chart, "3 Bedroom Penthouse");
        assert_eq!(penthouse.averages, vec![128.0, 0.0, 0.0]);
    }

    #[test]
    fn unknown_reference_keeps_first_seen_order() {
        let dataset = Dataset::builtin();
        let units: Vec<&Unit> = dataset.units.iter().collect();
        let chart = average_size_by_category(&units, &[CORALINA], Some("Atlantis"), Language::Ru);
        assert_eq!(chart.rows[0].category, "1 Bedroom");
        assert_eq!(chart.rows[0].display, "1 Спальня");
        assert_eq!(chart.projects, vec![CORALINA]);
    }

    #[test]
    fn distribution_counts() {
        let dataset = Dataset::builtin();
        let units: Vec<&Unit> = dataset.units.iter().collect();
        let bins = size_distribution(&units, &ALL, Language::En);

        assert_eq!(bins[0].range, "< 30 sqm");
        let counts: Vec<Vec<usize>> = bins.iter().map(|b| b.counts.clone()).collect();
        assert_eq!(
            counts,
            vec![
                vec![5, 1, 2],
                vec![5, 2, 4],
                vec![1, 1, 3],
                vec![1, 2, 0],
                vec![2, 2, 0],
            ]
        );
        let total: usize = counts.iter().flatten().sum();
        assert_eq!(total, dataset.units.len());
    }

    #[test]
    fn bins_leave_gaps() {
        let mut unit = Dataset::builtin().units[0].clone();
        unit.max_size = 29.995;
        assert!(SIZE_BINS.iter().all(|bin| !bin.contains(&unit)));
        assert_eq!(SIZE_BINS[4].display(Language::Ru), "> 90 м²");
    }

    #[test]
    fn strategic_points_follow_projects() {
        let dataset = Dataset::builtin();
        let sierra = dataset.project(SIERRA).unwrap();
        assert_eq!(
            strategic_points(&[sierra]),
            vec![StrategicPoint {
                project: SIERRA.to_string(),
                density: 104.6,
                common_area_per_unit: 3.4,
                green_space_ratio: 25.2,
            }]
        );
    }
}
