//! Plain-text summary of the active analysis mode.

use crate::analysis::{
    average_size_by_category, lifestyle_profiles, score_view, size_distribution,
    strategic_points, FacilitiesMatrix, Persona, RadarAxis, SetAnalysis,
};
use crate::filter::{AnalysisMode, FilterState, View};
use crate::i18n::{Dictionary, Language, LocalizedText, CATEGORIES, FACILITIES};
use crate::model::seed::SERENITY;
use crate::model::{Dataset, UnitRange};
use std::fmt::{self, Formatter};

const SET_ANALYSIS: LocalizedText = LocalizedText::new("Set Analysis", "Анализ множеств");
const MATRIX: LocalizedText = LocalizedText::new("Comparison Matrix", "Матрица сравнения");
const AVG_SIZE: LocalizedText =
    LocalizedText::new("Average Unit Size (sqm)", "Средняя площадь (м²)");
const SIZE_DIST: LocalizedText =
    LocalizedText::new("Unit Size Distribution", "Распределение площадей");
const METRICS: LocalizedText = LocalizedText::new("Master Plan Metrics", "Показатели генплана");
const RADAR: LocalizedText = LocalizedText::new("Lifestyle Profile", "Профиль образа жизни");
const STRATEGIC: LocalizedText =
    LocalizedText::new("Strategic Positioning", "Стратегическое позиционирование");
const PERSONAS: LocalizedText = LocalizedText::new("Persona Fit", "Соответствие персонам");
const QUADRANT: LocalizedText =
    LocalizedText::new("Investment vs Livability", "Инвестиции и комфорт");
const FLOOR_PLANS: LocalizedText = LocalizedText::new("Floor Plans", "Планировки этажей");
const NO_DATA: LocalizedText = LocalizedText::new("(no data)", "(нет данных)");

/// Plain-text summary of one filter snapshot.
pub struct Report<'a> {
    dataset: &'a Dataset,
    state: &'a FilterState,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(dataset: &'a Dataset, state: &'a FilterState) -> Self {
        Self { dataset, state }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let view = View::derive(self.dataset, self.state);
        let highlighted = self.state.highlighted_category.as_deref();
        write_report(f, self.dataset, &view, highlighted, self.state.language)
    }
}

/// Renders the view derived from `state` for the CLI.
#[must_use]
pub fn render(dataset: &Dataset, state: &FilterState) -> String {
    Report::new(dataset, state).to_string()
}

fn write_report(
    out: &mut Formatter<'_>,
    dataset: &Dataset,
    view: &View<'_>,
    highlighted: Option<&str>,
    lang: Language,
) -> fmt::Result {
    writeln!(
        out,
        "EstateScan | {} | {} projects | {} units",
        view.mode.label(lang), view.projects.len(), view.units.len()
    )?;

    match view.mode {
        AnalysisMode::Facilities => {
            write_sets(out, view, &FACILITIES, lang)?;
            write_matrix(out, view, lang)
        }
        AnalysisMode::Units => {
            write_sets(out, view, &CATEGORIES, lang)?;
            write_sizes(out, view, highlighted, lang)
        }
        AnalysisMode::Masterplan => write_masterplan(out, view, lang),
        AnalysisMode::Audience => write_audience(out, view, lang),
        AnalysisMode::Floorplans => write_floor_plans(out, dataset, view, lang),
    }
}

fn section(out: &mut Formatter<'_>, title: LocalizedText, lang: Language) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "== {} ==", title.get(lang))
}

fn write_sets(
    out: &mut Formatter<'_>,
    view: &View<'_>,
    dictionary: &Dictionary,
    lang: Language,
) -> fmt::Result {
    section(out, SET_ANALYSIS, lang)?;
    let Some(analysis) = SetAnalysis::from_inputs(&view.set_inputs) else {
        return writeln!(out, "{}", NO_DATA.get(lang));
    };
    for region in analysis.regions().filter(|r| !r.is_empty()) {
        let items: Vec<&str> = region
            .items
            .iter()
            .map(|item| dictionary.translate(item, lang))
            .collect();
        writeln!(
            out,
            "{} ({}): {}",
            analysis.region_label(region, lang), region.len(), items.join(", ")
        )?;
    }
    Ok(())
}

fn write_matrix(out: &mut Formatter<'_>, view: &View<'_>, lang: Language) -> fmt::Result {
    section(out, MATRIX, lang)?;
    let matrix = FacilitiesMatrix::build(&view.projects, lang);
    writeln!(out, "{:<28}{}", "", matrix.projects.join("  "))?;
    for group in &matrix.groups {
        writeln!(out, "[{}]", group.label)?;
        for row in &group.rows {
            let marks: Vec<&str> = row
                .present
                .iter()
                .map(|&present| if present { "yes" } else { "-" })
                .collect();
            writeln!(out, "  {:<26}{}", row.label, marks.join("  "))?;
        }
    }
    Ok(())
}

fn write_sizes(
    out: &mut Formatter<'_>,
    view: &View<'_>,
    highlighted: Option<&str>,
    lang: Language,
) -> fmt::Result {
    let names: Vec<&str> = view.projects.iter().map(|p| p.name.as_str()).collect();

    section(out, AVG_SIZE, lang)?;
    let chart = average_size_by_category(&view.units, &names, Some(SERENITY), lang);
    writeln!(out, "{:<24}{}", "", names.join("  "))?;
    for row in &chart.rows {
        let values: Vec<String> = row.averages.iter().map(|v| format!("{v:.1}")).collect();
        let marker = if highlighted == Some(row.category.as_str()) {
            '>'
        } else {
            ' '
        };
        writeln!(out, "{marker}{:<23}{}", row.display, values.join("  "))?;
    }

    section(out, SIZE_DIST, lang)?;
    for bin in size_distribution(&view.units, &names, lang) {
        let counts: Vec<String> = bin.counts.iter().map(ToString::to_string).collect();
        writeln!(out, "{:<16}{}", bin.range, counts.join("  "))?;
    }
    Ok(())
}

fn write_masterplan(out: &mut Formatter<'_>, view: &View<'_>, lang: Language) -> fmt::Result {
    section(out, METRICS, lang)?;
    for project in &view.projects {
        let plan = &project.master_plan;
        let zones: Vec<&str> = plan.distinct_zones.iter().map(|z| z.get(lang)).collect();
        writeln!(
            out,
            "{}: {} units/rai, {}% green, {} sqm common/unit, {} facilities/bldg",
            project.name,
            plan.units_per_rai,
            plan.green_space_ratio,
            plan.common_area_per_unit,
            plan.facility_density
        )?;
        writeln!(out, "  {}", zones.join(" | "))?;
    }

    section(out, RADAR, lang)?;
    for profile in lifestyle_profiles(&view.projects) {
        let axes: Vec<String> = RadarAxis::ALL
            .iter()
            .map(|&axis| format!("{} {}", axis.label(lang), profile.get(axis)))
            .collect();
        writeln!(out, "{}: {}", profile.project, axes.join(", "))?;
    }

    section(out, STRATEGIC, lang)?;
    for point in strategic_points(&view.projects) {
        writeln!(
            out,
            "{}: density {}, common {} sqm, green {}%",
            point.project, point.density, point.common_area_per_unit, point.green_space_ratio
        )?;
    }
    Ok(())
}

fn write_audience(out: &mut Formatter<'_>, view: &View<'_>, lang: Language) -> fmt::Result {
    let scores = score_view(view, lang);

    section(out, PERSONAS, lang)?;
    for persona in Persona::ALL {
        writeln!(out, "[{}]", persona.label(lang))?;
        for project in &scores {
            let score = project.score(persona);
            writeln!(out, "  {:<10}{score:>3}", project.project)?;
            for reason in project.top_reasons(persona, 2, lang) {
                writeln!(out, "    - {reason}")?;
            }
        }
    }

    section(out, QUADRANT, lang)?;
    for project in &scores {
        writeln!(
            out,
            "{}: {} / {} -> {}",
            project.project,
            project.investment_potential(),
            project.livability(),
            project.quadrant().label(lang)
        )?;
        for reason in project.livability_reasons(2) {
            writeln!(out, "    - {reason}")?;
        }
    }
    Ok(())
}

fn write_floor_plans(
    out: &mut Formatter<'_>,
    dataset: &Dataset,
    view: &View<'_>,
    lang: Language,
) -> fmt::Result {
    section(out, FLOOR_PLANS, lang)?;
    for project in &view.projects {
        let Some(plan) = dataset.floor_plan(&project.name) else {
            writeln!(out, "{}: {}", project.name, NO_DATA.get(lang))?;
            continue;
        };
        writeln!(out, "{}", project.name)?;
        for building in &plan.buildings {
            let total = building.total_units();
            writeln!(out, "  {} ({total} units)", building.name)?;
            for floor in &building.floors {
                let ranges: Vec<String> = floor.unit_ranges.iter().map(UnitRange::label).collect();
                write!(
                    out,
                    "    {:<10}{:>3}  {}",
                    floor.label, floor.unit_count, ranges.join(", ")
                )?;
                if let Some(notes) = &floor.notes {
                    write!(out, "  ({})", notes.get(lang))?;
                }
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
