//! Weighted-rule interpreter shared by persona and lifestyle scoring.
//!
//! A score is an ordered list of [`Rule`]s. Each rule that fires adds a fixed
//! (or scaled) number of points, and may add a reason. Evaluation order is
//! the order reasons are reported in.

use crate::i18n::LocalizedText;
use crate::model::{Project, Unit};

/// Upper bound of `max_size` for a compact unit (exclusive).
pub const COMPACT_MAX_SQM: f64 = 35.0;
/// Lower bound of `max_size` for a spacious unit (exclusive).
pub const SPACIOUS_MIN_SQM: f64 = 55.0;

/// A number read off a project or its unit mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Units per rai.
    Density,
    GreenSpaceRatio,
    CommonAreaPerUnit,
    /// Share of filtered units with `max_size < 35`.
    CompactRatio,
    /// Share of filtered units with `max_size > 55`.
    SpaciousRatio,
    /// `max(0, (110 - density) / 1.1)`, roughly 0..100 with lower density higher.
    DensityHeadroom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    Above(f64),
    Below(f64),
}

impl Comparison {
    #[must_use]
    pub fn holds(self, value: f64) -> bool {
        match self {
            Self::Above(limit) => value > limit,
            Self::Below(limit) => value < limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub when: Comparison,
    pub points: f64,
    pub reason: Option<LocalizedText>,
}

/// What a [`Rule::Threshold`] contributes when no tier matches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Otherwise {
    Nothing,
    /// `metric * factor`, no reason.
    Scaled { factor: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Any facility tag contains any keyword, ignoring case.
    Facility {
        keywords: &'static [&'static str],
        points: f64,
        reason: Option<LocalizedText>,
    },
    /// First matching tier wins.
    Threshold {
        metric: Metric,
        tiers: &'static [Tier],
        otherwise: Otherwise,
    },
    /// `min(cap, metric * factor)`.
    Scaled {
        metric: Metric,
        factor: f64,
        cap: f64,
    },
    /// A distinct zone's English label contains `keyword`, ignoring case.
    ZoneMention {
        keyword: &'static str,
        points: f64,
        reason: Option<LocalizedText>,
    },
    /// With a matching facility: `points` and `reason` when a layout feature
    /// mentions one of `layout` verbatim, `fallback` otherwise.
    FacilityWithLayout {
        keywords: &'static [&'static str],
        layout: &'static [&'static str],
        points: f64,
        reason: Option<LocalizedText>,
        fallback: f64,
    },
    /// First unit type containing a fragment wins.
    UnitTypeOffered {
        tiers: &'static [(&'static str, f64)],
    },
    /// Location knowledge that the data model has no field for.
    ProjectBonus {
        project: &'static str,
        points: f64,
        reason: Option<LocalizedText>,
    },
}

/// A project plus the ratios of its currently filtered unit mix.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    pub project: &'a Project,
    pub compact_ratio: f64,
    pub spacious_ratio: f64,
}

impl<'a> ScoreInputs<'a> {
    /// Ratios are over `units.len()`, or over 1 when no units survive the
    /// filters so they come out as 0.
    #[must_use]
    pub fn new(project: &'a Project, units: &[&Unit]) -> Self {
        let total = units.len().max(1) as f64;
        let compact = units.iter().filter(|u| u.max_size < COMPACT_MAX_SQM).count();
        let spacious = units.iter().filter(|u| u.max_size > SPACIOUS_MIN_SQM).count();
        Self {
            project,
            compact_ratio: compact as f64 / total,
            spacious_ratio: spacious as f64 / total,
        }
    }

    /// Inputs for scores that only read static project data.
    #[must_use]
    pub fn project_only(project: &'a Project) -> Self {
        Self {
            project,
            compact_ratio: 0.0,
            spacious_ratio: 0.0,
        }
    }

    #[must_use]
    pub fn metric(&self, metric: Metric) -> f64 {
        let plan = &self.project.master_plan;
        match metric {
            Metric::Density => plan.units_per_rai,
            Metric::GreenSpaceRatio => plan.green_space_ratio,
            Metric::CommonAreaPerUnit => plan.common_area_per_unit,
            Metric::CompactRatio => self.compact_ratio,
            Metric::SpaciousRatio => self.spacious_ratio,
            Metric::DensityHeadroom => ((110.0 - plan.units_per_rai) / 1.1).max(0.0),
        }
    }
}

/// Running total and the reasons collected on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    pub points: f64,
    pub reasons: Vec<LocalizedText>,
}

impl Tally {
    fn add(&mut self, points: f64, reason: Option<LocalizedText>) {
        self.points += points;
        self.reasons.extend(reason);
    }

    /// Rounded half-up and clamped to `0..=100`.
    #[must_use]
    pub fn score(&self) -> u8 {
        clamp_score(self.points)
    }
}

/// Runs `rules` in order against `inputs`.
#[must_use]
pub fn evaluate(rules: &[Rule], inputs: &ScoreInputs<'_>) -> Tally {
    let project = inputs.project;
    let mut tally = Tally::default();

    for rule in rules {
        match *rule {
            Rule::Facility {
                keywords,
                points,
                reason,
            } => {
                if project.has_facility_matching(keywords) {
                    tally.add(points, reason);
                }
            }
            Rule::Threshold {
                metric,
                tiers,
                otherwise,
            } => {
                let value = inputs.metric(metric);
                match tiers.iter().find(|t| t.when.holds(value)) {
                    Some(tier) => tally.add(tier.points, tier.reason),
                    None => match otherwise {
                        Otherwise::Nothing => {}
                        Otherwise::Scaled { factor } => tally.add(value * factor, None),
                    },
                }
            }
            Rule::Scaled {
                metric,
                factor,
                cap,
            } => tally.add((inputs.metric(metric) * factor).min(cap), None),
            Rule::ZoneMention {
                keyword,
                points,
                reason,
            } => {
                if project.has_zone_matching(keyword) {
                    tally.add(points, reason);
                }
            }
            Rule::FacilityWithLayout {
                keywords,
                layout,
                points,
                reason,
                fallback,
            } => {
                if project.has_facility_matching(keywords) {
                    if project.layout_mentions(layout) {
                        tally.add(points, reason);
                    } else {
                        tally.add(fallback, None);
                    }
                }
            }
            Rule::UnitTypeOffered { tiers } => {
                if let Some((_, points)) = tiers.iter().find(|(t, _)| project.offers_unit_type(t)) {
                    tally.add(*points, None);
                }
            }
            Rule::ProjectBonus {
                project: name,
                points,
                reason,
            } => {
                if project.name == name {
                    tally.add(points, reason);
                }
            }
        }
    }
    tally
}

/// Half-up rounding, matching how the scores have always been displayed.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[must_use]
pub fn clamp_score(value: f64) -> u8 {
    round_half_up(value).clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed::{CORALINA, SIERRA};
    use crate::model::Dataset;
    use pretty_assertions::assert_eq;

    const WHY: LocalizedText = LocalizedText::new("why", "почему");

    #[test]
    fn rounding_is_half_up() {
        assert_eq!(round_half_up(67.5), 68.0);
        assert_eq!(round_half_up(92.222), 92.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp_score(109.0), 100);
        assert_eq!(clamp_score(-10.0), 0);
        assert_eq!(clamp_score(45.4), 45);
    }

    #[test]
    fn ratios_over_filtered_units() {
        let dataset = Dataset::builtin();
        let project = dataset.project(SIERRA).unwrap();
        let inputs = ScoreInputs::new(project, &dataset.units_of(SIERRA));
        assert!((inputs.compact_ratio - 5.0 / 9.0).abs() < 1e-9);
        assert!((inputs.spacious_ratio - 2.0 / 9.0).abs() < 1e-9);

        let empty = ScoreInputs::new(project, &[]);
        assert_eq!((empty.compact_ratio, empty.spacious_ratio), (0.0, 0.0));
    }

    #[test]
    fn threshold_tiers_and_fallback() {
        let dataset = Dataset::builtin();
        let coralina = dataset.project(CORALINA).unwrap();
        let rules = [Rule::Threshold {
            metric: Metric::CompactRatio,
            tiers: &[Tier {
                when: Comparison::Above(0.6),
                points: 30.0,
                reason: Some(WHY),
            }],
            otherwise: Otherwise::Scaled { factor: 40.0 },
        }];

        let high = ScoreInputs {
            compact_ratio: 0.7,
            ..ScoreInputs::project_only(coralina)
        };
        let tally = evaluate(&rules, &high);
        assert_eq!(tally.points, 30.0);
        assert_eq!(tally.reasons, vec![WHY]);

        let low = ScoreInputs {
            compact_ratio: 0.25,
            ..ScoreInputs::project_only(coralina)
        };
        let tally = evaluate(&rules, &low);
        assert_eq!(tally.points, 10.0);
        assert!(tally.reasons.is_empty());
    }

    #[test]
    fn reasons_follow_rule_order() {
        let dataset = Dataset::builtin();
        let sierra = dataset.project(SIERRA).unwrap();
        let second = LocalizedText::new("second", "второй");
        let rules = [
            Rule::ProjectBonus {
                project: SIERRA,
                points: 5.0,
                reason: Some(WHY),
            },
            Rule::Facility {
                keywords: &["SHUTTLE"],
                points: 1.0,
                reason: Some(second),
            },
            Rule::Facility {
                keywords: &["helipad"],
                points: 50.0,
                reason: None,
            },
        ];
        let tally = evaluate(&rules, &ScoreInputs::project_only(sierra));
        assert_eq!(tally.points, 6.0);
        assert_eq!(tally.reasons, vec![WHY, second]);
    }

    #[test]
    fn layout_mention_is_case_sensitive_per_needle() {
        let dataset = Dataset::builtin();
        let sierra = dataset.project(SIERRA).unwrap();
        let rule = [Rule::FacilityWithLayout {
            keywords: &["pool"],
            layout: &["lagoon", "Lagoon"],
            points: 15.0,
            reason: Some(WHY),
            fallback: 5.0,
        }];
        let points = |p: &Project| evaluate(&rule, &ScoreInputs::project_only(p)).points;
        assert_eq!(points(sierra), 5.0);
        assert_eq!(points(dataset.project(CORALINA).unwrap()), 15.0);
    }
}
