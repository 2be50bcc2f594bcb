//! Persona fit scoring.
//!
//! Four buyer personas are scored 0-100 per project from its facilities,
//! master-plan metrics, and the mix of its currently filtered units. Every
//! rule that fires may attach a localized reason.

use super::rules::{clamp_score, evaluate, Comparison, Metric, Otherwise, Rule, ScoreInputs, Tier};
use crate::filter::View;
use crate::i18n::{self, Language, LocalizedText};
use crate::model::seed::{CORALINA, SIERRA};
use crate::model::{Project, Unit};
use serde::Serialize;

/// Both quadrant axes split at this score; a score equal to it counts as high.
pub const QUADRANT_THRESHOLD: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Investor,
    Nomad,
    Family,
    Retiree,
}

impl Persona {
    /// Display order.
    pub const ALL: [Self; 4] = [Self::Investor, Self::Nomad, Self::Family, Self::Retiree];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Investor => "investor",
            Self::Nomad => "nomad",
            Self::Family => "family",
            Self::Retiree => "retiree",
        }
    }

    #[must_use]
    pub fn label(self, lang: Language) -> &'static str {
        i18n::PERSONAS
            .lookup(self.key())
            .map_or(self.key(), |text| text.get(lang))
    }

    #[must_use]
    pub const fn rules(self) -> &'static [Rule] {
        match self {
            Self::Investor => INVESTOR,
            Self::Nomad => NOMAD,
            Self::Family => FAMILY,
            Self::Retiree => RETIREE,
        }
    }
}

// Every reason slot in the rule tables is optional.
#[allow(clippy::unnecessary_wraps)]
const fn because(en: &'static str, ru: &'static str) -> Option<LocalizedText> {
    Some(LocalizedText::new(en, ru))
}

const INVESTOR: &[Rule] = &[
    Rule::Threshold {
        metric: Metric::Density,
        tiers: &[
            Tier {
                when: Comparison::Above(80.0),
                points: 30.0,
                reason: because(
                    "High unit density maximizes yield potential",
                    "Высокая плотность максимизирует доходность",
                ),
            },
            Tier {
                when: Comparison::Above(50.0),
                points: 20.0,
                reason: None,
            },
        ],
        otherwise: Otherwise::Nothing,
    },
    Rule::Threshold {
        metric: Metric::CompactRatio,
        tiers: &[Tier {
            when: Comparison::Above(0.6),
            points: 30.0,
            reason: because(
                "Inventory optimized for short-term rental",
                "Инвентарь оптимизирован под краткосрочную аренду",
            ),
        }],
        otherwise: Otherwise::Scaled { factor: 40.0 },
    },
    Rule::Facility {
        keywords: &["shuttle"],
        points: 15.0,
        reason: because(
            "Shuttle Service (Vital for beach tourists)",
            "Трансфер (важно для туристов)",
        ),
    },
    Rule::Facility {
        keywords: &["laundry"],
        points: 10.0,
        reason: because("On-site Laundry Service", "Прачечная на территории"),
    },
    Rule::Threshold {
        metric: Metric::CommonAreaPerUnit,
        tiers: &[Tier {
            when: Comparison::Below(5.0),
            points: 15.0,
            reason: because(
                "Low common area maintenance cost",
                "Низкие расходы на содержание общих зон",
            ),
        }],
        otherwise: Otherwise::Nothing,
    },
];

const FAMILY: &[Rule] = &[
    Rule::Facility {
        keywords: &["kid", "game", "playground"],
        points: 25.0,
        reason: because(
            "Dedicated Kids Zone / Playground",
            "Детская зона / Игровая площадка",
        ),
    },
    Rule::Facility {
        keywords: &["theater", "cinema"],
        points: 10.0,
        reason: because(
            "Family Theater / Entertainment",
            "Семейный кинотеатр / Развлечения",
        ),
    },
    Rule::FacilityWithLayout {
        keywords: &["lagoon", "pool"],
        layout: &["lagoon", "Lagoon"],
        points: 15.0,
        reason: because(
            "Resort-style Lagoon (Safe for kids)",
            "Бассейн-лагуна (безопасно для детей)",
        ),
        fallback: 5.0,
    },
    Rule::Threshold {
        metric: Metric::SpaciousRatio,
        tiers: &[
            Tier {
                when: Comparison::Above(0.2),
                points: 30.0,
                reason: because(
                    "Strong inventory of 2-Bedroom+ units",
                    "Большой выбор 2-спальных+ юнитов",
                ),
            },
            Tier {
                when: Comparison::Above(0.1),
                points: 15.0,
                reason: None,
            },
        ],
        otherwise: Otherwise::Nothing,
    },
    Rule::Threshold {
        metric: Metric::GreenSpaceRatio,
        tiers: &[Tier {
            when: Comparison::Above(20.0),
            points: 20.0,
            reason: because("Expansive green space (>20%)", "Обширное озеленение (>20%)"),
        }],
        otherwise: Otherwise::Nothing,
    },
];

const NOMAD: &[Rule] = &[
    Rule::Facility {
        keywords: &["coworking", "co-working", "meeting"],
        points: 35.0,
        reason: because(
            "Dedicated Co-working / Meeting Rooms",
            "Коворкинг и переговорные",
        ),
    },
    Rule::Facility {
        keywords: &["sky", "lounge", "bar"],
        points: 15.0,
        reason: because("Sky Lounge / Social Areas", "Скай-лаунж / Зоны для общения"),
    },
    Rule::Facility {
        keywords: &["game", "arcade"],
        points: 10.0,
        reason: because("Game Room for downtime", "Игровая комната для отдыха"),
    },
    Rule::Facility {
        keywords: &["gym", "fitness"],
        points: 15.0,
        reason: None,
    },
    Rule::ProjectBonus {
        project: SIERRA,
        points: 25.0,
        reason: because(
            "Boat Avenue Location (Lifestyle Hub)",
            "Локация Boat Avenue (Центр жизни)",
        ),
    },
    Rule::ProjectBonus {
        project: CORALINA,
        points: 10.0,
        reason: because(
            "Kamala: Balance of beach & town",
            "Камала: Баланс пляжа и города",
        ),
    },
];

const RETIREE: &[Rule] = &[
    Rule::Facility {
        keywords: &["onsen", "spa", "steam", "sauna"],
        points: 30.0,
        reason: because(
            "Advanced Wellness (Onsen/Sauna)",
            "Продвинутый велнес (Онсэн/Сауна)",
        ),
    },
    Rule::Facility {
        keywords: &["library", "reading"],
        points: 15.0,
        reason: because("Library / Reading Zones", "Библиотека / Зоны для чтения"),
    },
    Rule::ZoneMention {
        keyword: "quiet",
        points: 15.0,
        reason: because("Designated Quiet Zones", "Выделенные тихие зоны"),
    },
    Rule::Threshold {
        metric: Metric::Density,
        tiers: &[
            Tier {
                when: Comparison::Below(55.0),
                points: 25.0,
                reason: because(
                    "Low density (<55 units/rai)",
                    "Низкая плотность (<55 юнитов/рай)",
                ),
            },
            Tier {
                when: Comparison::Above(90.0),
                points: -10.0,
                reason: None,
            },
        ],
        otherwise: Otherwise::Nothing,
    },
    Rule::Scaled {
        metric: Metric::GreenSpaceRatio,
        factor: 1.5,
        cap: 25.0,
    },
];

/// Which corner of the investment/livability plane a project lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// High investment, low livability.
    CashCow,
    /// High on both.
    Unicorn,
    /// Low investment, high livability.
    LuxuryResidence,
    Niche,
}

impl Quadrant {
    #[must_use]
    pub fn classify(investment: u8, livability: u8) -> Self {
        match (
            investment >= QUADRANT_THRESHOLD,
            livability >= QUADRANT_THRESHOLD,
        ) {
            (true, false) => Self::CashCow,
            (true, true) => Self::Unicorn,
            (false, true) => Self::LuxuryResidence,
            (false, false) => Self::Niche,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CashCow => "cash_cow",
            Self::Unicorn => "unicorn",
            Self::LuxuryResidence => "luxury_residence",
            Self::Niche => "niche",
        }
    }

    #[must_use]
    pub fn label(self, lang: Language) -> &'static str {
        i18n::QUADRANTS
            .lookup(self.key())
            .map_or(self.key(), |text| text.get(lang))
    }
}

/// Persona scores for one project, with the reasons in rule order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonaScores {
    pub project: String,
    pub investor: u8,
    pub nomad: u8,
    pub family: u8,
    pub retiree: u8,
    pub reasons: PersonaReasons,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonaReasons {
    pub investor: Vec<String>,
    pub nomad: Vec<String>,
    pub family: Vec<String>,
    pub retiree: Vec<String>,
}

impl PersonaReasons {
    #[must_use]
    pub fn of(&self, persona: Persona) -> &[String] {
        match persona {
            Persona::Investor => &self.investor,
            Persona::Nomad => &self.nomad,
            Persona::Family => &self.family,
            Persona::Retiree => &self.retiree,
        }
    }

    fn of_mut(&mut self, persona: Persona) -> &mut Vec<String> {
        match persona {
            Persona::Investor => &mut self.investor,
            Persona::Nomad => &mut self.nomad,
            Persona::Family => &mut self.family,
            Persona::Retiree => &mut self.retiree,
        }
    }
}

impl PersonaScores {
    #[must_use]
    pub fn score(&self, persona: Persona) -> u8 {
        match persona {
            Persona::Investor => self.investor,
            Persona::Nomad => self.nomad,
            Persona::Family => self.family,
            Persona::Retiree => self.retiree,
        }
    }

    /// Same as the investor score.
    #[must_use]
    pub fn investment_potential(&self) -> u8 {
        self.investor
    }

    /// Mean of family and retiree, rounded half up.
    #[must_use]
    pub fn livability(&self) -> u8 {
        let mean = f64::midpoint(f64::from(self.family), f64::from(self.retiree));
        clamp_score(mean)
    }

    #[must_use]
    pub fn quadrant(&self) -> Quadrant {
        Quadrant::classify(self.investment_potential(), self.livability())
    }

    /// Up to `n` reasons for `persona`, or the base-score placeholder when
    /// no rule fired.
    #[must_use]
    pub fn top_reasons(&self, persona: Persona, n: usize, lang: Language) -> Vec<String> {
        with_fallback(self.reasons.of(persona).iter().take(n).cloned(), lang)
    }

    /// Family reasons followed by retiree reasons, first `n`.
    #[must_use]
    pub fn livability_reasons(&self, n: usize) -> Vec<String> {
        self.reasons
            .family
            .iter()
            .chain(&self.reasons.retiree)
            .take(n)
            .cloned()
            .collect()
    }
}

fn with_fallback(reasons: impl Iterator<Item = String>, lang: Language) -> Vec<String> {
    let reasons: Vec<String> = reasons.collect();
    if reasons.is_empty() {
        vec![i18n::BASE_LAYOUT_SCORE.get(lang).to_string()]
    } else {
        reasons
    }
}

/// Scores `project` against the units of it that survived filtering.
#[must_use]
pub fn score_project(project: &Project, units: &[&Unit], lang: Language) -> PersonaScores {
    let inputs = ScoreInputs::new(project, units);
    let mut reasons = PersonaReasons::default();
    let mut scores = [0u8; 4];

    for (slot, persona) in scores.iter_mut().zip(Persona::ALL) {
        let tally = evaluate(persona.rules(), &inputs);
        *slot = tally.score();
        reasons
            .of_mut(persona)
            .extend(tally.reasons.iter().map(|r| r.get(lang).to_string()));
    }
    let [investor, nomad, family, retiree] = scores;

    tracing::trace!(
        project = %project.name,
        investor,
        nomad,
        family,
        retiree,
        "scored project"
    );
    PersonaScores {
        project: project.name.clone(),
        investor,
        nomad,
        family,
        retiree,
        reasons,
    }
}

/// Scores every project in the view, in view order.
#[must_use]
pub fn score_view(view: &View<'_>, lang: Language) -> Vec<PersonaScores> {
    view.projects
        .iter()
        .map(|project| score_project(project, &view.units_of(&project.name), lang))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{AnalysisMode, FilterAction, FilterState};
    use crate::model::seed::SERENITY;
    use crate::model::Dataset;
    use pretty_assertions::assert_eq;

    fn builtin_scores(lang: Language) -> Vec<PersonaScores> {
        let dataset = Dataset::builtin();
        let audience = FilterAction::SetAnalysisMode(AnalysisMode::Audience);
        let state = FilterState::new(&dataset).apply(&audience);
        score_view(&View::derive(&dataset, &state), lang)
    }

    fn numbers(scores: &PersonaScores) -> [u8; 4] {
        [scores.investor, scores.nomad, scores.family, scores.retiree]
    }

    #[test]
    fn builtin_scores_all_units() {
        let scores = builtin_scores(Language::En);
        assert_eq!(
            scores.iter().map(|s| s.project.as_str()).collect::<Vec<_>>(),
            vec![CORALINA, SERENITY, SIERRA]
        );
        assert_eq!(numbers(&scores[0]), [40, 70, 70, 100]);
        assert_eq!(numbers(&scores[1]), [55, 75, 80, 55]);
        assert_eq!(numbers(&scores[2]), [92, 100, 90, 45]);
    }

    #[test]
    fn composite_axes() {
        let scores = builtin_scores(Language::En);
        let composite: Vec<(u8, u8, Quadrant)> = scores
            .iter()
            .map(|s| (s.investment_potential(), s.livability(), s.quadrant()))
            .collect();
        assert_eq!(
            composite,
            vec![
                (40, 85, Quadrant::LuxuryResidence),
                (55, 68, Quadrant::Unicorn),
                (92, 68, Quadrant::Unicorn),
            ]
        );
    }

    #[test]
    fn reasons_in_rule_order() {
        let scores = builtin_scores(Language::En);
        assert_eq!(
            scores[2].reasons.investor,
            vec![
                "High unit density maximizes yield potential",
                "Shuttle Service (Vital for beach tourists)",
                "On-site Laundry Service",
                "Low common area maintenance cost",
            ]
        );
        assert_eq!(
            scores[0].reasons.retiree,
            vec![
                "Advanced Wellness (Onsen/Sauna)",
                "Library / Reading Zones",
                "Designated Quiet Zones",
                "Low density (<55 units/rai)",
            ]
        );
        assert_eq!(
            scores[0].reasons.nomad,
            vec![
                "Dedicated Co-working / Meeting Rooms",
                "Game Room for downtime",
                "Kamala: Balance of beach & town",
            ]
        );
    }

    #[test]
    fn reasons_are_localized() {
        let scores = builtin_scores(Language::Ru);
        assert_eq!(scores[1].reasons.investor[0], "Прачечная на территории");
    }

    #[test]
    fn top_and_livability_reasons() {
        let scores = builtin_scores(Language::En);
        let sierra = &scores[2];
        let top = sierra.top_reasons(Persona::Investor, 2, Language::En);
        assert_eq!(top.len(), 2);
        assert_eq!(
            sierra.livability_reasons(2),
            vec![
                "Dedicated Kids Zone / Playground",
                "Family Theater / Entertainment",
            ]
        );
        let serenity = &scores[1];
        assert_eq!(
            serenity.livability_reasons(10).last().map(String::as_str),
            Some("Advanced Wellness (Onsen/Sauna)")
        );
    }

    #[test]
    fn base_layout_fallback() {
        let scores = PersonaScores {
            project: SIERRA.to_string(),
            investor: 0,
            nomad: 0,
            family: 0,
            retiree: 0,
            reasons: PersonaReasons::default(),
        };
        assert_eq!(
            scores.top_reasons(Persona::Family, 3, Language::En),
            vec!["Base layout score"]
        );
        assert_eq!(
            scores.top_reasons(Persona::Family, 3, Language::Ru),
            vec!["Базовая оценка планировки"]
        );
    }

    #[test]
    fn unit_mix_follows_filters() {
        let dataset = Dataset::builtin();
        let state = FilterState::new(&dataset)
            .apply(&FilterAction::SetAnalysisMode(AnalysisMode::Audience))
            .apply(&FilterAction::ToggleCategory("1 Bedroom".to_string()));
        let view = View::derive(&dataset, &state);
        let serenity = score_view(&view, Language::En)
            .into_iter()
            .find(|s| s.project == SERENITY)
            .unwrap();
        // 2 of 3 one-bedroom units are compact, none spacious.
        assert_eq!(serenity.investor, 20 + 30 + 10 + 15);
        assert_eq!(serenity.family, 25 + 10 + 15);
    }

    #[test]
    fn no_units_means_zero_ratios() {
        let dataset = Dataset::builtin();
        let project = dataset.project(CORALINA).unwrap();
        let scores = score_project(project, &[], Language::En);
        assert_eq!(scores.investor, 10);
        assert_eq!(scores.family, 25 + 15);
    }

    #[test]
    fn quadrant_boundary_is_inclusive() {
        assert_eq!(Quadrant::classify(50, 50), Quadrant::Unicorn);
        assert_eq!(Quadrant::classify(49, 50), Quadrant::LuxuryResidence);
        assert_eq!(Quadrant::classify(50, 49), Quadrant::CashCow);
        assert_eq!(Quadrant::classify(0, 0), Quadrant::Niche);
        assert_eq!(Quadrant::Unicorn.label(Language::En), "The Unicorn");
    }
}
