//! Five-axis lifestyle profile.

use super::rules::{evaluate, Comparison, Metric, Otherwise, Rule, ScoreInputs, Tier};
use crate::i18n::{self, Language};
use crate::model::seed::SIERRA;
use crate::model::Project;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RadarAxis {
    Wellness,
    Family,
    Work,
    Exclusivity,
    Nature,
}

impl RadarAxis {
    pub const ALL: [Self; 5] = [
        Self::Wellness,
        Self::Family,
        Self::Work,
        Self::Exclusivity,
        Self::Nature,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Wellness => "wellness",
            Self::Family => "family",
            Self::Work => "work",
            Self::Exclusivity => "exclusivity",
            Self::Nature => "nature",
        }
    }

    #[must_use]
    pub fn label(self, lang: Language) -> &'static str {
        i18n::RADAR_AXES
            .lookup(self.key())
            .map_or(self.key(), |text| text.get(lang))
    }

    #[must_use]
    pub const fn rules(self) -> &'static [Rule] {
        match self {
            Self::Wellness => WELLNESS,
            Self::Family => FAMILY,
            Self::Work => WORK,
            Self::Exclusivity => EXCLUSIVITY,
            Self::Nature => NATURE,
        }
    }
}

const fn facility(keywords: &'static [&'static str], points: f64) -> Rule {
    Rule::Facility {
        keywords,
        points,
        reason: None,
    }
}

const WELLNESS: &[Rule] = &[
    facility(&["onsen", "spa"], 30.0),
    facility(&["sauna", "steam"], 20.0),
    facility(&["gym", "fitness"], 20.0),
    facility(&["pool"], 10.0),
    Rule::Threshold {
        metric: Metric::GreenSpaceRatio,
        tiers: &[Tier {
            when: Comparison::Above(15.0),
            points: 20.0,
            reason: None,
        }],
        otherwise: Otherwise::Nothing,
    },
];

const FAMILY: &[Rule] = &[
    facility(&["kid", "game"], 40.0),
    facility(&["pool", "lagoon"], 20.0),
    Rule::UnitTypeOffered {
        tiers: &[("3 Bedroom", 30.0), ("2 Bedroom", 10.0)],
    },
];

const WORK: &[Rule] = &[
    facility(&["coworking", "co-working"], 40.0),
    facility(&["meeting", "library"], 30.0),
    facility(&["lounge"], 20.0),
    Rule::ProjectBonus {
        project: SIERRA,
        points: 10.0,
        reason: None,
    },
];

const EXCLUSIVITY: &[Rule] = &[
    Rule::Scaled {
        metric: Metric::DensityHeadroom,
        factor: 0.6,
        cap: f64::INFINITY,
    },
    Rule::Scaled {
        metric: Metric::CommonAreaPerUnit,
        factor: 4.0,
        cap: 40.0,
    },
];

const NATURE: &[Rule] = &[
    Rule::Scaled {
        metric: Metric::GreenSpaceRatio,
        factor: 3.5,
        cap: 100.0,
    },
    facility(&["garden", "yard", "lagoon"], 15.0),
];

/// One project's position on every axis, each in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifestyleProfile {
    pub project: String,
    pub wellness: u8,
    pub family: u8,
    pub work: u8,
    pub exclusivity: u8,
    pub nature: u8,
}

impl LifestyleProfile {
    #[must_use]
    pub fn of(project: &Project) -> Self {
        let inputs = ScoreInputs::project_only(project);
        let axis = |axis: RadarAxis| evaluate(axis.rules(), &inputs).score();
        Self {
            project: project.name.clone(),
            wellness: axis(RadarAxis::Wellness),
            family: axis(RadarAxis::Family),
            work: axis(RadarAxis::Work),
            exclusivity: axis(RadarAxis::Exclusivity),
            nature: axis(RadarAxis::Nature),
        }
    }

    #[must_use]
    pub fn get(&self, axis: RadarAxis) -> u8 {
        match axis {
            RadarAxis::Wellness => self.wellness,
            RadarAxis::Family => self.family,
            RadarAxis::Work => self.work,
            RadarAxis::Exclusivity => self.exclusivity,
            RadarAxis::Nature => self.nature,
        }
    }
}

#[must_use]
pub fn lifestyle_profiles(projects: &[&Project]) -> Vec<LifestyleProfile> {
    projects.iter().map(|p| LifestyleProfile::of(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed::{CORALINA, SERENITY};
    use crate::model::Dataset;
    use pretty_assertions::assert_eq;

    fn axes(profile: &LifestyleProfile) -> [u8; 5] {
        RadarAxis::ALL.map(|axis| profile.get(axis))
    }

    #[test]
    fn builtin_profiles() {
        let dataset = Dataset::builtin();
        let projects: Vec<&Project> = dataset.projects.iter().collect();
        let profiles = lifestyle_profiles(&projects);

        assert_eq!(profiles[0].project, CORALINA);
        assert_eq!(axes(&profiles[0]), [100, 90, 70, 72, 56]);
        assert_eq!(profiles[1].project, SERENITY);
        assert_eq!(axes(&profiles[1]), [100, 90, 60, 46, 60]);
        assert_eq!(profiles[2].project, SIERRA);
        assert_eq!(axes(&profiles[2]), [100, 70, 100, 17, 88]);
    }

    #[test]
    fn nature_bonus_for_garden() {
        let mut project = Dataset::builtin().projects[0].clone();
        project.facilities.push("Zen Garden".to_string());
        assert_eq!(LifestyleProfile::of(&project).nature, 56 + 15);
    }

    #[test]
    fn axes_saturate() {
        let mut project = Dataset::builtin().projects[0].clone();
        project.master_plan.units_per_rai = 0.0;
        project.master_plan.common_area_per_unit = 50.0;
        project.master_plan.green_space_ratio = 90.0;
        let profile = LifestyleProfile::of(&project);
        assert_eq!(profile.nature, 100);
        assert_eq!(profile.exclusivity, 100);

        project.master_plan.units_per_rai = 500.0;
        project.master_plan.common_area_per_unit = 0.0;
        assert_eq!(LifestyleProfile::of(&project).exclusivity, 0);
    }

    #[test]
    fn axis_labels() {
        assert_eq!(RadarAxis::Work.label(Language::En), "Work/Tech");
        assert_eq!(RadarAxis::Exclusivity.label(Language::Ru), "Приватность");
    }
}
