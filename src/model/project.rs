use crate::i18n::LocalizedString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasterPlanMetrics {
    /// Density in units per rai.
    pub units_per_rai: f64,
    /// Percent of land, 0-100.
    pub green_space_ratio: f64,
    /// Square metres of common area per unit.
    pub common_area_per_unit: f64,
    pub total_common_area: f64,
    /// Unique facilities per building.
    pub facility_density: f64,
    pub distinct_zones: Vec<LocalizedString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureCategory {
    Orientation,
    Facilities,
    Parking,
    Zoning,
}

impl FeatureCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Orientation => "Orientation",
            Self::Facilities => "Facilities",
            Self::Parking => "Parking",
            Self::Zoning => "Zoning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFeature {
    pub category: FeatureCategory,
    pub description: LocalizedString,
    pub icon: String,
}

/// One real-estate development.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub total_units: u32,
    /// Thai land area notation, `rai-ngan-sq.wah`.
    pub land_area_rai: String,
    pub land_area_sqm: f64,
    pub buildings: u32,
    pub storeys: u32,
    pub location: LocalizedString,
    pub coordinates: Coordinates,
    pub facilities: Vec<String>,
    pub unit_types: Vec<String>,
    pub master_plan: MasterPlanMetrics,
    pub layout_features: Vec<LayoutFeature>,
}

impl Project {
    /// Exact tag membership.
    #[must_use]
    pub fn has_facility(&self, tag: &str) -> bool {
        self.facilities.iter().any(|f| f == tag)
    }

    /// True when any facility tag contains any of `keywords`, ignoring case.
    #[must_use]
    pub fn has_facility_matching(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();
            self.facilities
                .iter()
                .any(|f| f.to_lowercase().contains(&keyword))
        })
    }

    /// True when any distinct zone's English label contains `keyword`, ignoring case.
    #[must_use]
    pub fn has_zone_matching(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.master_plan
            .distinct_zones
            .iter()
            .any(|z| z.en.to_lowercase().contains(&keyword))
    }

    /// True when any layout feature's English description contains one of
    /// `needles` verbatim.
    #[must_use]
    pub fn layout_mentions(&self, needles: &[&str]) -> bool {
        self.layout_features
            .iter()
            .any(|f| needles.iter().any(|n| f.description.en.contains(n)))
    }

    #[must_use]
    pub fn offers_unit_type(&self, fragment: &str) -> bool {
        self.unit_types.iter().any(|t| t.contains(fragment))
    }
}
