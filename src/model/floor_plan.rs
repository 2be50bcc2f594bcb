use crate::i18n::LocalizedString;
use serde::{Deserialize, Serialize};

/// Per-project building and floor breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub project: String,
    pub buildings: Vec<Building>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub id: String,
    pub name: String,
    pub floors: Vec<Floor>,
}

impl Building {
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.floors.iter().map(|f| f.unit_count).sum()
    }

    #[must_use]
    pub fn floor(&self, level: FloorLevel) -> Option<&Floor> {
        self.floors.iter().find(|f| f.level == level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LevelRepr", into = "LevelRepr")]
pub enum FloorLevel {
    Number(u32),
    Roof,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Number(u32),
    Text(String),
}

impl TryFrom<LevelRepr> for FloorLevel {
    type Error = String;

    fn try_from(repr: LevelRepr) -> Result<Self, Self::Error> {
        match repr {
            LevelRepr::Number(n) => Ok(Self::Number(n)),
            LevelRepr::Text(text) if text == "Roof" => Ok(Self::Roof),
            LevelRepr::Text(text) => Err(format!("unknown floor level '{text}'")),
        }
    }
}

impl From<FloorLevel> for LevelRepr {
    fn from(level: FloorLevel) -> Self {
        match level {
            FloorLevel::Number(n) => Self::Number(n),
            FloorLevel::Roof => Self::Text("Roof".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub level: FloorLevel,
    pub label: String,
    pub unit_count: u32,
    pub unit_ranges: Vec<UnitRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<LocalizedString>,
}

impl Floor {
    /// Every unit code on the floor, e.g. `A201`..`A226`.
    #[must_use]
    pub fn unit_codes(&self) -> Vec<String> {
        self.unit_ranges.iter().flat_map(UnitRange::codes).collect()
    }

    /// Splits the codes into a top row of `ceil(n / 2)` and a bottom row.
    #[must_use]
    pub fn rows(&self) -> (Vec<String>, Vec<String>) {
        let mut top = self.unit_codes();
        let bottom = top.split_off(top.len().div_ceil(2));
        (top, bottom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRange {
    pub prefix: String,
    pub start: u32,
    pub end: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UnitRange {
    /// Empty when `start > end`.
    pub fn codes(&self) -> impl Iterator<Item = String> + '_ {
        (self.start..=self.end).map(move |n| format!("{}{n:02}", self.prefix))
    }

    /// `A201 - A226` style label.
    #[must_use]
    pub fn label(&self) -> String {
        let (prefix, start, end) = (&self.prefix, self.start, self.end);
        format!("{prefix}{start:02} - {prefix}{end:02}")
    }
}
