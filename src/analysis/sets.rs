//! Three-way set partition over per-project labels.

use crate::i18n::{self, Language};
use indexmap::IndexSet;
use serde::Serialize;

/// A project's labels (facilities or unit categories) in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledSet {
    pub label: String,
    pub items: IndexSet<String>,
}

impl LabeledSet {
    #[must_use]
    pub fn new(label: impl Into<String>, items: IndexSet<String>) -> Self {
        Self {
            label: label.into(),
            items,
        }
    }

    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.items.contains(item)
    }
}

/// Items present in exactly the member sets named by `members`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Indices into the three input sets.
    pub members: Vec<usize>,
    pub items: Vec<String>,
}

impl Region {
    fn empty(members: &[usize]) -> Self {
        Self {
            members: members.to_vec(),
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub label: String,
    pub count: usize,
}

/// Pairwise regions in display order: (0,1), (1,2), (0,2).
const PAIRS: [[usize; 2]; 3] = [[0, 1], [1, 2], [0, 2]];

/// The seven-region partition of `a ∪ b ∪ c`.
///
/// Every union element lands in exactly one region. Regions keep union
/// order: first-seen across the first set, then the second, then the third.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetAnalysis {
    pub labels: [String; 3],
    pub union_size: usize,
    pub intersection: Region,
    pub pairwise: [Region; 3],
    pub unique: [Region; 3],
}

impl SetAnalysis {
    #[must_use]
    pub fn compute(sets: [&LabeledSet; 3]) -> Self {
        let union: IndexSet<&str> = sets
            .iter()
            .flat_map(|s| s.items.iter().map(String::as_str))
            .collect();

        let mut intersection = Region::empty(&[0, 1, 2]);
        let mut pairwise = PAIRS.map(|pair| Region::empty(&pair));
        let mut unique = [0, 1, 2].map(|i| Region::empty(&[i]));

        for item in &union {
            let inside = sets.map(|s| s.contains(item));
            let region = match inside {
                [true, true, true] => &mut intersection,
                [true, true, false] => &mut pairwise[0],
                [false, true, true] => &mut pairwise[1],
                [true, false, true] => &mut pairwise[2],
                [true, false, false] => &mut unique[0],
                [false, true, false] => &mut unique[1],
                [false, false, true] => &mut unique[2],
                [false, false, false] => continue,
            };
            region.items.push((*item).to_string());
        }

        Self {
            labels: sets.map(|s| s.label.clone()),
            union_size: union.len(),
            intersection,
            pairwise,
            unique,
        }
    }

    /// `None` unless exactly three sets are given.
    #[must_use]
    pub fn from_inputs(inputs: &[LabeledSet]) -> Option<Self> {
        match inputs {
            [a, b, c] => Some(Self::compute([a, b, c])),
            _ => None,
        }
    }

    /// All seven regions in display order: intersection, pairs, uniques.
    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        std::iter::once(&self.intersection)
            .chain(self.pairwise.iter())
            .chain(self.unique.iter())
    }

    #[must_use]
    pub fn region_label(&self, region: &Region, lang: Language) -> String {
        match region.members.as_slice() {
            [only] => i18n::single_only(lang, &self.labels[*only]),
            [first, second] => i18n::pair_only(lang, &self.labels[*first], &self.labels[*second]),
            _ => i18n::COMMON_ALL.get(lang).to_string(),
        }
    }

    /// Bucket table for proportion charts; empty regions are left out.
    #[must_use]
    pub fn counts(&self, lang: Language) -> Vec<BucketCount> {
        self.regions()
            .filter(|r| !r.is_empty())
            .map(|r| BucketCount {
                label: self.region_label(r, lang),
                count: r.len(),
            })
            .collect()
    }
}
