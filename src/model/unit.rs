use serde::{Deserialize, Serialize};

/// One sellable floor-plan type belonging to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    /// Name of the owning project.
    pub project: String,
    pub name: String,
    pub code: String,
    pub category: String,
    pub sub_category: String,
    pub min_size: f64,
    pub max_size: f64,
}

impl Unit {
    /// Interval overlap with `[min, max]`, not containment.
    ///
    /// An inverted range (`min > max`) overlaps nothing, not even a unit
    /// wide enough to span it.
    #[must_use]
    pub fn overlaps(&self, min: f64, max: f64) -> bool {
        min <= max && self.min_size <= max && self.max_size >= min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(min: f64, max: f64) -> Unit {
        Unit {
            id: "u".to_string(),
            project: "P".to_string(),
            name: "1 Bedroom S".to_string(),
            code: "1BS".to_string(),
            category: "1 Bedroom".to_string(),
            sub_category: "S".to_string(),
            min_size: min,
            max_size: max,
        }
    }

    #[test]
    fn overlap_is_not_containment() {
        assert!(sized(40.0, 60.0).overlaps(30.0, 50.0));
        assert!(!sized(26.0, 26.0).overlaps(30.0, 50.0));
        assert!(!sized(128.0, 128.0).overlaps(30.0, 50.0));
    }

    #[test]
    fn touching_bounds_overlap() {
        assert!(sized(50.0, 55.0).overlaps(30.0, 50.0));
        assert!(sized(20.0, 30.0).overlaps(30.0, 50.0));
    }

    #[test]
    fn inverted_range_never_overlaps() {
        for (min, max) in [(26.0, 26.0), (40.0, 60.0), (30.0, 50.0), (0.0, 200.0)] {
            assert!(!sized(min, max).overlaps(50.0, 30.0));
        }
    }
}
