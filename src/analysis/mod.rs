//! Analyses computed over a derived [`crate::filter::View`].

pub mod charts;
pub mod matrix;
pub mod radar;
pub mod rules;
pub mod scoring;
pub mod sets;

pub use charts::{
    average_size_by_category, size_distribution, strategic_points, BinCount, CategorySizeChart,
    CategorySizeRow, SizeBin, StrategicPoint, SIZE_BINS,
};
pub use matrix::{FacilitiesMatrix, MatrixGroup, MatrixRow};
pub use radar::{lifestyle_profiles, LifestyleProfile, RadarAxis};
pub use rules::{Rule, ScoreInputs, Tally};
pub use scoring::{score_project, score_view, Persona, PersonaReasons, PersonaScores, Quadrant};
pub use sets::{BucketCount, LabeledSet, Region, SetAnalysis};
