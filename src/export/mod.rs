pub mod csv;
pub mod json;

pub use crate::error::ExportError;
pub use csv::{export_facilities_csv, export_projects_csv, export_units_csv};
pub use json::{export_json, ExportMetadata, Snapshot};

use chrono::NaiveDate;

/// The four downloadable exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Units,
    Projects,
    Facilities,
    Json,
}

impl ExportKind {
    pub const ALL: [ExportKind; 4] = [Self::Units, Self::Projects, Self::Facilities, Self::Json];

    /// Dated default file name, e.g. `estate_units_2026-10-16.csv`.
    #[must_use]
    pub fn file_name(self, date: NaiveDate) -> String {
        let (stem, ext) = match self {
            Self::Units => ("estate_units", "csv"),
            Self::Projects => ("estate_projects_metrics", "csv"),
            Self::Facilities => ("estate_facilities_matrix", "csv"),
            Self::Json => ("estate_full_data", "json"),
        };
        format!("{stem}_{}.{ext}", date.format("%Y-%m-%d"))
    }
}
