//! Error types for EstateScan.
//!
//! The filtering and scoring core is total and never fails. Only the outer
//! surfaces can: loading a dataset from disk and writing exports.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Failed to read the dataset file from disk.
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The dataset file is not valid JSON for the dataset schema.
    #[error("invalid dataset JSON: {source}")]
    InvalidJson {
        #[from]
        source: serde_json::Error,
    },

    /// Two projects share the same name.
    #[error("duplicate project name '{name}'")]
    DuplicateProject { name: String },

    /// Two units share the same id.
    #[error("duplicate unit id '{id}'")]
    DuplicateUnit { id: String },

    /// A unit references a project that is not in the dataset.
    #[error("unit '{unit}' references unknown project '{project}'")]
    UnknownProject { unit: String, project: String },

    /// A unit has `min_size > max_size`.
    #[error("unit '{unit}' has inverted size range {min}..{max}")]
    InvertedSize { unit: String, min: f64, max: f64 },
}

/// Errors that can occur when exporting data.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to create the output file.
    #[error("failed to create file '{path}': {source}")]
    FileCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write data to the file.
    #[error("failed to write data: {message}")]
    WriteError { message: String },

    /// Failed to serialize data to JSON.
    #[error("JSON serialization failed: {source}")]
    JsonSerialize {
        #[from]
        source: serde_json::Error,
    },

    /// Failed to write CSV data.
    #[error("CSV write failed: {source}")]
    CsvWrite {
        #[from]
        source: csv::Error,
    },
}
