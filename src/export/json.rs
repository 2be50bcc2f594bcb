use crate::error::ExportError;
use crate::model::{Project, Unit};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub exported_at: DateTime<Utc>,
    pub project_count: usize,
    pub unit_count: usize,
}

/// Full snapshot of the currently filtered projects and units.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub metadata: ExportMetadata,
    pub projects: &'a [&'a Project],
    pub units: &'a [&'a Unit],
}

impl<'a> Snapshot<'a> {
    #[must_use]
    pub fn new(
        projects: &'a [&'a Project],
        units: &'a [&'a Unit],
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            metadata: ExportMetadata {
                exported_at,
                project_count: projects.len(),
                unit_count: units.len(),
            },
            projects,
            units,
        }
    }
}

pub fn export_json<P: AsRef<Path>>(
    projects: &[&Project],
    units: &[&Unit],
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let snapshot = Snapshot::new(projects, units, Utc::now());
    let json = serde_json::to_string_pretty(&snapshot)?;

    let mut file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    file.write_all(json.as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })?;

    tracing::info!(
        path = %path_ref.display(),
        projects = projects.len(),
        units = units.len(),
        "wrote JSON export"
    );
    Ok(())
}
