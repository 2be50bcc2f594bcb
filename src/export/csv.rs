use crate::error::ExportError;
use crate::i18n::Language;
use crate::model::{Project, Unit};
use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

const UNIT_HEADERS: [&str; 7] = [
    "Project",
    "Unit Name",
    "Code",
    "Category",
    "Sub-Category",
    "Min Size (sqm)",
    "Max Size (sqm)",
];

const PROJECT_HEADERS: [&str; 12] = [
    "Project",
    "Location",
    "Total Units",
    "Buildings",
    "Storeys",
    "Land Area (Rai)",
    "Land Area (Sqm)",
    "Density (Units/Rai)",
    "Green Space (%)",
    "Common Area/Unit (sqm)",
    "Facility Count",
    "Facility Density",
];

fn create_writer(path: &Path) -> Result<csv::Writer<File>, ExportError> {
    let file = File::create(path).map_err(|source| ExportError::FileCreate {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::Writer::from_writer(file))
}

fn finish(mut writer: csv::Writer<File>, path: &Path, rows: usize) -> Result<(), ExportError> {
    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;
    tracing::info!(path = %path.display(), rows, "wrote CSV export");
    Ok(())
}

/// One row per unit, in the order given.
pub fn export_units_csv<P: AsRef<Path>>(units: &[&Unit], path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let mut writer = create_writer(path_ref)?;

    writer.write_record(UNIT_HEADERS)?;

    for unit in units {
        writer.write_record([
            unit.project.as_str(),
            unit.name.as_str(),
            unit.code.as_str(),
            unit.category.as_str(),
            unit.sub_category.as_str(),
            unit.min_size.to_string().as_str(),
            unit.max_size.to_string().as_str(),
        ])?;
    }

    finish(writer, path_ref, units.len())
}

/// Specs and master-plan metrics per project, with the location in `lang`.
pub fn export_projects_csv<P: AsRef<Path>>(
    projects: &[&Project],
    lang: Language,
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let mut writer = create_writer(path_ref)?;

    writer.write_record(PROJECT_HEADERS)?;

    for project in projects {
        let plan = &project.master_plan;
        writer.write_record([
            project.name.clone(),
            project.location.get(lang).to_string(),
            project.total_units.to_string(),
            project.buildings.to_string(),
            project.storeys.to_string(),
            project.land_area_rai.clone(),
            project.land_area_sqm.to_string(),
            plan.units_per_rai.to_string(),
            plan.green_space_ratio.to_string(),
            plan.common_area_per_unit.to_string(),
            project.facilities.len().to_string(),
            plan.facility_density.to_string(),
        ])?;
    }

    finish(writer, path_ref, projects.len())
}

/// `Yes`/`No` grid of every distinct facility (sorted) against `projects`.
pub fn export_facilities_csv<P: AsRef<Path>>(
    projects: &[&Project],
    path: P,
) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let mut writer = create_writer(path_ref)?;

    let facilities: BTreeSet<&str> = projects
        .iter()
        .flat_map(|p| p.facilities.iter().map(String::as_str))
        .collect();

    let header: Vec<&str> = std::iter::once("Facility")
        .chain(projects.iter().map(|p| p.name.as_str()))
        .collect();
    writer.write_record(&header)?;

    for facility in &facilities {
        let row: Vec<&str> = std::iter::once(*facility)
            .chain(projects.iter().map(|p| {
                if p.has_facility(facility) {
                    "Yes"
                } else {
                    "No"
                }
            }))
            .collect();
        writer.write_record(&row)?;
    }

    finish(writer, path_ref, facilities.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed::{CORALINA, SIERRA};
    use crate::model::Dataset;
    use pretty_assertions::assert_eq;

    fn read(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn units_csv() {
        let dataset = Dataset::builtin();
        let units = dataset.units_of(SIERRA);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("units.csv");

        export_units_csv(&units, &path).unwrap();
        let lines = read(&path);
        assert_eq!(
            lines[0],
            "Project,Unit Name,Code,Category,Sub-Category,Min Size (sqm),Max Size (sqm)"
        );
        assert_eq!(
            lines[1],
            "Sierra,1 Bedroom S,1 Bedroom S,1 Bedroom,S,28.38,28.38"
        );
        assert_eq!(lines.len(), 1 + 9);
    }

    #[test]
    fn projects_csv_localizes_location() {
        let dataset = Dataset::builtin();
        let coralina = dataset.project(CORALINA).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("projects.csv");

        export_projects_csv(&[coralina], Language::Ru, &path).unwrap();
        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap().len(), PROJECT_HEADERS.len());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], CORALINA);
        assert_eq!(&record[1], coralina.location.ru);
        assert_eq!(&record[7], "49.8");
        assert_eq!(&record[10], "12");
    }

    #[test]
    fn facilities_csv_grid() {
        let dataset = Dataset::builtin();
        let projects: Vec<&Project> = dataset.projects.iter().collect();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facilities.csv");

        export_facilities_csv(&projects, &path).unwrap();
        let lines = read(&path);
        assert_eq!(lines[0], "Facility,Coralina,Serenity,Sierra");
        assert_eq!(lines[1], "Co-Kitchen,Yes,Yes,No");
        assert!(lines.contains(&"Shuttle Service,No,No,Yes".to_string()));
        assert_eq!(lines.len(), 1 + 16);
    }

    #[test]
    fn unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("units.csv");
        let err = export_units_csv(&[], &path).unwrap_err();
        assert!(matches!(err, ExportError::FileCreate { .. }));
    }
}
