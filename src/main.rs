use clap::Parser;
use color_eyre::Result;
use std::path::{Path, PathBuf};

use estate_scan::export::{
    export_facilities_csv, export_json, export_projects_csv, export_units_csv, ExportKind,
};
use estate_scan::filter::{AnalysisMode, FilterState, FilterStore, SizeBound, View};
use estate_scan::i18n::Language;
use estate_scan::logging::init_tracing;
use estate_scan::model::Dataset;
use estate_scan::report;

#[derive(Parser, Debug)]
#[command(name = "estate-scan")]
#[command(about = "EstateScan - compare residential developments by facilities, units and fit")]
#[command(version)]
struct Args {
    /// JSON dataset (defaults to the embedded one)
    #[arg(long, value_name = "FILE")]
    dataset: Option<PathBuf>,

    /// Analysis mode
    #[arg(long, value_enum, default_value_t = AnalysisMode::Facilities)]
    mode: AnalysisMode,

    /// Display language
    #[arg(long, value_enum, default_value_t = Language::En)]
    lang: Language,

    /// Toggle a project (all start selected)
    #[arg(long, value_name = "NAME")]
    project: Vec<String>,

    /// Toggle a unit category
    #[arg(long, value_name = "CATEGORY")]
    category: Vec<String>,

    /// Toggle a unit sub-category
    #[arg(long, value_name = "SUB")]
    sub_category: Vec<String>,

    /// Toggle a required facility
    #[arg(long, value_name = "TAG")]
    facility: Vec<String>,

    /// Minimum unit size; unparsable input becomes 0
    #[arg(long, value_name = "RAW", allow_hyphen_values = true)]
    min_size: Option<String>,

    /// Maximum unit size; unparsable input becomes 0
    #[arg(long, value_name = "RAW", allow_hyphen_values = true)]
    max_size: Option<String>,

    /// Category to highlight in the size charts
    #[arg(long, value_name = "CATEGORY")]
    highlight: Option<String>,

    /// Export filtered units to CSV
    #[arg(long, value_name = "FILE")]
    units_csv: Option<PathBuf>,

    /// Export filtered project metrics to CSV
    #[arg(long, value_name = "FILE")]
    projects_csv: Option<PathBuf>,

    /// Export the facilities matrix to CSV
    #[arg(long, value_name = "FILE")]
    facilities_csv: Option<PathBuf>,

    /// Export filtered projects and units to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Write all four exports into DIR under dated default names
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,

    /// More log output (-v info, -vv debug); ESTATE_SCAN_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Every export the user asked for, with its target path.
    fn exports(&self) -> Vec<(ExportKind, PathBuf)> {
        if let Some(dir) = &self.export_dir {
            let today = chrono::Utc::now().date_naive();
            return ExportKind::ALL
                .iter()
                .map(|&kind| (kind, dir.join(kind.file_name(today))))
                .collect();
        }
        [
            (ExportKind::Units, &self.units_csv),
            (ExportKind::Projects, &self.projects_csv),
            (ExportKind::Facilities, &self.facilities_csv),
            (ExportKind::Json, &self.json),
        ]
        .into_iter()
        .filter_map(|(kind, path)| path.clone().map(|p| (kind, p)))
        .collect()
    }
}

fn export(kind: ExportKind, path: &Path, view: &View<'_>, state: &FilterState) -> Result<()> {
    match kind {
        ExportKind::Units => {
            export_units_csv(&view.units, path)?;
            println!("Exported units to CSV: {}", path.display());
        }
        ExportKind::Projects => {
            export_projects_csv(&view.projects, state.language, path)?;
            println!("Exported project metrics to CSV: {}", path.display());
        }
        ExportKind::Facilities => {
            export_facilities_csv(&view.projects, path)?;
            println!("Exported facilities matrix to CSV: {}", path.display());
        }
        ExportKind::Json => {
            export_json(&view.projects, &view.units, path)?;
            println!("Exported to JSON: {}", path.display());
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose);

    let dataset = match &args.dataset {
        Some(path) => Dataset::load(path)?,
        None => Dataset::builtin(),
    };

    let mut store = FilterStore::new(&dataset);
    store.set_analysis_mode(args.mode);
    store.set_language(args.lang);
    for name in &args.project {
        store.toggle_project(name);
    }
    for category in &args.category {
        store.toggle_category(category);
    }
    for sub in &args.sub_category {
        store.toggle_sub_category(sub);
    }
    for facility in &args.facility {
        store.toggle_facility(facility);
    }
    if let Some(raw) = &args.min_size {
        store.set_size_bound(SizeBound::Min, raw);
    }
    if let Some(raw) = &args.max_size {
        store.set_size_bound(SizeBound::Max, raw);
    }
    if let Some(category) = &args.highlight {
        store.set_highlighted_category(Some(category.as_str()));
    }

    let state = store.snapshot();
    let view = View::derive(&dataset, &state);

    let exports = args.exports();
    for (kind, path) in &exports {
        export(*kind, path, &view, &state)?;
    }
    if !exports.is_empty() {
        return Ok(());
    }

    print!("{}", report::render(&dataset, &state));
    Ok(())
}
