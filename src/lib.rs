//! # EstateScan
//!
//! Comparison core for a small set of residential developments: a filter
//! store, mode-gated filtered views, a three-way set partition, and persona
//! and lifestyle scoring.
//!
//! ## Features
//!
//! - Embedded dataset, or any JSON file with the same schema
//! - Five analysis modes, each with its own active filters
//! - Overlap analysis of facilities or unit categories across three projects
//! - Rule-based persona scores with localized reasons (English and Russian)
//! - Export to CSV and JSON
//!
//! ## Example
//!
//! ```
//! use estate_scan::filter::{AnalysisMode, FilterStore, View};
//! use estate_scan::analysis::score_view;
//! use estate_scan::model::Dataset;
//!
//! let dataset = Dataset::builtin();
//! let mut store = FilterStore::new(&dataset);
//! store.set_analysis_mode(AnalysisMode::Audience);
//! store.toggle_category("2 Bedroom");
//!
//! let view = View::derive(&dataset, store.state());
//! for scores in score_view(&view, store.state().language) {
//!     println!("{}: investor {}", scores.project, scores.investor);
//! }
//! ```

pub mod analysis;
pub mod error;
pub mod export;
pub mod filter;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod report;
