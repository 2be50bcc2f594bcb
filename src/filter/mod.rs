//! Filter state, its mutation path, and the views derived from it.

pub mod derive;
pub mod state;
pub mod store;

pub use derive::{filtered_projects, filtered_units, ModeGates, SetSource, View};
pub use state::{parse_size_bound, AnalysisMode, FilterState, SizeBound, SizeRange};
pub use store::{FilterAction, FilterStore};
