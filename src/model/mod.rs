pub mod dataset;
pub mod facility;
pub mod floor_plan;
pub mod project;
pub mod seed;
pub mod unit;

pub use dataset::Dataset;
pub use facility::{Facility, FacilityGroup};
pub use floor_plan::{Building, Floor, FloorLevel, FloorPlan, UnitRange};
pub use project::{Coordinates, FeatureCategory, LayoutFeature, MasterPlanMetrics, Project};
pub use unit::Unit;
