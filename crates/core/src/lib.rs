//! Analytics behind the Pasture to Plate dashboards.
//!
//! Raw lexical records flow one way through this crate: the visibility filter
//! strips hidden labels, the aggregator ranks categories, the Top-N selector
//! ranks words, and the detail selector narrows to a single category. Every
//! derived value is recomputed from the loaded records plus a [`ViewState`].

pub mod aggregate;
pub mod clock;
pub mod detail;
pub mod error;
pub mod insights;
pub mod journey;
pub mod lazy;
pub mod model;
pub mod origins;
pub mod resources;
pub mod top;
pub mod view_state;
pub mod visibility;

pub use aggregate::aggregate_categories;
pub use error::{JourneyError, LoadError};
pub use insights::Insights;
pub use journey::{JourneyAnimator, MarkerState, Waypoint, WAYPOINTS};
pub use lazy::LazyResource;
pub use model::{CategoryStat, CountryStat, CountryWord, LexicalRecord, OriginSummary};
pub use origins::CountryAliases;
pub use view_state::{AnalysisTab, Page, ViewState};
pub use visibility::VisibilityRules;
