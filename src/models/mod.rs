//! Typed records for everything the dashboard displays.
//!
//! Raw API payloads never reach the view state; they are validated into
//! these types in [`crate::api::payloads`].

pub mod country;
pub mod metric;
pub mod selection;
pub mod stats;
pub mod timeline;
pub mod viewport;

pub use country::{CountryOption, CountrySummary, IsoCode, TableRow};
pub use metric::MetricKind;
pub use selection::{GraphTarget, Selection};
pub use stats::{CountryStats, WORLDWIDE};
pub use timeline::{DailyPoint, Timeline};
pub use viewport::{LatLng, MapViewport, COUNTRY_ZOOM, DEFAULT_CENTER, GLOBAL_ZOOM};
