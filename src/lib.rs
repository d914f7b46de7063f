//! Interactive dashboard over a static table of rocket launches.
//!
//! A launch CSV is loaded once into an immutable [`structs::launch_table::LaunchTable`].
//! Two pure aggregations ([`services::launch_aggregator::LaunchAggregator`]) derive a
//! success pie and a payload/outcome scatter from it, and [`ui::dashboard_server`] serves
//! both as Plotly figures that refresh on every control change.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod ui;
pub mod workers;
