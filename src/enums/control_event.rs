use serde::{Deserialize, Serialize};
use crate::enums::site_selection::SiteSelection;

/// One user interaction with the dashboard controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlEvent {
    SelectSite { site: SiteSelection },
    SetPayloadRange { low: f64, high: f64 },
    Reset,
}
