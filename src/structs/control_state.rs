use serde::{Deserialize, Serialize};
use crate::enums::control_event::ControlEvent;
use crate::enums::site_selection::SiteSelection;
use crate::structs::launch_table::LaunchTable;
use crate::structs::payload_range::PayloadRange;

/// The two values bound to the dashboard controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub selected_site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl ControlState {
    /// "ALL" sites and the full observed payload span.
    pub fn initial(table: &LaunchTable) -> Self {
        Self {
            selected_site: SiteSelection::All,
            payload_range: PayloadRange::new(table.min_payload(), table.max_payload()),
        }
    }

    pub fn apply(&mut self, event: &ControlEvent, table: &LaunchTable) {
        match event {
            ControlEvent::SelectSite { site } => {
                if let SiteSelection::Site(name) = site {
                    if !table.has_site(name) {
                        log::warn!("⚠️ Unknown launch site selected: '{}'", name);
                    }
                }
                self.selected_site = site.clone();
            }
            ControlEvent::SetPayloadRange { low, high } => {
                if low > high {
                    log::warn!("⚠️ Inverted payload range [{}, {}] selects no launches", low, high);
                }
                self.payload_range = PayloadRange::new(*low, *high);
            }
            ControlEvent::Reset => {
                *self = Self::initial(table);
            }
        }
    }
}
