use std::sync::Arc;
use crate::enums::pie_label_policy::PieLabelPolicy;
use crate::structs::config::slider_config::SliderConfig;
use crate::structs::launch_table::LaunchTable;

/// Everything a dashboard needs that never changes after startup.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    pub table: Arc<LaunchTable>,
    pub pie_label_policy: PieLabelPolicy,
    pub slider: SliderConfig,
}

impl DashboardContext {
    pub const fn new(table: Arc<LaunchTable>, pie_label_policy: PieLabelPolicy, slider: SliderConfig) -> Self {
        Self {
            table,
            pie_label_policy,
            slider,
        }
    }
}
