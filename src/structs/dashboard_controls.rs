use serde::{Deserialize, Serialize};
use crate::config::constants::{ALL_SITES, ALL_SITES_LABEL, DASHBOARD_TITLE};
use crate::structs::dashboard_context::DashboardContext;
use crate::structs::payload_range::PayloadRange;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
}

/// Static description of the control widgets sent to the page once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardControls {
    pub title: String,
    pub site_options: Vec<SiteOption>,
    pub slider: SliderSpec,
    pub default_range: PayloadRange,
}

impl DashboardControls {
    pub fn from_context(context: &DashboardContext) -> Self {
        let mut site_options = vec![SiteOption {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES.to_string(),
        }];
        site_options.extend(context.table.sites().iter().map(|site| SiteOption {
            label: site.clone(),
            value: site.clone(),
        }));

        Self {
            title: DASHBOARD_TITLE.to_string(),
            site_options,
            slider: SliderSpec {
                min: context.slider.min,
                max: context.slider.max,
                step: context.slider.step,
                marks: context.slider.marks(),
            },
            default_range: PayloadRange::new(context.table.min_payload(), context.table.max_payload()),
        }
    }
}
