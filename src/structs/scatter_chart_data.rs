use serde::{Deserialize, Serialize};
use crate::enums::outcome_class::OutcomeClass;
use crate::enums::site_selection::SiteSelection;
use crate::structs::payload_range::PayloadRange;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: OutcomeClass,
    pub booster_version_category: String,
    /// Hover detail, only attached when every site is shown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_site: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartData {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChartData {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Booster categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for point in &self.points {
            if !categories.contains(&point.booster_version_category.as_str()) {
                categories.push(&point.booster_version_category);
            }
        }
        categories
    }
}
