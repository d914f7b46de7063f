use serde::{Deserialize, Serialize};
use crate::enums::site_selection::SiteSelection;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

/// Ordered label/count slices for the success pie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieChartData {
    pub site: SiteSelection,
    pub slices: Vec<PieSlice>,
}

impl PieChartData {
    pub fn get(&self, label: &str) -> Option<usize> {
        self.slices.iter().find(|s| s.label == label).map(|s| s.value)
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.slices.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<usize> {
        self.slices.iter().map(|s| s.value).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
