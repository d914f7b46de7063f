use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    #[serde(default = "ConfigHelper::default_slider_min")]
    pub min: f64,

    #[serde(default = "ConfigHelper::default_slider_max")]
    pub max: f64,

    #[serde(default = "ConfigHelper::default_slider_step")]
    pub step: f64,

    #[serde(default = "ConfigHelper::default_slider_mark_step")]
    pub mark_step: f64,
}

impl SliderConfig {
    /// Tick marks from `min` to `max` inclusive, `mark_step` apart.
    pub fn marks(&self) -> Vec<f64> {
        let mut marks = Vec::new();
        if self.mark_step <= 0.0 || self.min > self.max {
            return marks;
        }
        let mut mark = self.min;
        while mark <= self.max {
            marks.push(mark);
            mark += self.mark_step;
        }
        marks
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: ConfigHelper::default_slider_min(),
            max: ConfigHelper::default_slider_max(),
            step: ConfigHelper::default_slider_step(),
            mark_step: ConfigHelper::default_slider_mark_step(),
        }
    }
}
