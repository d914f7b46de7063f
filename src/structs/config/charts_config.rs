use serde::{Deserialize, Serialize};
use crate::enums::pie_label_policy::PieLabelPolicy;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartsConfig {
    #[serde(default)]
    pub pie_label_policy: PieLabelPolicy,
}
