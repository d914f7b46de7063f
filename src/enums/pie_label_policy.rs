use serde::{Deserialize, Serialize};

/// How a single-site pie labels a site whose launches all failed.
///
/// `Legacy` keeps the historical dashboard output, which labels the lone
/// class-0 slice "Success". `Corrected` labels it "Failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieLabelPolicy {
    Corrected,
    #[default]
    Legacy,
}
