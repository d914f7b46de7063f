use serde::{Deserialize, Serialize};
use crate::enums::outcome_class::OutcomeClass;
use crate::enums::record_error::RecordError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub booster_version_category: String,
    pub outcome_class: OutcomeClass,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version_category: impl Into<String>,
        outcome_class: OutcomeClass,
    ) -> Result<Self, RecordError> {
        let record = Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version_category: booster_version_category.into(),
            outcome_class,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn validate(&self) -> Result<(), RecordError> {
        if self.launch_site.trim().is_empty() {
            return Err(RecordError::EmptySite);
        }
        if !self.payload_mass_kg.is_finite() {
            return Err(RecordError::NonFinitePayload);
        }
        if self.payload_mass_kg < 0.0 {
            return Err(RecordError::NegativePayload(self.payload_mass_kg));
        }
        Ok(())
    }
}
