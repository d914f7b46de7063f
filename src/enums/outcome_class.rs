use std::fmt;
use serde::{Deserialize, Serialize};
use crate::enums::record_error::RecordError;

/// Binary launch outcome, stored in the dataset's `class` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OutcomeClass {
    Failure = 0,
    Success = 1,
}

impl OutcomeClass {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Accepts `0`/`1` as well as `0.0`/`1.0`, which is how some exports write the column.
    pub fn from_raw(value: f64) -> Result<Self, RecordError> {
        if value == 0.0 {
            Ok(Self::Failure)
        } else if (value - 1.0).abs() < f64::EPSILON {
            Ok(Self::Success)
        } else {
            Err(RecordError::InvalidClass(value))
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(value: OutcomeClass) -> Self {
        value.as_u8()
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = RecordError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_raw(f64::from(value))
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
