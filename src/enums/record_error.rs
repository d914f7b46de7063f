use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("launch site is empty")]
    EmptySite,

    #[error("payload mass {0} kg is negative")]
    NegativePayload(f64),

    #[error("payload mass is not a finite number")]
    NonFinitePayload,

    #[error("class must be 0 or 1, found {0}")]
    InvalidClass(f64),

    #[error("row {row}: {reason}")]
    InvalidRow { row: usize, reason: Box<RecordError> },

    #[error("table contains no launch records")]
    EmptyTable,
}

impl RecordError {
    pub fn at_row(self, row: usize) -> Self {
        Self::InvalidRow { row, reason: Box::new(self) }
    }

    pub const fn row(&self) -> Option<usize> {
        match self {
            Self::InvalidRow { row, .. } => Some(*row),
            _ => None,
        }
    }
}
