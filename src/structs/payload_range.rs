use serde::{Deserialize, Serialize};

/// Inclusive payload window in kg. `low > high` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let range = PayloadRange::new(500.0, 700.0);
        assert!(range.contains(500.0));
        assert!(range.contains(700.0));
        assert!(!range.contains(499.9));
        assert!(!range.contains(700.1));
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let range = PayloadRange::new(700.0, 500.0);
        assert!(range.is_inverted());
        assert!(!range.contains(600.0));
        assert!(!range.contains(500.0));
    }
}
