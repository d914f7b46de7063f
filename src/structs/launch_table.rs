use std::collections::BTreeMap;
use crate::enums::outcome_class::OutcomeClass;
use crate::enums::record_error::RecordError;
use crate::structs::launch_record::LaunchRecord;

/// The immutable, in-memory launch dataset.
///
/// Built once at startup and shared read-only for the life of the process.
/// `sites` keeps first-appearance order so dropdown options and pie slices
/// follow the order of the source file.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    min_payload: f64,
    max_payload: f64,
}

impl LaunchTable {
    pub fn new(records: Vec<LaunchRecord>) -> Result<Self, RecordError> {
        if records.is_empty() {
            return Err(RecordError::EmptyTable);
        }

        let mut sites: Vec<String> = Vec::new();
        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for (index, record) in records.iter().enumerate() {
            record.validate().map_err(|e| e.at_row(index + 1))?;

            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
        }

        Ok(Self {
            records,
            sites,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites in first-appearance order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub const fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub const fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn class_distribution(&self) -> BTreeMap<OutcomeClass, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.outcome_class).or_insert(0) += 1;
        }
        counts
    }
}
