use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use serde::Deserialize;
use crate::config::constants::REQUIRED_COLUMNS;
use crate::enums::outcome_class::OutcomeClass;
use crate::enums::record_error::RecordError;
use crate::errors::{DashError, DashResult};
use crate::structs::launch_record::LaunchRecord;
use crate::structs::launch_table::LaunchTable;
use crate::structs::loaded_dataset::LoadedDataset;

#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
    #[serde(rename = "class")]
    class: f64,
}

pub struct DatasetLoader;

impl DatasetLoader {

    pub fn load(path: &Path) -> DashResult<LoadedDataset> {
        let source = path.display().to_string();
        let file = File::open(path)
            .map_err(|e| DashError::dataset_error(&source, None, &format!("cannot open file: {e}")))?;
        Self::from_reader(file, &source)
    }

    pub fn from_reader<R: Read>(reader: R, source: &str) -> DashResult<LoadedDataset> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = csv_reader
            .headers()
            .map_err(|e| DashError::dataset_error(source, None, &format!("cannot read header row: {e}")))?
            .iter()
            .map(ToString::to_string)
            .collect();

        for required in REQUIRED_COLUMNS {
            if !columns.iter().any(|c| c == required) {
                return Err(DashError::missing_column(source, required, &columns));
            }
        }

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<RawLaunchRow>().enumerate() {
            let row_number = index + 1;
            let raw = row.map_err(|e| DashError::dataset_error(source, Some(row_number), &e.to_string()))?;
            let record = Self::to_record(raw)
                .map_err(|e| DashError::dataset_error(source, Some(row_number), &e.to_string()))?;
            records.push(record);
        }

        let table = LaunchTable::new(records)
            .map_err(|e| DashError::dataset_error(source, e.row(), &e.to_string()))?;

        log::info!(
            "📦 Loaded {} launch records from {} ({} sites, payload {} - {} kg)",
            table.len(),
            source,
            table.sites().len(),
            table.min_payload(),
            table.max_payload()
        );

        Ok(LoadedDataset {
            source: source.to_string(),
            columns,
            table: Arc::new(table),
        })
    }

    fn to_record(raw: RawLaunchRow) -> Result<LaunchRecord, RecordError> {
        let outcome_class = OutcomeClass::from_raw(raw.class)?;
        LaunchRecord::new(
            raw.launch_site,
            raw.payload_mass_kg,
            raw.booster_version_category,
            outcome_class,
        )
    }
}
