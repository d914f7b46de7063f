use std::sync::Arc;
use crate::structs::launch_table::LaunchTable;

/// A launch table together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub source: String,
    pub columns: Vec<String>,
    pub table: Arc<LaunchTable>,
}
