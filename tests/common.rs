use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use spacex_dash::enums::outcome_class::OutcomeClass;
use spacex_dash::enums::pie_label_policy::PieLabelPolicy;
use spacex_dash::services::dataset_loader::DatasetLoader;
use spacex_dash::structs::config::slider_config::SliderConfig;
use spacex_dash::structs::dashboard_context::DashboardContext;
use spacex_dash::structs::launch_record::LaunchRecord;
use spacex_dash::structs::launch_table::LaunchTable;
use spacex_dash::ui::session_manager::SessionManager;

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/launches.csv")
}

pub fn fixture_table() -> Arc<LaunchTable> {
    DatasetLoader::load(&fixture_path()).expect("fixture loads").table
}

/// The three-row table used in the dashboard's worked example.
pub fn example_table() -> LaunchTable {
    LaunchTable::new(vec![
        LaunchRecord::new("SiteA", 500.0, "v1", OutcomeClass::Success).unwrap(),
        LaunchRecord::new("SiteA", 700.0, "v1", OutcomeClass::Failure).unwrap(),
        LaunchRecord::new("SiteB", 600.0, "v2", OutcomeClass::Success).unwrap(),
    ])
    .unwrap()
}

pub fn session_manager(table: Arc<LaunchTable>) -> Arc<SessionManager> {
    let context = DashboardContext::new(table, PieLabelPolicy::Corrected, SliderConfig::default());
    Arc::new(SessionManager::new(Arc::new(context), Duration::from_secs(600)))
}
