use crate::enums::outcome_class::OutcomeClass;
use crate::structs::loaded_dataset::LoadedDataset;

pub struct DatasetLogger;

impl DatasetLogger {

    pub fn log_summary(dataset: &LoadedDataset) {
        let table = &dataset.table;
        let distribution = table.class_distribution();

        log::info!("📊 Dataset: {}", dataset.source);
        log::info!("   Total records: {}", table.len());
        log::info!("   Columns: {}", dataset.columns.join(", "));
        log::info!("   Launch Sites: {}", table.sites().join(", "));
        log::info!("   Payload range: {} - {} kg", table.min_payload(), table.max_payload());
        log::info!(
            "   Class distribution: failure={} success={}",
            distribution.get(&OutcomeClass::Failure).copied().unwrap_or(0),
            distribution.get(&OutcomeClass::Success).copied().unwrap_or(0)
        );
    }

    pub fn print_summary(dataset: &LoadedDataset) {
        let table = &dataset.table;
        let distribution = table.class_distribution();

        println!("\n📊 Dataset Info");
        println!("═══════════════════════════════════════");
        println!("   Source: {}", dataset.source);
        println!("   Total records: {}", table.len());
        println!("   Columns: {}", dataset.columns.join(", "));
        println!("   Payload range: {} - {} kg", table.min_payload(), table.max_payload());
        println!("   Class distribution:");
        for (class, count) in &distribution {
            println!("      {}: {}", class, count);
        }

        println!("\n🚀 Launch Sites:");
        println!("   {:<24} {:>8} {:>10} {:>8}", "Site", "Launches", "Successes", "Rate");
        for site in table.sites() {
            let launches = table.records().iter().filter(|r| &r.launch_site == site).count();
            let successes = table
                .records()
                .iter()
                .filter(|r| &r.launch_site == site && r.outcome_class.is_success())
                .count();
            #[allow(clippy::cast_precision_loss)]
            let rate = if launches == 0 { 0.0 } else { successes as f64 / launches as f64 * 100.0 };
            println!("   {:<24} {:>8} {:>10} {:>7.1}%", site, launches, successes, rate);
        }
        println!("═══════════════════════════════════════");
    }
}
