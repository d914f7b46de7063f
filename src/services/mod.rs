pub mod dataset_loader;
pub mod launch_aggregator;
