pub mod dataset_logger;
