pub mod charts_config;
pub mod config;
pub mod data_config;
pub mod server_config;
pub mod slider_config;
