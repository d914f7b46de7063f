pub mod cli;
pub mod config;
pub mod control_state;
pub mod dashboard_context;
pub mod dashboard_controls;
pub mod dashboard_view;
pub mod figure;
pub mod launch_record;
pub mod launch_table;
pub mod loaded_dataset;
pub mod payload_range;
pub mod pie_chart_data;
pub mod scatter_chart_data;
