pub mod chart_renderer;
pub mod dashboard;
pub mod dashboard_server;
pub mod session_manager;
