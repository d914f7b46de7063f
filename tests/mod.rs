// Integration tests for the launch dashboard

mod common;
mod config_tests;
mod server_tests;
