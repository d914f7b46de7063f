// Tests for configuration loading and sample generation

use std::fs;
use spacex_dash::config::config_manager::ConfigManager;
use spacex_dash::enums::pie_label_policy::PieLabelPolicy;
use spacex_dash::errors::DashError;
use spacex_dash::structs::config::config::Config;
use tempfile::TempDir;

use crate::common::fixture_path;

#[test]
fn test_sample_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    ConfigManager::create_sample_config(&path).unwrap();
    let config = ConfigManager::load(Some(path.as_path())).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server]\nport = 1\n").unwrap();

    let err = ConfigManager::create_sample_config(&path).unwrap_err();
    assert!(matches!(err, DashError::ConfigurationError { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), "[server]\nport = 1\n");
}

#[test]
fn test_explicit_missing_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = ConfigManager::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(matches!(err, DashError::ConfigurationFileError { .. }));
}

#[test]
fn test_malformed_config_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[slider]\nmin = \"zero\"\n").unwrap();

    match ConfigManager::load(Some(path.as_path())).unwrap_err() {
        DashError::ConfigurationFileError { path: reported, .. } => {
            assert_eq!(reported, path.display().to_string());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_valid_config_with_fixture() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        format!(
            "[data]\npath = {:?}\n\n[charts]\npie_label_policy = \"corrected\"\n",
            fixture_path().display().to_string()
        ),
    )
    .unwrap();

    let config = ConfigManager::load(Some(path.as_path())).unwrap();
    assert_eq!(config.charts.pie_label_policy, PieLabelPolicy::Corrected);
    assert!(ConfigManager::validate_config(&config).is_ok());
}
