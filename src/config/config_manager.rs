use std::path::{Path, PathBuf};
use std::fs;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{DashError, DashResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# SpaceX Launch Records Dashboard configuration

[data]
# CSV with "Launch Site", "Payload Mass (kg)", "Booster Version Category" and "class" columns
path = "spacex_launch_dash.csv"

[server]
host = "127.0.0.1"
port = 8050
# Open the dashboard in the default browser once the server is up
open_browser = false
# Idle dashboard sessions are dropped after this many minutes
session_ttl_minutes = 60

[slider]
# Bounds and granularity of the payload range slider (kg)
min = 0.0
max = 10000.0
step = 1000.0
mark_step = 2500.0

[charts]
# "legacy": keep the historical output, where a site whose launches all failed
#           shows a single slice labelled "Success"
# "corrected": label that slice "Failed"
pie_label_policy = "legacy"
"#;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `explicit` if given (it must exist), else the home config if present, else defaults.
    pub fn load(explicit: Option<&Path>) -> DashResult<Config> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(DashError::config_file_error(&path.display().to_string(), "file does not exist"));
            }
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("No config file found, using built-in defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> DashResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| DashError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        Self::parse(&content)
            .map_err(|e| DashError::config_file_error(&path.display().to_string(), &e.to_string()))
    }

    pub fn parse(content: &str) -> DashResult<Config> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn create_sample_config(path: &Path) -> DashResult<()> {
        if path.exists() {
            return Err(DashError::config_error(
                "Configuration file already exists",
                Some(&path.display().to_string()),
                Some("Edit the existing file or remove it first"),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !config.data.path.exists() {
            errors.push(format!("Dataset path does not exist: {}", config.data.path.display()));
        }

        if config.server.host.trim().is_empty() {
            errors.push("Server host must not be empty".to_string());
        }

        if config.server.session_ttl_minutes == 0 {
            errors.push("session_ttl_minutes must be greater than zero".to_string());
        }

        let slider = &config.slider;
        if slider.min < 0.0 {
            errors.push(format!("Slider min must not be negative: {}", slider.min));
        }
        if slider.min >= slider.max {
            errors.push(format!("Slider min ({}) must be below max ({})", slider.min, slider.max));
        }
        if slider.step <= 0.0 {
            errors.push(format!("Slider step must be positive: {}", slider.step));
        }
        if slider.mark_step <= 0.0 {
            errors.push(format!("Slider mark_step must be positive: {}", slider.mark_step));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::pie_label_policy::PieLabelPolicy;

    #[test]
    fn test_sample_config_parses_to_defaults() {
        let config = ConfigManager::parse(SAMPLE_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = ConfigManager::parse("[server]\nport = 9000\n\n[charts]\npie_label_policy = \"corrected\"\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.slider.step, 1000.0);
        assert_eq!(config.charts.pie_label_policy, PieLabelPolicy::Corrected);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = ConfigManager::parse("[server\nport = ").unwrap_err();
        assert!(matches!(err, DashError::ParseError { .. }));
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let mut config = Config::default();
        config.data.path = PathBuf::from("/definitely/not/here.csv");
        config.slider.min = 5000.0;
        config.slider.max = 1000.0;
        config.slider.step = 0.0;

        let errors = ConfigManager::validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
