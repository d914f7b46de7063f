use serde::{Deserialize, Serialize};
use crate::structs::config::charts_config::ChartsConfig;
use crate::structs::config::data_config::DataConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::config::slider_config::SliderConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub slider: SliderConfig,

    #[serde(default)]
    pub charts: ChartsConfig,
}
