use std::path::PathBuf;
use crate::config::constants::{
    DEFAULT_DATA_PATH, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SESSION_TTL_MINUTES,
    DEFAULT_SLIDER_MARK_STEP, DEFAULT_SLIDER_MAX, DEFAULT_SLIDER_MIN, DEFAULT_SLIDER_STEP,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_data_path() -> PathBuf {
        PathBuf::from(DEFAULT_DATA_PATH)
    }

    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub const fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub const fn default_session_ttl_minutes() -> u64 {
        DEFAULT_SESSION_TTL_MINUTES
    }

    pub const fn default_slider_min() -> f64 {
        DEFAULT_SLIDER_MIN
    }

    pub const fn default_slider_max() -> f64 {
        DEFAULT_SLIDER_MAX
    }

    pub const fn default_slider_step() -> f64 {
        DEFAULT_SLIDER_STEP
    }

    pub const fn default_slider_mark_step() -> f64 {
        DEFAULT_SLIDER_MARK_STEP
    }
}
