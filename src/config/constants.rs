use std::time::Duration;

pub const ALL_SITES: &str = "ALL";
pub const ALL_SITES_LABEL: &str = "All Sites";

pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8050;
pub const SERVER_PORT_SEARCH_SPAN: u16 = 20;
pub const DEFAULT_SESSION_TTL_MINUTES: u64 = 60;
pub const MAX_SESSION_ID_LENGTH: usize = 64;
pub const CONFIG_DIR_NAME: &str = "spacex-dash";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_SLIDER_MIN: f64 = 0.0;
pub const DEFAULT_SLIDER_MAX: f64 = 10000.0;
pub const DEFAULT_SLIDER_STEP: f64 = 1000.0;
pub const DEFAULT_SLIDER_MARK_STEP: f64 = 2500.0;

pub const COLUMN_LAUNCH_SITE: &str = "Launch Site";
pub const COLUMN_PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const COLUMN_BOOSTER_CATEGORY: &str = "Booster Version Category";
pub const COLUMN_CLASS: &str = "class";

pub const REQUIRED_COLUMNS: &[&str] = &[
    COLUMN_LAUNCH_SITE,
    COLUMN_PAYLOAD_MASS,
    COLUMN_BOOSTER_CATEGORY,
    COLUMN_CLASS,
];

pub const LABEL_FAILED: &str = "Failed";
pub const LABEL_SUCCESS: &str = "Success";
pub const TICK_FAILURE: &str = "Failure";
pub const TICK_SUCCESS: &str = "Success";

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const PIE_TITLE_ALL: &str = "Total Success Launches By Site";
pub const PIE_TITLE_SITE_PREFIX: &str = "Total Success Launches for site";
pub const SCATTER_TITLE_ALL: &str = "Correlation between Payload and Success for all Sites";
pub const SCATTER_TITLE_SITE_PREFIX: &str = "Correlation between Payload and Success for site";
pub const AXIS_PAYLOAD: &str = "Payload Mass (kg)";
pub const AXIS_OUTCOME: &str = "Launch Outcome";
pub const GRID_COLOR: &str = "LightGray";

/// Plotly's Set3 qualitative palette.
pub const PALETTE_SET3: &[&str] = &[
    "rgb(141,211,199)",
    "rgb(255,255,179)",
    "rgb(190,186,218)",
    "rgb(251,128,114)",
    "rgb(128,177,211)",
    "rgb(253,180,98)",
    "rgb(179,222,105)",
    "rgb(252,205,229)",
    "rgb(217,217,217)",
    "rgb(188,128,189)",
    "rgb(204,235,197)",
    "rgb(255,237,111)",
];

/// Failed / Success slice colors for a single site.
pub const PALETTE_OUTCOME: &[&str] = &["#ff7f7f", "#7fbf7f"];

/// Plotly's default qualitative palette, used for booster categories.
pub const PALETTE_PLOTLY: &[&str] = &[
    "#636efa", "#EF553B", "#00cc96", "#ab63fa", "#FFA15A",
    "#19d3f3", "#FF6692", "#B6E880", "#FF97FF", "#FECB52",
];

pub const SCATTER_MAX_MARKER_PX: f64 = 20.0;

pub const fn session_ttl(minutes: u64) -> Duration {
    Duration::from_secs(minutes.saturating_mul(60))
}
