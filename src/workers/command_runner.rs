use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::session_ttl;
use crate::enums::chart_kind::ChartKind;
use crate::enums::commands::Commands;
use crate::enums::site_selection::SiteSelection;
use crate::errors::{DashError, DashResult};
use crate::logger::dataset_logger::DatasetLogger;
use crate::services::dataset_loader::DatasetLoader;
use crate::services::launch_aggregator::LaunchAggregator;
use crate::structs::config::config::Config;
use crate::structs::dashboard_context::DashboardContext;
use crate::structs::loaded_dataset::LoadedDataset;
use crate::structs::payload_range::PayloadRange;
use crate::ui::chart_renderer::ChartRenderer;
use crate::ui::dashboard_server::DashboardServer;
use crate::ui::session_manager::SessionManager;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> DashResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Serve { data, host, port, open } => self.serve_command(data, host, port, open).await,
            Commands::Inspect { data } => self.inspect_command(data),
            Commands::Chart { kind, site, low, high, data, raw } => {
                self.chart_command(kind, &site, low, high, data, raw)
            }
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> DashResult<()> {
        log::info!("🚀 Initializing dashboard configuration...");

        let path = match &self.config_path {
            Some(path) => path.clone(),
            None => ConfigManager::default_config_path().ok_or_else(|| {
                DashError::config_error("Cannot determine home directory", None, Some("Pass --config <path>"))
            })?,
        };

        ConfigManager::create_sample_config(&path)?;
        log::info!("📝 Point [data].path at your launch CSV, then run 'spacex-dash serve'.");
        Ok(())
    }

    async fn serve_command(
        &self,
        data: Option<PathBuf>,
        host: Option<String>,
        port: Option<u16>,
        open: bool,
    ) -> DashResult<()> {
        let mut config = self.load_config()?;
        Self::apply_overrides(&mut config, data, host, port, open);

        let dataset = Self::load_dataset(&config.data.path)?;
        DatasetLogger::log_summary(&dataset);

        let context = DashboardContext::new(
            Arc::clone(&dataset.table),
            config.charts.pie_label_policy,
            config.slider,
        );
        let session_manager = Arc::new(SessionManager::new(
            Arc::new(context),
            session_ttl(config.server.session_ttl_minutes),
        ));

        let mut server = DashboardServer::new(session_manager);
        let address = server.start(&config.server.host, config.server.port).await?;
        let url = format!("http://{address}/");

        log::info!("✅ Dashboard ready at {}", url);
        if config.server.open_browser {
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser: {}", e);
            }
        }
        log::info!("Press Ctrl-C to stop");

        tokio::signal::ctrl_c().await?;
        server.shutdown()
    }

    fn inspect_command(&self, data: Option<PathBuf>) -> DashResult<()> {
        let mut config = self.load_config()?;
        Self::apply_overrides(&mut config, data, None, None, false);

        let dataset = Self::load_dataset(&config.data.path)?;
        DatasetLogger::print_summary(&dataset);
        Ok(())
    }

    fn chart_command(
        &self,
        kind: ChartKind,
        site: &str,
        low: Option<f64>,
        high: Option<f64>,
        data: Option<PathBuf>,
        raw: bool,
    ) -> DashResult<()> {
        let mut config = self.load_config()?;
        Self::apply_overrides(&mut config, data, None, None, false);

        let dataset = Self::load_dataset(&config.data.path)?;
        let table = &dataset.table;
        let site = SiteSelection::from(site);

        let output = match kind {
            ChartKind::Pie => {
                let pie = LaunchAggregator::pie_data(table, &site, config.charts.pie_label_policy);
                if raw {
                    serde_json::to_string_pretty(&pie)?
                } else {
                    serde_json::to_string_pretty(&ChartRenderer::render_pie(&pie))?
                }
            }
            ChartKind::Scatter => {
                let range = PayloadRange::new(
                    low.unwrap_or_else(|| table.min_payload()),
                    high.unwrap_or_else(|| table.max_payload()),
                );
                let scatter = LaunchAggregator::scatter_data(table, &site, range);
                if raw {
                    serde_json::to_string_pretty(&scatter)?
                } else {
                    serde_json::to_string_pretty(&ChartRenderer::render_scatter(&scatter))?
                }
            }
        };

        println!("{output}");
        Ok(())
    }

    fn validate_command(&self) -> DashResult<()> {
        log::info!("🔍 Validating configuration...");
        let config = self.load_config()?;

        let mut errors: Vec<DashError> = Vec::new();
        if let Err(problems) = ConfigManager::validate_config(&config) {
            errors.extend(problems.iter().map(|p| DashError::config_error(p, None, None)));
        }

        if config.data.path.exists() {
            match Self::load_dataset(&config.data.path) {
                Ok(dataset) => DatasetLogger::log_summary(&dataset),
                Err(e) => errors.push(e),
            }
        }

        if errors.is_empty() {
            log::info!("✅ Configuration and dataset are valid");
            Ok(())
        } else {
            Err(DashError::MultipleErrors {
                errors,
                context: "validation".to_string(),
            })
        }
    }

    fn load_config(&self) -> DashResult<Config> {
        ConfigManager::load(self.config_path.as_deref())
    }

    fn load_dataset(path: &Path) -> DashResult<LoadedDataset> {
        log::info!("📂 Loading launch records from {}", path.display());
        DatasetLoader::load(path)
    }

    fn apply_overrides(
        config: &mut Config,
        data: Option<PathBuf>,
        host: Option<String>,
        port: Option<u16>,
        open: bool,
    ) {
        if let Some(data) = data {
            config.data.path = data;
        }
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }
        if open {
            config.server.open_browser = true;
        }
    }
}
