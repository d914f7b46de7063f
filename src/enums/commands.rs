use std::path::PathBuf;
use clap::Subcommand;
use crate::config::constants::ALL_SITES;
use crate::enums::chart_kind::ChartKind;

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Serve the interactive dashboard
    Serve {
        #[clap(short, long)]
        data: Option<PathBuf>,
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        open: bool,
    },
    /// Print dataset statistics
    Inspect {
        #[clap(short, long)]
        data: Option<PathBuf>,
    },
    /// Print one chart as JSON
    Chart {
        #[clap(value_enum)]
        kind: ChartKind,
        #[clap(short, long, default_value = ALL_SITES)]
        site: String,
        #[clap(long)]
        low: Option<f64>,
        #[clap(long)]
        high: Option<f64>,
        #[clap(short, long)]
        data: Option<PathBuf>,
        #[clap(long)]
        raw: bool,
    },
    /// Check the configuration and dataset
    Validate,
}
