use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "spacex-dash")]
#[clap(about = "SpaceX launch records dashboard", long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to ~/spacex-dash/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
