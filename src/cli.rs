use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Annum calendar heatmap renderer.
#[derive(Parser)]
#[command(name = "annum", version, about = "Calendar heatmap renderer: CSV in, SVG out")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render a CSV time series into a heatmap SVG.
    Render(RenderArgs),
    /// Print per-year statistics for a CSV time series.
    Summary(SummaryArgs),
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "annum.toml")]
    pub config: PathBuf,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output SVG path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `summary` subcommand.
#[derive(clap::Args)]
pub struct SummaryArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "annum.toml")]
    pub config: PathBuf,

    /// Override input CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
