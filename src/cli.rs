use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Poseidon harmonic tide predictor.
#[derive(Parser)]
#[command(
    name = "poseidon",
    version,
    about = "Harmonic tide predictions for Puget Sound"
)]
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
    /// Predict tide heights for one shoreline segment.
    Predict(PredictArgs),
    /// List the station table, or show one station record.
    Stations(StationsArgs),
}

/// Arguments for the `predict` subcommand.
#[derive(clap::Args)]
pub struct PredictArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "poseidon.toml")]
    pub config: PathBuf,

    /// Override station table path from config.
    #[arg(long)]
    pub stations: Option<PathBuf>,

    /// Shoreline segment id to predict for.
    #[arg(short, long)]
    pub segment: Option<String>,

    /// Series start as "YYYY-MM-DD HH:MM" (default: the current minute).
    #[arg(long)]
    pub start: Option<String>,

    /// Time step between predictions, in minutes.
    #[arg(short, long)]
    pub interval: Option<f64>,

    /// Series length in days.
    #[arg(short, long)]
    pub length: Option<f64>,

    /// Treat the start time as UT and report row times in UTC.
    #[arg(long)]
    pub utc: bool,

    /// Report row times as fixed-width Julian Days.
    #[arg(long)]
    pub julian: bool,

    /// Report heights in feet instead of meters.
    #[arg(long)]
    pub feet: bool,

    /// Delimiter between the time and height columns.
    #[arg(long)]
    pub delimiter: Option<String>,

    /// Suppress the title block and write data rows only.
    #[arg(long)]
    pub no_title: bool,

    /// Write predictions to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `stations` subcommand.
#[derive(clap::Args)]
pub struct StationsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "poseidon.toml")]
    pub config: PathBuf,

    /// Override station table path from config.
    #[arg(long)]
    pub stations: Option<PathBuf>,

    /// Show the full record for this segment instead of the listing.
    #[arg(short, long)]
    pub segment: Option<String>,
}
