//! Command-line parsing for the curve alignment engine.
//!
//! Argument parsing and command dispatch stay separate from the engine code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::data::DEMO_SEED;
use crate::domain::RateUnit;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cspread", version, about = "Curve alignment, spread and axis planning")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Align a curve-set JSON, compute the visible spread, and plan axes.
    Chart(ChartArgs),
    /// Compute the spread between two named curves regardless of visibility.
    Spread(SpreadArgs),
    /// Run the chart pipeline on seeded synthetic curves.
    Demo(DemoArgs),
}

/// Presentation and toggle options shared by `chart` and `demo`.
#[derive(Debug, Args, Clone)]
pub struct ViewArgs {
    /// Force a curve visible (repeatable).
    #[arg(long, value_name = "KEY")]
    pub show: Vec<String>,

    /// Force a curve hidden (repeatable, applied after --show).
    #[arg(long, value_name = "KEY")]
    pub hide: Vec<String>,

    /// Print the run as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Render an ASCII plot below the report.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Write the run (rows, spread, axes, curve metadata) to a JSON file.
    #[arg(long = "export-json", value_name = "PATH")]
    pub export_json: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct ChartArgs {
    /// Curve-set JSON file.
    #[arg(short, long, value_name = "JSON")]
    pub input: PathBuf,

    /// Default unit for curves that do not declare one (overrides the file).
    #[arg(long, value_enum)]
    pub unit: Option<RateUnit>,

    #[command(flatten)]
    pub view: ViewArgs,
}

#[derive(Debug, Args, Clone)]
pub struct SpreadArgs {
    /// Curve-set JSON file.
    #[arg(short, long, value_name = "JSON")]
    pub input: PathBuf,

    /// Default unit for curves that do not declare one (overrides the file).
    #[arg(long, value_enum)]
    pub unit: Option<RateUnit>,

    /// Key of the minuend curve.
    #[arg(short = 'a', long = "a", value_name = "KEY")]
    pub a: String,

    /// Key of the subtrahend curve.
    #[arg(short = 'b', long = "b", value_name = "KEY")]
    pub b: String,
}

#[derive(Debug, Args, Clone)]
pub struct DemoArgs {
    /// Seed for the synthetic curves.
    #[arg(long, default_value_t = DEMO_SEED)]
    pub seed: u64,

    #[command(flatten)]
    pub view: ViewArgs,
}
