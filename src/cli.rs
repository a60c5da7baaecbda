use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lumen_lightcurve::Color;
use lumen_thermo::Conversion;

/// Lumen temperature and light-curve toolkit.
#[derive(Parser)]
#[command(
    name = "lumen",
    version,
    about = "Temperature conversions and light-curve rendering"
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
    /// Convert temperatures between Fahrenheit, Celsius and Kelvin.
    Convert(ConvertArgs),
    /// Render a light curve and emit the recorded plot calls as JSON.
    Render(RenderArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// One of fahr-to-celsius, celsius-to-kelvin, fahr-to-kelvin.
    pub conversion: Conversion,

    /// Temperatures to convert.
    #[arg(required = true, allow_negative_numbers = true)]
    pub values: Vec<f64>,
}

/// Arguments for the `render` subcommand.
#[derive(clap::Args)]
pub struct RenderArgs {
    /// Path to TOML configuration file holding the `[curve]` table.
    #[arg(short, long, default_value = "lumen.toml")]
    pub config: PathBuf,

    /// Override the colour hint from config.
    #[arg(long)]
    pub color: Option<Color>,

    /// Reject missing or ragged series instead of recording them.
    #[arg(long)]
    pub strict: bool,

    /// Check that all present sequences have equal length before rendering.
    #[arg(long)]
    pub validate: bool,

    /// Write the JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
