//! lutconv - 3D LUT converter CLI
//!
//! Converts between .cube text LUTs and tiled strip-image PNGs, with
//! optional resampling to a different grid size.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "lutconv")]
#[command(author, version, about = "3D LUT converter: .cube <-> strip image")]
#[command(long_about = "
Converts 3D color LUTs between the .cube text format and the tiled
strip-image convention used by color-grading tools.

Examples:
  lutconv info grade.cube                  # Show LUT info
  lutconv info grade.cube --stats          # Add value statistics
  lutconv convert grade.cube -o grade.png  # Cube to strip image
  lutconv convert grade.png -o grade.cube  # Strip image back to cube
  lutconv convert big.cube -o small.cube --size 16 16 16 --mode linear
  lutconv convert odd.png -o out.cube --input-size 8 8 64
  lutconv identity --size 33 -o neutral.cube
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Display LUT information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Convert between LUT containers, optionally resampling
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Generate an identity LUT
    #[command(visible_alias = "id")]
    Identity(IdentityArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input LUT (.cube or .png)
    input: PathBuf,

    /// Grid dimensions of a strip image whose canvas is not a preset
    #[arg(long, num_args = 3, value_names = ["W", "H", "D"])]
    input_size: Option<Vec<usize>>,

    /// Show value statistics
    #[arg(short, long)]
    stats: bool,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input LUT (.cube or .png)
    input: PathBuf,

    /// Output LUT (.cube or .png)
    #[arg(short, long)]
    output: PathBuf,

    /// Target grid dimensions (default: keep the input's)
    #[arg(short, long, num_args = 3, value_names = ["W", "H", "D"])]
    size: Option<Vec<usize>>,

    /// Resampling filter: nearest, linear
    #[arg(short, long, default_value = "linear")]
    mode: String,

    /// Grid dimensions of a strip input whose canvas is not a preset
    #[arg(long, num_args = 3, value_names = ["W", "H", "D"])]
    input_size: Option<Vec<usize>>,

    /// Canvas size for a strip output (default: auto)
    #[arg(long, num_args = 2, value_names = ["W", "H"])]
    image_size: Option<Vec<usize>>,

    /// Title header for cube output
    #[arg(short, long, default_value = "Created by lutconv")]
    title: String,
}

#[derive(Args)]
struct IdentityArgs {
    /// Cube edge length (the grid is size^3)
    #[arg(short, long)]
    size: usize,

    /// Output LUT (.cube or .png)
    #[arg(short, long)]
    output: PathBuf,

    /// Title header for cube output
    #[arg(short, long, default_value = "Created by lutconv")]
    title: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to warnings only; -v raises our own crates to debug.
    let default_filter = if cli.verbose {
        "warn,lutconv_core=debug,lutconv_io=debug,lutconv_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Identity(args) => commands::identity::run(args, cli.verbose),
    }
}
