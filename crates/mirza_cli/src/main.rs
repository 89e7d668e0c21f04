//! Mirza CLI - inspect colors and palettes
//!
//! ```text
//! mirza color "#4389C2" --lightness 25 --variants
//! mirza color FF0000 --mix FFFFFF --percent 0.2
//! mirza palettes
//! mirza palette social --format json
//! mirza random --count 5 --seed 7
//! ```

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands::ColorArgs;
use crate::config::{MirzaConfig, OutputFormat};

/// Color values, variants and palettes on a 0-100 RGBA scale
#[derive(Parser, Debug)]
#[command(name = "mirza")]
#[command(about = "Color values, variants and palettes on a 0-100 RGBA scale")]
#[command(version)]
struct Args {
    /// Config file (defaults to ./mirza.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a hex color and apply derivations
    Color(ColorArgs),

    /// List built-in and configured palettes
    Palettes,

    /// Show one palette with its light-to-dark variants
    Palette {
        /// Palette id or name (defaults to the configured default)
        name: Option<String>,
    },

    /// Generate random opaque colors
    Random {
        /// How many colors to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Seed for repeatable output
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose);

    let config = MirzaConfig::load(args.config.as_deref())?;
    let format = args.format.unwrap_or(config.output.format);

    let output = match &args.command {
        Command::Color(color_args) => commands::color(color_args, format)?,
        Command::Palettes => {
            let palettes = commands::all_palettes(&config)?;
            commands::list_palettes(&palettes, format)?
        }
        Command::Palette { name } => {
            let name = name.as_deref().unwrap_or(&config.palettes.default);
            tracing::info!("showing palette {}", name);
            let palette = commands::find_palette(&config, name)?;
            commands::show_palette(&palette, format)?
        }
        Command::Random { count, seed } => commands::random(*count, *seed, format)?,
    };

    println!("{output}");
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
