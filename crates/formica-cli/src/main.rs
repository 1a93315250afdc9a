//! Formica CLI - run and render ant colony simulations.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formica")]
#[command(author, version, about = "Formica - ant colony simulation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default formica.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite an existing formica.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Run the simulation
    Run {
        /// Number of ticks to run
        #[arg(short, long, default_value = "100")]
        ticks: u64,

        /// Seed overriding the configured one
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write a JSON snapshot here when the run finishes
        #[arg(long)]
        snapshot: Option<String>,
    },

    /// Draw colony territories to an SVG file
    Render {
        /// Output file path
        #[arg(short, long, default_value = "territory.svg")]
        output: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path, force } => commands::init::run(path, force),
        Commands::Run {
            ticks,
            seed,
            snapshot,
        } => commands::run::run(ticks, seed, snapshot, cli.verbose),
        Commands::Render { output } => commands::render::run(&output),
    }
}
