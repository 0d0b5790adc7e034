//! Seaworthy CLI: simulation, benchmarking, and debugging.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "seaworthy")]
#[command(version, about = "Seaworthy: breakable ships on a shallow-water ocean")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation from a scenario config file.
    Simulate {
        /// Path to scenario config (TOML).
        #[arg(short, long, default_value = "scenario.toml")]
        config: PathBuf,

        /// Write every simulation event to this JSON lines file.
        #[arg(long)]
        events: Option<PathBuf>,

        /// Directory for periodic snapshots (see `snapshot_every`).
        #[arg(long, default_value = ".")]
        snapshot_dir: PathBuf,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (calm_sea, storm, tsunami_strike, overload_raft, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output file; `.json` writes JSON, anything else CSV.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect a state snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: PathBuf,
    },

    /// Validate a scenario config.
    Validate {
        /// Path to config file (TOML).
        path: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            events,
            snapshot_dir,
        } => commands::simulate(&config, events.as_deref(), &snapshot_dir),
        Commands::Benchmark { scenario, output } => {
            commands::benchmark(&scenario, output.as_deref())
        }
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
