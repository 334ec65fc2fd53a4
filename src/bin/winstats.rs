//! winstats CLI - Exhaustive win statistics for N-player Tic-Tac-Toe
//!
//! This CLI provides a unified interface for:
//! - Computing per-position win statistics on any square board
//! - Comparing brute-force and symmetry-pruned search
//! - Inspecting the symmetries of a board

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "winstats")]
#[command(version, about = "Win statistics for N-player Tic-Tac-Toe", long_about = None)]
struct Cli {
    /// Log search details (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute win statistics for every open position
    Stats(winstats::cli::commands::stats::StatsArgs),

    /// Run both strategies and check they agree
    Compare(winstats::cli::commands::compare::CompareArgs),

    /// Analyze the symmetries of a board
    Symmetry(winstats::cli::commands::symmetry::SymmetryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match cli.command {
        Commands::Stats(args) => winstats::cli::commands::stats::execute(args),
        Commands::Compare(args) => winstats::cli::commands::compare::execute(args),
        Commands::Symmetry(args) => winstats::cli::commands::symmetry::execute(args),
    }
}
