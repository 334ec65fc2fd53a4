//! Compare command - Check that symmetry pruning matches brute force

use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use clap::Parser;

use super::SearchArgs;
use crate::{
    cli::output::{create_spinner, format_number, print_kv, print_section},
    tictactoe::{Strategy, WinStats},
};

#[derive(Parser, Debug)]
#[command(about = "Run both search strategies and compare their results")]
pub struct CompareArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: CompareArgs) -> Result<()> {
    let config = args.search.resolve()?;
    let board = config.starting_board()?;

    let mut runs: Vec<(Strategy, WinStats, Duration)> = Vec::new();
    for strategy in [Strategy::BruteForce, Strategy::SymmetryPruned] {
        let spinner = create_spinner(&format!("Running {strategy} search"), !args.no_progress)?;
        let started = Instant::now();
        let stats = config.search_with(&board, strategy)?;
        let elapsed = started.elapsed();
        spinner.finish_and_clear();
        runs.push((strategy, stats, elapsed));
    }

    print_section("Strategy Comparison");
    println!("{board}");
    for (strategy, stats, elapsed) in &runs {
        let leaves: u64 = stats.values().flatten().sum();
        println!();
        print_kv("Strategy", strategy.as_str());
        print_kv("Elapsed", &format!("{:.3}s", elapsed.as_secs_f64()));
        print_kv("Positions", &stats.len().to_string());
        print_kv("Winning leaves", &format_number(leaves));
    }

    let (_, brute, _) = &runs[0];
    let (_, pruned, _) = &runs[1];
    if brute != pruned {
        bail!("symmetry-pruned results differ from brute force");
    }
    println!("\n✓ Both strategies produced identical statistics");
    Ok(())
}
