//! Stats command - Win statistics for every open position

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use super::SearchArgs;
use crate::{
    cli::output::{create_spinner, format_win_stats},
    export::StatsReport,
};

#[derive(Parser, Debug)]
#[command(about = "Compute win statistics for every open position")]
pub struct StatsArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Export results as JSON
    #[arg(long, short = 'o')]
    pub export: Option<PathBuf>,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let config = args.search.resolve()?;
    let board = config.starting_board()?;

    let spinner = create_spinner(
        &format!("Searching {} open positions", board.open_positions().len()),
        !args.no_progress,
    )?;
    let stats = config.search(&board)?;
    spinner.finish_and_clear();

    for line in format_win_stats(&stats) {
        println!("{line}");
    }

    if let Some(path) = args.export {
        let report = StatsReport::new(
            board.side_len(),
            config.players,
            config.first_player,
            config.strategy,
            &stats,
        );
        report
            .write_json(&path)
            .with_context(|| format!("exporting results to {}", path.display()))?;
        log::info!("wrote {} positions to {}", report.positions.len(), path.display());
    }

    Ok(())
}
