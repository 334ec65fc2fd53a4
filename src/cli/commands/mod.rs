//! Subcommands of the winstats CLI

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::config::SearchConfig;
use crate::tictactoe::Strategy;

pub mod compare;
pub mod stats;
pub mod symmetry;

/// Search parameters shared by commands that run a search
///
/// Flags override the values loaded from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// JSON file with search settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Side length of the empty starting board
    #[arg(long)]
    pub side: Option<usize>,

    /// Number of players
    #[arg(long, short = 'p')]
    pub players: Option<usize>,

    /// Player to move first
    #[arg(long)]
    pub first_player: Option<usize>,

    /// Collation strategy
    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Starting board, '.' for empty and digits for players (e.g. "0.1/.../...")
    #[arg(long)]
    pub board: Option<String>,

    /// Search top-level moves in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl SearchArgs {
    /// Merge the config file (if any) with explicit flags and validate the result
    pub fn resolve(&self) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::load(path)
                .with_context(|| format!("loading search config from {}", path.display()))?,
            None => SearchConfig::default(),
        };

        if let Some(side) = self.side {
            config.side = side;
        }
        if let Some(players) = self.players {
            config.players = players;
        }
        if let Some(first_player) = self.first_player {
            config.first_player = first_player;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(board) = &self.board {
            config.board = Some(board.clone());
        }
        config.parallel |= self.parallel;

        config.validate()?;
        log::debug!("resolved search config: {config:?}");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = SearchArgs {
            players: Some(3),
            strategy: Some(Strategy::BruteForce),
            parallel: true,
            ..SearchArgs::default()
        };
        let config = args.resolve().unwrap();
        assert_eq!(config.players, 3);
        assert_eq!(config.side, 3);
        assert_eq!(config.strategy, Strategy::BruteForce);
        assert!(config.parallel);
    }

    #[test]
    fn invalid_flags_are_rejected() {
        let args = SearchArgs {
            first_player: Some(4),
            ..SearchArgs::default()
        };
        assert!(args.resolve().is_err());
    }
}
