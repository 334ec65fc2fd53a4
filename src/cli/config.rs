//! Shared configuration types for CLI commands

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    tictactoe::{Board, Cell, PlayerId, Strategy, WinStats, move_win_stats, par_move_win_stats},
};

/// Search configuration
///
/// Missing fields in a config file fall back to the defaults: an empty 3x3
/// board, two players, player 0 to move, symmetry pruning, sequential search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Side length of the empty starting board (ignored when `board` is set)
    pub side: usize,

    /// Number of players taking turns
    pub players: usize,

    /// Player to move first
    pub first_player: PlayerId,

    /// Collation strategy
    pub strategy: Strategy,

    /// Search top-level moves on the rayon thread pool
    pub parallel: bool,

    /// Starting board in text notation, e.g. "0.1/.../..."
    pub board: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            side: 3,
            players: 2,
            first_player: 0,
            strategy: Strategy::default(),
            parallel: false,
            board: None,
        }
    }
}

impl SearchConfig {
    /// Load a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.board.is_none() && self.side == 0 {
            return Err(Error::InvalidConfiguration {
                message: "side must be greater than 0".to_string(),
            });
        }
        if self.players == 0 {
            return Err(Error::InvalidConfiguration {
                message: "players must be greater than 0".to_string(),
            });
        }
        if self.first_player >= self.players {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "first player {} must be below the player count {}",
                    self.first_player, self.players
                ),
            });
        }
        Ok(())
    }

    /// The starting board: the parsed `board` text, or an empty board of `side`
    pub fn starting_board(&self) -> Result<Board<Cell>> {
        match &self.board {
            Some(text) => text.parse(),
            None => Board::empty(self.side),
        }
    }

    /// Run the configured search on `board`
    pub fn search(&self, board: &Board<Cell>) -> Result<WinStats> {
        self.search_with(board, self.strategy)
    }

    /// Run the search on `board` with an explicit strategy
    pub fn search_with(&self, board: &Board<Cell>, strategy: Strategy) -> Result<WinStats> {
        if self.parallel {
            par_move_win_stats(board, self.first_player, self.players, strategy)
        } else {
            move_win_stats(board, self.first_player, self.players, strategy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let config = SearchConfig::default();
        assert_eq!(config.side, 3);
        assert_eq!(config.players, 2);
        assert_eq!(config.first_player, 0);
        assert_eq!(config.strategy, Strategy::SymmetryPruned);
        assert!(config.validate().is_ok());
        assert_eq!(config.starting_board().unwrap().open_positions().len(), 9);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"players": 3, "strategy": "brute-force"}"#).unwrap();
        assert_eq!(config.players, 3);
        assert_eq!(config.side, 3);
        assert_eq!(config.strategy, Strategy::BruteForce);
    }

    #[test]
    fn validate_rejects_bad_players() {
        let config = SearchConfig {
            first_player: 2,
            ..SearchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));

        let config = SearchConfig {
            players: 0,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SearchConfig {
            side: 0,
            ..SearchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn board_text_overrides_side() {
        let config = SearchConfig {
            side: 5,
            board: Some("0./..".to_string()),
            ..SearchConfig::default()
        };
        let board = config.starting_board().unwrap();
        assert_eq!(board.side_len(), 2);
        assert_eq!(config.search(&board).unwrap().len(), 3);
    }
}
