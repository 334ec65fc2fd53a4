//! JSON report of win statistics

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    tictactoe::{PlayerId, Strategy, WinStats},
};

/// Each count divided by the position's total, or `None` when nobody ever wins
pub fn win_fractions(counts: &[u64]) -> Option<Vec<f64>> {
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return None;
    }
    Some(
        counts
            .iter()
            .map(|&count| count as f64 / total as f64)
            .collect(),
    )
}

/// One open position of the searched board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub row: usize,
    pub col: usize,
    pub wins: Vec<u64>,
    pub fractions: Option<Vec<f64>>,
}

/// Search parameters together with the resulting statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsReport {
    pub side: usize,
    pub players: usize,
    pub first_player: PlayerId,
    pub strategy: Strategy,
    /// Positions in row-major order
    pub positions: Vec<PositionRecord>,
}

impl StatsReport {
    pub fn new(
        side: usize,
        players: usize,
        first_player: PlayerId,
        strategy: Strategy,
        stats: &WinStats,
    ) -> Self {
        let positions = stats
            .iter()
            .map(|(pos, counts)| PositionRecord {
                row: pos.row,
                col: pos.col,
                wins: counts.clone(),
                fractions: win_fractions(counts),
            })
            .collect();

        StatsReport {
            side,
            players,
            first_player,
            strategy,
            positions,
        }
    }

    /// Write the report as pretty-printed JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create {}", path.display()),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("write {}", path.display()),
            source,
        })?;
        Ok(())
    }

    pub fn read_json(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open {}", path.display()),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
    }
}
