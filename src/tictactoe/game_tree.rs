//! Exhaustive game-tree search producing per-move win statistics

use std::{collections::BTreeMap, fmt};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Cell, PlayerId, Position},
    lines::{is_winning_move, next_player, validate_player},
    symmetry::{collate_singletons, collate_symmetric},
};
use crate::Result;

/// Win counts per open position
///
/// `stats[&pos][i]` is the number of leaf games below "play `pos` now" that
/// player `i` wins. Keys are exactly the open positions of the searched board,
/// iterated in row-major order.
pub type WinStats = BTreeMap<Position, Vec<u64>>;

/// How open positions are grouped before searching
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Search every open position
    BruteForce,
    /// Search one representative per class of symmetric positions
    #[default]
    SymmetryPruned,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute-force",
            Strategy::SymmetryPruned => "symmetry-pruned",
        }
    }

    /// Partition the open positions of `board` into classes with identical outcomes
    pub fn collate(self, board: &Board<Cell>, open: Vec<Position>) -> Result<Vec<Vec<Position>>> {
        match self {
            Strategy::BruteForce => Ok(collate_singletons(open)),
            Strategy::SymmetryPruned => collate_symmetric(board, open),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Win statistics for every open position, playing out every continuation
pub fn brute_force_win_stats(
    board: &Board<Cell>,
    cur_player: PlayerId,
    total_player: usize,
) -> Result<WinStats> {
    move_win_stats(board, cur_player, total_player, Strategy::BruteForce)
}

/// Win statistics for every open position, searching one representative per
/// class of positions that are equivalent under the board's symmetries
///
/// Produces the same map as [`brute_force_win_stats`].
///
/// # Examples
///
/// ```
/// use winstats::tictactoe::{Board, Position, symmetry_pruned_win_stats};
///
/// let board = Board::empty(2).unwrap();
/// let stats = symmetry_pruned_win_stats(&board, 0, 2).unwrap();
/// assert_eq!(stats[&Position::new(0, 0)], vec![6, 0]);
/// ```
pub fn symmetry_pruned_win_stats(
    board: &Board<Cell>,
    cur_player: PlayerId,
    total_player: usize,
) -> Result<WinStats> {
    move_win_stats(board, cur_player, total_player, Strategy::SymmetryPruned)
}

/// Win statistics for every open position of `board` with `cur_player` to move
///
/// A board without open positions yields an empty map. Occupied cells may hold
/// players outside `0..total_player`; those players never accumulate wins.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidPlayerCount`] if `total_player` is 0 and
/// [`crate::Error::PlayerOutOfRange`] if `cur_player >= total_player`.
pub fn move_win_stats(
    board: &Board<Cell>,
    cur_player: PlayerId,
    total_player: usize,
    strategy: Strategy,
) -> Result<WinStats> {
    validate_player(cur_player, total_player)?;
    log::debug!(
        "searching {} open positions on a {}x{} board ({strategy}, {total_player} players)",
        board.open_positions().len(),
        board.side_len(),
        board.side_len(),
    );
    search(board, cur_player, total_player, strategy)
}

/// Parallel variant of [`move_win_stats`]
///
/// Each top-level class is searched on the rayon pool; deeper levels run
/// sequentially. The result is identical to the sequential search.
pub fn par_move_win_stats(
    board: &Board<Cell>,
    cur_player: PlayerId,
    total_player: usize,
    strategy: Strategy,
) -> Result<WinStats> {
    validate_player(cur_player, total_player)?;
    let classes = strategy.collate(board, board.open_positions())?;
    log::debug!(
        "searching {} classes in parallel ({strategy}, {total_player} players)",
        classes.len()
    );

    let tallies = classes
        .par_iter()
        .map(|class| tally_move(board, class[0], cur_player, total_player, strategy))
        .collect::<Result<Vec<_>>>()?;

    let mut stats = WinStats::new();
    for (class, tally) in classes.iter().zip(tallies) {
        record_class(&mut stats, class, tally);
    }
    Ok(stats)
}

fn search(
    board: &Board<Cell>,
    cur_player: PlayerId,
    total_player: usize,
    strategy: Strategy,
) -> Result<WinStats> {
    let mut stats = WinStats::new();

    let open = board.open_positions();
    if open.is_empty() {
        return Ok(stats);
    }

    for class in strategy.collate(board, open)? {
        let tally = tally_move(board, class[0], cur_player, total_player, strategy)?;
        record_class(&mut stats, &class, tally);
    }

    Ok(stats)
}

/// Play `pos` for `cur_player` and count the wins of every player below it
fn tally_move(
    board: &Board<Cell>,
    pos: Position,
    cur_player: PlayerId,
    total_player: usize,
    strategy: Strategy,
) -> Result<Vec<u64>> {
    let next = board.with_cell_set(pos.row, pos.col, Cell::Occupied(cur_player))?;
    let mut tally = vec![0; total_player];

    if is_winning_move(&next, pos.row, pos.col)? {
        tally[cur_player] = 1;
        return Ok(tally);
    }

    let replies = search(&next, next_player(cur_player, total_player)?, total_player, strategy)?;
    for counts in replies.values() {
        for (total, count) in tally.iter_mut().zip(counts) {
            *total += count;
        }
    }
    Ok(tally)
}

/// Every member of a class shares the representative's tally
fn record_class(stats: &mut WinStats, class: &[Position], tally: Vec<u64>) {
    let Some((representative, rest)) = class.split_first() else {
        return;
    };
    for pos in rest {
        stats.insert(*pos, tally.clone());
    }
    stats.insert(*representative, tally);
}
