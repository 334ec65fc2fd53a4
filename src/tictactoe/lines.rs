//! Winning line analysis and turn order

use super::board::{Board, PlayerId};
use crate::{Error, Result};

/// A complete line across the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Row(usize),
    Column(usize),
    /// From (0,0) to (side-1,side-1)
    MainDiagonal,
    /// From (0,side-1) to (side-1,0)
    AntiDiagonal,
}

impl Line {
    /// Check whether every value along this line equals `value`
    pub fn is_uniform<T: PartialEq>(self, board: &Board<T>, value: &T) -> Result<bool> {
        let uniform = match self {
            Line::Row(row) => board.row(row)?.iter().all(|v| v == value),
            Line::Column(col) => board.column(col)?.into_iter().all(|v| v == value),
            Line::MainDiagonal => board.left_diagonal().into_iter().all(|v| v == value),
            Line::AntiDiagonal => board.right_diagonal().into_iter().all(|v| v == value),
        };
        Ok(uniform)
    }
}

/// Lines passing through (row, col) on a board with the given side
///
/// The row and column always qualify; a diagonal is included only when the cell
/// lies on it. The center of an odd-sided board lies on both diagonals.
pub fn lines_through(side: usize, row: usize, col: usize) -> Vec<Line> {
    let mut lines = vec![Line::Row(row), Line::Column(col)];
    if row == col {
        lines.push(Line::MainDiagonal);
    }
    if row + col + 1 == side {
        lines.push(Line::AntiDiagonal);
    }
    lines
}

/// Check whether the value at (row, col) completes a full line
///
/// The move must already be on the board; this does not place it. A line of
/// length one is uniform, so every move on a 1x1 board wins.
///
/// # Errors
///
/// Returns an out-of-bounds error if the location is not on the board.
///
/// # Examples
///
/// ```
/// use winstats::tictactoe::{Board, is_winning_move};
///
/// let board = Board::from_cells(3, vec![0, 0, 0, 1, 1, 1, 0, 0, 0]).unwrap();
/// assert!(is_winning_move(&board, 1, 0).unwrap());
/// ```
pub fn is_winning_move<T: PartialEq>(board: &Board<T>, row: usize, col: usize) -> Result<bool> {
    let value = board.get(row, col)?;
    for line in lines_through(board.side_len(), row, col) {
        if line.is_uniform(board, value)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// The player who moves after `cur_player`, wrapping back to 0
///
/// # Errors
///
/// Returns [`Error::InvalidPlayerCount`] if `total_player` is 0, or
/// [`Error::PlayerOutOfRange`] if `cur_player >= total_player`.
pub fn next_player(cur_player: PlayerId, total_player: usize) -> Result<PlayerId> {
    validate_player(cur_player, total_player)?;
    if cur_player == total_player - 1 {
        Ok(0)
    } else {
        Ok(cur_player + 1)
    }
}

pub(crate) fn validate_player(cur_player: PlayerId, total_player: usize) -> Result<()> {
    if total_player == 0 {
        return Err(Error::InvalidPlayerCount);
    }
    if cur_player >= total_player {
        return Err(Error::PlayerOutOfRange {
            player: cur_player,
            total: total_player,
        });
    }
    Ok(())
}
