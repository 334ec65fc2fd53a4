//! Symmetries of the square and collation of equivalent open positions

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Position};
use crate::Result;

/// A non-identity symmetry of the square (dihedral group D4 minus the identity)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symmetry {
    /// Mirror across the vertical axis: (r,c) -> (r, side-c-1)
    MirrorHorizontal,
    /// Mirror across the horizontal axis: (r,c) -> (side-r-1, c)
    MirrorVertical,
    /// Transpose across the main diagonal: (r,c) -> (c, r)
    MainDiagonal,
    /// Transpose across the anti diagonal: (r,c) -> (side-c-1, side-r-1)
    AntiDiagonal,
    /// (r,c) -> (c, side-r-1)
    Rotate90,
    /// (r,c) -> (side-r-1, side-c-1)
    Rotate180,
    /// (r,c) -> (side-c-1, r)
    Rotate270,
}

impl Symmetry {
    pub const ALL: [Symmetry; 7] = [
        Symmetry::MirrorHorizontal,
        Symmetry::MirrorVertical,
        Symmetry::MainDiagonal,
        Symmetry::AntiDiagonal,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
    ];

    /// Map a position on a board of the given side to its image
    pub fn apply(self, pos: Position, side: usize) -> Position {
        let Position { row: r, col: c } = pos;
        let (row, col) = match self {
            Symmetry::MirrorHorizontal => (r, side - c - 1),
            Symmetry::MirrorVertical => (side - r - 1, c),
            Symmetry::MainDiagonal => (c, r),
            Symmetry::AntiDiagonal => (side - c - 1, side - r - 1),
            Symmetry::Rotate90 => (c, side - r - 1),
            Symmetry::Rotate180 => (side - r - 1, side - c - 1),
            Symmetry::Rotate270 => (side - c - 1, r),
        };
        Position { row, col }
    }

    /// Check whether `board` is invariant under this symmetry
    pub fn holds_for<T: PartialEq>(self, board: &Board<T>) -> Result<bool> {
        let side = board.side_len();
        is_symmetric(board, |pos| self.apply(pos, side))
    }

    pub fn name(self) -> &'static str {
        match self {
            Symmetry::MirrorHorizontal => "mirror left/right",
            Symmetry::MirrorVertical => "mirror up/down",
            Symmetry::MainDiagonal => "main diagonal",
            Symmetry::AntiDiagonal => "anti diagonal",
            Symmetry::Rotate90 => "rotate 90",
            Symmetry::Rotate180 => "rotate 180",
            Symmetry::Rotate270 => "rotate 270",
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Check whether every cell of `board` equals the cell at its transformed position
///
/// Every cell is compared, including pairs already seen from the other side.
///
/// # Errors
///
/// Returns an out-of-bounds error if `transform` maps a position off the board.
pub fn is_symmetric<T, F>(board: &Board<T>, transform: F) -> Result<bool>
where
    T: PartialEq,
    F: Fn(Position) -> Position,
{
    for pos in board.positions() {
        if board.at(pos)? != board.at(transform(pos))? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// The canonical symmetries under which `board` is invariant, in [`Symmetry::ALL`] order
pub fn stabilizer<T: PartialEq>(board: &Board<T>) -> Result<Vec<Symmetry>> {
    let mut held = Vec::new();
    for symmetry in Symmetry::ALL {
        if symmetry.holds_for(board)? {
            held.push(symmetry);
        }
    }
    Ok(held)
}

/// Put every position in a class of its own
pub fn collate_singletons(positions: Vec<Position>) -> Vec<Vec<Position>> {
    positions.into_iter().map(|pos| vec![pos]).collect()
}

/// Partition open positions into classes that are equivalent under the symmetries
/// of the current board
///
/// Positions are taken from the back of a local work list. Each taken position
/// absorbs its image under every symmetry the board has, provided that image is
/// still waiting in the list. Every class is non-empty and starts with the
/// position that formed it.
pub fn collate_symmetric<T: PartialEq>(
    board: &Board<T>,
    positions: Vec<Position>,
) -> Result<Vec<Vec<Position>>> {
    let side = board.side_len();
    let symmetries = stabilizer(board)?;
    log::trace!("board symmetries: {symmetries:?}");

    let mut remaining = positions;
    let mut classes = Vec::new();

    while let Some(pos) = remaining.pop() {
        let mut class = vec![pos];
        for symmetry in &symmetries {
            let image = symmetry.apply(pos, side);
            if let Some(idx) = remaining.iter().position(|&p| p == image) {
                class.push(remaining.remove(idx));
            }
        }
        classes.push(class);
    }

    Ok(classes)
}
