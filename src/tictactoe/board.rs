//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identifier of a player; players are numbered from 0 to `total - 1`
pub type PlayerId = usize;

/// A cell on a game board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    /// The player holding this cell, if any
    pub fn player(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    pub fn to_char(self) -> char {
        match self.player() {
            None => '.',
            Some(player) => char::from_digit(player as u32, 10).unwrap_or('?'),
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            _ => c.to_digit(10).map(|d| Cell::Occupied(d as PlayerId)),
        }
    }
}

/// A board location, 0-indexed. Ordering is row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Row-major index of this position on a board with the given side
    pub fn index(self, side: usize) -> usize {
        self.row * side + self.col
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Immutable square board holding a value at every location
///
/// Values are stored row-major. Updates go through [`Board::with_cell_set`], which
/// returns a fresh board and leaves the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board<T> {
    side: usize,
    cells: Vec<T>,
}

impl<T: Clone> Board<T> {
    /// Create a board of the given side length with every location set to `value`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSide`] if `side` is 0.
    pub fn new(side: usize, value: T) -> Result<Self> {
        if side == 0 {
            return Err(Error::InvalidSide);
        }
        Ok(Board {
            side,
            cells: vec![value; side * side],
        })
    }

    /// Create a board from row-major initial values
    ///
    /// An empty `cells` vector means "no initializer": every location receives
    /// `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSide`] if `side` is 0, or
    /// [`Error::InvalidCellCount`] if a non-empty `cells` does not hold exactly
    /// `side * side` values.
    ///
    /// # Examples
    ///
    /// ```
    /// use winstats::tictactoe::Board;
    ///
    /// let board = Board::from_cells(2, vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(*board.get(1, 0).unwrap(), 3);
    ///
    /// let blank: Board<i32> = Board::from_cells(2, Vec::new()).unwrap();
    /// assert_eq!(blank.matching_positions(&0).len(), 4);
    /// ```
    pub fn from_cells(side: usize, cells: Vec<T>) -> Result<Self>
    where
        T: Default,
    {
        if side == 0 {
            return Err(Error::InvalidSide);
        }
        if cells.is_empty() {
            return Self::new(side, T::default());
        }
        if cells.len() != side * side {
            return Err(Error::InvalidCellCount {
                expected: side * side,
                got: cells.len(),
            });
        }
        Ok(Board { side, cells })
    }

    /// Return a copy of this board with one location replaced
    #[must_use = "with_cell_set returns a new board; the original is unchanged"]
    pub fn with_cell_set(&self, row: usize, col: usize, value: T) -> Result<Self> {
        let idx = self.index(row, col)?;
        let mut cells = self.cells.clone();
        cells[idx] = value;
        Ok(Board {
            side: self.side,
            cells,
        })
    }
}

impl<T> Board<T> {
    pub fn side_len(&self) -> usize {
        self.side
    }

    /// All values in row-major order
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Every position of the board in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let side = self.side;
        (0..side * side).map(move |idx| Position::new(idx / side, idx % side))
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.side {
            return Err(Error::RowOutOfBounds {
                row,
                side: self.side,
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.side {
            return Err(Error::ColumnOutOfBounds {
                col,
                side: self.side,
            });
        }
        Ok(())
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(row * self.side + col)
    }

    /// Get the value at a location
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let idx = self.index(row, col)?;
        Ok(&self.cells[idx])
    }

    pub fn at(&self, pos: Position) -> Result<&T> {
        self.get(pos.row, pos.col)
    }

    /// Values along a row, left to right
    pub fn row(&self, row: usize) -> Result<&[T]> {
        self.check_row(row)?;
        let start = row * self.side;
        Ok(&self.cells[start..start + self.side])
    }

    /// Values along a column, top to bottom
    pub fn column(&self, col: usize) -> Result<Vec<&T>> {
        self.check_col(col)?;
        Ok(self.cells.iter().skip(col).step_by(self.side).collect())
    }

    /// Values from (0,0) to (side-1,side-1)
    pub fn left_diagonal(&self) -> Vec<&T> {
        (0..self.side)
            .map(|i| &self.cells[i * self.side + i])
            .collect()
    }

    /// Values from (0,side-1) to (side-1,0)
    pub fn right_diagonal(&self) -> Vec<&T> {
        (0..self.side)
            .map(|i| &self.cells[i * self.side + (self.side - i - 1)])
            .collect()
    }

    /// Every position holding `value`, in row-major order
    pub fn matching_positions(&self, value: &T) -> Vec<Position>
    where
        T: PartialEq,
    {
        self.positions()
            .zip(&self.cells)
            .filter(|&(_, cell)| cell == value)
            .map(|(pos, _)| pos)
            .collect()
    }
}

impl Board<Cell> {
    /// Create an empty board of the given side length
    pub fn empty(side: usize) -> Result<Self> {
        Self::new(side, Cell::Empty)
    }

    /// Positions still open for play
    pub fn open_positions(&self) -> Vec<Position> {
        self.matching_positions(&Cell::Empty)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }
}

/// Parse a board from its text notation
///
/// `.` is an empty cell and a digit is the player holding the cell. Whitespace
/// and `/` row separators are ignored, so `"0.1/.../..."` is a 3x3 board.
impl FromStr for Board<Cell> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        let side = (1..=chars.len())
            .take_while(|n| n * n <= chars.len())
            .last()
            .filter(|n| n * n == chars.len())
            .ok_or_else(|| Error::InvalidBoardLength {
                got: chars.len(),
                context: s.to_string(),
            })?;

        let cells = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Board { side, cells })
    }
}

impl fmt::Display for Board<Cell> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(self.side) && i + 1 < self.cells.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed_3x3() -> Board<i32> {
        Board::from_cells(3, (0..9).collect()).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new(4, 'x').unwrap();
        assert_eq!(board.side_len(), 4);
        assert_eq!(board.cells().len(), 16);
        assert!(board.cells().iter().all(|&c| c == 'x'));
    }

    #[test]
    fn test_zero_side_rejected() {
        assert!(matches!(Board::new(0, 1), Err(Error::InvalidSide)));
        assert!(matches!(
            Board::<i32>::from_cells(0, vec![]),
            Err(Error::InvalidSide)
        ));
    }

    #[test]
    fn test_cell_count_must_match() {
        let result = Board::from_cells(3, vec![1, 2, 3]);
        assert!(matches!(
            result,
            Err(Error::InvalidCellCount {
                expected: 9,
                got: 3
            })
        ));
    }

    #[test]
    fn test_empty_initializer_fills_default() {
        let board: Board<Cell> = Board::from_cells(3, Vec::new()).unwrap();
        assert_eq!(board.open_positions().len(), 9);
    }

    #[test]
    fn test_get_bounds() {
        let board = indexed_3x3();
        assert_eq!(*board.get(2, 1).unwrap(), 7);
        assert!(matches!(
            board.get(3, 0),
            Err(Error::RowOutOfBounds { row: 3, side: 3 })
        ));
        assert!(matches!(
            board.get(0, 3),
            Err(Error::ColumnOutOfBounds { col: 3, side: 3 })
        ));
    }

    #[test]
    fn test_lines() {
        let board = indexed_3x3();
        assert_eq!(board.row(1).unwrap(), &[3, 4, 5]);
        assert_eq!(board.column(2).unwrap(), vec![&2, &5, &8]);
        assert_eq!(board.left_diagonal(), vec![&0, &4, &8]);
        assert_eq!(board.right_diagonal(), vec![&2, &4, &6]);
        assert!(board.row(3).is_err());
        assert!(board.column(3).is_err());
    }

    #[test]
    fn test_single_cell_lines() {
        let board = Board::new(1, 7).unwrap();
        assert_eq!(board.row(0).unwrap(), &[7]);
        assert_eq!(board.left_diagonal(), vec![&7]);
        assert_eq!(board.right_diagonal(), vec![&7]);
    }

    #[test]
    fn test_with_cell_set_leaves_original() {
        let board = indexed_3x3();
        let updated = board.with_cell_set(1, 1, 42).unwrap();
        assert_eq!(*updated.get(1, 1).unwrap(), 42);
        assert_eq!(*board.get(1, 1).unwrap(), 4);
        for pos in board.positions().filter(|&p| p != Position::new(1, 1)) {
            assert_eq!(board.at(pos).unwrap(), updated.at(pos).unwrap());
        }
        assert!(board.with_cell_set(0, 9, 1).is_err());
    }

    #[test]
    fn test_matching_positions_row_major() {
        let board = Board::from_cells(
            3,
            ["Even", "Odd", "Even", "Odd", "Even", "Odd", "Even", "Odd", "Even"]
                .map(String::from)
                .to_vec(),
        )
        .unwrap();
        let odd = board.matching_positions(&"Odd".to_string());
        assert_eq!(
            odd,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1)
            ]
        );
        assert!(board.matching_positions(&"None".to_string()).is_empty());
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board<Cell> = "0.1/.2./...".parse().unwrap();
        assert_eq!(board.side_len(), 3);
        assert_eq!(*board.get(0, 0).unwrap(), Cell::Occupied(0));
        assert_eq!(*board.get(1, 1).unwrap(), Cell::Occupied(2));
        assert_eq!(board.occupied_count(), 3);
        assert_eq!(board.to_string(), "0.1\n.2.\n...");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "0.1..".parse::<Board<Cell>>(),
            Err(Error::InvalidBoardLength { got: 5, .. })
        ));
        assert!(matches!(
            "".parse::<Board<Cell>>(),
            Err(Error::InvalidBoardLength { got: 0, .. })
        ));
        assert!(matches!(
            "0.X.".parse::<Board<Cell>>(),
            Err(Error::InvalidCellCharacter {
                character: 'X',
                position: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_position_ordering_is_row_major() {
        let mut positions = vec![
            Position::new(1, 0),
            Position::new(0, 2),
            Position::new(0, 0),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 2),
                Position::new(1, 0)
            ]
        );
        assert_eq!(Position::new(2, 1).index(3), 7);
    }
}
