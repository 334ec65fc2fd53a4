//! Error types for the winstats crate

use thiserror::Error;

/// Main error type for the winstats crate
///
/// Every precondition failure of the board, win rule and search APIs is an
/// invalid-argument variant; see [`Error::is_invalid_argument`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board side must be greater than 0")]
    InvalidSide,

    #[error("row {row} is out of bounds (must be 0-{})", .side.saturating_sub(1))]
    RowOutOfBounds { row: usize, side: usize },

    #[error("column {col} is out of bounds (must be 0-{})", .side.saturating_sub(1))]
    ColumnOutOfBounds { col: usize, side: usize },

    #[error("initial values have {got} cells, expected {expected}")]
    InvalidCellCount { expected: usize, got: usize },

    #[error("total player count must be greater than 0")]
    InvalidPlayerCount,

    #[error("player {player} is out of range (must be 0-{})", .total.saturating_sub(1))]
    PlayerOutOfRange { player: usize, total: usize },

    #[error("board string has {got} cells, which is not a non-zero square, in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid character '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

impl Error {
    /// Whether this error reports a violated argument precondition
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidSide
                | Error::RowOutOfBounds { .. }
                | Error::ColumnOutOfBounds { .. }
                | Error::InvalidCellCount { .. }
                | Error::InvalidPlayerCount
                | Error::PlayerOutOfRange { .. }
                | Error::InvalidBoardLength { .. }
                | Error::InvalidCellCharacter { .. }
        )
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_errors_name_the_valid_range() {
        let err = Error::RowOutOfBounds { row: 3, side: 3 };
        assert_eq!(err.to_string(), "row 3 is out of bounds (must be 0-2)");
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn io_errors_are_not_argument_errors() {
        let err = Error::from(std::io::Error::other("disk full"));
        assert!(!err.is_invalid_argument());
        assert!(err.to_string().contains("disk full"));
    }
}
