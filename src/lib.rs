//! Exhaustive win statistics for N-player Tic-Tac-Toe
//!
//! This crate provides:
//! - An immutable square board over any comparable cell type
//! - The row/column/diagonal win rule and cyclic turn order
//! - Detection of the board's mirror and rotation symmetries
//! - Full game-tree search of per-move win counts, with optional symmetry pruning
//!   and a parallel fan-out of the top-level moves
//! - A CLI and JSON export of the results

pub mod cli;
pub mod error;
pub mod export;
pub mod tictactoe;

pub use error::{Error, Result};
pub use tictactoe::{
    Board, Cell, PlayerId, Position, Strategy, WinStats, brute_force_win_stats,
    symmetry_pruned_win_stats,
};
