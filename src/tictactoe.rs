//! N-player Tic-Tac-Toe on square boards

pub mod board;
pub mod game_tree;
pub mod lines;
pub mod symmetry;

pub use board::{Board, Cell, PlayerId, Position};
pub use game_tree::{
    Strategy, WinStats, brute_force_win_stats, move_win_stats, par_move_win_stats,
    symmetry_pruned_win_stats,
};
pub use lines::{Line, is_winning_move, lines_through, next_player};
pub use symmetry::{Symmetry, collate_singletons, collate_symmetric, is_symmetric, stabilizer};
