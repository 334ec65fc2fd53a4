//! Board, win rule and turn order properties over many boards

use winstats::{
    Error,
    tictactoe::{Board, Cell, Position, Symmetry, is_symmetric, is_winning_move, next_player},
};

fn numbered(side: usize) -> Board<usize> {
    Board::from_cells(side, (0..side * side).collect()).unwrap()
}

#[test]
fn with_cell_set_changes_exactly_one_cell() {
    for side in 1..=5 {
        let board = numbered(side);
        for target in board.positions() {
            let updated = board.with_cell_set(target.row, target.col, 999).unwrap();
            assert_eq!(*updated.at(target).unwrap(), 999);
            for pos in board.positions() {
                let original = pos.index(side);
                assert_eq!(*board.at(pos).unwrap(), original);
                if pos != target {
                    assert_eq!(*updated.at(pos).unwrap(), original);
                }
            }
        }
    }
}

#[test]
fn lines_agree_with_get() {
    for side in 1..=5 {
        let board = numbered(side);
        for r in 0..side {
            let row = board.row(r).unwrap();
            assert_eq!(row.len(), side);
            for (c, value) in row.iter().enumerate() {
                assert_eq!(value, board.get(r, c).unwrap());
            }
        }
        for c in 0..side {
            let col = board.column(c).unwrap();
            assert_eq!(col.len(), side);
            for (r, value) in col.into_iter().enumerate() {
                assert_eq!(value, board.get(r, c).unwrap());
            }
        }
        for (i, value) in board.left_diagonal().into_iter().enumerate() {
            assert_eq!(value, board.get(i, i).unwrap());
        }
        for (i, value) in board.right_diagonal().into_iter().enumerate() {
            assert_eq!(value, board.get(i, side - i - 1).unwrap());
        }
    }
}

#[test]
fn matching_positions_is_row_major_and_exact() {
    let board = Board::from_cells(4, (0..16).map(|i| i % 3).collect()).unwrap();
    for value in 0..3 {
        let matches = board.matching_positions(&value);
        assert!(matches.windows(2).all(|w| w[0] < w[1]));
        let expected: Vec<Position> = board
            .positions()
            .filter(|&p| *board.at(p).unwrap() == value)
            .collect();
        assert_eq!(matches, expected);
    }
    assert!(board.matching_positions(&7).is_empty());
}

#[test]
fn next_player_is_a_single_cycle() {
    for total in 1..=6 {
        for start in 0..total {
            let mut player = start;
            for step in 1..=total {
                player = next_player(player, total).unwrap();
                if step < total {
                    assert_ne!(player, start);
                }
            }
            assert_eq!(player, start);
        }
    }
}

#[test]
fn invalid_arguments_are_reported() {
    let board = Board::empty(3).unwrap();
    for err in [
        board.get(3, 0).unwrap_err(),
        board.with_cell_set(0, 5, Cell::Empty).unwrap_err(),
        is_winning_move(&board, 9, 9).unwrap_err(),
        next_player(0, 0).unwrap_err(),
        Board::new(0, Cell::Empty).unwrap_err(),
        Board::from_cells(2, vec![Cell::Empty; 3]).unwrap_err(),
    ] {
        assert!(err.is_invalid_argument(), "{err}");
    }
    assert!(matches!(board.row(4), Err(Error::RowOutOfBounds { .. })));
}

#[test]
fn every_cell_of_a_uniform_board_wins() {
    for side in 1..=4 {
        let board = Board::new(side, Cell::Occupied(0)).unwrap();
        for pos in board.positions() {
            assert!(is_winning_move(&board, pos.row, pos.col).unwrap());
        }
    }
}

#[test]
fn uniform_board_has_every_symmetry() {
    let board = Board::new(4, 'a').unwrap();
    for symmetry in Symmetry::ALL {
        assert!(is_symmetric(&board, |p| symmetry.apply(p, 4)).unwrap());
    }
    assert!(!Symmetry::Rotate90.holds_for(&numbered(4)).unwrap());
}
