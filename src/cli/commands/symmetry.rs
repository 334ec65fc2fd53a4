//! Symmetry command - Show which symmetries a board has and how its open
//! positions collate

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::output::print_section,
    tictactoe::{Board, Cell, Symmetry, collate_symmetric},
};

#[derive(Parser, Debug)]
#[command(about = "Analyze the symmetries of a board")]
pub struct SymmetryArgs {
    /// Side length of the empty board to analyze
    #[arg(long, default_value_t = 3)]
    pub side: usize,

    /// Board to analyze, '.' for empty and digits for players
    #[arg(long)]
    pub board: Option<String>,
}

pub fn execute(args: SymmetryArgs) -> Result<()> {
    let board: Board<Cell> = match args.board {
        Some(text) => text.parse()?,
        None => Board::empty(args.side)?,
    };

    print_section("Symmetry Analysis");
    println!("{board}\n");

    for symmetry in Symmetry::ALL {
        let mark = if symmetry.holds_for(&board)? { "✓" } else { "✗" };
        println!("  {mark} {symmetry}");
    }

    let mut classes = collate_symmetric(&board, board.open_positions())?;
    for class in &mut classes {
        class.sort();
    }
    classes.sort();

    println!("\nEquivalence classes of open positions: {}", classes.len());
    for class in &classes {
        let members: Vec<String> = class.iter().map(ToString::to_string).collect();
        println!("  {}", members.join(" "));
    }

    Ok(())
}
