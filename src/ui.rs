#![cfg(feature = "std")]

use std::fmt::Write as _;
use std::string::String;

use crate::{board::Board, config::BOARD_SIZE};

/// Draw `board` as text, one numbered row per line. Coordinates shown to the
/// player are 1-indexed.
pub fn format_board(board: &Board) -> String {
    let mut out = String::from(" ");
    for c in 0..BOARD_SIZE as usize {
        let _ = write!(out, " | {}", c + 1);
    }
    out.push_str(" |\n");
    for (r, row) in board.render().iter().enumerate() {
        let _ = write!(out, "{} |", r + 1);
        for symbol in row {
            let _ = write!(out, " {} |", symbol);
        }
        out.push('\n');
    }
    out
}

/// Print both boards: the user's own (top) and the computer's (bottom).
pub fn print_boards(user: &Board, ai: &Board) {
    std::println!("Your board:");
    std::println!("{}", format_board(user));
    std::println!("Opponent board:");
    std::println!("{}", format_board(ai));
}
