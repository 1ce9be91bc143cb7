#![cfg(feature = "std")]

//! Terminal rendering of snapshots and parsing of typed cell coordinates.
//!
//! This is the frontend side of the seam: it only ever reads snapshots and
//! builds [`Intent`](crate::Intent) values, never game state directly.

use crate::board::{Board, Cell, Mark};
use crate::config::BOARD_SIZE;
use crate::game::{GameState, GameStatus};
use crate::players::Roster;

/// Render a coordinate the way players type it, e.g. (1, 0) -> `A2`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let col_ch = (b'A' + col as u8) as char;
    format!("{}{}", col_ch, row + 1)
}

/// Parse a cell typed as column letter plus 1-based row, e.g. `B2` or `b2`.
pub fn parse_coord(input: &str) -> Option<(usize, usize)> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some((row - 1, col))
}

/// Print the grid with column letters and row numbers as guides.
pub fn print_board(board: &Board) {
    print!("  ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for r in 0..BOARD_SIZE {
        print!("{:2}", r + 1);
        for c in 0..BOARD_SIZE {
            let ch = match board.get(r, c).unwrap_or(Cell::Empty) {
                Cell::Empty => '.',
                Cell::Marked(Mark::X) => 'X',
                Cell::Marked(Mark::O) => 'O',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

/// One-line summary for the status area, e.g. `Alice (X)'s turn`.
pub fn status_line(state: &GameState, roster: &Roster) -> String {
    match state.status() {
        GameStatus::InProgress => format!("{}'s turn", roster.label(state.active_player())),
        GameStatus::Won(mark) => format!("{} wins", roster.label(mark)),
        GameStatus::Draw => "Draw".to_string(),
    }
}
