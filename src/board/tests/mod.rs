//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `board.rs` - Reference bitboard, parsing and hashing
//! - `eval.rs` - Static evaluation terms
//! - `tactics.rs` - Move classification, complexity and generation
//! - `search_tables.rs` - Killer moves and move ordering
//! - `search.rs` - Quiescence search behaviour and pruning
//! - `proptest.rs` - Property-based tests

mod search;

use crate::board::{Board, BoardBuilder, Position, Side, WIN_SCORE};

/// 7x6 position with every cell filled and no four for either side.
pub(super) fn full_board() -> Board {
    BoardBuilder::new()
        .column(0, "YYRYRY")
        .column(1, "RRYRYR")
        .column(2, "YRYYRY")
        .column(3, "YRRYRY")
        .column(4, "RYRYRR")
        .column(5, "RYRRYY")
        .column(6, "RYYRYR")
        .build()
}

/// Red stacked three high in column 3, Yellow scattered; Red to move and
/// wins by dropping in column 3.
pub(super) fn red_wins_in_column_three() -> Board {
    Board::from_moves("414246").expect("legal move sequence")
}

/// Red to move with only column 0 open; every line loses to a Yellow four.
pub(super) fn red_forced_loss() -> Board {
    BoardBuilder::new()
        .column(0, "RY")
        .column(1, "YYRYYR")
        .column(2, "RRYYRY")
        .column(3, "RRRYYR")
        .column(4, "YYYRRR")
        .column(5, "YYRYYR")
        .column(6, "RRYRRY")
        .build()
}

/// Full-width negamax to the end of the game: win, loss or draw.
pub(super) fn exact_value(board: &Board, side: Side) -> i32 {
    if board.check_win(!side) {
        return -WIN_SCORE;
    }
    board
        .legal_moves()
        .iter()
        .map(|column| -exact_value(&board.apply_move(column, side), !side))
        .max()
        .unwrap_or(0)
}
