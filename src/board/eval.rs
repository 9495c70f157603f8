//! Reference static evaluation.
//!
//! Side-symmetric by construction: `evaluate(b, s) == -evaluate(b, !s)`.

use super::state::{cell_bit, has_four, WINDOWS};
use super::{Board, Side, HEIGHT, WIDTH};

/// Score of a completed four, from the winner's point of view.
pub const WIN_SCORE: i32 = 100_000;

/// Window with three own discs and one empty cell.
const OPEN_THREE_SCORE: i32 = 50;
/// Window with two own discs and two empty cells.
const OPEN_TWO_SCORE: i32 = 10;
/// Per disc in the centre column.
const CENTER_DISC_SCORE: i32 = 4;

fn center_column_mask() -> u64 {
    (0..HEIGHT).fold(0, |mask, row| mask | cell_bit(WIDTH / 2, row))
}

/// One side's positional terms, ignoring wins.
fn side_terms(own: u64, theirs: u64) -> i32 {
    let mut score = 0;
    for &window in WINDOWS.iter() {
        if theirs & window != 0 {
            continue;
        }
        match (own & window).count_ones() {
            3 => score += OPEN_THREE_SCORE,
            2 => score += OPEN_TWO_SCORE,
            _ => {}
        }
    }
    score + (own & center_column_mask()).count_ones() as i32 * CENTER_DISC_SCORE
}

#[must_use]
pub fn evaluate(board: &Board, side: Side) -> i32 {
    let own = board.discs(side);
    let theirs = board.discs(!side);

    match (has_four(own), has_four(theirs)) {
        (true, false) => return WIN_SCORE,
        (false, true) => return -WIN_SCORE,
        _ => {}
    }

    side_terms(own, theirs) - side_terms(theirs, own)
}
