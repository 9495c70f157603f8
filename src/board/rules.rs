//! The game-rules contract the search core consumes.
//!
//! The search never looks inside a position: everything it knows comes
//! through this trait. `Board` is the reference implementation, but any
//! drop-disc grid game that can answer these questions can be searched.

use super::{MoveList, Side};

/// A game position the quiescence search can explore.
///
/// Implementations must be pure: `apply_move` returns a new position and
/// never mutates `self`.
pub trait Position: Clone {
    /// Stable identity of the disc layout, used as the transposition key.
    fn hash(&self) -> u64;

    /// Playable columns in ascending order. Empty when the grid is full.
    fn legal_moves(&self) -> MoveList;

    /// Drop a disc of `side` into `column`.
    fn apply_move(&self, column: usize, side: Side) -> Self;

    /// True if `side` has four in a row anywhere.
    fn check_win(&self, side: Side) -> bool;

    /// Number of unblocked three-disc windows for `side`.
    fn count_open_three_threats(&self, side: Side) -> u32;

    /// Heuristic score, higher is better for `side`.
    fn static_evaluate(&self, side: Side) -> i32;

    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Disc at (`column`, `row`), row 0 being the bottom. `None` for empty
    /// or off-board cells.
    fn occupant(&self, column: usize, row: usize) -> Option<Side>;

    /// Row the next disc dropped into `column` would occupy.
    fn landing_row(&self, column: usize) -> Option<usize>;

    fn empty_cells(&self) -> usize {
        (0..self.width())
            .map(|column| {
                self.landing_row(column)
                    .map_or(0, |row| self.height() - row)
            })
            .sum()
    }

    /// Number of distinct columns where `side` would win with its next drop.
    fn winning_columns(&self, side: Side) -> usize {
        self.legal_moves()
            .iter()
            .filter(|&column| self.apply_move(column, side).check_win(side))
            .count()
    }
}
