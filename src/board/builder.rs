//! Fluent builder for constructing positions disc by disc.
//!
//! Skips the alternation and game-over checks of `Board::play`, which makes
//! it handy for setting up tactical fixtures directly.
//!
//! # Example
//! ```
//! use connect_four_engine::board::{BoardBuilder, Position, Side};
//!
//! let board = BoardBuilder::new()
//!     .column(3, "RRR")
//!     .column(4, "YY")
//!     .build();
//! assert_eq!(board.winning_columns(Side::Red), 1);
//! ```

use super::{Board, Side, HEIGHT, WIDTH};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    columns: Vec<Vec<Side>>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            columns: vec![Vec::new(); WIDTH],
        }
    }

    /// Stack a disc on top of `column`. Off-board columns and discs past
    /// the top row are ignored.
    #[must_use]
    pub fn disc(mut self, column: usize, side: Side) -> Self {
        if let Some(stack) = self.columns.get_mut(column) {
            if stack.len() < HEIGHT {
                stack.push(side);
            }
        }
        self
    }

    /// Stack discs bottom-up from a string of `R`/`Y` characters. Any other
    /// character is skipped.
    #[must_use]
    pub fn column(self, column: usize, discs: &str) -> Self {
        discs.chars().fold(self, |builder, c| match c.to_ascii_uppercase() {
            'R' => builder.disc(column, Side::Red),
            'Y' => builder.disc(column, Side::Yellow),
            _ => builder,
        })
    }

    /// Build the final board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::new();
        for (column, stack) in self.columns.iter().enumerate() {
            for &side in stack {
                board.place(column, side);
            }
        }
        board
    }
}
