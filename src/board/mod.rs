//! Connect Four board representation and the tactical search core.
//!
//! The search (`board::search`) only talks to positions through the
//! [`Position`] trait; [`Board`] is the 7x6 bitboard implementation used by
//! the binary, the tests and the benchmarks.
//!
//! # Example
//! ```
//! use connect_four_engine::board::search::{quiesce, SearchConfig, SearchTables, INFINITY};
//! use connect_four_engine::board::{Board, Side};
//!
//! let board = Board::new();
//! let mut tables = SearchTables::new();
//! let node = quiesce(&board, -INFINITY, INFINITY, Side::Red, 0, &SearchConfig::default(), &mut tables);
//! assert_eq!(node.best_column, None);
//! ```

mod builder;
mod error;
pub mod eval;
mod rules;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{ConfigError, MoveParseError};
pub use eval::WIN_SCORE;
pub use rules::Position;
pub use state::Board;
pub use types::{MoveList, Side, HEIGHT, MAX_COLUMNS, WIDTH};

pub(crate) use types::COLUMN_BITS;
