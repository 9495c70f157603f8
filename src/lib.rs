//! Tactical quiescence search for Connect Four.
//!
//! - `board` - reference bitboard, the `Position` contract and the search core
//! - `tt` - capacity-bounded transposition table
//! - `zobrist` - hash keys for the reference board

/// Debug-level engine log line, compiled away unless the `logging` feature is on.
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::log::debug!($($arg)*);
    }};
}

/// Trace-level engine log line, compiled away unless the `logging` feature is on.
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        ::log::trace!($($arg)*);
    }};
}

pub(crate) use engine_debug;
pub(crate) use engine_trace;

pub mod board;
pub mod tt;
pub mod zobrist;

pub use board::{Board, Position, Side};
pub use tt::TranspositionTable;
