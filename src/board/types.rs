//! Core Connect Four types.
//!
//! - `Side` - the two players
//! - `MoveList` - stack-allocated list of playable columns
//! - board geometry constants for the reference 7x6 board

use std::fmt;
use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Columns on the reference board.
pub const WIDTH: usize = 7;

/// Rows on the reference board.
pub const HEIGHT: usize = 6;

/// Bits reserved per column in the bitboard (one sentinel bit on top).
pub(crate) const COLUMN_BITS: usize = HEIGHT + 1;

/// Upper bound on board width supported by `MoveList`.
pub const MAX_COLUMNS: usize = 16;

/// The two players. Red always moves first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Red,
    Yellow,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Red, Side::Yellow];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Yellow => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Yellow,
            Side::Yellow => Side::Red,
        }
    }

    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Side::Red => 'R',
            Side::Yellow => 'Y',
        }
    }

    /// Whether a disc landing on `row` (0 = bottom) sits on this side's
    /// favourable parity: odd rows counted from one for Red, even for Yellow.
    #[inline]
    #[must_use]
    pub const fn owns_row_parity(self, row: usize) -> bool {
        match self {
            Side::Red => row % 2 == 0,
            Side::Yellow => row % 2 == 1,
        }
    }
}

impl Not for Side {
    type Output = Side;

    fn not(self) -> Side {
        self.opponent()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Yellow => write!(f, "yellow"),
        }
    }
}

/// Fixed-capacity list of column indices.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MoveList {
    columns: [u8; MAX_COLUMNS],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub const fn new() -> Self {
        MoveList {
            columns: [0; MAX_COLUMNS],
            len: 0,
        }
    }

    /// Append a column. Columns past `MAX_COLUMNS` are dropped.
    #[inline]
    pub fn push(&mut self, column: usize) {
        debug_assert!(column < MAX_COLUMNS, "column {column} out of range");
        if self.len < MAX_COLUMNS {
            self.columns[self.len] = column as u8;
            self.len += 1;
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn contains(&self, column: usize) -> bool {
        self.iter().any(|c| c == column)
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns[..self.len].iter().map(|&c| usize::from(c))
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MoveList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for MoveList {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut list = MoveList::new();
        for column in iter {
            list.push(column);
        }
        list
    }
}
