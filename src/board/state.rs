use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::error::MoveParseError;
use super::{eval, MoveList, Position, Side, COLUMN_BITS, HEIGHT, WIDTH};
use crate::zobrist;

#[inline]
const fn bottom_mask(column: usize) -> u64 {
    1u64 << (column * COLUMN_BITS)
}

#[inline]
const fn column_mask(column: usize) -> u64 {
    ((1u64 << HEIGHT) - 1) << (column * COLUMN_BITS)
}

#[inline]
const fn top_mask(column: usize) -> u64 {
    1u64 << (HEIGHT - 1 + column * COLUMN_BITS)
}

#[inline]
pub(crate) const fn cell_bit(column: usize, row: usize) -> u64 {
    1u64 << (column * COLUMN_BITS + row)
}

/// Every four-cell line on the board as a bit mask (69 on a 7x6 grid).
pub(crate) static WINDOWS: Lazy<Vec<u64>> = Lazy::new(|| {
    let directions: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];
    let mut windows = Vec::with_capacity(69);
    for column in 0..WIDTH as isize {
        for row in 0..HEIGHT as isize {
            for (dc, dr) in directions {
                let end_column = column + 3 * dc;
                let end_row = row + 3 * dr;
                if !(0..WIDTH as isize).contains(&end_column)
                    || !(0..HEIGHT as isize).contains(&end_row)
                {
                    continue;
                }
                let mask = (0..4).fold(0u64, |mask, k| {
                    mask | cell_bit((column + k * dc) as usize, (row + k * dr) as usize)
                });
                windows.push(mask);
            }
        }
    }
    windows
});

/// Four in a row anywhere in `bits`. The sentinel row keeps shifts from
/// wrapping across columns.
#[inline]
pub(crate) fn has_four(bits: u64) -> bool {
    for shift in [1, COLUMN_BITS - 1, COLUMN_BITS, COLUMN_BITS + 1] {
        let pairs = bits & (bits >> shift);
        if pairs & (pairs >> (2 * shift)) != 0 {
            return true;
        }
    }
    false
}

/// Reference 7x6 Connect Four bitboard.
///
/// Bit `column * 7 + row` is set in `discs[side]` when `side` owns that cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) discs: [u64; 2],
    pub(crate) moves_played: usize,
    pub(crate) hash: u64,
}

impl Board {
    #[must_use]
    pub const fn new() -> Self {
        Board {
            discs: [0; 2],
            moves_played: 0,
            hash: 0,
        }
    }

    /// Build a position from a 1-based column sequence such as `"4453"`.
    pub fn from_moves(moves: &str) -> Result<Self, MoveParseError> {
        moves.parse()
    }

    /// Side to move by disc-count parity.
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        if self.moves_played % 2 == 0 {
            Side::Red
        } else {
            Side::Yellow
        }
    }

    #[must_use]
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    #[must_use]
    pub fn discs(&self, side: Side) -> u64 {
        self.discs[side.index()]
    }

    #[inline]
    pub(crate) fn occupied(&self) -> u64 {
        self.discs[0] | self.discs[1]
    }

    #[inline]
    #[must_use]
    pub fn can_play(&self, column: usize) -> bool {
        column < WIDTH && self.occupied() & top_mask(column) == 0
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|column| !self.can_play(column))
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        Side::ALL.into_iter().find(|&side| has_four(self.discs(side)))
    }

    /// Drop a disc for the side to move, validating the column.
    pub fn play(&mut self, column: usize) -> Result<(), MoveParseError> {
        if column >= WIDTH {
            return Err(MoveParseError::InvalidColumn { column });
        }
        if self.winner().is_some() {
            return Err(MoveParseError::GameOver);
        }
        if !self.can_play(column) {
            return Err(MoveParseError::ColumnFull { column });
        }
        let side = self.side_to_move();
        self.place(column, side);
        Ok(())
    }

    /// Drop a disc without rule checks. Full columns are left untouched.
    pub(crate) fn place(&mut self, column: usize, side: Side) {
        if !self.can_play(column) {
            return;
        }
        let bit = (self.occupied() + bottom_mask(column)) & column_mask(column);
        self.discs[side.index()] |= bit;
        self.moves_played += 1;
        self.hash ^= zobrist::disc_key(side, bit.trailing_zeros() as usize);
    }

    /// Recompute the Zobrist hash from scratch.
    #[must_use]
    pub fn calculate_hash(&self) -> u64 {
        let mut hash = 0;
        for side in Side::ALL {
            let mut bits = self.discs(side);
            while bits != 0 {
                hash ^= zobrist::disc_key(side, bits.trailing_zeros() as usize);
                bits &= bits - 1;
            }
        }
        hash
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Position for Board {
    #[inline]
    fn hash(&self) -> u64 {
        self.hash
    }

    fn legal_moves(&self) -> MoveList {
        (0..WIDTH).filter(|&column| self.can_play(column)).collect()
    }

    fn apply_move(&self, column: usize, side: Side) -> Self {
        let mut next = self.clone();
        next.place(column, side);
        next
    }

    #[inline]
    fn check_win(&self, side: Side) -> bool {
        has_four(self.discs(side))
    }

    fn count_open_three_threats(&self, side: Side) -> u32 {
        let own = self.discs(side);
        let theirs = self.discs(!side);
        WINDOWS
            .iter()
            .filter(|&&window| (own & window).count_ones() == 3 && theirs & window == 0)
            .count() as u32
    }

    fn static_evaluate(&self, side: Side) -> i32 {
        eval::evaluate(self, side)
    }

    fn width(&self) -> usize {
        WIDTH
    }

    fn height(&self) -> usize {
        HEIGHT
    }

    fn occupant(&self, column: usize, row: usize) -> Option<Side> {
        if column >= WIDTH || row >= HEIGHT {
            return None;
        }
        let bit = cell_bit(column, row);
        Side::ALL
            .into_iter()
            .find(|&side| self.discs(side) & bit != 0)
    }

    fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        let filled = (self.occupied() & column_mask(column)).count_ones() as usize;
        (filled < HEIGHT).then_some(filled)
    }
}

impl FromStr for Board {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new();
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let column = c
                .to_digit(10)
                .map(|d| d as usize)
                .filter(|&d| (1..=WIDTH).contains(&d))
                .ok_or(MoveParseError::InvalidCharacter { char: c })?;
            board.play(column - 1)?;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            for column in 0..WIDTH {
                let c = self.occupant(column, row).map_or('.', Side::to_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        for column in 1..=WIDTH {
            write!(f, "{column}")?;
        }
        Ok(())
    }
}
