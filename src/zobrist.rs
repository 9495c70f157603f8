//! Zobrist hashing for Connect Four positions.
//!
//! Provides incrementally-updatable 64-bit position hashes for the transposition table.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Side, COLUMN_BITS, WIDTH};

pub(crate) struct ZobristKeys {
    // disc_keys[side][bit_index], bit_index = column * COLUMN_BITS + row
    pub(crate) disc_keys: [[u64; WIDTH * COLUMN_BITS]; 2],
    // Mixed into transposition keys when Yellow is the side to move
    pub(crate) yellow_to_move_key: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut disc_keys = [[0; WIDTH * COLUMN_BITS]; 2];

        for side in &mut disc_keys {
            for key in side.iter_mut() {
                *key = rng.gen();
            }
        }

        let yellow_to_move_key = rng.gen();

        ZobristKeys {
            disc_keys,
            yellow_to_move_key,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[inline]
pub(crate) fn disc_key(side: Side, bit_index: usize) -> u64 {
    ZOBRIST.disc_keys[side.index()][bit_index]
}

/// Key distinguishing the same disc layout searched for different sides.
#[inline]
#[must_use]
pub fn side_to_move_key(side: Side) -> u64 {
    match side {
        Side::Red => 0,
        Side::Yellow => ZOBRIST.yellow_to_move_key,
    }
}
