//! Transposition table for caching quiescence results.
//!
//! Entries are keyed by position hash and carry a bound type plus the
//! remaining search draft they were computed with. The table is capacity
//! bounded: once full, the oldest half of the entries (by age, then by
//! insertion order) is evicted in one pass before the next insert.
//!
//! The table has no internal locking. Give each worker its own instance or
//! wrap it (see `board::search::SharedSearchTables`).

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine_debug;

/// Default capacity in entries
pub const DEFAULT_TT_CAPACITY: usize = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    pub score: i32,
    pub best_column: Option<usize>,
    /// Remaining depth budget (`max_depth - ply`) when the entry was written
    pub draft: i32,
    pub bound_type: BoundType,
    /// Table age at the time of the store
    pub age: u32,
}

impl TTEntry {
    /// Whether this entry may answer a query searched with `draft` remaining.
    #[inline]
    #[must_use]
    pub fn is_reusable_at(&self, draft: i32) -> bool {
        self.draft >= draft
    }
}

#[derive(Clone, Copy, Debug)]
struct Slot {
    entry: TTEntry,
    stamp: u64,
}

pub struct TranspositionTable {
    slots: HashMap<u64, Slot>,
    capacity: usize,
    age: u32,
    next_stamp: u64,
}

impl Default for TranspositionTable {
    fn default() -> Self {
        Self::new(DEFAULT_TT_CAPACITY)
    }
}

impl TranspositionTable {
    /// Create a table holding at most `capacity` entries (minimum 2).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        TranspositionTable {
            slots: HashMap::with_capacity(capacity.min(1 << 16)),
            capacity,
            age: 0,
            next_stamp: 0,
        }
    }

    /// Probe the table for an entry matching the given hash.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        self.slots.get(&hash).map(|slot| slot.entry)
    }

    /// Store an entry, replacing any previous entry for `hash`.
    pub fn store(
        &mut self,
        hash: u64,
        draft: i32,
        score: i32,
        bound_type: BoundType,
        best_column: Option<usize>,
    ) {
        if self.slots.len() >= self.capacity && !self.slots.contains_key(&hash) {
            self.evict_oldest_half();
        }

        let entry = TTEntry {
            score,
            best_column,
            draft,
            bound_type,
            age: self.age,
        };
        let stamp = self.next_stamp;
        self.next_stamp += 1;
        self.slots.insert(hash, Slot { entry, stamp });
    }

    fn evict_oldest_half(&mut self) {
        let mut order: Vec<(u32, u64, u64)> = self
            .slots
            .iter()
            .map(|(&hash, slot)| (slot.entry.age, slot.stamp, hash))
            .collect();
        order.sort_unstable();

        let evict = order.len() / 2;
        for &(_, _, hash) in &order[..evict] {
            self.slots.remove(&hash);
        }
        engine_debug!(
            "tt: evicted {} of {} entries at age {}",
            evict,
            order.len(),
            self.age
        );
    }

    /// Advance the age stamped on subsequent stores.
    pub fn age_entries(&mut self) {
        self.age = self.age.wrapping_add(1);
    }

    /// Clear all entries and reset the age.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.age = 0;
        self.next_stamp = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Returns table fullness in per mille (0-1000).
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        ((self.slots.len() as u64 * 1000) / self.capacity as u64) as u32
    }
}
