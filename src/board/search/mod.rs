//! Quiescence search over tactically loud Connect Four positions.
//!
//! Features:
//! - Negamax quiescence with stand-pat
//! - Beta, delta, futility and dynamic depth pruning
//! - Pattern-based tactical move classification (forks, traps, parity, zugzwang)
//! - Move ordering by tactical priority and killer moves
//! - Transposition table with bound types and age-based eviction
//!
//! All mutable state lives in [`SearchTables`], which the caller owns and
//! passes in. One instance per worker; see [`SharedSearchTables`] for
//! serialized access from several threads.

mod complexity;
mod constants;
mod log;
mod move_order;
mod params;
mod quiescence;
mod shared;
mod stats;
mod tactics;

use crate::engine_debug;
use crate::tt::{TranspositionTable, DEFAULT_TT_CAPACITY};

use super::{Position, Side};

pub use complexity::{analyze_complexity, PositionComplexity};
pub use constants::*;
pub use self::log::{SearchInfo, SearchLogger, StdoutLogger};
#[cfg(feature = "logging")]
pub use self::log::LogCrateLogger;
pub use move_order::order_moves;
pub use params::{SearchConfig, ENDGAME_EMPTY_CELLS};
pub use quiescence::{QuiesceNode, QuiescenceContext};
pub use shared::SharedSearchTables;
pub use stats::{CutoffType, SearchStatistics};
pub use tactics::{
    analyze_move, analyze_move_with, generate_tactical_moves, MoveContext, Pattern, TacticalMove,
    TacticalType,
};

/// Per-ply record of drops that recently caused a beta cutoff.
///
/// Two slots per ply, most recent first. A column already present is not
/// inserted again; a new column pushes the older killer out of slot two.
pub struct KillerTable {
    slots: [[Option<usize>; KILLERS_PER_DEPTH]; MAX_KILLER_DEPTH],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [[None; KILLERS_PER_DEPTH]; MAX_KILLER_DEPTH],
        }
    }

    #[must_use]
    pub fn primary(&self, depth: usize) -> Option<usize> {
        self.slots.get(depth).and_then(|row| row[0])
    }

    #[must_use]
    pub fn secondary(&self, depth: usize) -> Option<usize> {
        self.slots.get(depth).and_then(|row| row[1])
    }

    /// Killers at `depth`, most recent first.
    pub fn killers(&self, depth: usize) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .get(depth)
            .into_iter()
            .flat_map(|row| row.iter().flatten().copied())
    }

    #[must_use]
    pub fn is_killer(&self, depth: usize, column: usize) -> bool {
        self.killers(depth).any(|killer| killer == column)
    }

    pub fn update(&mut self, depth: usize, column: usize) {
        if depth >= MAX_KILLER_DEPTH || self.is_killer(depth, column) {
            return;
        }
        let row = &mut self.slots[depth];
        row[1] = row[0];
        row[0] = Some(column);
    }

    pub fn reset(&mut self) {
        for killers in &mut self.slots {
            *killers = [None; KILLERS_PER_DEPTH];
        }
    }
}

/// Tables shared by every node of a search (TT, killers, statistics).
pub struct SearchTables {
    pub tt: TranspositionTable,
    pub killers: KillerTable,
    pub stats: SearchStatistics,
}

impl Default for SearchTables {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchTables {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TT_CAPACITY)
    }

    /// Tables with a transposition table of `tt_capacity` entries.
    #[must_use]
    pub fn with_capacity(tt_capacity: usize) -> Self {
        SearchTables {
            tt: TranspositionTable::new(tt_capacity),
            killers: KillerTable::new(),
            stats: SearchStatistics::default(),
        }
    }

    /// Empty the transposition and killer tables. Statistics are kept.
    pub fn clear_all_tables(&mut self) {
        engine_debug!("clearing search tables ({} tt entries)", self.tt.len());
        self.tt.clear();
        self.killers.reset();
    }

    /// Advance the transposition age, typically once per top-level decision.
    pub fn age_transposition_table(&mut self) {
        self.tt.age_entries();
    }

    /// Snapshot of the counters.
    #[must_use]
    pub fn statistics(&self) -> SearchStatistics {
        self.stats.clone()
    }

    pub fn reset_statistics(&mut self) {
        self.stats.reset();
    }
}

/// Quiescence search from `position` for `side` within `(alpha, beta)`.
///
/// `depth` is the ply from the caller's root, normally 0. Window bounds must
/// be negatable; use `±INFINITY` for a full window.
pub fn quiesce<P: Position>(
    position: &P,
    alpha: i32,
    beta: i32,
    side: Side,
    depth: u32,
    config: &SearchConfig,
    tables: &mut SearchTables,
) -> QuiesceNode {
    debug_assert!(config.validate().is_ok(), "invalid search config: {config:?}");
    debug_assert!(alpha < beta, "empty window ({alpha}, {beta})");

    let mut ctx = QuiescenceContext { config, tables };
    ctx.quiesce(position, alpha, beta, side, depth)
}

/// [`quiesce`] with the endgame profile picked from the empty-cell count.
pub fn quiesce_endgame<P: Position>(
    position: &P,
    alpha: i32,
    beta: i32,
    side: Side,
    depth: u32,
    tables: &mut SearchTables,
) -> QuiesceNode {
    let config = SearchConfig::endgame(position.empty_cells());
    quiesce(position, alpha, beta, side, depth, &config, tables)
}
