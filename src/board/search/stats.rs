//! Search statistics recorder.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Why a node returned before examining all of its moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CutoffType {
    /// Stand-pat or a move reached beta
    Beta,
    /// Stand-pat plus the delta margin cannot reach alpha
    Delta,
    /// Ply reached the dynamic depth limit
    Depth,
    /// Answered from the transposition table
    Transposition,
}

/// Counters accumulated across searches until reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStatistics {
    pub total_nodes: u64,
    pub beta_cutoffs: u64,
    pub delta_cutoffs: u64,
    pub depth_cutoffs: u64,
    pub transposition_cutoffs: u64,
    /// Moves skipped by futility pruning
    pub futility_prunes: u64,
    pub tt_probes: u64,
    /// Probes that found a reusable entry
    pub tt_hits: u64,
    /// Ordered moves boosted by the killer table
    pub killer_hits: u64,
    pub max_depth_reached: u32,
}

impl SearchStatistics {
    #[inline]
    pub fn record_node(&mut self, depth: u32) {
        self.total_nodes += 1;
        self.max_depth_reached = self.max_depth_reached.max(depth);
    }

    #[inline]
    pub fn record_cutoff(&mut self, cutoff: CutoffType) {
        match cutoff {
            CutoffType::Beta => self.beta_cutoffs += 1,
            CutoffType::Delta => self.delta_cutoffs += 1,
            CutoffType::Depth => self.depth_cutoffs += 1,
            CutoffType::Transposition => self.transposition_cutoffs += 1,
        }
    }

    #[inline]
    pub fn record_tt_probe(&mut self, hit: bool) {
        self.tt_probes += 1;
        if hit {
            self.tt_hits += 1;
        }
    }

    /// Fraction of probes that found a reusable entry, 0.0 with no probes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cache_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64
        }
    }

    #[must_use]
    pub fn total_cutoffs(&self) -> u64 {
        self.beta_cutoffs + self.delta_cutoffs + self.depth_cutoffs + self.transposition_cutoffs
    }

    pub fn reset(&mut self) {
        *self = SearchStatistics::default();
    }
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes {} maxdepth {} cutoffs beta {} delta {} depth {} tt {} futility {} ttprobes {} tthits {} hitrate {:.3} killers {}",
            self.total_nodes,
            self.max_depth_reached,
            self.beta_cutoffs,
            self.delta_cutoffs,
            self.depth_cutoffs,
            self.transposition_cutoffs,
            self.futility_prunes,
            self.tt_probes,
            self.tt_hits,
            self.cache_hit_rate(),
            self.killer_hits
        )
    }
}
