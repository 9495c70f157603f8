#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::ConfigError;

/// Empty-cell count below which the endgame profile deepens the search
pub const ENDGAME_EMPTY_CELLS: usize = 10;

/// Tunable quiescence parameters. Immutable for the duration of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[allow(clippy::struct_excessive_bools)]
pub struct SearchConfig {
    pub max_depth: u32,
    /// Extra plies granted when the position is tactically sharp
    pub threat_depth_bonus: u32,
    pub delta_margin: i32,
    pub futility_margin: i32,
    pub use_transposition_table: bool,
    pub use_killer_moves: bool,
    pub use_delta_pruning: bool,
    pub use_futility_pruning: bool,
    pub use_pattern_detection: bool,
    pub max_moves_to_search: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 4,
            threat_depth_bonus: 2,
            delta_margin: 300,
            futility_margin: 150,
            use_transposition_table: true,
            use_killer_moves: true,
            use_delta_pruning: true,
            use_futility_pruning: true,
            use_pattern_detection: true,
            max_moves_to_search: 5,
        }
    }
}

impl SearchConfig {
    /// Wider profile for positions with few empty cells left.
    #[must_use]
    pub fn endgame(empty_cells: usize) -> Self {
        SearchConfig {
            max_depth: if empty_cells < ENDGAME_EMPTY_CELLS { 6 } else { 4 },
            threat_depth_bonus: 3,
            delta_margin: 150,
            max_moves_to_search: 7,
            ..Default::default()
        }
    }

    /// Config with every pruning and caching aid switched off.
    #[must_use]
    pub fn plain(max_depth: u32) -> Self {
        SearchConfig {
            max_depth,
            use_transposition_table: false,
            use_killer_moves: false,
            use_delta_pruning: false,
            use_futility_pruning: false,
            ..Default::default()
        }
    }

    /// Check the caller contract: margins non-negative, move cap at least one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delta_margin < 0 {
            return Err(ConfigError::NegativeMargin {
                name: "delta_margin",
                value: self.delta_margin,
            });
        }
        if self.futility_margin < 0 {
            return Err(ConfigError::NegativeMargin {
                name: "futility_margin",
                value: self.futility_margin,
            });
        }
        if self.max_moves_to_search == 0 {
            return Err(ConfigError::ZeroMoveCap);
        }
        Ok(())
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_threat_depth_bonus(mut self, bonus: u32) -> Self {
        self.threat_depth_bonus = bonus;
        self
    }

    #[must_use]
    pub fn with_delta_margin(mut self, margin: i32) -> Self {
        self.delta_margin = margin;
        self
    }

    #[must_use]
    pub fn with_futility_margin(mut self, margin: i32) -> Self {
        self.futility_margin = margin;
        self
    }

    #[must_use]
    pub fn with_transposition_table(mut self, enabled: bool) -> Self {
        self.use_transposition_table = enabled;
        self
    }

    #[must_use]
    pub fn with_killer_moves(mut self, enabled: bool) -> Self {
        self.use_killer_moves = enabled;
        self
    }

    #[must_use]
    pub fn with_delta_pruning(mut self, enabled: bool) -> Self {
        self.use_delta_pruning = enabled;
        self
    }

    #[must_use]
    pub fn with_futility_pruning(mut self, enabled: bool) -> Self {
        self.use_futility_pruning = enabled;
        self
    }

    #[must_use]
    pub fn with_pattern_detection(mut self, enabled: bool) -> Self {
        self.use_pattern_detection = enabled;
        self
    }

    #[must_use]
    pub fn with_max_moves(mut self, max_moves: usize) -> Self {
        self.max_moves_to_search = max_moves;
        self
    }
}
