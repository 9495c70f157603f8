//! Position complexity: how tactically loud the current position is.

use super::constants::{COMPLEXITY_EXTENSION_LEVEL, MAX_COMPLEXITY_LEVEL};
use crate::board::{Position, Side};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PositionComplexity {
    /// 0 (quiet) to 5 (very sharp)
    pub level: u32,
    /// Open threes summed over every drop by either side
    pub threat_count: u32,
    /// Drops after which the dropping side has two or more open threes
    pub fork_count: u32,
    /// Drops that win on the spot, for either side
    pub immediate_win_count: u32,
    /// Own drops that leave an immediately winning column the opponent must answer
    pub forced_sequence_count: u32,
}

impl PositionComplexity {
    #[must_use]
    pub fn is_sharp(&self) -> bool {
        self.level > COMPLEXITY_EXTENSION_LEVEL
    }
}

/// Scan every legal drop for both sides and grade the position.
#[must_use]
pub fn analyze_complexity<P: Position>(position: &P, side: Side) -> PositionComplexity {
    let mut complexity = PositionComplexity::default();

    for column in position.legal_moves().iter() {
        for mover in [side, !side] {
            let next = position.apply_move(column, mover);
            if next.check_win(mover) {
                complexity.immediate_win_count += 1;
            }

            let threats = next.count_open_three_threats(mover);
            complexity.threat_count += threats;
            if threats >= 2 {
                complexity.fork_count += 1;
            }
            if mover == side && next.winning_columns(side) > 0 {
                complexity.forced_sequence_count += 1;
            }
        }
    }

    complexity.level = MAX_COMPLEXITY_LEVEL.min(
        complexity.immediate_win_count * 2
            + complexity.fork_count * 3
            + complexity.threat_count / 2,
    );
    complexity
}
