//! Tactical move classification.
//!
//! Each candidate drop is tested against a fixed ladder of rules and tagged
//! with the first one it satisfies:
//!
//! 1. immediate win
//! 2. immediate block
//! 3. triple-threat creation
//! 4. double-threat creation
//! 5. fork creation
//! 6. fork block
//! 7. advanced pattern (trap, parity, centre control; bonuses add up)
//! 8. zugzwang
//! 9. quiet setup
//!
//! A drop that matches nothing is not relevant and is left out of the
//! quiescence search entirely.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{
    ADVANCED_PATTERN_PRIORITY, BLOCK_PRIORITY, CENTER_CONTROL_BONUS, DOUBLE_THREAT_PRIORITY,
    FORK_BLOCK_PRIORITY, FORK_PRIORITY, PARITY_BONUS, QUIET_SETUP_PRIORITY, TRAP_BONUS,
    TRIPLE_THREAT_PRIORITY, WIN_PRIORITY, ZUGZWANG_PRIORITY,
};
use super::SearchConfig;
use crate::board::{Position, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TacticalType {
    ImmediateWin,
    ImmediateBlock,
    TripleThreat,
    DoubleThreat,
    ForkCreation,
    ForkBlock,
    AdvancedPattern,
    Zugzwang,
    QuietSetup,
}

impl TacticalType {
    /// Fixed priority before any pattern or killer bonus.
    #[must_use]
    pub const fn base_priority(self) -> i32 {
        match self {
            TacticalType::ImmediateWin => WIN_PRIORITY,
            TacticalType::ImmediateBlock => BLOCK_PRIORITY,
            TacticalType::TripleThreat => TRIPLE_THREAT_PRIORITY,
            TacticalType::DoubleThreat => DOUBLE_THREAT_PRIORITY,
            TacticalType::ForkCreation => FORK_PRIORITY,
            TacticalType::ForkBlock => FORK_BLOCK_PRIORITY,
            TacticalType::AdvancedPattern => ADVANCED_PATTERN_PRIORITY,
            TacticalType::Zugzwang => ZUGZWANG_PRIORITY,
            TacticalType::QuietSetup => QUIET_SETUP_PRIORITY,
        }
    }
}

/// A search-relevant drop. Transient, built fresh at every node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TacticalMove {
    pub column: usize,
    pub priority: i32,
    pub kind: TacticalType,
}

impl TacticalMove {
    #[must_use]
    pub const fn new(column: usize, kind: TacticalType) -> Self {
        TacticalMove {
            column,
            priority: kind.base_priority(),
            kind,
        }
    }
}

/// Everything the rule ladder needs to know about one drop, computed once.
#[derive(Clone, Debug)]
pub struct MoveContext<'a, P: Position> {
    pub before: &'a P,
    pub after: P,
    pub column: usize,
    pub side: Side,
    pub landing_row: usize,
    pub threats_before: u32,
    pub threats_after: u32,
}

impl<'a, P: Position> MoveContext<'a, P> {
    /// `None` when `column` cannot take another disc.
    #[must_use]
    pub fn new(before: &'a P, column: usize, side: Side) -> Option<Self> {
        let landing_row = before.landing_row(column)?;
        let after = before.apply_move(column, side);
        Some(MoveContext {
            before,
            threats_before: before.count_open_three_threats(side),
            threats_after: after.count_open_three_threats(side),
            after,
            column,
            side,
            landing_row,
        })
    }

    #[inline]
    fn raises_threats(&self) -> bool {
        self.threats_after > self.threats_before
    }
}

/// Positional patterns that earn the advanced-pattern tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pattern {
    /// The opponent now has a column where dropping lets us win on top
    Trap,
    /// New threat on a row of our parity
    Parity,
    /// Centre-band drop that links up with our own discs
    CenterControl,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Trap, Pattern::Parity, Pattern::CenterControl];

    #[must_use]
    pub const fn bonus(self) -> i32 {
        match self {
            Pattern::Trap => TRAP_BONUS,
            Pattern::Parity => PARITY_BONUS,
            Pattern::CenterControl => CENTER_CONTROL_BONUS,
        }
    }

    #[must_use]
    pub fn detect<P: Position>(self, ctx: &MoveContext<'_, P>) -> bool {
        match self {
            Pattern::Trap => detect_trap(ctx),
            Pattern::Parity => detect_parity(ctx),
            Pattern::CenterControl => detect_center_control(ctx),
        }
    }
}

/// `side` ends up with two or more winning columns, more than it had before.
fn creates_fork<P: Position>(before: &P, after: &P, side: Side) -> bool {
    let winning = after.winning_columns(side);
    winning >= 2 && winning > before.winning_columns(side)
}

/// Columns where an opponent drop would let `side` win in the same column.
fn poisoned_columns<P: Position>(position: &P, side: Side) -> usize {
    let opponent = !side;
    position
        .legal_moves()
        .iter()
        .filter(|&column| {
            let reply = position.apply_move(column, opponent);
            !reply.check_win(opponent)
                && reply.landing_row(column).is_some()
                && reply.apply_move(column, side).check_win(side)
        })
        .count()
}

fn detect_trap<P: Position>(ctx: &MoveContext<'_, P>) -> bool {
    poisoned_columns(&ctx.after, ctx.side) > poisoned_columns(ctx.before, ctx.side)
}

fn detect_parity<P: Position>(ctx: &MoveContext<'_, P>) -> bool {
    ctx.raises_threats() && ctx.side.owns_row_parity(ctx.landing_row)
}

fn detect_center_control<P: Position>(ctx: &MoveContext<'_, P>) -> bool {
    let center = ctx.before.width() / 2;
    if ctx.column.abs_diff(center) > 1 {
        return false;
    }

    let mut own_neighbours = 0;
    for dc in -1isize..=1 {
        for dr in -1isize..=1 {
            if dc == 0 && dr == 0 {
                continue;
            }
            let (Some(column), Some(row)) = (
                ctx.column.checked_add_signed(dc),
                ctx.landing_row.checked_add_signed(dr),
            ) else {
                continue;
            };
            if ctx.before.occupant(column, row) == Some(ctx.side) {
                own_neighbours += 1;
            }
        }
    }
    own_neighbours >= 2
}

/// Most opponent replies leave us an immediately winning column.
fn detect_zugzwang<P: Position>(ctx: &MoveContext<'_, P>) -> bool {
    let opponent = !ctx.side;
    let replies = ctx.after.legal_moves();
    if replies.len() < 2 {
        return false;
    }

    let conceding = replies
        .iter()
        .filter(|&column| {
            let next = ctx.after.apply_move(column, opponent);
            !next.check_win(opponent) && next.winning_columns(ctx.side) > 0
        })
        .count();
    conceding * 2 > replies.len()
}

/// Some follow-up drop of ours would raise our threat count.
fn detect_quiet_setup<P: Position>(ctx: &MoveContext<'_, P>) -> bool {
    ctx.after.legal_moves().iter().any(|column| {
        ctx.after
            .apply_move(column, ctx.side)
            .count_open_three_threats(ctx.side)
            > ctx.threats_after
    })
}

/// Classify one drop with every rule enabled.
#[must_use]
pub fn analyze_move<P: Position>(position: &P, column: usize, side: Side) -> Option<TacticalMove> {
    analyze_move_with(position, column, side, true)
}

/// Classify one drop. `use_patterns` gates the pattern and zugzwang tiers.
#[must_use]
pub fn analyze_move_with<P: Position>(
    position: &P,
    column: usize,
    side: Side,
    use_patterns: bool,
) -> Option<TacticalMove> {
    let ctx = MoveContext::new(position, column, side)?;
    let opponent = !side;

    if ctx.after.check_win(side) {
        return Some(TacticalMove::new(column, TacticalType::ImmediateWin));
    }

    let blocked = position.apply_move(column, opponent);
    if blocked.check_win(opponent) {
        return Some(TacticalMove::new(column, TacticalType::ImmediateBlock));
    }

    if ctx.raises_threats() {
        if ctx.threats_after >= 3 {
            return Some(TacticalMove::new(column, TacticalType::TripleThreat));
        }
        if ctx.threats_after >= 2 {
            return Some(TacticalMove::new(column, TacticalType::DoubleThreat));
        }
    }

    if creates_fork(position, &ctx.after, side) {
        return Some(TacticalMove::new(column, TacticalType::ForkCreation));
    }

    if creates_fork(position, &blocked, opponent) {
        return Some(TacticalMove::new(column, TacticalType::ForkBlock));
    }

    if use_patterns {
        let bonus: i32 = Pattern::ALL
            .into_iter()
            .filter(|pattern| pattern.detect(&ctx))
            .map(Pattern::bonus)
            .sum();
        if bonus > 0 {
            let mut mv = TacticalMove::new(column, TacticalType::AdvancedPattern);
            mv.priority += bonus;
            return Some(mv);
        }

        if detect_zugzwang(&ctx) {
            return Some(TacticalMove::new(column, TacticalType::Zugzwang));
        }
    }

    if detect_quiet_setup(&ctx) {
        return Some(TacticalMove::new(column, TacticalType::QuietSetup));
    }

    None
}

/// All search-relevant drops for `side`, in column order.
#[must_use]
pub fn generate_tactical_moves<P: Position>(
    position: &P,
    side: Side,
    config: &SearchConfig,
) -> Vec<TacticalMove> {
    position
        .legal_moves()
        .iter()
        .filter_map(|column| {
            analyze_move_with(position, column, side, config.use_pattern_detection)
        })
        .collect()
}
