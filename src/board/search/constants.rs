//! Search constants and parameters.
//!
//! Contains the fixed priorities and thresholds used by the quiescence search.

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Window bound safe to negate. Wider than any evaluator score.
pub const INFINITY: i32 = 1_000_000;

/// Killer slots are tracked for plies `0..MAX_KILLER_DEPTH`
pub const MAX_KILLER_DEPTH: usize = 64;

/// Killers kept per ply
pub const KILLERS_PER_DEPTH: usize = 2;

/// Complexity levels above this get the threat depth bonus
pub const COMPLEXITY_EXTENSION_LEVEL: u32 = 2;

/// Complexity level ceiling
pub const MAX_COMPLEXITY_LEVEL: u32 = 5;

/// Delta margin widening per complexity level
pub const DELTA_LEVEL_STEP: i32 = 100;

// ============================================================================
// TACTICAL MOVE PRIORITIES
// ============================================================================
// Higher scores = tried earlier. First matching rule wins:
// win > block > triple > double > fork > fork block > pattern > zugzwang > quiet

/// Move completes four in a row
pub const WIN_PRIORITY: i32 = 10_000;

/// Move occupies the cell where the opponent would complete four
pub const BLOCK_PRIORITY: i32 = 9_000;

/// Move leaves three or more open threes
pub const TRIPLE_THREAT_PRIORITY: i32 = 8_000;

/// Move leaves two open threes
pub const DOUBLE_THREAT_PRIORITY: i32 = 7_000;

/// Move leaves two immediately winning columns
pub const FORK_PRIORITY: i32 = 6_000;

/// Move takes the column the opponent would fork from
pub const FORK_BLOCK_PRIORITY: i32 = 5_500;

/// Base for trap / parity / centre-control patterns
pub const ADVANCED_PATTERN_PRIORITY: i32 = 4_000;

pub const TRAP_BONUS: i32 = 600;
pub const PARITY_BONUS: i32 = 400;
pub const CENTER_CONTROL_BONUS: i32 = 200;

/// Most opponent replies hand us a threat
pub const ZUGZWANG_PRIORITY: i32 = 3_000;

/// Move enables a threat on the following turn
pub const QUIET_SETUP_PRIORITY: i32 = 1_000;

/// Moves at or above this priority are never futility-pruned
pub const CRITICAL_PRIORITY: i32 = FORK_BLOCK_PRIORITY;

/// Added to a move found in the killer table for its ply
pub const KILLER_BONUS: i32 = 800;
