//! Move ordering utilities for search.

use super::constants::KILLER_BONUS;
use super::tactics::TacticalMove;
use super::KillerTable;

/// Boost killers for `depth` and sort by descending priority.
///
/// The sort is stable, so equal priorities keep column order. Returns how
/// many moves received the killer bonus.
pub fn order_moves(moves: &mut [TacticalMove], killers: Option<&KillerTable>, depth: usize) -> u64 {
    let mut boosted = 0;
    if let Some(killers) = killers {
        for mv in moves.iter_mut() {
            if killers.is_killer(depth, mv.column) {
                mv.priority += KILLER_BONUS;
                boosted += 1;
            }
        }
    }
    moves.sort_by(|a, b| b.priority.cmp(&a.priority));
    boosted
}
