use super::complexity::analyze_complexity;
use super::constants::{CRITICAL_PRIORITY, DELTA_LEVEL_STEP, KILLER_BONUS};
use super::move_order::order_moves;
use super::stats::CutoffType;
use super::tactics::generate_tactical_moves;
use super::{SearchConfig, SearchTables};
use crate::board::{Position, Side};
use crate::tt::BoundType;
use crate::{engine_trace, zobrist};

/// Result of one quiescence call, from the point of view of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuiesceNode {
    pub score: i32,
    pub best_column: Option<usize>,
    /// Ply of the node that produced this result
    pub depth: u32,
    /// This node plus every descendant visited
    pub nodes_visited: u64,
    pub cutoff: Option<CutoffType>,
}

impl QuiesceNode {
    fn leaf(score: i32, depth: u32, cutoff: Option<CutoffType>) -> Self {
        QuiesceNode {
            score,
            best_column: None,
            depth,
            nodes_visited: 1,
            cutoff,
        }
    }
}

/// Search context for a single quiescence query
pub struct QuiescenceContext<'a> {
    pub config: &'a SearchConfig,
    pub tables: &'a mut SearchTables,
}

impl QuiescenceContext<'_> {
    /// Remaining depth budget at `depth`, the unit transposition entries are compared in.
    #[inline]
    fn draft(&self, depth: u32) -> i32 {
        self.config.max_depth as i32 - depth as i32
    }

    fn store(&mut self, key: u64, depth: u32, score: i32, bound: BoundType, column: Option<usize>) {
        if self.config.use_transposition_table {
            let draft = self.draft(depth);
            self.tables.tt.store(key, draft, score, bound, column);
        }
    }

    fn cutoff(&mut self, score: i32, depth: u32, cutoff: CutoffType) -> QuiesceNode {
        self.tables.stats.record_cutoff(cutoff);
        QuiesceNode::leaf(score, depth, Some(cutoff))
    }

    /// Negamax quiescence over tactical drops only.
    #[allow(clippy::too_many_lines)]
    pub fn quiesce<P: Position>(
        &mut self,
        position: &P,
        mut alpha: i32,
        mut beta: i32,
        side: Side,
        depth: u32,
    ) -> QuiesceNode {
        self.tables.stats.record_node(depth);

        let key = position.hash() ^ zobrist::side_to_move_key(side);

        if self.config.use_transposition_table {
            let entry = self
                .tables
                .tt
                .probe(key)
                .filter(|entry| entry.is_reusable_at(self.draft(depth)));
            self.tables.stats.record_tt_probe(entry.is_some());

            if let Some(entry) = entry {
                match entry.bound_type {
                    BoundType::Exact => {
                        let mut node = self.cutoff(entry.score, depth, CutoffType::Transposition);
                        node.best_column = entry.best_column;
                        return node;
                    }
                    BoundType::LowerBound => alpha = alpha.max(entry.score),
                    BoundType::UpperBound => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    let mut node = self.cutoff(entry.score, depth, CutoffType::Transposition);
                    node.best_column = entry.best_column;
                    return node;
                }
            }
        }

        let stand_pat = position.static_evaluate(side);

        // The previous drop finished the game
        if position.check_win(!side) {
            return QuiesceNode::leaf(stand_pat, depth, None);
        }

        if stand_pat >= beta {
            self.store(key, depth, stand_pat, BoundType::LowerBound, None);
            return self.cutoff(stand_pat, depth, CutoffType::Beta);
        }

        let original_alpha = alpha;
        alpha = alpha.max(stand_pat);

        let complexity = analyze_complexity(position, side);
        let dynamic_max_depth = if complexity.is_sharp() {
            self.config.max_depth + self.config.threat_depth_bonus
        } else {
            self.config.max_depth
        };
        if depth >= dynamic_max_depth {
            return self.cutoff(alpha, depth, CutoffType::Depth);
        }

        if self.config.use_delta_pruning && depth > 0 {
            let margin = self.config.delta_margin + complexity.level as i32 * DELTA_LEVEL_STEP;
            if stand_pat + margin < alpha {
                return self.cutoff(alpha, depth, CutoffType::Delta);
            }
        }

        let mut moves = generate_tactical_moves(position, side, self.config);
        if moves.is_empty() {
            self.store(key, depth, stand_pat, BoundType::Exact, None);
            return QuiesceNode::leaf(stand_pat, depth, None);
        }

        let killers = self.config.use_killer_moves.then_some(&self.tables.killers);
        let boosted = order_moves(&mut moves, killers, depth as usize);
        self.tables.stats.killer_hits += boosted;
        moves.truncate(self.config.max_moves_to_search);

        let mut best_score = alpha;
        let mut best_column = None;
        let mut nodes_visited = 1;

        for mv in &moves {
            // Futility sees the tactical priority, never the killer bonus
            let priority = if self.config.use_killer_moves
                && self.tables.killers.is_killer(depth as usize, mv.column)
            {
                mv.priority - KILLER_BONUS
            } else {
                mv.priority
            };
            if self.config.use_futility_pruning
                && depth > 0
                && priority < CRITICAL_PRIORITY
                && stand_pat + priority + self.config.futility_margin <= best_score
            {
                self.tables.stats.futility_prunes += 1;
                continue;
            }

            let next = position.apply_move(mv.column, side);
            let child = self.quiesce(&next, -beta, -best_score, !side, depth + 1);
            nodes_visited += child.nodes_visited;
            let score = -child.score;

            if score >= beta {
                if self.config.use_killer_moves {
                    self.tables.killers.update(depth as usize, mv.column);
                }
                self.store(key, depth, beta, BoundType::LowerBound, Some(mv.column));
                self.tables.stats.record_cutoff(CutoffType::Beta);
                if depth == 0 {
                    engine_trace!("root beta cutoff on column {} score {}", mv.column, score);
                }
                return QuiesceNode {
                    score,
                    best_column: Some(mv.column),
                    depth,
                    nodes_visited,
                    cutoff: Some(CutoffType::Beta),
                };
            }

            if score > best_score {
                best_score = score;
                best_column = Some(mv.column);
            }
        }

        let bound = if best_score <= original_alpha {
            BoundType::UpperBound
        } else if best_score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.store(key, depth, best_score, bound, best_column);

        QuiesceNode {
            score: best_score,
            best_column,
            depth,
            nodes_visited,
            cutoff: None,
        }
    }
}
