//! Quiescence search tests.
//!
//! Scores and node counts below are for the reference board and evaluator.

use super::{exact_value, full_board, red_forced_loss, red_wins_in_column_three};
use crate::board::search::{
    quiesce, quiesce_endgame, CutoffType, SearchConfig, SearchInfo, SearchStatistics,
    SearchTables, ENDGAME_EMPTY_CELLS, INFINITY,
};
use crate::board::{Board, BoardBuilder, ConfigError, Position, Side, WIN_SCORE};
use crate::tt::BoundType;
use crate::zobrist;

fn quiet_position() -> Board {
    BoardBuilder::new()
        .column(0, "R")
        .column(1, "R")
        .column(6, "YY")
        .build()
}

fn tt_key(board: &Board, side: Side) -> u64 {
    board.hash() ^ zobrist::side_to_move_key(side)
}

// ============================================================================
// Basic results
// ============================================================================

#[test]
fn empty_board_is_quiescent() {
    let mut tables = SearchTables::new();
    let node = quiesce(
        &Board::new(),
        -INFINITY,
        INFINITY,
        Side::Red,
        0,
        &SearchConfig::default(),
        &mut tables,
    );
    assert_eq!(node.score, 0);
    assert_eq!(node.best_column, None);
    assert_eq!(node.nodes_visited, 1);
    assert_eq!(node.cutoff, None);
    assert_eq!(tables.stats.total_nodes, 1);
}

#[test]
fn finds_immediate_win_full_window() {
    let board = red_wins_in_column_three();
    let mut tables = SearchTables::new();
    let node = quiesce(
        &board,
        -INFINITY,
        INFINITY,
        Side::Red,
        0,
        &SearchConfig::default(),
        &mut tables,
    );
    assert_eq!(node.score, WIN_SCORE);
    assert_eq!(node.best_column, Some(3));
    assert_eq!(node.cutoff, None);
    assert_eq!(node.nodes_visited, 6);

    let stats = tables.statistics();
    assert_eq!(stats.total_nodes, 6);
    assert_eq!(stats.beta_cutoffs, 4);
    assert_eq!(stats.max_depth_reached, 1);
    assert_eq!(stats.tt_probes, 6);
    assert_eq!(stats.tt_hits, 0);
}

#[test]
fn beta_cutoff_is_fail_soft() {
    let board = red_wins_in_column_three();
    let mut tables = SearchTables::new();
    let node = quiesce(
        &board,
        -1_000,
        1_000,
        Side::Red,
        0,
        &SearchConfig::default(),
        &mut tables,
    );
    assert_eq!(node.score, WIN_SCORE);
    assert!(node.score > 1_000);
    assert_eq!(node.best_column, Some(3));
    assert_eq!(node.cutoff, Some(CutoffType::Beta));
    assert_eq!(node.nodes_visited, 2);
    assert_eq!(tables.killers.primary(0), Some(3));

    let entry = tables.tt.probe(tt_key(&board, Side::Red)).unwrap();
    assert_eq!(entry.bound_type, BoundType::LowerBound);
    assert_eq!(entry.score, 1_000);
    assert_eq!(entry.best_column, Some(3));
    assert_eq!(entry.draft, 4);
}

#[test]
fn killers_untouched_when_disabled() {
    let board = red_wins_in_column_three();
    let mut tables = SearchTables::new();
    let config = SearchConfig::default().with_killer_moves(false);
    let node = quiesce(&board, -1_000, 1_000, Side::Red, 0, &config, &mut tables);
    assert_eq!(node.cutoff, Some(CutoffType::Beta));
    assert_eq!(tables.killers.primary(0), None);
}

#[test]
fn stand_pat_beta_cutoff() {
    let mut tables = SearchTables::new();
    let node = quiesce(
        &Board::new(),
        -10,
        0,
        Side::Red,
        0,
        &SearchConfig::default(),
        &mut tables,
    );
    assert_eq!(node.score, 0);
    assert_eq!(node.best_column, None);
    assert_eq!(node.cutoff, Some(CutoffType::Beta));
    assert_eq!(tables.stats.beta_cutoffs, 1);

    let entry = tables.tt.probe(tt_key(&Board::new(), Side::Red)).unwrap();
    assert_eq!(entry.bound_type, BoundType::LowerBound);
}

#[test]
fn finished_game_returns_stand_pat() {
    let board = BoardBuilder::new().column(0, "YYYY").build();
    let mut tables = SearchTables::new();
    let node = quiesce(
        &board,
        -INFINITY,
        INFINITY,
        Side::Red,
        0,
        &SearchConfig::default(),
        &mut tables,
    );
    assert_eq!(node.score, -WIN_SCORE);
    assert_eq!(node.best_column, None);
    assert_eq!(node.cutoff, None);
    assert_eq!(node.nodes_visited, 1);
}

#[test]
fn full_board_returns_static_eval() {
    let board = full_board();
    let mut tables = SearchTables::new();
    let node = quiesce(
        &board,
        -INFINITY,
        INFINITY,
        Side::Yellow,
        0,
        &SearchConfig::default(),
        &mut tables,
    );
    assert_eq!(node.score, board.static_evaluate(Side::Yellow));
    assert_eq!(node.best_column, None);
    assert_eq!(node.cutoff, None);
}

#[test]
fn plain_search_of_quiet_position() {
    let mut tables = SearchTables::new();
    let node = quiesce(
        &quiet_position(),
        -INFINITY,
        INFINITY,
        Side::Red,
        0,
        &SearchConfig::plain(2),
        &mut tables,
    );
    assert_eq!(node.score, 0);
    assert_eq!(node.best_column, None);
    assert_eq!(node.cutoff, None);
    assert_eq!(node.nodes_visited, 22);

    let stats = tables.statistics();
    assert_eq!(stats.beta_cutoffs, 12);
    assert_eq!(stats.depth_cutoffs, 8);
    assert_eq!(stats.max_depth_reached, 3);
    assert_eq!(stats.tt_probes, 0);
    assert!(tables.tt.is_empty());
}

// ============================================================================
// Pruning
// ============================================================================

#[test]
fn depth_limit_stops_quiet_position() {
    let mut tables = SearchTables::new();
    let config = SearchConfig::default().with_max_depth(0);
    let node = quiesce(
        &quiet_position(),
        -INFINITY,
        INFINITY,
        Side::Red,
        0,
        &config,
        &mut tables,
    );
    assert_eq!(node.score, 0);
    assert_eq!(node.cutoff, Some(CutoffType::Depth));
    assert_eq!(tables.stats.depth_cutoffs, 1);
}

#[test]
fn sharp_position_extends_past_depth_limit() {
    let mut tables = SearchTables::new();
    let config = SearchConfig::default().with_max_depth(0);
    let node = quiesce(
        &red_wins_in_column_three(),
        -INFINITY,
        INFINITY,
        Side::Red,
        0,
        &config,
        &mut tables,
    );
    assert_eq!(node.score, WIN_SCORE);
    assert_eq!(node.best_column, Some(3));
    assert_eq!(node.cutoff, None);

    let flat = config.with_threat_depth_bonus(0);
    let node = quiesce(
        &red_wins_in_column_three(),
        -INFINITY,
        INFINITY,
        Side::Red,
        0,
        &flat,
        &mut SearchTables::new(),
    );
    assert_eq!(node.cutoff, Some(CutoffType::Depth));
}

#[test]
fn delta_pruning_below_root() {
    let mut tables = SearchTables::new();
    let node = quiesce(
        &Board::new(),
        5_000,
        6_000,
        Side::Red,
        1,
        &SearchConfig::default(),
        &mut tables,
    );
    assert_eq!(node.score, 5_000);
    assert_eq!(node.cutoff, Some(CutoffType::Delta));
    assert_eq!(tables.stats.delta_cutoffs, 1);

    // Never at the root
    let node = quiesce(
        &Board::new(),
        5_000,
        6_000,
        Side::Red,
        0,
        &SearchConfig::default(),
        &mut SearchTables::new(),
    );
    assert_eq!(node.score, 0);
    assert_eq!(node.cutoff, None);
}

#[test]
fn futility_pruning_skips_low_priority_moves() {
    let mut tables = SearchTables::new();
    let config = SearchConfig::default().with_delta_pruning(false);
    let node = quiesce(&quiet_position(), 5_000, 6_000, Side::Red, 1, &config, &mut tables);
    assert_eq!(node.score, 5_000);
    assert_eq!(node.best_column, None);
    assert_eq!(node.cutoff, None);
    assert_eq!(node.nodes_visited, 1);
    assert_eq!(tables.stats.futility_prunes, 5);

    let entry = tables.tt.probe(tt_key(&quiet_position(), Side::Red)).unwrap();
    assert_eq!(entry.bound_type, BoundType::UpperBound);
    assert_eq!(entry.draft, 3);
}

#[test]
fn stand_pat_cutoff_ignores_quiet_forced_loss() {
    // The only drop is quiet, so the search stands pat on a lost position
    let board = red_forced_loss();
    assert_eq!(board.legal_moves().to_vec(), vec![0]);
    assert_eq!(board.empty_cells(), 4);
    assert_eq!(board.static_evaluate(Side::Red), 8);
    assert_eq!(exact_value(&board, Side::Red), -WIN_SCORE);

    let mut tables = SearchTables::new();
    let node = quiesce(&board, -INFINITY, -200, Side::Red, 0, &SearchConfig::default(), &mut tables);
    assert_eq!(node.score, 8);
    assert_eq!(node.cutoff, Some(CutoffType::Beta));
    assert_eq!(node.nodes_visited, 1);
}

#[test]
fn killer_bonus_does_not_change_futility() {
    // Column 2 is a 4400 pattern move; with the bonus it would clear the margin
    let mut tables = SearchTables::new();
    tables.killers.update(1, 2);
    let config = SearchConfig::default().with_delta_pruning(false);
    let node = quiesce(&quiet_position(), 5_000, 6_000, Side::Red, 1, &config, &mut tables);
    assert_eq!(node.score, 5_000);
    assert_eq!(node.nodes_visited, 1);
    assert_eq!(tables.stats.killer_hits, 1);
    assert_eq!(tables.stats.futility_prunes, 5);
}

#[test]
fn move_cap_limits_children() {
    let mut tables = SearchTables::new();
    let config = SearchConfig::default().with_max_moves(1);
    let node = quiesce(
        &red_wins_in_column_three(),
        -INFINITY,
        INFINITY,
        Side::Red,
        0,
        &config,
        &mut tables,
    );
    assert_eq!(node.score, WIN_SCORE);
    assert_eq!(node.best_column, Some(3));
    assert_eq!(node.nodes_visited, 2);
}

// ============================================================================
// Transposition table
// ============================================================================

#[test]
fn repeated_query_hits_transposition_table() {
    let board = red_wins_in_column_three();
    let config = SearchConfig::default();
    let mut tables = SearchTables::new();
    quiesce(&board, -INFINITY, INFINITY, Side::Red, 0, &config, &mut tables);

    let node = quiesce(&board, -INFINITY, INFINITY, Side::Red, 0, &config, &mut tables);
    assert_eq!(node.score, WIN_SCORE);
    assert_eq!(node.best_column, Some(3));
    assert_eq!(node.nodes_visited, 1);
    assert_eq!(node.cutoff, Some(CutoffType::Transposition));

    let stats = tables.statistics();
    assert_eq!(stats.tt_hits, 1);
    assert_eq!(stats.transposition_cutoffs, 1);
    assert_eq!(stats.total_nodes, 7);
}

#[test]
fn transposition_key_includes_side_to_move() {
    let board = red_wins_in_column_three();
    let mut tables = SearchTables::new();
    quiesce(
        &board,
        -INFINITY,
        INFINITY,
        Side::Red,
        0,
        &SearchConfig::default(),
        &mut tables,
    );
    assert!(tables.tt.probe(tt_key(&board, Side::Red)).is_some());
    assert!(tables.tt.probe(tt_key(&board, Side::Yellow)).is_none());
}

#[test]
fn shallow_entry_is_not_reused() {
    let board = red_wins_in_column_three();
    let mut tables = SearchTables::new();
    tables
        .tt
        .store(tt_key(&board, Side::Red), 0, 555, BoundType::Exact, Some(6));

    let node = quiesce(
        &board,
        -INFINITY,
        INFINITY,
        Side::Red,
        0,
        &SearchConfig::default(),
        &mut tables,
    );
    assert_eq!(node.score, WIN_SCORE);
    assert_eq!(node.best_column, Some(3));
    assert_eq!(tables.stats.tt_hits, 0);
}

#[test]
fn deep_exact_entry_is_reused() {
    let board = red_wins_in_column_three();
    let mut tables = SearchTables::new();
    tables
        .tt
        .store(tt_key(&board, Side::Red), 10, 555, BoundType::Exact, Some(6));

    let node = quiesce(
        &board,
        -INFINITY,
        INFINITY,
        Side::Red,
        0,
        &SearchConfig::default(),
        &mut tables,
    );
    assert_eq!(node.score, 555);
    assert_eq!(node.best_column, Some(6));
    assert_eq!(node.cutoff, Some(CutoffType::Transposition));
}

#[test]
fn bound_entries_narrow_the_window() {
    let board = Board::new();
    let config = SearchConfig::default();

    let mut tables = SearchTables::new();
    tables
        .tt
        .store(tt_key(&board, Side::Red), 4, 2_000, BoundType::LowerBound, None);
    let node = quiesce(&board, -10, 1_000, Side::Red, 0, &config, &mut tables);
    assert_eq!(node.score, 2_000);
    assert_eq!(node.cutoff, Some(CutoffType::Transposition));

    let mut tables = SearchTables::new();
    tables
        .tt
        .store(tt_key(&board, Side::Red), 4, -500, BoundType::UpperBound, None);
    let node = quiesce(&board, -100, 100, Side::Red, 0, &config, &mut tables);
    assert_eq!(node.score, -500);
    assert_eq!(node.cutoff, Some(CutoffType::Transposition));
}

#[test]
fn disabled_table_is_never_probed() {
    let board = red_wins_in_column_three();
    let mut tables = SearchTables::new();
    tables
        .tt
        .store(tt_key(&board, Side::Red), 10, 555, BoundType::Exact, Some(6));
    let config = SearchConfig::default().with_transposition_table(false);

    let node = quiesce(&board, -INFINITY, INFINITY, Side::Red, 0, &config, &mut tables);
    assert_eq!(node.score, WIN_SCORE);
    assert_eq!(tables.stats.tt_probes, 0);
    assert_eq!(tables.tt.len(), 1);
}

// ============================================================================
// Endgame profile
// ============================================================================

#[test]
fn endgame_config_profiles() {
    let late = SearchConfig::endgame(ENDGAME_EMPTY_CELLS - 1);
    assert_eq!(late.max_depth, 6);
    assert_eq!(late.threat_depth_bonus, 3);
    assert_eq!(late.delta_margin, 150);
    assert_eq!(late.max_moves_to_search, 7);
    assert_eq!(late.futility_margin, SearchConfig::default().futility_margin);

    let early = SearchConfig::endgame(ENDGAME_EMPTY_CELLS);
    assert_eq!(early.max_depth, 4);
    assert_eq!(early.max_moves_to_search, 7);
}

#[test]
fn endgame_search_finds_win() {
    let board = BoardBuilder::new()
        .column(0, "YRYRRY")
        .column(1, "RYRY")
        .column(2, "Y")
        .column(3, "RYRYRR")
        .column(4, "YRYRYR")
        .column(5, "YRRRY")
        .column(6, "RYYYRY")
        .build();
    assert_eq!(board.empty_cells(), 8);

    let mut tables = SearchTables::new();
    let node = quiesce_endgame(&board, -INFINITY, INFINITY, Side::Red, 0, &mut tables);
    assert_eq!(node.score, WIN_SCORE);
    assert_eq!(node.best_column, Some(2));
    assert_eq!(node.cutoff, None);
    assert_eq!(node.nodes_visited, 4);
}

// ============================================================================
// Configuration and statistics
// ============================================================================

#[test]
fn default_config_values() {
    let config = SearchConfig::default();
    assert_eq!(config.max_depth, 4);
    assert_eq!(config.threat_depth_bonus, 2);
    assert_eq!(config.delta_margin, 300);
    assert_eq!(config.futility_margin, 150);
    assert_eq!(config.max_moves_to_search, 5);
    assert!(config.use_transposition_table);
    assert!(config.use_killer_moves);
    assert!(config.use_delta_pruning);
    assert!(config.use_futility_pruning);
    assert!(config.use_pattern_detection);
    assert!(config.validate().is_ok());
}

#[test]
fn config_validation() {
    assert_eq!(
        SearchConfig::default().with_delta_margin(-1).validate(),
        Err(ConfigError::NegativeMargin {
            name: "delta_margin",
            value: -1
        })
    );
    assert_eq!(
        SearchConfig::default().with_futility_margin(-5).validate(),
        Err(ConfigError::NegativeMargin {
            name: "futility_margin",
            value: -5
        })
    );
    assert_eq!(
        SearchConfig::default().with_max_moves(0).validate(),
        Err(ConfigError::ZeroMoveCap)
    );
}

#[test]
fn statistics_helpers() {
    let mut stats = SearchStatistics::default();
    assert_eq!(stats.cache_hit_rate(), 0.0);

    stats.record_tt_probe(true);
    stats.record_tt_probe(false);
    stats.record_cutoff(CutoffType::Beta);
    stats.record_cutoff(CutoffType::Delta);
    stats.record_cutoff(CutoffType::Transposition);
    assert!((stats.cache_hit_rate() - 0.5).abs() < f64::EPSILON);
    assert_eq!(stats.total_cutoffs(), 3);
    assert!(stats.to_string().contains("hitrate 0.500"));

    stats.reset();
    assert_eq!(stats, SearchStatistics::default());
}

#[test]
fn search_info_from_node() {
    let board = red_wins_in_column_three();
    let mut tables = SearchTables::new();
    let node = quiesce(
        &board,
        -INFINITY,
        INFINITY,
        Side::Red,
        0,
        &SearchConfig::default(),
        &mut tables,
    );
    let info = SearchInfo::new(&node, &tables.stats);
    assert_eq!(info.score, WIN_SCORE);
    assert_eq!(info.best_column, Some(3));
    assert_eq!(info.nodes, 6);
    assert_eq!(info.max_depth_reached, 1);
    assert_eq!(info.cutoff, None);
}
