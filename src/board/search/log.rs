use super::{CutoffType, QuiesceNode, SearchStatistics};

/// One line of search diagnostics.
pub struct SearchInfo {
    pub depth: u32,
    pub max_depth_reached: u32,
    pub score: i32,
    pub best_column: Option<usize>,
    pub nodes: u64,
    pub cutoff: Option<CutoffType>,
    pub tt_hit_rate: f64,
}

impl SearchInfo {
    #[must_use]
    pub fn new(node: &QuiesceNode, stats: &SearchStatistics) -> Self {
        SearchInfo {
            depth: node.depth,
            max_depth_reached: stats.max_depth_reached,
            score: node.score,
            best_column: node.best_column,
            nodes: node.nodes_visited,
            cutoff: node.cutoff,
            tt_hit_rate: stats.cache_hit_rate(),
        }
    }

    /// 1-based column, `-` when there is none.
    fn column_label(&self) -> String {
        self.best_column
            .map_or_else(|| "-".to_string(), |column| (column + 1).to_string())
    }

    fn cutoff_label(&self) -> &'static str {
        match self.cutoff {
            None => "none",
            Some(CutoffType::Beta) => "beta",
            Some(CutoffType::Delta) => "delta",
            Some(CutoffType::Depth) => "depth",
            Some(CutoffType::Transposition) => "tt",
        }
    }
}

pub trait SearchLogger {
    fn info(&self, info: &SearchInfo);
}

pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn info(&self, info: &SearchInfo) {
        println!(
            "info depth {} seldepth {} score {} column {} nodes {} cutoff {} tthitrate {:.3}",
            info.depth,
            info.max_depth_reached,
            info.score,
            info.column_label(),
            info.nodes,
            info.cutoff_label(),
            info.tt_hit_rate
        );
    }
}

/// Routes search info through the `log` facade at info level.
#[cfg(feature = "logging")]
pub struct LogCrateLogger;

#[cfg(feature = "logging")]
impl SearchLogger for LogCrateLogger {
    fn info(&self, info: &SearchInfo) {
        ::log::info!(
            "depth={} seldepth={} score={} column={} nodes={} cutoff={} tt_hit_rate={:.3}",
            info.depth,
            info.max_depth_reached,
            info.score,
            info.column_label(),
            info.nodes,
            info.cutoff_label(),
            info.tt_hit_rate
        );
    }
}
