//! Serialized access to one set of search tables from several threads.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{quiesce, QuiesceNode, SearchConfig, SearchStatistics, SearchTables};
use crate::board::{Position, Side};

/// Cloneable handle to tables guarded by a mutex.
///
/// Each `quiesce` call holds the lock for the whole query, so concurrent
/// callers take turns rather than interleaving inside one search.
#[derive(Clone)]
pub struct SharedSearchTables {
    inner: Arc<Mutex<SearchTables>>,
}

impl Default for SharedSearchTables {
    fn default() -> Self {
        Self::new(SearchTables::new())
    }
}

impl SharedSearchTables {
    #[must_use]
    pub fn new(tables: SearchTables) -> Self {
        SharedSearchTables {
            inner: Arc::new(Mutex::new(tables)),
        }
    }

    pub fn quiesce<P: Position>(
        &self,
        position: &P,
        alpha: i32,
        beta: i32,
        side: Side,
        depth: u32,
        config: &SearchConfig,
    ) -> QuiesceNode {
        let mut tables = self.inner.lock();
        quiesce(position, alpha, beta, side, depth, config, &mut tables)
    }

    /// Run `f` with exclusive access to the tables.
    pub fn with_tables<R>(&self, f: impl FnOnce(&mut SearchTables) -> R) -> R {
        f(&mut self.inner.lock())
    }

    #[must_use]
    pub fn statistics(&self) -> SearchStatistics {
        self.inner.lock().statistics()
    }

    pub fn reset_statistics(&self) {
        self.inner.lock().reset_statistics();
    }

    pub fn clear_all_tables(&self) {
        self.inner.lock().clear_all_tables();
    }

    pub fn age_transposition_table(&self) {
        self.inner.lock().age_transposition_table();
    }
}
