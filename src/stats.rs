//! Per-round memory game results persisted across sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::db::DbError;
use crate::store::{KvStore, keys};

/// One finished memory round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryResult {
    /// Pairs on the board.
    pub pairs: u32,
    /// Completed pair-evaluations the win took.
    pub moves: u32,
    /// When the round was won.
    pub won_at: DateTime<Utc>,
}

/// Append-only log of memory game results. Reads fail open to empty.
#[derive(Debug, Clone)]
pub struct MemoryStats {
    store: KvStore,
}

impl MemoryStats {
    /// Creates the stats log over the given store.
    pub fn new(store: KvStore) -> Self {
        Self { store }
    }

    /// Loads all recorded results, oldest first. Failures yield an empty list.
    #[instrument(skip(self))]
    pub fn results(&self) -> Vec<MemoryResult> {
        match self.store.get_json::<Vec<MemoryResult>>(keys::MEMORY_STATS) {
            Ok(results) => results.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Failed to load memory stats, treating as empty");
                Vec::new()
            }
        }
    }

    /// Appends a won round.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the write fails.
    #[instrument(skip(self))]
    pub fn record_win(&self, pairs: u32, moves: u32) -> Result<MemoryResult, DbError> {
        let result = MemoryResult {
            pairs,
            moves,
            won_at: Utc::now(),
        };
        let mut results = self.results();
        results.push(result.clone());
        self.store.set_json(keys::MEMORY_STATS, &results)?;
        info!(pairs, moves, "Memory win recorded");
        Ok(result)
    }

    /// Fewest moves across all recorded wins, if any.
    pub fn best_moves(&self) -> Option<u32> {
        self.results().iter().map(|r| r.moves).min()
    }
}
