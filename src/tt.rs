//! Transposition cache for a single search.
//!
//! Maps a position's Zobrist hash to the result of searching it at a given
//! remaining depth. Scores produced under an alpha-beta window are only
//! bounds, so each entry records which kind of bound it holds and a probe
//! only answers when that bound settles the current window.

use std::collections::HashMap;

use crate::board::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

impl BoundType {
    /// Classify a score returned from a window that started as
    /// `(alpha, beta)`.
    #[must_use]
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            BoundType::UpperBound
        } else if score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheEntry {
    pub depth: u32,
    pub score: i32,
    pub bound: BoundType,
    pub best_move: Option<Move>,
}

impl CacheEntry {
    /// Whether this entry answers a probe at `depth` with window
    /// `(alpha, beta)` without searching.
    #[must_use]
    pub fn settles(&self, depth: u32, alpha: i32, beta: i32) -> bool {
        if self.depth != depth {
            return false;
        }
        match self.bound {
            BoundType::Exact => true,
            BoundType::LowerBound => self.score >= beta,
            BoundType::UpperBound => self.score <= alpha,
        }
    }
}

/// Per-search cache owned by one bot. Not shared between threads.
#[derive(Debug, Default)]
pub struct TranspositionCache {
    entries: HashMap<u64, CacheEntry>,
    hits: u64,
}

impl TranspositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a usable entry; counts a hit when one is returned.
    pub fn probe(&mut self, hash: u64, depth: u32, alpha: i32, beta: i32) -> Option<CacheEntry> {
        let entry = self.entries.get(&hash).copied()?;
        if entry.settles(depth, alpha, beta) {
            self.hits += 1;
            Some(entry)
        } else {
            None
        }
    }

    /// Record a search result, replacing whatever was stored for `hash`.
    pub fn store(&mut self, hash: u64, entry: CacheEntry) {
        self.entries.insert(hash, entry);
    }

    pub fn clear(&mut self) {
        log::trace!("clearing transposition cache ({} entries)", self.entries.len());
        self.entries.clear();
        self.hits = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Probes answered since the last `clear`.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }
}
