//! Match highlighting with memoization
//!
//! Recomputing matched character positions for every visible row on every
//! frame is wasteful, so results are cached. The cache is bounded; once
//! capacity is reached the least-recently used pairs are evicted rather than
//! letting the key space grow for the whole session.

use moka::sync::Cache;
use std::sync::Arc;

/// Default maximum number of cached (item, query) pairs
const DEFAULT_CACHE_CAPACITY: u64 = 4096;

/// Computes and memoizes which character positions of an item satisfied a
/// fuzzy query.
///
/// The scan is the same greedy left-to-right subsequence walk the matcher
/// uses, but it records positions instead of a score. Positions index the
/// characters of the original-case item.
pub struct HighlightIndexer {
    cache: Cache<(String, String), Arc<Vec<usize>>>,
}

impl HighlightIndexer {
    /// Create an indexer with the default cache capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create an indexer with a custom cache capacity
    #[must_use]
    pub fn with_capacity(max_capacity: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_capacity).build();
        Self { cache }
    }

    /// Matched character positions of `item` for `query`.
    ///
    /// Returns `None` when the query is empty or does not fully match, in
    /// which case nothing is cached and the caller should render the item
    /// unchanged.
    #[must_use]
    pub fn indices(&self, item: &str, query: &str) -> Option<Arc<Vec<usize>>> {
        if query.is_empty() {
            return None;
        }

        let key = (item.to_lowercase(), query.to_lowercase());
        if let Some(hit) = self.cache.get(&key) {
            return Some(hit);
        }

        let positions = Arc::new(match_positions(item, query)?);
        self.cache.insert(key, Arc::clone(&positions));
        Some(positions)
    }

    /// Number of cached pairs
    #[must_use]
    pub fn cached_entries(&self) -> u64 {
        self.cache.entry_count()
    }
}

impl Default for HighlightIndexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedy scan recording the position of each query character in `item`
fn match_positions(item: &str, query: &str) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(query.chars().count());
    let mut item_chars = item.chars().enumerate();

    for q in query.chars() {
        loop {
            let (i, c) = item_chars.next()?;
            if c.to_lowercase().eq(q.to_lowercase()) {
                positions.push(i);
                break;
            }
        }
    }

    Some(positions)
}
