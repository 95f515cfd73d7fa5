// core/src/matcher.rs
//
// Suggestion matching over the vocabulary, with a small LRU cache of
// recent query results.

use crate::vocabulary::Vocabulary;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::num::NonZeroUsize;
use std::rc::Rc;
use std::str::FromStr;

/// Maximum number of suggestions presented per cycle.
pub const MAX_SUGGESTIONS: usize = 6;

/// Predicate used to decide whether a vocabulary entry matches the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Entry contains the input anywhere (case-insensitive)
    #[default]
    Contains,
    /// Entry begins with the input (case-insensitive)
    StartsWith,
}

impl SearchMode {
    /// Test an already case-folded entry against a case-folded query.
    pub fn matches(self, folded_entry: &str, folded_query: &str) -> bool {
        match self {
            SearchMode::Contains => folded_entry.contains(folded_query),
            SearchMode::StartsWith => folded_entry.starts_with(folded_query),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Contains => f.write_str("contains"),
            SearchMode::StartsWith => f.write_str("starts_with"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contains" => Ok(SearchMode::Contains),
            "starts_with" | "starts-with" | "startswith" => Ok(SearchMode::StartsWith),
            other => Err(format!(
                "unknown search mode '{}': expected 'contains' or 'starts_with'",
                other
            )),
        }
    }
}

/// Simple case folding used on both sides of the comparison.
pub fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Collect up to `limit` entries matching `query` under `mode`.
///
/// `query` is folded here; entries are returned verbatim, in vocabulary
/// iteration order. An empty query matches nothing.
pub fn find_matches(vocabulary: &Vocabulary, query: &str, mode: SearchMode, limit: usize) -> Vec<String> {
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }
    let folded_query = fold(query);
    vocabulary
        .iter()
        .filter(|entry| mode.matches(&fold(entry), &folded_query))
        .take(limit)
        .map(str::to_string)
        .collect()
}

/// Owns the current vocabulary and caches recent match results.
///
/// Every `find` works against a single vocabulary snapshot, so a replacement
/// that lands mid-cycle is picked up by the next pass rather than mixed into
/// the current one.
pub struct Matcher {
    vocabulary: RefCell<Rc<Vocabulary>>,
    cache: Option<RefCell<LruCache<(SearchMode, String), Vec<String>>>>,
    cache_hits: Cell<usize>,
    cache_misses: Cell<usize>,
}

impl Matcher {
    /// Create a matcher. A `cache_size` of zero disables result caching.
    pub fn new(vocabulary: Vocabulary, cache_size: usize) -> Self {
        Self {
            vocabulary: RefCell::new(Rc::new(vocabulary)),
            cache: NonZeroUsize::new(cache_size).map(|cap| RefCell::new(LruCache::new(cap))),
            cache_hits: Cell::new(0),
            cache_misses: Cell::new(0),
        }
    }

    /// Current vocabulary snapshot.
    pub fn vocabulary(&self) -> Rc<Vocabulary> {
        Rc::clone(&self.vocabulary.borrow())
    }

    /// Replace the vocabulary wholesale and drop cached results.
    pub fn replace(&self, vocabulary: Vocabulary) {
        *self.vocabulary.borrow_mut() = Rc::new(vocabulary);
        self.clear_cache();
    }

    /// Up to `MAX_SUGGESTIONS` matches for `query`.
    pub fn find(&self, query: &str, mode: SearchMode) -> Vec<String> {
        let vocabulary = self.vocabulary();
        let Some(cache) = &self.cache else {
            return find_matches(&vocabulary, query, mode, MAX_SUGGESTIONS);
        };

        let key = (mode, fold(query));
        if let Some(cached) = cache.borrow_mut().get(&key) {
            self.cache_hits.set(self.cache_hits.get() + 1);
            tracing::trace!(query, %mode, "match cache hit");
            return cached.clone();
        }

        self.cache_misses.set(self.cache_misses.get() + 1);
        let matches = find_matches(&vocabulary, query, mode, MAX_SUGGESTIONS);
        cache.borrow_mut().put(key, matches.clone());
        matches
    }

    /// Get cache statistics as a (hits, misses) tuple.
    pub fn cache_stats(&self) -> (usize, usize) {
        (self.cache_hits.get(), self.cache_misses.get())
    }

    /// Number of cached queries.
    pub fn cache_size(&self) -> usize {
        self.cache.as_ref().map_or(0, |c| c.borrow().len())
    }

    /// Clear cached results and reset statistics.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.borrow_mut().clear();
        }
        self.cache_hits.set(0);
        self.cache_misses.set(0);
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("vocabulary_len", &self.vocabulary.borrow().len())
            .field("cache_size", &self.cache_size())
            .field("cache_stats", &self.cache_stats())
            .finish()
    }
}
