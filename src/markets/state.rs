//! Dashboard view state.
//!
//! Holds the immutable last-fetched snapshot plus the current search term
//! and sort; the visible rows are derived on demand. Fetches are tagged
//! with a generation counter so a stale response resolving late can never
//! clobber the result of a newer request.

use super::transforms::{self, SortKey};
use super::types::MarketEntry;

#[derive(Debug, Default)]
pub struct DashboardState {
    snapshot: Vec<MarketEntry>,
    search_term: String,
    sort: Option<SortKey>,
    generation: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last successfully fetched list, untouched by search or sort.
    pub fn snapshot(&self) -> &[MarketEntry] {
        &self.snapshot
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rows to render: snapshot filtered by the search term, then sorted.
    pub fn visible(&self) -> Vec<MarketEntry> {
        transforms::apply(&self.snapshot, &self.search_term, self.sort)
    }

    /// Register a new outbound fetch and return its generation tag.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Apply a fetch result. Returns false (and leaves the snapshot
    /// unchanged) when the tag is stale, i.e. a newer fetch was issued
    /// after this one.
    pub fn apply_fetch(&mut self, generation: u64, entries: Vec<MarketEntry>) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Dropping stale fetch result"
            );
            return false;
        }
        self.snapshot = entries;
        true
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Clearing the search restores the full snapshot without a re-fetch.
    pub fn clear_search(&mut self) {
        self.search_term.clear();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = Some(sort);
    }
}
