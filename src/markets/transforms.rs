//! Pure search and sort transforms over market snapshots.
//!
//! These never touch the network and never mutate their input: the view
//! layers keep an immutable last-fetched snapshot and recompute the visible
//! rows from it, so clearing a search restores the full list without a
//! re-fetch and a sort after a search reorders only the filtered subset.

use super::types::MarketEntry;

/// Active sort over the visible rows. Both orders are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    MarketCap,
    Change24h,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::MarketCap => "market cap",
            SortKey::Change24h => "24h % change",
        }
    }
}

/// Case-insensitive substring filter on the `name` field only.
///
/// An empty term matches everything. Relative order is preserved; an empty
/// result is valid.
pub fn filter_by_name(entries: &[MarketEntry], term: &str) -> Vec<MarketEntry> {
    if term.is_empty() {
        return entries.to_vec();
    }
    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Reorder by descending market cap.
pub fn sort_by_market_cap(entries: &[MarketEntry]) -> Vec<MarketEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.market_cap.total_cmp(&a.market_cap));
    sorted
}

/// Reorder by descending 24h percentage change.
pub fn sort_by_change(entries: &[MarketEntry]) -> Vec<MarketEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        b.price_change_percentage_24h
            .total_cmp(&a.price_change_percentage_24h)
    });
    sorted
}

/// Filter then sort. The sort sees only the filtered subset.
pub fn apply(entries: &[MarketEntry], term: &str, sort: Option<SortKey>) -> Vec<MarketEntry> {
    let filtered = filter_by_name(entries, term);
    match sort {
        Some(SortKey::MarketCap) => sort_by_market_cap(&filtered),
        Some(SortKey::Change24h) => sort_by_change(&filtered),
        None => filtered,
    }
}
