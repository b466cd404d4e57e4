//! Store module for persisting word counts
//!
//! This module handles the durable word → cumulative count mapping that
//! accumulates across articles and across separate runs of the tool:
//! - Additive merging of per-article counts
//! - JSON file persistence with atomic replacement
//! - Treating a missing or corrupt store as empty

mod json;
mod traits;

pub use json::JsonCountStore;
pub use traits::{CountStore, StoreError, StoreResult};

use std::collections::BTreeMap;

/// Mapping from normalized word to occurrence count
pub type WordCounts = BTreeMap<String, u64>;

/// Adds every count in `increment` to `existing`
///
/// Words absent from `increment` are untouched. Merging is commutative and
/// associative, so the order in which articles are merged does not matter.
///
/// # Examples
///
/// ```
/// use wiki_scraper::store::{merge_counts, WordCounts};
///
/// let existing = WordCounts::from([("mob".to_string(), 2)]);
/// let increment = WordCounts::from([("mob".to_string(), 1), ("creeper".to_string(), 1)]);
///
/// let merged = merge_counts(existing, &increment);
/// assert_eq!(merged["mob"], 3);
/// assert_eq!(merged["creeper"], 1);
/// ```
pub fn merge_counts(mut existing: WordCounts, increment: &WordCounts) -> WordCounts {
    for (word, count) in increment {
        let total = existing.entry(word.clone()).or_insert(0);
        *total = total.saturating_add(*count);
    }
    existing
}
