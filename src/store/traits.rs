//! Store traits and error types
//!
//! This module defines the trait interface for word-count store backends and
//! associated error types.

use crate::store::{merge_counts, WordCounts};
use thiserror::Error;

/// Errors that can occur while writing the store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for word-count store backends
///
/// A store holds one durable word → cumulative count mapping. Keys only ever
/// accumulate and counts only ever grow through [`CountStore::record`].
pub trait CountStore {
    /// Loads the persisted mapping
    ///
    /// A missing or unreadable backing artifact yields an empty mapping; this
    /// never fails.
    fn load(&self) -> WordCounts;

    /// Replaces the persisted mapping
    ///
    /// A subsequent `load` observes either the old or the new mapping, never
    /// a mix of both.
    fn save(&mut self, counts: &WordCounts) -> StoreResult<()>;

    /// Adds `increment` to the persisted mapping and returns the new totals
    fn record(&mut self, increment: &WordCounts) -> StoreResult<WordCounts> {
        let totals = merge_counts(self.load(), increment);
        self.save(&totals)?;
        Ok(totals)
    }
}
