//! Crawl frontier with two-tier deduplication
//!
//! This module handles:
//! - First-in-first-out queueing of phrases with their link depth
//! - The optimistic pre-fetch `seen` set of normalized phrases
//! - The authoritative post-fetch `visited` set of page IDs

use crate::url::normalize_phrase;
use std::collections::{HashSet, VecDeque};

/// A phrase queued for processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueuedPhrase {
    /// Phrase to resolve
    pub phrase: String,

    /// Link hops from the root, fixed when the phrase was enqueued
    pub depth: u32,
}

/// Work queue plus membership sets for a single crawl
///
/// A phrase enters the queue at most once per crawl (`seen` only grows) and a
/// page ID is marked visited at most once.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<QueuedPhrase>,
    seen: HashSet<String>,
    visited: HashSet<u64>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a frontier holding only the root phrase at depth 0
    pub fn seeded(root: &str) -> Self {
        let mut frontier = Self::new();
        frontier.enqueue(root, 0);
        frontier
    }

    /// Queues `phrase` at `depth` unless an equivalent phrase was seen before
    ///
    /// Phrases are compared in normalized form. Returns whether the phrase was
    /// queued.
    pub fn enqueue(&mut self, phrase: &str, depth: u32) -> bool {
        if !self.seen.insert(normalize_phrase(phrase)) {
            return false;
        }

        self.queue.push_back(QueuedPhrase {
            phrase: phrase.to_string(),
            depth,
        });
        true
    }

    /// Takes the oldest queued phrase
    pub fn next(&mut self) -> Option<QueuedPhrase> {
        self.queue.pop_front()
    }

    /// Records a page ID as processed
    ///
    /// Returns `false` if the page had already been visited.
    pub fn mark_visited(&mut self, page_id: u64) -> bool {
        self.visited.insert(page_id)
    }

    pub fn is_visited(&self, page_id: u64) -> bool {
        self.visited.contains(&page_id)
    }

    pub fn has_seen(&self, phrase: &str) -> bool {
        self.seen.contains(&normalize_phrase(phrase))
    }

    /// Number of phrases waiting in the queue
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}
