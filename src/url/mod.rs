//! URL handling module for wiki-scraper
//!
//! This module provides phrase normalization, article URL construction, and
//! the filter that decides which anchor targets are internal article links.

mod link;
mod phrase;

// Re-export main functions
pub use link::{normalize_link, BLOCKED_PREFIXES, WIKI_PREFIX};
pub use phrase::{article_url, normalize_phrase};
