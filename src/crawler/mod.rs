//! Crawler module for link-graph traversal
//!
//! This module contains the core crawling logic, including:
//! - The frontier queue with phrase and page ID deduplication
//! - The breadth-first crawl loop with depth bound and pacing
//! - Write-through recording of word counts

mod coordinator;
mod frontier;

pub use coordinator::{Crawler, NodeOutcome};
pub use frontier::{Frontier, QueuedPhrase};

use crate::config::Config;
use crate::output::CrawlStats;
use crate::page::{PageSource, WikiResolver};
use crate::store::JsonCountStore;
use crate::Result;

/// Runs a complete crawl operation
///
/// This is the main entry point for crawling against a live wiki. It will:
/// 1. Build the HTTP client and resolver from the configuration
/// 2. Open the JSON word-count store at the configured path
/// 3. Crawl from `root` using the configured depth and wait
pub async fn crawl(config: &Config, root: &PageSource) -> Result<CrawlStats> {
    let resolver = WikiResolver::from_config(config)?;
    let store = JsonCountStore::new(&config.output.word_counts_path);

    let mut crawler = Crawler::new(resolver, store, &config.crawler)?;
    crawler.run(root).await
}
