//! Crawl statistics
//!
//! This module collects per-node crawl outcomes into a summary and prints
//! it once the crawl has finished.

use crate::crawler::NodeOutcome;
use chrono::{DateTime, Utc};

/// Summary of a single crawl invocation
#[derive(Debug, Clone)]
pub struct CrawlStats {
    /// How the root article was requested
    pub root: String,

    /// Whether the root resolved to an article with metadata
    pub root_found: bool,

    /// Canonical titles of processed articles, in processing order
    pub processed: Vec<String>,

    /// Phrases that did not resolve to an article
    pub not_found: u64,

    /// Phrases that resolved to an article processed earlier
    pub already_visited: u64,

    /// Articles skipped for having no content region
    pub content_missing: u64,

    /// Total word occurrences added to the store
    pub words_recorded: u64,

    /// Link phrases added to the frontier
    pub links_queued: u64,

    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl CrawlStats {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            root_found: false,
            processed: Vec::new(),
            not_found: 0,
            already_visited: 0,
            content_missing: 0,
            words_recorded: 0,
            links_queued: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Folds one node outcome into the summary
    pub fn record(&mut self, outcome: &NodeOutcome) {
        match outcome {
            NodeOutcome::Processed {
                title,
                words,
                links_queued,
            } => {
                self.processed.push(title.clone());
                self.words_recorded = self.words_recorded.saturating_add(*words);
                self.links_queued += *links_queued as u64;
            }
            NodeOutcome::NotFound { .. } => self.not_found += 1,
            NodeOutcome::AlreadyVisited { .. } => self.already_visited += 1,
            NodeOutcome::ContentMissing { .. } => self.content_missing += 1,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock duration, once the crawl has finished
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.finished_at.map(|finished| finished - self.started_at)
    }

    /// Number of dequeued phrases that were skipped
    pub fn skipped(&self) -> u64 {
        self.not_found + self.already_visited + self.content_missing
    }
}

/// Prints crawl statistics to stdout in a formatted manner
pub fn print_crawl_stats(stats: &CrawlStats) {
    if !stats.root_found {
        println!("No article available for '{}'", stats.root);
        return;
    }

    println!("\n=== Crawl Statistics ===\n");
    println!("  Root: {}", stats.root);
    println!("  Articles processed: {}", stats.processed.len());
    println!("  Words recorded: {}", stats.words_recorded);
    println!("  Links queued: {}", stats.links_queued);

    if stats.skipped() > 0 {
        println!("  Skipped: {}", stats.skipped());
        println!("    Not found: {}", stats.not_found);
        println!("    Already visited: {}", stats.already_visited);
        println!("    No content: {}", stats.content_missing);
    }

    println!(
        "  Started: {}",
        stats.started_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if let Some(duration) = stats.duration() {
        println!(
            "  Duration: {:.1}s",
            duration.num_milliseconds() as f64 / 1000.0
        );
    }
}
