//! wiki-scraper: article extraction and link-graph word counting for MediaWiki sites
//!
//! This crate fetches wiki articles, extracts their paragraphs, tables, internal
//! links and word frequencies, and crawls the article link graph breadth-first
//! while accumulating word counts into a persistent JSON store.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod page;
pub mod store;
pub mod url;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for wiki-scraper operations
#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("No article available for '{article}'")]
    NotFound { article: String },

    #[error("No content region in '{article}'")]
    ContentMissing { article: String },

    #[error("Table no. {requested} doesn't exist, highest is {available}")]
    TableIndex { requested: usize, available: usize },

    #[error("Failed to load reference frequencies from {}: {message}", path.display())]
    Reference { path: PathBuf, message: String },

    #[error("Failed to render chart to {}: {message}", path.display())]
    Chart { path: PathBuf, message: String },

    #[error("Word-count store is empty, nothing to analyze")]
    EmptyWordCounts,

    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for wiki-scraper operations
pub type Result<T> = std::result::Result<T, ScraperError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::Crawler;
pub use output::CrawlStats;
pub use page::{PageResolver, PageSource, WikiPage, WikiResolver};
pub use store::{merge_counts, CountStore, JsonCountStore, WordCounts};
pub use crate::url::{normalize_link, normalize_phrase};
