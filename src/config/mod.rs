//! Configuration module for wiki-scraper
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Command-line flags override values loaded here.
//!
//! # Example
//!
//! ```no_run
//! use wiki_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("wiki-scraper.toml")).unwrap();
//! println!("Crawler will use max depth: {}", config.crawler.max_depth);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    AnalysisConfig, Config, CrawlerConfig, OutputConfig, UserAgentConfig, WikiConfig,
};

// Re-export parser and validation functions
pub use parser::{load_config, load_config_or_default};
pub use validation::{validate, validate_crawler_config, MAX_WAIT_SECONDS};
