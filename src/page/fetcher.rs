//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests made against the wiki:
//! - Building the shared HTTP client with the configured user agent
//! - GET requests to fetch article markup
//! - Classifying "not found" apart from every other failure

use crate::config::Config;
use crate::{Result, ScraperError};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Upper bound on the connect phase, regardless of the request timeout
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchResult {
    /// Successfully fetched the page
    Page {
        /// Final URL after redirects
        final_url: String,
        /// Page body content
        body: String,
    },

    /// The server answered 404
    NotFound,
}

/// Builds an HTTP client with proper configuration
///
/// The client identifies itself with the configured user agent, applies the
/// configured request timeout and transparently decompresses gzip and brotli
/// bodies. Redirects are followed so that article aliases land on their
/// canonical page.
///
/// # Example
///
/// ```no_run
/// use wiki_scraper::config::Config;
/// use wiki_scraper::page::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> std::result::Result<Client, reqwest::Error> {
    let timeout = config.wiki.timeout_secs;

    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(timeout))
        .connect_timeout(Duration::from_secs(timeout.min(CONNECT_TIMEOUT_SECS)))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body
///
/// | Condition | Outcome |
/// |-----------|---------|
/// | HTTP 2xx | `Ok(FetchResult::Page)` |
/// | HTTP 404 | `Ok(FetchResult::NotFound)` |
/// | Any other status | `Err(ScraperError::HttpStatus)` |
/// | Transport failure | `Err(ScraperError::Http)` |
///
/// Nothing is retried.
pub async fn fetch_url(client: &Client, url: &str) -> Result<FetchResult> {
    tracing::debug!("Fetching {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ScraperError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        tracing::debug!("Not found: {}", url);
        return Ok(FetchResult::NotFound);
    }

    if !status.is_success() {
        return Err(ScraperError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();
    let body = response.text().await.map_err(|source| ScraperError::Http {
        url: url.to_string(),
        source,
    })?;

    Ok(FetchResult::Page { final_url, body })
}
