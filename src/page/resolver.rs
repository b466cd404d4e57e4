//! Article resolution from phrases, URLs and saved files

use crate::config::Config;
use crate::page::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::page::{PageResolver, PageSource, WikiPage};
use crate::url::article_url;
use crate::{Result, ScraperError};
use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;

/// Resolves articles against a live wiki, or from local files
///
/// Owns the HTTP client so every request of a run shares one connection pool.
#[derive(Debug, Clone)]
pub struct WikiResolver {
    client: Client,
    base_url: String,
}

impl WikiResolver {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Builds a resolver with a fresh client for the configured wiki
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_http_client(config).map_err(|source| ScraperError::Http {
            url: config.wiki.base_url.clone(),
            source,
        })?;
        Ok(Self::new(client, config.wiki.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_page(&self, phrase: &str, url: &str) -> Result<Option<WikiPage>> {
        match fetch_url(&self.client, url).await? {
            FetchResult::Page { final_url, body } => {
                if final_url != url {
                    tracing::debug!("{} redirected to {}", url, final_url);
                }
                Ok(Some(WikiPage::new(phrase, body)))
            }
            FetchResult::NotFound => Ok(None),
        }
    }
}

#[async_trait]
impl PageResolver for WikiResolver {
    async fn resolve(&self, source: &PageSource) -> Result<Option<WikiPage>> {
        match source {
            PageSource::Phrase(phrase) => {
                let url = article_url(&self.base_url, phrase)?;
                self.fetch_page(phrase, url.as_str()).await
            }
            PageSource::Url(url) => self.fetch_page(phrase_from_url(url), url).await,
            PageSource::File(path) => read_page_file(path).await,
        }
    }
}

/// Takes the last non-empty path segment of an article URL as its phrase
///
/// The query and fragment are dropped first.
fn phrase_from_url(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

async fn read_page_file(path: &Path) -> Result<Option<WikiPage>> {
    let markup = match tokio::fs::read_to_string(path).await {
        Ok(markup) => markup,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Page file not found: {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let phrase = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(Some(WikiPage::new(phrase, markup)))
}
