//! Page resolution module
//!
//! This module turns an article identifier into fetched markup:
//! - `PageSource` names an article by phrase, explicit URL, or local file
//! - `PageResolver` is the seam the crawler fetches through
//! - `WikiPage` holds the raw markup and exposes metadata and the content region

mod fetcher;
mod resolver;

pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use resolver::WikiResolver;

use crate::extract::{extract_id_and_title, PageInfo};
use crate::Result;
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::fmt;
use std::path::PathBuf;
use std::sync::LazyLock;

static CONTENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#mw-content-text .mw-parser-output").unwrap());

static NO_ARTICLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".noarticletext").unwrap());

/// Identifies an article to resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSource {
    /// Article title as a human would type it
    Phrase(String),

    /// Explicit article URL
    Url(String),

    /// Previously saved article markup
    File(PathBuf),
}

impl fmt::Display for PageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSource::Phrase(phrase) => write!(f, "{}", phrase),
            PageSource::Url(url) => write!(f, "{}", url),
            PageSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolves article identifiers into fetched pages
///
/// `Ok(None)` means the article does not exist. Every other failure is an
/// error and is not retried.
#[async_trait]
pub trait PageResolver: Send + Sync {
    async fn resolve(&self, source: &PageSource) -> Result<Option<WikiPage>>;
}

/// A fetched article
///
/// Only the raw markup is kept, so pages can be moved across await points;
/// call [`WikiPage::parse`] to get a queryable document.
#[derive(Debug, Clone)]
pub struct WikiPage {
    phrase: String,
    markup: String,
}

impl WikiPage {
    pub fn new(phrase: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            markup: markup.into(),
        }
    }

    /// The phrase this page was requested under
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn raw_markup(&self) -> &str {
        &self.markup
    }

    /// Page ID and canonical title, if the page embeds them
    pub fn metadata(&self) -> Option<PageInfo> {
        extract_id_and_title(&self.markup)
    }

    pub fn parse(&self) -> ParsedPage {
        ParsedPage {
            document: Html::parse_document(&self.markup),
        }
    }
}

/// A parsed article document
pub struct ParsedPage {
    document: Html,
}

impl ParsedPage {
    /// The article's substantive body
    ///
    /// Returns `None` when the page is the wiki's placeholder for a missing
    /// article, or when it has no `#mw-content-text .mw-parser-output`
    /// container at all.
    pub fn content_region(&self) -> Option<ElementRef<'_>> {
        if self.document.select(&NO_ARTICLE_SELECTOR).next().is_some() {
            return None;
        }
        self.document.select(&CONTENT_SELECTOR).next()
    }
}
