//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the breadth-first crawl loop, including:
//! - Resolving the root article and seeding the frontier
//! - Resolving each queued phrase and deduplicating by page ID
//! - Recording word counts write-through into the store
//! - Enqueueing link phrases while depth allows
//! - Pacing between articles

use crate::config::{validate_crawler_config, CrawlerConfig};
use crate::crawler::frontier::{Frontier, QueuedPhrase};
use crate::extract::{extract_internal_link_phrases, extract_word_counts};
use crate::output::CrawlStats;
use crate::page::{PageResolver, PageSource, WikiPage};
use crate::store::CountStore;
use crate::Result;
use std::time::Duration;

/// What happened to a single dequeued phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeOutcome {
    /// Word counts were recorded for a newly visited article
    Processed {
        title: String,
        words: u64,
        links_queued: usize,
    },

    /// The phrase did not resolve to an article
    NotFound { phrase: String },

    /// The phrase is an alias of an article processed earlier
    AlreadyVisited { page_id: u64 },

    /// The article exists but has no content region
    ContentMissing { title: String },
}

/// Bounded-depth breadth-first crawler over the article link graph
pub struct Crawler<R, S> {
    resolver: R,
    store: S,
    max_depth: u32,
    wait: Duration,
}

impl<R: PageResolver, S: CountStore> Crawler<R, S> {
    /// Creates a crawler
    ///
    /// Fails if the configured wait is negative, not finite, or above the
    /// allowed maximum.
    pub fn new(resolver: R, store: S, config: &CrawlerConfig) -> Result<Self> {
        validate_crawler_config(config)?;

        Ok(Self {
            resolver,
            store,
            max_depth: config.max_depth,
            wait: Duration::from_secs_f64(config.wait_seconds),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Crawls outward from `root` until the frontier is exhausted
    ///
    /// A missing root is not an error; the returned stats report it. Pages
    /// that do not exist or have no content are skipped. Any other failure,
    /// including a store write, aborts the crawl; counts recorded before it
    /// stay persisted.
    pub async fn run(&mut self, root: &PageSource) -> Result<CrawlStats> {
        let mut stats = CrawlStats::new(root.to_string());
        tracing::info!(
            "Starting crawl from '{}' (max depth {}, wait {:?})",
            root,
            self.max_depth,
            self.wait
        );

        let Some((root_page, root_title)) = self.resolve_root(root).await? else {
            tracing::warn!("No article available for '{}'", root);
            stats.finish();
            return Ok(stats);
        };
        stats.root_found = true;

        let mut frontier = Frontier::seeded(&root_title);
        // The root was fetched already, reuse it for the first frontier item
        let mut prefetched = Some(root_page);

        while let Some(item) = frontier.next() {
            let page = match prefetched.take() {
                Some(page) => Some(page),
                None => {
                    let source = PageSource::Phrase(item.phrase.clone());
                    self.resolver.resolve(&source).await?
                }
            };

            let outcome = self.process(&mut frontier, &item, page)?;
            stats.record(&outcome);

            tracing::trace!(
                "{} queued, {} seen, {} visited; waiting {:?}",
                frontier.len(),
                frontier.seen_count(),
                frontier.visited_count(),
                self.wait
            );
            tokio::time::sleep(self.wait).await;
        }

        stats.finish();
        tracing::info!(
            "Crawl complete: {} articles processed, {} words recorded",
            stats.processed.len(),
            stats.words_recorded
        );
        Ok(stats)
    }

    /// Resolves the root and reads its canonical title
    async fn resolve_root(&self, root: &PageSource) -> Result<Option<(WikiPage, String)>> {
        let Some(page) = self.resolver.resolve(root).await? else {
            return Ok(None);
        };

        Ok(page.metadata().map(|info| (page, info.title)))
    }

    /// Handles one dequeued phrase
    fn process(
        &mut self,
        frontier: &mut Frontier,
        item: &QueuedPhrase,
        page: Option<WikiPage>,
    ) -> Result<NodeOutcome> {
        let Some((page, info)) = page.and_then(|page| page.metadata().map(|info| (page, info)))
        else {
            tracing::debug!("No article for '{}', skipping", item.phrase);
            return Ok(NodeOutcome::NotFound {
                phrase: item.phrase.clone(),
            });
        };

        if frontier.is_visited(info.page_id) {
            tracing::debug!(
                "'{}' is an alias of visited page {} ({}), skipping",
                item.phrase,
                info.page_id,
                info.title
            );
            return Ok(NodeOutcome::AlreadyVisited {
                page_id: info.page_id,
            });
        }

        let parsed = page.parse();
        let Some(content) = parsed.content_region() else {
            tracing::warn!("No content in {} - skipping", info.title);
            return Ok(NodeOutcome::ContentMissing { title: info.title });
        };

        frontier.mark_visited(info.page_id);
        tracing::info!("{}", info.title);

        let counts = extract_word_counts(content);
        let links = if item.depth < self.max_depth {
            extract_internal_link_phrases(content)
        } else {
            Default::default()
        };

        self.store.record(&counts)?;

        let links_queued = links
            .iter()
            .filter(|phrase| frontier.enqueue(phrase, item.depth + 1))
            .count();
        tracing::debug!(
            "{}: {} distinct words, {} of {} links queued at depth {}",
            info.title,
            counts.len(),
            links_queued,
            links.len(),
            item.depth + 1
        );

        Ok(NodeOutcome::Processed {
            title: info.title,
            words: counts.values().sum(),
            links_queued,
        })
    }
}
