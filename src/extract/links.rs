//! Internal article link extraction

use crate::url::normalize_link;
use scraper::{ElementRef, Selector};
use std::collections::BTreeSet;
use std::sync::LazyLock;

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Extracts the set of internal article phrases linked from a content region
///
/// Every `<a href>` is run through [`normalize_link`]; external links, links
/// with query strings or fragments, and blocked namespaces are dropped. The
/// result is sorted so crawls enqueue links in a reproducible order.
pub fn extract_internal_link_phrases(content: ElementRef<'_>) -> BTreeSet<String> {
    content
        .select(&ANCHOR_SELECTOR)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(normalize_link)
        .collect()
}
