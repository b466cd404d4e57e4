//! Page ID and canonical title from embedded page metadata

use regex::Regex;
use std::sync::LazyLock;

static PAGE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\b"?wgArticleId"?\s*[:=]\s*(\d+)"#).unwrap());

static PAGE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\b"?wg(?:PageName|CanonicalTitle)"?\s*[:=]\s*"([^"]+)""#).unwrap()
});

/// Stable identity of a fetched article
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Numeric page ID assigned by the wiki
    pub page_id: u64,

    /// Title after redirects and normalization
    pub title: String,
}

/// Extracts the page ID and canonical title from embedded page metadata
///
/// MediaWiki embeds its page configuration as key/value pairs in a script
/// block (`"wgArticleId":123,"wgPageName":"Creeper"`). Both halves must be
/// present; either missing yields `None`.
pub fn extract_id_and_title(html: &str) -> Option<PageInfo> {
    let page_id = PAGE_ID_REGEX
        .captures(html)
        .and_then(|caps| caps[1].parse::<u64>().ok())?;

    let title = PAGE_NAME_REGEX.captures(html)?[1].to_string();

    Some(PageInfo { page_id, title })
}
