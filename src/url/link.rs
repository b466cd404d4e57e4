//! Classification of in-content links into article phrases

/// Path prefix of article links on the wiki
pub const WIKI_PREFIX: &str = "/w/";

/// Namespaces whose pages are never treated as articles
pub const BLOCKED_PREFIXES: &[&str] = &[
    "File:",
    "Category:",
    "Special:",
    "Help:",
    "Talk:",
    "Template:",
    "User:",
    "User_talk:",
];

/// Turns a raw anchor `href` into an article phrase, if it is one
///
/// # Filtering Rules
///
/// A link is kept only when all of these hold:
/// 1. It points into the wiki article namespace (`/w/...`)
/// 2. It carries no query string
/// 3. It carries no fragment identifier
/// 4. Its title is not under a blocked namespace (files, categories,
///    special pages, help, talk, templates, user pages)
///
/// # Examples
///
/// ```
/// use wiki_scraper::url::normalize_link;
///
/// assert_eq!(normalize_link("/w/Test_Page"), Some("Test_Page".to_string()));
/// assert_eq!(normalize_link("/w/File:Example.png"), None);
/// assert_eq!(normalize_link("/w/Test_Page#sec"), None);
/// assert_eq!(normalize_link("/w/Test_Page?query=1"), None);
/// assert_eq!(normalize_link("/other/Test_Page"), None);
/// ```
pub fn normalize_link(href: &str) -> Option<String> {
    let phrase = href.strip_prefix(WIKI_PREFIX)?;

    if phrase.is_empty() || phrase.contains('?') || phrase.contains('#') {
        return None;
    }

    if BLOCKED_PREFIXES
        .iter()
        .any(|prefix| phrase.starts_with(prefix))
    {
        return None;
    }

    Some(phrase.to_string())
}
