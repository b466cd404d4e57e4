//! Article phrase normalization and article URL construction

use url::Url;

/// Normalizes a human-entered phrase into its fetchable form
///
/// Surrounding whitespace is trimmed and inner spaces become underscores, so
/// `" Iron Golem "` and `"Iron_Golem"` normalize to the same phrase. This is
/// also the key the crawler uses for pre-fetch deduplication.
///
/// # Examples
///
/// ```
/// use wiki_scraper::url::normalize_phrase;
///
/// assert_eq!(normalize_phrase(" Iron Golem "), "Iron_Golem");
/// ```
pub fn normalize_phrase(phrase: &str) -> String {
    phrase.trim().replace(' ', "_")
}

/// Builds the article URL for a phrase under the given base URL
///
/// The phrase is appended as a path segment rather than resolved with
/// `Url::join`, since titles such as `Tutorial:Farming` would otherwise be
/// parsed as a URL scheme. `?` and `#` are percent-encoded so they stay part
/// of the title.
///
/// # Examples
///
/// ```
/// use wiki_scraper::url::article_url;
///
/// let url = article_url("https://minecraft.wiki/w/", "Iron Golem").unwrap();
/// assert_eq!(url.as_str(), "https://minecraft.wiki/w/Iron_Golem");
/// ```
pub fn article_url(base_url: &str, phrase: &str) -> Result<Url, url::ParseError> {
    let base = base_url.trim_end_matches('/');
    let segment = normalize_phrase(phrase)
        .replace('?', "%3F")
        .replace('#', "%23");

    Url::parse(&format!("{}/{}", base, segment))
}
