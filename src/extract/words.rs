//! Word counting over article text

use crate::extract::element_text;
use crate::store::WordCounts;
use regex::Regex;
use scraper::ElementRef;
use std::sync::LazyLock;

/// Letters, optionally joined by single internal hyphens or apostrophes.
/// The surrounding word boundaries reject tokens touching digits or `_`.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\p{L}+(?:[-']\p{L}+)*\b").unwrap());

/// Counts the words of a content region
///
/// Inline `<style>` and `<script>` contents are not counted.
pub fn extract_word_counts(content: ElementRef<'_>) -> WordCounts {
    count_words(&element_text(content))
}

/// Counts lowercase words in plain text
///
/// # Examples
///
/// ```
/// use wiki_scraper::extract::count_words;
///
/// let counts = count_words("Foo bar foo baz");
/// assert_eq!(counts["foo"], 2);
/// assert_eq!(counts["bar"], 1);
/// ```
pub fn count_words(text: &str) -> WordCounts {
    let lowered = text.to_lowercase();
    let mut counts = WordCounts::new();

    for word in WORD_REGEX.find_iter(&lowered) {
        *counts.entry(word.as_str().to_string()).or_insert(0) += 1;
    }

    counts
}
