//! Content extractors for wiki article markup
//!
//! Pure functions turning fetched markup (or its parsed content region) into
//! structured data:
//! - Page ID and canonical title from embedded page metadata
//! - Prose paragraphs and the summary paragraph
//! - Internal article links
//! - Tables, flattened into rectangular grids
//! - Word counts

mod info;
mod links;
mod paragraphs;
mod tables;
mod words;

pub use info::{extract_id_and_title, PageInfo};
pub use links::extract_internal_link_phrases;
pub use paragraphs::{extract_paragraphs, extract_summary};
pub use tables::{extract_tables, normalize_span_attributes, Table};
pub use words::{count_words, extract_word_counts};

use scraper::ElementRef;

/// Elements whose text is never rendered as prose
const NON_PROSE_ELEMENTS: [&str; 3] = ["style", "script", "noscript"];

/// Collects an element's readable text, trimming each text node and joining
/// with spaces
///
/// Text inside `<style>`, `<script>` and `<noscript>` is skipped; wikis embed
/// template CSS inside the article body.
pub fn element_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter_map(|node| node.value().as_text().map(|text| (node, text)))
        .filter(|(node, _)| {
            !node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|ancestor| NON_PROSE_ELEMENTS.contains(&ancestor.value().name()))
        })
        .map(|(_, text)| text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
