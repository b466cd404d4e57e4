//! Prose paragraph and summary extraction

use crate::extract::element_text;
use regex::Regex;
use scraper::{ElementRef, Selector};
use std::sync::LazyLock;

static PARAGRAPH_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("p").unwrap());

static SPACE_BEFORE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,!?;:])").unwrap());

/// Elements whose paragraphs are page furniture rather than article prose
const SKIPPED_ELEMENTS: &[&str] = &["table", "aside", "figure"];

/// Classes whose paragraphs are page furniture rather than article prose
const SKIPPED_CLASSES: &[&str] = &["infobox", "thumb", "sidebar", "navbox", "toc", "hatnote"];

/// Extracts the article's prose paragraphs in document order
///
/// Paragraphs nested (anywhere below `content`) in tables, asides, figures,
/// infoboxes, thumbnails, sidebars, navboxes, the table of contents or
/// hatnotes are skipped, as are paragraphs with no text.
pub fn extract_paragraphs(content: ElementRef<'_>) -> Vec<String> {
    content
        .select(&PARAGRAPH_SELECTOR)
        .filter(|paragraph| !is_inside_skipped_container(*paragraph, content))
        .map(element_text)
        .filter(|text| !text.is_empty())
        .collect()
}

/// Returns the article's first paragraph, tidied for display
///
/// Text nodes are joined with spaces, which leaves gaps before punctuation
/// that followed inline markup (`<a>Creeper</a>.`); those gaps are removed.
pub fn extract_summary(content: ElementRef<'_>) -> Option<String> {
    extract_paragraphs(content)
        .into_iter()
        .next()
        .map(|text| SPACE_BEFORE_PUNCTUATION.replace_all(&text, "$1").into_owned())
}

/// Checks the ancestors between `element` and `content` for skipped containers
fn is_inside_skipped_container(element: ElementRef<'_>, content: ElementRef<'_>) -> bool {
    element
        .ancestors()
        .take_while(|node| node.id() != content.id())
        .filter_map(ElementRef::wrap)
        .any(|ancestor| {
            let value = ancestor.value();
            SKIPPED_ELEMENTS.contains(&value.name())
                || value.classes().any(|class| SKIPPED_CLASSES.contains(&class))
        })
}
