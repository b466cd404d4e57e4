//! Relative word frequency analysis
//!
//! Compares the accumulated word counts against a reference table of word
//! frequencies for the wiki's language. Both sides are normalized by their
//! largest value so they can be compared on a 0..=1 scale.
//!
//! A table of common English words on the Zipf scale is compiled in and used
//! unless another reference file is given.

use crate::store::WordCounts;
use crate::{Result, ScraperError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Common English words with their Zipf-scale frequencies
const BUNDLED_REFERENCE: &str = include_str!("../../data/english-frequencies.json");
const BUNDLED_REFERENCE_NAME: &str = "<bundled english-frequencies.json>";

/// Normalized frequency per word
pub type Frequencies = BTreeMap<String, f64>;

/// Which side of the comparison picks the listed words
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FrequencyMode {
    /// Most frequent words in the crawled articles
    Article,

    /// Most frequent words in the reference language
    Language,
}

/// One line of the comparison report
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRow {
    pub word: String,
    pub article: Option<f64>,
    pub language: Option<f64>,
}

/// Scales stored counts so the most frequent word has frequency 1
pub fn normalize_counts(counts: &WordCounts) -> Result<Frequencies> {
    let max = counts
        .values()
        .copied()
        .max()
        .ok_or(ScraperError::EmptyWordCounts)?;

    Ok(counts
        .iter()
        .map(|(word, count)| (word.clone(), ratio(*count as f64, max as f64)))
        .collect())
}

/// Scales reference frequencies so the most frequent word has frequency 1
pub fn normalize_frequencies(frequencies: &Frequencies) -> Frequencies {
    let max = frequencies.values().copied().fold(0.0_f64, f64::max);

    frequencies
        .iter()
        .map(|(word, frequency)| (word.clone(), ratio(*frequency, max)))
        .collect()
}

fn ratio(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max
    } else {
        0.0
    }
}

/// Loads the reference table from `path`, or the bundled English table
/// when no path is given
pub fn reference_frequencies(path: Option<&Path>) -> Result<Frequencies> {
    match path {
        Some(path) => load_reference(path),
        None => bundled_reference(),
    }
}

/// Parses the compiled-in English reference table
pub fn bundled_reference() -> Result<Frequencies> {
    parse_reference(BUNDLED_REFERENCE, Path::new(BUNDLED_REFERENCE_NAME))
}

/// Loads a reference frequency table: a JSON object of word to frequency
pub fn load_reference(path: &Path) -> Result<Frequencies> {
    let content = std::fs::read_to_string(path).map_err(|e| reference_error(path, e))?;
    parse_reference(&content, path)
}

fn parse_reference(content: &str, origin: &Path) -> Result<Frequencies> {
    let frequencies: Frequencies =
        serde_json::from_str(content).map_err(|e| reference_error(origin, e))?;

    if frequencies.is_empty() {
        return Err(reference_error(origin, "no words in reference table"));
    }

    tracing::debug!(
        "Loaded {} reference frequencies from {}",
        frequencies.len(),
        origin.display()
    );
    Ok(frequencies)
}

fn reference_error(path: &Path, message: impl ToString) -> ScraperError {
    ScraperError::Reference {
        path: PathBuf::from(path),
        message: message.to_string(),
    }
}

/// Builds the top `count` rows, ranked by the side `mode` selects
///
/// Ties are broken alphabetically. A word missing from the other side gets
/// `None` for that side.
pub fn compare_frequencies(
    article: &Frequencies,
    language: &Frequencies,
    mode: FrequencyMode,
    count: usize,
) -> Vec<FrequencyRow> {
    let primary = match mode {
        FrequencyMode::Article => article,
        FrequencyMode::Language => language,
    };

    let mut ranked: Vec<(&String, f64)> = primary.iter().map(|(w, f)| (w, *f)).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    ranked
        .into_iter()
        .take(count)
        .map(|(word, _)| FrequencyRow {
            word: word.clone(),
            article: article.get(word).copied(),
            language: language.get(word).copied(),
        })
        .collect()
}

/// Prints the comparison report
pub fn print_frequency_table(rows: &[FrequencyRow]) {
    const WORD: &str = "word";
    const ARTICLE: &str = "frequency in the article";
    const LANGUAGE: &str = "frequency in wiki language";

    let word_width = rows
        .iter()
        .map(|row| row.word.chars().count())
        .chain(std::iter::once(WORD.len()))
        .max()
        .unwrap_or(0);

    let cell = |value: Option<f64>| value.map_or_else(|| "-".to_string(), |v| format!("{:.6}", v));

    println!(
        "{:<ww$}  {:>aw$}  {:>lw$}",
        WORD,
        ARTICLE,
        LANGUAGE,
        ww = word_width,
        aw = ARTICLE.len(),
        lw = LANGUAGE.len()
    );
    for row in rows {
        println!(
            "{:<ww$}  {:>aw$}  {:>lw$}",
            row.word,
            cell(row.article),
            cell(row.language),
            ww = word_width,
            aw = ARTICLE.len(),
            lw = LANGUAGE.len()
        );
    }
}
