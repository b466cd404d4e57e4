//! Bar chart of a frequency comparison
//!
//! Each word gets a pair of bars: its normalized frequency in the crawled
//! articles and in the reference language. Charts are written as SVG.

use crate::output::frequency::{FrequencyMode, FrequencyRow};
use crate::{Result, ScraperError};
use plotters::prelude::*;
use std::path::Path;

const BAR_WIDTH: f64 = 0.4;
const CHART_HEIGHT: u32 = 600;
const MIN_CHART_WIDTH: u32 = 1000;
const PIXELS_PER_WORD: u32 = 60;

type DrawResult = std::result::Result<(), Box<dyn std::error::Error>>;

/// Renders `rows` as a grouped bar chart at `path`
///
/// A word missing from one side is drawn with an empty bar on that side.
pub fn write_frequency_chart(
    rows: &[FrequencyRow],
    mode: FrequencyMode,
    path: &Path,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    draw_frequency_chart(rows, mode, path).map_err(|e| ScraperError::Chart {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!("Saved chart of {} words to {}", rows.len(), path.display());
    Ok(())
}

fn draw_frequency_chart(rows: &[FrequencyRow], mode: FrequencyMode, path: &Path) -> DrawResult {
    let slots = rows.len().max(1);
    let width = (slots as u32)
        .saturating_mul(PIXELS_PER_WORD)
        .max(MIN_CHART_WIDTH);

    // Word labels sit on the integer ticks under each pair of bars
    let word_label = |x: &f64| {
        let slot = x.round();
        if (x - slot).abs() > 1e-6 || slot < 0.0 {
            return String::new();
        }
        rows.get(slot as usize)
            .map(|row| row.word.clone())
            .unwrap_or_default()
    };

    let root = SVGBackend::new(path, (width, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Word frequency comparison ({} mode)", mode_name(mode)),
            ("sans-serif", 24),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(-0.5..slots as f64 - 0.5, 0.0..1.05)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&word_label)
        .x_desc("Word")
        .y_desc("Normalized frequency")
        .draw()?;

    chart
        .draw_series(rows.iter().enumerate().map(|(slot, row)| {
            let x = slot as f64;
            let height = row.article.unwrap_or(0.0);
            Rectangle::new([(x - BAR_WIDTH, 0.0), (x, height)], BLUE.filled())
        }))?
        .label("Wiki")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BLUE.filled()));

    chart
        .draw_series(rows.iter().enumerate().map(|(slot, row)| {
            let x = slot as f64;
            let height = row.language.unwrap_or(0.0);
            Rectangle::new([(x, 0.0), (x + BAR_WIDTH, height)], RED.filled())
        }))?
        .label("English")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], RED.filled()));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn mode_name(mode: FrequencyMode) -> &'static str {
    match mode {
        FrequencyMode::Article => "article",
        FrequencyMode::Language => "language",
    }
}
