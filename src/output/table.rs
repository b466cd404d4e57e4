//! Table export
//!
//! Writes an extracted table to CSV and summarizes how often each cell
//! value occurs.

use crate::extract::Table;
use crate::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// CSV file path for a page's exported table
///
/// Path separators in the phrase are replaced so the file always lands
/// directly in `dir`.
pub fn table_csv_path(dir: &Path, phrase: &str) -> PathBuf {
    let name = phrase.replace(['/', '\\'], "_");
    dir.join(format!("{}.csv", name))
}

/// Writes `table` as CSV, header row first when the table has one
pub fn write_table_csv(table: &Table, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    if let Some(headers) = &table.headers {
        writer.write_record(headers)?;
    }
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;

    tracing::debug!("Wrote {} rows to {}", table.rows.len(), path.display());
    Ok(())
}

/// Counts occurrences of each body cell value
///
/// Values are trimmed; blank cells and `nan` placeholders are ignored.
/// Sorted by count descending, then by value.
pub fn value_counts(table: &Table) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in table.cells().map(str::trim) {
        if value.is_empty() || value.eq_ignore_ascii_case("nan") {
            continue;
        }
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}

/// Prints a table as aligned columns
pub fn print_table(table: &Table) {
    let width = table.width();
    let mut widths = vec![0; width];
    for row in table.headers.iter().chain(table.rows.iter()) {
        for (column, cell) in row.iter().enumerate() {
            widths[column] = widths[column].max(cell.chars().count());
        }
    }

    let format_row = |row: &[String]| {
        row.iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    if let Some(headers) = &table.headers {
        println!("{}", format_row(&headers[..]));
        let total = widths.iter().sum::<usize>() + 2 * width.saturating_sub(1);
        println!("{}", "-".repeat(total));
    }
    for row in &table.rows {
        println!("{}", format_row(&row[..]));
    }
}

/// Prints value counts as a two-column listing
pub fn print_value_counts(counts: &[(String, usize)]) {
    let value_width = counts
        .iter()
        .map(|(value, _)| value.chars().count())
        .chain(std::iter::once("Value".len()))
        .max()
        .unwrap_or(0);

    println!("\nValue counts:");
    println!("{:<width$}  Count", "Value", width = value_width);
    for (value, count) in counts {
        println!("{:<width$}  {}", value, count, width = value_width);
    }
}
