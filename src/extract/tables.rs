//! Table extraction
//!
//! Cells spanning several rows or columns are repeated into every slot they
//! cover, so each table comes out as a rectangular grid.

use crate::extract::element_text;
use regex::{Captures, Regex};
use scraper::{ElementRef, Html, Selector};
use std::borrow::Cow;
use std::sync::LazyLock;

static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("table").unwrap());

static SPAN_ATTRIBUTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(colspan|rowspan)\s*=\s*"?([^"> ]*)"?"#).unwrap());

static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Largest colspan browsers honour
const MAX_COLSPAN: usize = 1000;

/// Largest rowspan browsers honour
const MAX_ROWSPAN: usize = 65534;

/// A table flattened into a rectangular grid of cell texts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column headers, when the table's first row is made of header cells
    pub headers: Option<Vec<String>>,

    /// Body rows, each padded to the table's width
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of columns in the widest row (headers included)
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(self.headers.iter().map(Vec::len))
            .max()
            .unwrap_or(0)
    }

    /// Uses the first body row as the header row
    ///
    /// Does nothing when the table already has headers or no rows.
    pub fn promote_first_row(&mut self) {
        if self.headers.is_none() && !self.rows.is_empty() {
            self.headers = Some(self.rows.remove(0));
        }
    }

    /// Iterates over every body cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }
}

/// Rewrites malformed `colspan`/`rowspan` attributes to plain integers
///
/// Wiki markup sometimes produces values such as `rowspan="2;"` or
/// `colspan=3px`. Each value is replaced by its first run of digits, or by
/// `1` when it contains none, and always re-emitted quoted.
///
/// # Examples
///
/// ```
/// use wiki_scraper::extract::normalize_span_attributes;
///
/// assert_eq!(
///     normalize_span_attributes(r#"<td rowspan="2;">"#),
///     r#"<td rowspan="2">"#
/// );
/// assert_eq!(
///     normalize_span_attributes(r#"<td colspan="all">"#),
///     r#"<td colspan="1">"#
/// );
/// ```
pub fn normalize_span_attributes(html: &str) -> Cow<'_, str> {
    SPAN_ATTRIBUTE_REGEX.replace_all(html, |caps: &Captures<'_>| {
        let digits = DIGITS_REGEX
            .find(&caps[2])
            .map(|m| m.as_str())
            .unwrap_or("1");
        format!(r#"{}="{}""#, &caps[1], digits)
    })
}

/// Extracts every table of a page, in document order
///
/// Span attributes are normalized first, then each `<table>` is flattened:
/// cells spanning several columns or rows are repeated into each slot they
/// cover, and short rows are padded with empty strings. Nested tables are
/// returned as tables of their own.
pub fn extract_tables(html: &str) -> Vec<Table> {
    let normalized = normalize_span_attributes(html);
    let document = Html::parse_document(&normalized);

    document.select(&TABLE_SELECTOR).map(parse_table).collect()
}

/// Flattens a single `<table>` element
fn parse_table(table: ElementRef<'_>) -> Table {
    let mut grid: Vec<Vec<String>> = Vec::new();
    let mut has_header = false;
    // Per column: (rows still covered, text) for cells spanning downwards
    let mut pending: Vec<Option<(usize, String)>> = Vec::new();

    for (row_index, row) in table_rows(table).into_iter().enumerate() {
        let cells = child_elements(row, &["td", "th"]);
        if row_index == 0 && !cells.is_empty() {
            has_header = cells.iter().all(|cell| cell.value().name() == "th");
        }

        let mut out: Vec<String> = Vec::new();
        let mut column = 0;

        for cell in cells {
            column = fill_pending(&mut out, &mut pending, column);

            let text = element_text(cell);
            let colspan = span_value(cell, "colspan", MAX_COLSPAN);
            let rowspan = span_value(cell, "rowspan", MAX_ROWSPAN);

            for _ in 0..colspan {
                if pending.len() <= column {
                    pending.resize(column + 1, None);
                }
                if rowspan > 1 {
                    pending[column] = Some((rowspan - 1, text.clone()));
                }
                out.push(text.clone());
                column += 1;
            }
        }

        // Spans from earlier rows reaching past this row's last cell
        while column < pending.len() {
            column = fill_pending(&mut out, &mut pending, column);
            if column < pending.len() {
                out.push(String::new());
                column += 1;
            }
        }

        grid.push(out);
    }

    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut grid {
        row.resize(width, String::new());
    }

    let headers = if has_header && !grid.is_empty() {
        Some(grid.remove(0))
    } else {
        None
    };
    Table {
        headers,
        rows: grid,
    }
}

/// Emits cells carried down by rowspans, starting at `column`
///
/// Returns the first column not occupied by a pending span.
fn fill_pending(
    out: &mut Vec<String>,
    pending: &mut [Option<(usize, String)>],
    mut column: usize,
) -> usize {
    while let Some(slot) = pending.get_mut(column) {
        let Some((remaining, text)) = slot.as_mut() else {
            break;
        };
        out.push(text.clone());
        *remaining -= 1;
        if *remaining == 0 {
            *slot = None;
        }
        column += 1;
    }
    column
}

/// Collects a table's own rows, skipping rows of nested tables
fn table_rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut rows = Vec::new();
    for child in child_elements(table, &["thead", "tbody", "tfoot", "tr"]) {
        if child.value().name() == "tr" {
            rows.push(child);
        } else {
            rows.extend(child_elements(child, &["tr"]));
        }
    }
    rows
}

/// Returns the element children of `parent` whose tag is one of `names`
fn child_elements<'a>(parent: ElementRef<'a>, names: &[&str]) -> Vec<ElementRef<'a>> {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| names.contains(&child.value().name()))
        .collect()
}

/// Reads a span attribute, defaulting to 1 and clamping to `[1, max]`
fn span_value(cell: ElementRef<'_>, attribute: &str, max: usize) -> usize {
    cell.value()
        .attr(attribute)
        .and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .clamp(1, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_normalize_numeric_span_untouched() {
        assert_eq!(
            normalize_span_attributes(r#"<td colspan="2">"#),
            r#"<td colspan="2">"#
        );
    }

    #[test]
    fn test_normalize_embedded_digits() {
        assert_eq!(
            normalize_span_attributes(r#"<td rowspan="2;" colspan=3px>"#),
            r#"<td rowspan="2" colspan="3">"#
        );
    }

    #[test]
    fn test_normalize_first_digit_run_wins() {
        assert_eq!(
            normalize_span_attributes(r#"<th colspan="a4b7">"#),
            r#"<th colspan="4">"#
        );
    }

    #[test]
    fn test_normalize_no_digits_becomes_one() {
        assert_eq!(
            normalize_span_attributes(r#"<td rowspan="">"#),
            r#"<td rowspan="1">"#
        );
    }

    #[test]
    fn test_simple_table_with_header() {
        let tables = extract_tables(
            "<table>
                <tr><th>Mob</th><th>Health</th></tr>
                <tr><td>Creeper</td><td>20</td></tr>
                <tr><td>Zombie</td><td>20</td></tr>
            </table>",
        );

        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].headers, Some(row(&["Mob", "Health"])));
        assert_eq!(
            tables[0].rows,
            vec![row(&["Creeper", "20"]), row(&["Zombie", "20"])]
        );
    }

    #[test]
    fn test_table_without_header_row() {
        let tables = extract_tables("<table><tr><th>Name</th><td>Creeper</td></tr></table>");
        assert_eq!(tables[0].headers, None);
        assert_eq!(tables[0].rows, vec![row(&["Name", "Creeper"])]);
    }

    #[test]
    fn test_colspan_and_rowspan_expand() {
        let tables = extract_tables(
            r#"<table>
                <tr><td rowspan="2">A</td><td colspan="2">B</td></tr>
                <tr><td>C</td><td>D</td></tr>
                <tr><td>E</td><td>F</td><td>G</td></tr>
            </table>"#,
        );

        assert_eq!(
            tables[0].rows,
            vec![
                row(&["A", "B", "B"]),
                row(&["A", "C", "D"]),
                row(&["E", "F", "G"]),
            ]
        );
    }

    #[test]
    fn test_trailing_rowspan_is_carried() {
        let tables = extract_tables(
            r#"<table>
                <tr><td>A</td><td rowspan="2">B</td></tr>
                <tr><td>C</td></tr>
            </table>"#,
        );

        assert_eq!(tables[0].rows, vec![row(&["A", "B"]), row(&["C", "B"])]);
    }

    #[test]
    fn test_malformed_span_is_normalized_before_parsing() {
        let tables = extract_tables(
            r#"<table>
                <tr><td colspan="2;">wide</td></tr>
                <tr><td>x</td><td>y</td></tr>
            </table>"#,
        );

        assert_eq!(
            tables[0].rows,
            vec![row(&["wide", "wide"]), row(&["x", "y"])]
        );
    }

    #[test]
    fn test_short_rows_are_padded() {
        let tables = extract_tables(
            "<table><tr><td>a</td><td>b</td><td>c</td></tr><tr><td>d</td></tr></table>",
        );
        assert_eq!(tables[0].rows[1], row(&["d", "", ""]));
        assert_eq!(tables[0].width(), 3);
    }

    #[test]
    fn test_nested_tables_are_separate() {
        let tables = extract_tables(
            "<table><tr><td>outer<table><tr><td>inner</td></tr></table></td></tr></table>",
        );

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(tables[1].rows, vec![row(&["inner"])]);
    }

    #[test]
    fn test_promote_first_row() {
        let mut table = Table {
            headers: None,
            rows: vec![row(&["Name", "Count"]), row(&["x", "1"])],
        };
        table.promote_first_row();
        assert_eq!(table.headers, Some(row(&["Name", "Count"])));
        assert_eq!(table.rows, vec![row(&["x", "1"])]);

        table.promote_first_row();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_no_tables() {
        assert!(extract_tables("<p>No tables here</p>").is_empty());
    }
}
