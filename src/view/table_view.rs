//! Table view for plain-text display
//!
//! Lays out a resolved preview as aligned columns.

use super::config::ViewConfig;
use super::text::{display_width, pad_to, truncate_string};
use crate::format::format_cell;
use crate::table::CanonicalTable;

/// Column-aligned text rendering of a [`CanonicalTable`]
///
/// The view:
/// - Formats every cell once, up front, with the shared value formatter
/// - Sizes columns from the header and a sample of rows
/// - Truncates long values with `..`
/// - Fills the gap of a short (ragged) row with the placeholder and drops
///   cells beyond the last column
///
/// # Example
///
/// ```
/// use muestra::{resolve, TableView, ViewConfig};
/// use serde_json::json;
///
/// let table = resolve(&json!([[1, 2, 3], [4, 5]])).unwrap();
/// let view = TableView::new(&table, ViewConfig::default());
///
/// assert_eq!(view.row_count(), 2);
/// assert!(view.render_row_line(1).unwrap().contains('\u{2014}'));
/// ```
#[derive(Debug, Clone)]
pub struct TableView {
    /// Column headers, untruncated
    headers: Vec<String>,
    /// Formatted cells, one per column in every row
    cells: Vec<Vec<String>>,
    /// Calculated column widths
    column_widths: Vec<usize>,
    /// Rendering options
    config: ViewConfig,
}

impl TableView {
    /// Create a view over a table
    pub fn new(table: &CanonicalTable, config: ViewConfig) -> Self {
        let headers = table.columns().to_vec();
        let cells: Vec<Vec<String>> = table
            .rows()
            .iter()
            .map(|row| {
                (0..headers.len())
                    .map(|col| single_line(&format_cell(row.get(col))))
                    .collect()
            })
            .collect();
        let column_widths = calculate_column_widths(&headers, &cells, &config);

        Self {
            headers,
            cells,
            column_widths,
            config,
        }
    }

    /// Get total row count
    #[inline]
    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    /// Get column count
    #[inline]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Check if there are no rows
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get column widths
    ///
    /// Shorter than the column list when the table is too wide for the
    /// configured width even at one character per column; the rest are not
    /// rendered.
    #[inline]
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Get the rendering options
    #[inline]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Get column headers, truncated to their column widths
    pub fn headers(&self) -> Vec<String> {
        self.fit(&self.headers)
    }

    /// Get one row's cells, truncated to their column widths
    pub fn row_cells(&self, row: usize) -> Option<Vec<String>> {
        self.cells.get(row).map(|cells| self.fit(cells))
    }

    /// Get one untruncated formatted cell
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    fn fit(&self, cells: &[String]) -> Vec<String> {
        cells
            .iter()
            .zip(&self.column_widths)
            .map(|(cell, &width)| truncate_string(cell, width))
            .collect()
    }

    fn join_padded(&self, cells: &[String]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&self.column_widths)
            .map(|(cell, &width)| pad_to(cell, width))
            .collect();
        padded.join(" ").trim_end().to_string()
    }

    /// Render header line as a string
    pub fn render_header_line(&self) -> String {
        self.join_padded(&self.headers())
    }

    /// Render a data row as a string
    pub fn render_row_line(&self, row: usize) -> Option<String> {
        self.row_cells(row).map(|cells| self.join_padded(&cells))
    }

    /// Render complete output as lines
    ///
    /// Returns the header (unless disabled) followed by every row.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.row_count() + 1);

        if self.config.show_header {
            lines.push(self.render_header_line());
        }

        lines.extend((0..self.row_count()).filter_map(|row| self.render_row_line(row)));
        lines
    }

    /// Render as a single string
    pub fn render(&self) -> String {
        self.render_lines().join("\n")
    }

    // Search methods

    /// Search for a substring, returning the first matching row
    ///
    /// Case-insensitive match against formatted cell text.
    pub fn search(&self, query: &str) -> Option<usize> {
        self.search_from(query, 0)
    }

    /// Search continuing from a given row
    ///
    /// Wraps around to the beginning if no match is found after `start_row`.
    pub fn search_from(&self, query: &str, start_row: usize) -> Option<usize> {
        if query.is_empty() {
            return None;
        }
        let query_lower = query.to_lowercase();
        let start = start_row.min(self.row_count());

        (start..self.row_count())
            .chain(0..start)
            .find(|&row| {
                self.cells[row]
                    .iter()
                    .any(|cell| cell.to_lowercase().contains(&query_lower))
            })
    }
}

/// Collapse a multi-line (pretty-printed) value onto one line
fn single_line(s: &str) -> String {
    if !s.contains('\n') {
        return s.to_string();
    }
    s.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Size columns from headers and sampled cells, then scale to fit
fn calculate_column_widths(
    headers: &[String],
    cells: &[Vec<String>],
    config: &ViewConfig,
) -> Vec<usize> {
    if headers.is_empty() {
        return Vec::new();
    }

    let cap = config.max_column_width.max(3);

    // Start with header widths
    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h).min(cap)).collect();

    // Sample rows for content width
    for row in cells.iter().take(config.sample_rows) {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(display_width(cell).min(cap));
        }
    }

    // Ensure minimum width of 3 for each column
    for w in &mut widths {
        *w = (*w).max(3);
    }

    // Scale down if needed
    let separators = headers.len() - 1;
    let available = usize::from(config.width).saturating_sub(separators);
    let total: usize = widths.iter().sum();
    if total > available && available > 0 {
        #[allow(clippy::cast_precision_loss)]
        let scale = available as f64 / total as f64;
        for w in &mut widths {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss
            )]
            let scaled = (*w as f64 * scale) as usize;
            *w = scaled.max(3);
        }
    }

    // The minimum of 3 can push the total back over; shrink the widest
    // column one step at a time, down to a single character
    let limit = usize::from(config.width);
    while line_width(&widths) > limit {
        let Some(widest) = widths.iter_mut().max() else {
            break;
        };
        if *widest <= 1 {
            break;
        }
        *widest -= 1;
    }

    // Columns that still do not fit are left off the right edge
    while widths.len() > 1 && line_width(&widths) > limit {
        widths.pop();
    }

    widths
}

/// Rendered width of a line: columns plus single-space separators
fn line_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + widths.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::PLACEHOLDER;
    use crate::table::resolve;
    use serde_json::json;

    fn view_of(payload: &serde_json::Value) -> TableView {
        TableView::new(&resolve(payload).unwrap(), ViewConfig::default())
    }

    #[test]
    fn f_view_counts() {
        let view = view_of(&json!([{"a": 1, "b": 2}, {"c": 3}]));
        assert_eq!(view.row_count(), 2);
        assert_eq!(view.column_count(), 3);
        assert!(!view.is_empty());
    }

    #[test]
    fn f_view_header_line() {
        let view = view_of(&json!([{"name": "ada", "score": 9}]));
        let header = view.render_header_line();
        assert!(header.starts_with("name"));
        assert!(header.contains("score"));
    }

    #[test]
    fn f_view_columns_aligned() {
        let view = view_of(&json!([["a", "b"], ["longer value", "c"]]));
        let lines = view.render_lines();
        let second_col = lines[0].find("Column 2").unwrap();
        assert_eq!(lines[1].find('b'), Some(second_col));
        assert_eq!(lines[2].rfind('c'), Some(second_col));
    }

    #[test]
    fn f_view_missing_cell_placeholder() {
        let view = view_of(&json!([{"a": 1}, {"b": 2}]));
        assert_eq!(view.cell(1, 0), Some(PLACEHOLDER));
        assert_eq!(view.cell(1, 1), Some("2"));
    }

    #[test]
    fn f_view_ragged_short_row() {
        let view = view_of(&json!([[1, 2, 3], [4]]));
        assert_eq!(view.cell(1, 2), Some(PLACEHOLDER));
    }

    #[test]
    fn f_view_ragged_long_row_dropped() {
        let view = view_of(&json!([[1], [2, 3, 4]]));
        assert_eq!(view.row_cells(1).unwrap(), vec!["2"]);
    }

    #[test]
    fn f_view_booleans_formatted() {
        let view = view_of(&json!([{"ok": true}, {"ok": false}]));
        assert_eq!(view.cell(0, 0), Some("Yes"));
        assert_eq!(view.cell(1, 0), Some("No"));
    }

    #[test]
    fn f_view_composite_single_line() {
        let view = view_of(&json!([{"tags": ["x", "y"]}]));
        assert_eq!(view.cell(0, 0), Some("[ \"x\", \"y\" ]"));
    }

    #[test]
    fn f_view_truncates_to_cap() {
        let table = resolve(&json!([{"text": "a".repeat(100)}])).unwrap();
        let view = TableView::new(&table, ViewConfig::default().max_column_width(10));
        assert_eq!(view.column_widths(), [10]);
        let cells = view.row_cells(0).unwrap();
        assert_eq!(cells[0].len(), 10);
        assert!(cells[0].ends_with(".."));
    }

    #[test]
    fn f_view_scales_to_width() {
        let table = resolve(&json!([["x".repeat(40), "y".repeat(40), "z".repeat(40)]])).unwrap();
        let view = TableView::new(&table, ViewConfig::default().width(30));
        let total: usize = view.column_widths().iter().sum::<usize>() + 2;
        assert!(total <= 30);
    }

    #[test]
    fn f_view_many_columns_fit_width() {
        let table = resolve(&json!([(0..30).collect::<Vec<i32>>()])).unwrap();
        let view = TableView::new(&table, ViewConfig::default().width(80));
        assert_eq!(view.column_widths().len(), 30);
        for line in view.render_lines() {
            assert!(display_width(&line) <= 80, "too wide: {line:?}");
        }
    }

    #[test]
    fn f_view_drops_columns_that_cannot_fit() {
        let table = resolve(&json!([(0..50).collect::<Vec<i32>>()])).unwrap();
        let view = TableView::new(&table, ViewConfig::default().width(80));
        assert_eq!(view.column_count(), 50);
        assert_eq!(view.column_widths(), vec![1; 40].as_slice());
        assert_eq!(view.headers().len(), 40);
        for line in view.render_lines() {
            assert!(display_width(&line) <= 80, "too wide: {line:?}");
        }
    }

    #[test]
    fn f_view_min_width() {
        let view = view_of(&json!([{"a": 1}]));
        assert_eq!(view.column_widths(), [3]);
    }

    #[test]
    fn f_view_hide_header() {
        let table = resolve(&json!(42)).unwrap();
        let view = TableView::new(&table, ViewConfig::default().show_header(false));
        assert_eq!(view.render_lines(), vec!["42"]);
    }

    #[test]
    fn f_view_render_joins_lines() {
        let view = view_of(&json!(7));
        assert_eq!(view.render(), "Value\n7");
    }

    #[test]
    fn f_view_empty_table() {
        let table = CanonicalTable::new(vec!["Field".into(), "Value".into()], Vec::new());
        let view = TableView::new(&table, ViewConfig::default());
        assert!(view.is_empty());
        assert_eq!(view.render_lines().len(), 1);
    }

    #[test]
    fn f_view_search() {
        let view = view_of(&json!([{"city": "Oslo"}, {"city": "Lima"}, {"city": "Osaka"}]));
        assert_eq!(view.search("lima"), Some(1));
        assert_eq!(view.search("nowhere"), None);
        assert_eq!(view.search(""), None);
    }

    #[test]
    fn f_view_search_from_wraps() {
        let view = view_of(&json!([{"city": "Oslo"}, {"city": "Lima"}, {"city": "Osaka"}]));
        assert_eq!(view.search_from("os", 1), Some(2));
        assert_eq!(view.search_from("os", 3), Some(0));
        assert_eq!(view.search_from("lima", 2), Some(1));
    }

    #[test]
    fn f_single_line() {
        assert_eq!(single_line("plain"), "plain");
        assert_eq!(single_line("{\n  \"a\": 1\n}"), "{ \"a\": 1 }");
    }
}
