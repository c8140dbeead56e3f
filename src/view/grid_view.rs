//! Grid view widget for label/value pairs
//!
//! Provides an expanded view of metadata, one block per entry.

use super::text::wrap_text;
use crate::grid::GridEntry;

/// Grid view for displaying label/value pairs
///
/// Each entry renders as its label on one line, the value wrapped and
/// indented below it, and a blank separator line. Multi-line values
/// (pretty-printed objects and arrays) keep their line structure.
///
/// # Example
///
/// ```
/// use muestra::{render_grid, GridView};
/// use serde_json::json;
///
/// let meta = json!({"source": "weather_api", "period": "2022-2023"});
/// let view = GridView::new(render_grid(meta.as_object().unwrap()), 80);
///
/// let lines = view.render_lines();
/// assert_eq!(lines[0], "source:");
/// assert_eq!(lines[1], "  weather_api");
/// ```
#[derive(Debug, Clone)]
pub struct GridView {
    /// Entries in display order
    entries: Vec<GridEntry>,
    /// Display width
    display_width: u16,
}

impl GridView {
    /// Create a new grid view
    pub fn new(entries: Vec<GridEntry>, width: u16) -> Self {
        Self {
            entries,
            display_width: width,
        }
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the entries
    pub fn entries(&self) -> &[GridEntry] {
        &self.entries
    }

    /// Get the first value shown under a label
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }

    /// Render the grid as lines
    pub fn render_lines(&self) -> Vec<String> {
        let max_width = self.display_width.saturating_sub(4) as usize; // margins
        let mut lines = Vec::new();

        for entry in &self.entries {
            lines.push(format!("{}:", entry.label));
            for line in wrap_text(&entry.value, max_width) {
                lines.push(format!("  {line}"));
            }
            lines.push(String::new());
        }

        // No separator after the last entry
        if lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }

        lines
    }

    /// Render as a single string
    pub fn render(&self) -> String {
        self.render_lines().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::render_grid;
    use serde_json::json;

    fn view_of(value: &serde_json::Value, width: u16) -> GridView {
        GridView::new(render_grid(value.as_object().unwrap()), width)
    }

    #[test]
    fn test_render_blocks() {
        let view = view_of(&json!({"a_b": 1, "c": true}), 80);
        assert_eq!(view.render_lines(), vec!["a b:", "  1", "", "c:", "  Yes"]);
    }

    #[test]
    fn test_value_wrapped() {
        let view = view_of(&json!({"note": "abcdefghij"}), 8);
        assert_eq!(view.render_lines(), vec!["note:", "  abcd", "  efgh", "  ij"]);
    }

    #[test]
    fn test_nested_value_keeps_lines() {
        let view = view_of(&json!({"stats": {"rows": 10}}), 80);
        assert_eq!(
            view.render_lines(),
            vec!["stats:", "  {", "    \"rows\": 10", "  }"]
        );
    }

    #[test]
    fn test_empty_value_line() {
        let view = view_of(&json!({"blank": ""}), 80);
        assert_eq!(view.render_lines(), vec!["blank:", "  "]);
    }

    #[test]
    fn test_value_of() {
        let view = view_of(&json!({"data_source": "x"}), 80);
        assert_eq!(view.value_of("data source"), Some("x"));
        assert_eq!(view.value_of("data_source"), None);
    }

    #[test]
    fn test_empty_grid() {
        let view = GridView::new(Vec::new(), 80);
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert!(view.render_lines().is_empty());
        assert_eq!(view.render(), "");
    }
}
