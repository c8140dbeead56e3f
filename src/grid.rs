//! Metadata key/value grid
//!
//! Metadata maps are already "normalized" (a flat mapping), so they skip the
//! shape resolver and go straight to label/value pairs.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::format::format_value;

/// One row of a key/value grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridEntry {
    /// Display label
    pub label: String,
    /// Formatted value
    pub value: String,
}

impl GridEntry {
    /// Create an entry from an already formatted label and value
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Render a metadata map as label/value pairs
///
/// Labels are the keys with underscores shown as spaces; values go through
/// [`format_value`]. Entries come out in the map's insertion order.
///
/// # Example
/// ```
/// use muestra::render_grid;
/// use serde_json::json;
///
/// let meta = json!({"source": "reviews", "is_verified": true});
/// let grid = render_grid(meta.as_object().unwrap());
/// assert_eq!(grid[1].label, "is verified");
/// assert_eq!(grid[1].value, "Yes");
/// ```
pub fn render_grid(metadata: &Map<String, Value>) -> Vec<GridEntry> {
    metadata
        .iter()
        .map(|(key, value)| GridEntry {
            label: key.replace('_', " "),
            value: format_value(value),
        })
        .collect()
}

/// Render an optional metadata map; absence renders nothing
pub fn render_grid_opt(metadata: Option<&Map<String, Value>>) -> Vec<GridEntry> {
    metadata.map(render_grid).unwrap_or_default()
}
