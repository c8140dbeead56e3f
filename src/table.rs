//! Canonical table model and shape resolution
//!
//! [`resolve`] converts any preview payload into a [`CanonicalTable`], or
//! reports that no preview is available. It never fails.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::format::format_value;
use crate::payload::{PayloadShape, PreviewPayload, COLUMNS_KEY, ROWS_KEY};

/// Column header used for the key column of a single-object payload
pub const FIELD_COLUMN: &str = "Field";

/// Column header used for value columns of single-object and scalar payloads
pub const VALUE_COLUMN: &str = "Value";

/// Normalized `{columns, rows}` table
///
/// Cells keep their raw JSON values; formatting happens at render time.
/// Every row has one cell per column, except for array-of-array payloads
/// whose later rows pass through ragged.
///
/// Serializes as `{"columns": [...], "rows": [[...], ...]}`, which is itself
/// a tabular payload: resolving it again yields the same table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl CanonicalTable {
    /// Create a table from columns and rows
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self { columns, rows }
    }

    /// Get the column names
    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the rows
    #[inline]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Get a single row
    #[inline]
    pub fn row(&self, index: usize) -> Option<&[Value]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Get a single cell; `None` past the end of a ragged row
    pub fn cell(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get the column count
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the row count
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check whether any row's length differs from the column count
    pub fn is_ragged(&self) -> bool {
        self.rows.iter().any(|r| r.len() != self.columns.len())
    }

    /// Split into columns and rows
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<Value>>) {
        (self.columns, self.rows)
    }

    /// Re-encode as a tabular JSON payload
    pub fn to_payload(&self) -> Value {
        let columns = self.columns.iter().cloned().map(Value::String).collect();
        let rows = self
            .rows
            .iter()
            .map(|r| Value::Array(r.clone()))
            .collect();

        let mut map = Map::with_capacity(2);
        map.insert(COLUMNS_KEY.to_string(), Value::Array(columns));
        map.insert(ROWS_KEY.to_string(), Value::Array(rows));
        Value::Object(map)
    }
}

/// Resolve a preview payload into a canonical table
///
/// Returns `None` ("no preview available") for `null`, for an empty array,
/// and for tabular, row-list or matrix payloads with zero rows. The empty
/// object is the one input that resolves to a table without rows.
///
/// # Example
/// ```
/// use muestra::resolve;
/// use serde_json::json;
///
/// let table = resolve(&json!([[1, 2, 3], [4, 5]])).unwrap();
/// assert_eq!(table.columns(), ["Column 1", "Column 2", "Column 3"]);
/// assert_eq!(table.rows()[1], vec![json!(4), json!(5)]);
///
/// assert!(resolve(&json!({"columns": ["a"], "rows": []})).is_none());
/// ```
pub fn resolve(payload: &Value) -> Option<CanonicalTable> {
    if payload.is_null() || payload.as_array().is_some_and(Vec::is_empty) {
        tracing::debug!("no preview: payload absent or empty");
        return None;
    }

    let classified = PreviewPayload::classify(payload);
    if classified.row_count() == Some(0) {
        tracing::debug!(shape = %classified.shape(), "no preview: zero rows");
        return None;
    }

    let table = match classified {
        PreviewPayload::Tabular { columns, rows } => resolve_tabular(columns, rows),
        PreviewPayload::RowList(rows) => resolve_row_list(rows),
        PreviewPayload::MatrixList(rows) => resolve_matrix_list(rows),
        PreviewPayload::SingleObject(map) => resolve_single_object(map),
        PreviewPayload::Scalar(value) => {
            tracing::trace!(payload = %value, "unrecognized payload, using scalar fallback");
            resolve_scalar(value)
        }
    };

    tracing::debug!(
        shape = %classified.shape(),
        columns = table.column_count(),
        rows = table.row_count(),
        "resolved preview payload"
    );
    Some(table)
}

/// Resolve an optional payload; absence means no preview
pub fn resolve_opt(payload: Option<&Value>) -> Option<CanonicalTable> {
    payload.and_then(resolve)
}

/// Classify and resolve in one step, also reporting the detected shape
pub fn resolve_with_shape(payload: &Value) -> (PayloadShape, Option<CanonicalTable>) {
    (PreviewPayload::classify(payload).shape(), resolve(payload))
}

/// Synthesized `Column 1..N` headers
fn numbered_columns(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("Column {i}")).collect()
}

fn resolve_tabular(columns: &Value, rows: &[Value]) -> CanonicalTable {
    let explicit: Vec<String> = columns
        .as_array()
        .map(|cols| {
            cols.iter()
                .map(|c| match c {
                    Value::String(s) => s.clone(),
                    other => format_value(other),
                })
                .collect()
        })
        .unwrap_or_default();

    if explicit.is_empty() {
        let width = rows.first().map_or(0, row_width);
        let rows = rows.iter().map(positional_row).collect();
        return CanonicalTable::new(numbered_columns(width), rows);
    }

    let rows = rows
        .iter()
        .map(|row| match row {
            Value::Object(map) => project(map, &explicit),
            other => positional_row(other),
        })
        .collect();
    CanonicalTable::new(explicit, rows)
}

/// Number of cells a row contributes when no column names are given
fn row_width(row: &Value) -> usize {
    match row {
        Value::Array(cells) => cells.len(),
        Value::Object(map) => map.len(),
        _ => 1,
    }
}

/// A row taken as-is: arrays pass through, objects yield their values in
/// order, anything else becomes a one-cell row
fn positional_row(row: &Value) -> Vec<Value> {
    match row {
        Value::Array(cells) => cells.clone(),
        Value::Object(map) => map.values().cloned().collect(),
        other => vec![other.clone()],
    }
}

/// Project a row object onto a column list; missing keys become null
fn project<S: AsRef<str>>(map: &Map<String, Value>, columns: &[S]) -> Vec<Value> {
    columns
        .iter()
        .map(|c| map.get(c.as_ref()).cloned().unwrap_or(Value::Null))
        .collect()
}

fn resolve_row_list(rows: &[Value]) -> CanonicalTable {
    let mut keys: IndexSet<&str> = IndexSet::new();
    for row in rows {
        if let Value::Object(map) = row {
            keys.extend(map.keys().map(String::as_str));
        }
    }
    let columns: Vec<String> = keys.iter().map(|k| (*k).to_string()).collect();

    let empty = Map::new();
    let rows = rows
        .iter()
        .map(|row| project(row.as_object().unwrap_or(&empty), &columns))
        .collect();
    CanonicalTable::new(columns, rows)
}

fn resolve_matrix_list(rows: &[Value]) -> CanonicalTable {
    let width = rows.first().map_or(0, row_width);
    let rows = rows.iter().map(positional_row).collect();
    CanonicalTable::new(numbered_columns(width), rows)
}

fn resolve_single_object(map: &Map<String, Value>) -> CanonicalTable {
    let rows = map
        .iter()
        .map(|(key, value)| vec![Value::String(key.clone()), Value::String(format_value(value))])
        .collect();
    CanonicalTable::new(vec![FIELD_COLUMN.to_string(), VALUE_COLUMN.to_string()], rows)
}

fn resolve_scalar(value: &Value) -> CanonicalTable {
    CanonicalTable::new(vec![VALUE_COLUMN.to_string()], vec![vec![value.clone()]])
}
