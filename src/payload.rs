//! Preview payload classification
//!
//! Sellers attach sample data in whatever shape their tooling produced: a
//! columnar `{columns, rows}` dump, a list of row objects, an array of
//! arrays, a single record, or just a bare value. [`PreviewPayload`] is a
//! borrowed, classified view over the raw JSON with one variant per shape.
//!
//! Classification runs in a fixed priority order and the first match wins:
//!
//! 1. `Tabular` - object with both `columns` and `rows`, `rows` an array
//! 2. `RowList` - non-empty array whose first element is an object
//! 3. `MatrixList` - non-empty array whose first element is an array
//! 4. `SingleObject` - any other object
//! 5. `Scalar` - everything else
//!
//! The order matters: an object holding `columns`, `rows` and other keys is
//! tabular, not a single record.

use std::fmt;

use serde_json::{Map, Value};

/// Field name carrying column names in a tabular payload
pub const COLUMNS_KEY: &str = "columns";

/// Field name carrying row data in a tabular payload
pub const ROWS_KEY: &str = "rows";

/// A classified preview payload borrowing from the raw JSON value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PreviewPayload<'a> {
    /// Columnar dump: explicit column list plus positional rows
    Tabular {
        /// The raw `columns` field (may be empty or not an array)
        columns: &'a Value,
        /// The `rows` array
        rows: &'a [Value],
    },
    /// Array of row objects, possibly with differing key sets
    RowList(&'a [Value]),
    /// Array of arrays
    MatrixList(&'a [Value]),
    /// One record, rendered as field/value pairs
    SingleObject(&'a Map<String, Value>),
    /// Bare primitive or unrecognized shape
    Scalar(&'a Value),
}

/// Shape tag for a [`PreviewPayload`], without the borrowed data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadShape {
    /// See [`PreviewPayload::Tabular`]
    Tabular,
    /// See [`PreviewPayload::RowList`]
    RowList,
    /// See [`PreviewPayload::MatrixList`]
    MatrixList,
    /// See [`PreviewPayload::SingleObject`]
    SingleObject,
    /// See [`PreviewPayload::Scalar`]
    Scalar,
}

impl<'a> PreviewPayload<'a> {
    /// Classify a raw JSON value
    ///
    /// Never fails: anything that matches no structured shape is `Scalar`.
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => match (map.get(COLUMNS_KEY), map.get(ROWS_KEY)) {
                (Some(columns), Some(Value::Array(rows))) => Self::Tabular { columns, rows },
                _ => Self::SingleObject(map),
            },
            Value::Array(items) => match items.first() {
                Some(Value::Object(_)) => Self::RowList(items),
                Some(Value::Array(_)) => Self::MatrixList(items),
                _ => Self::Scalar(value),
            },
            _ => Self::Scalar(value),
        }
    }

    /// Get the shape tag
    pub fn shape(&self) -> PayloadShape {
        match self {
            Self::Tabular { .. } => PayloadShape::Tabular,
            Self::RowList(_) => PayloadShape::RowList,
            Self::MatrixList(_) => PayloadShape::MatrixList,
            Self::SingleObject(_) => PayloadShape::SingleObject,
            Self::Scalar(_) => PayloadShape::Scalar,
        }
    }

    /// Number of source rows for row-bearing shapes
    ///
    /// `None` for `SingleObject` and `Scalar`, which always produce a table.
    pub fn row_count(&self) -> Option<usize> {
        match self {
            Self::Tabular { rows, .. } => Some(rows.len()),
            Self::RowList(rows) | Self::MatrixList(rows) => Some(rows.len()),
            Self::SingleObject(_) | Self::Scalar(_) => None,
        }
    }
}

impl PayloadShape {
    /// Get the shape name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tabular => "tabular",
            Self::RowList => "row_list",
            Self::MatrixList => "matrix_list",
            Self::SingleObject => "single_object",
            Self::Scalar => "scalar",
        }
    }
}

impl fmt::Display for PayloadShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
