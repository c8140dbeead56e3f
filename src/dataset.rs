//! Dataset detail documents as served by the marketplace API
//!
//! A listing carries two free-form fields next to its typed attributes:
//! `sample_data` (a preview payload of any shape) and `metadata` (a flat
//! mapping). [`DatasetDetail::preview`] runs both through the normalizer.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::grid::{render_grid_opt, GridEntry};
use crate::table::{resolve_opt, CanonicalTable};

/// A dataset listing
///
/// Unknown fields are ignored so newer API responses still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDetail {
    /// Listing identifier
    #[serde(default)]
    pub id: u64,
    /// Title
    pub title: String,
    /// Long-form description
    #[serde(default)]
    pub description: String,
    /// Category, if any
    #[serde(default)]
    pub category: Option<String>,
    /// Free-form tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Price in dollars
    #[serde(default)]
    pub price: f64,
    /// Size in megabytes
    #[serde(default)]
    pub size_mb: f64,
    /// Number of rows in the full dataset
    #[serde(default)]
    pub row_count: Option<u64>,
    /// Number of columns in the full dataset
    #[serde(default)]
    pub column_count: Option<u64>,
    /// File format (CSV, JSON, Parquet, ...)
    #[serde(default)]
    pub format: Option<String>,
    /// Preview payload, any shape
    #[serde(default)]
    pub sample_data: Option<Value>,
    /// Additional metadata
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    /// Download counter
    #[serde(default)]
    pub download_count: u64,
    /// Average rating
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews behind the rating
    #[serde(default)]
    pub review_count: u64,
}

/// Normalized preview of a listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetPreview {
    /// Sample rows, or `None` when no preview is available
    pub table: Option<CanonicalTable>,
    /// Metadata rendered as label/value pairs
    pub grid: Vec<GridEntry>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl DatasetDetail {
    /// Decode a listing from a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not a valid listing.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a listing from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Json`]
    /// if it is not a valid listing.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let value = load_json(path)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Normalize the sample data and metadata
    pub fn preview(&self) -> DatasetPreview {
        DatasetPreview {
            table: resolve_opt(self.sample_data.as_ref()),
            grid: render_grid_opt(self.metadata.as_ref()),
        }
    }

    /// Summary facts for the listing header, in display order
    ///
    /// Row and column counts are left out when unknown or zero.
    pub fn facts(&self) -> Vec<GridEntry> {
        let mut facts = vec![
            GridEntry::new("Size", format!("{} MB", self.size_mb)),
            GridEntry::new("Format", self.format.as_deref().unwrap_or("N/A")),
        ];

        if let Some(rows) = self.row_count.filter(|&n| n > 0) {
            facts.push(GridEntry::new("Rows", group_thousands(rows)));
        }
        if let Some(cols) = self.column_count.filter(|&n| n > 0) {
            facts.push(GridEntry::new("Columns", cols.to_string()));
        }

        facts.push(GridEntry::new(
            "Rating",
            format!("{:.1} ({} reviews)", self.rating, self.review_count),
        ));
        facts.push(GridEntry::new(
            "Downloads",
            group_thousands(self.download_count),
        ));
        facts.push(GridEntry::new("Price", format!("${}", self.price)));
        facts
    }
}

/// Read and decode a JSON document
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] for a non-JSON extension,
/// [`Error::Io`] if the file cannot be read and [`Error::Json`] if it does
/// not decode.
pub fn load_json(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        None | Some("json") => {}
        Some(ext) => return Err(Error::unsupported_format(ext)),
    }

    let text = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
    let value = serde_json::from_str(&text)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "loaded JSON document");
    Ok(value)
}

/// Format an integer with comma thousands separators
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
