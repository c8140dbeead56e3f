//! View configuration

use crate::error::{Error, Result};

/// Options for text rendering
///
/// # Example
///
/// ```
/// use muestra::ViewConfig;
///
/// let config = ViewConfig::default().width(120).max_column_width(30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Total display width in characters
    pub width: u16,
    /// Upper bound for any single column
    pub max_column_width: usize,
    /// Rows sampled when sizing columns
    pub sample_rows: usize,
    /// Whether to emit the header line
    pub show_header: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 80,
            max_column_width: 40,
            sample_rows: 20,
            show_header: true,
        }
    }
}

impl ViewConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total display width
    #[must_use]
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the per-column width cap
    #[must_use]
    pub fn max_column_width(mut self, max: usize) -> Self {
        self.max_column_width = max;
        self
    }

    /// Set the number of rows sampled for column sizing
    #[must_use]
    pub fn sample_rows(mut self, rows: usize) -> Self {
        self.sample_rows = rows;
        self
    }

    /// Toggle the header line
    #[must_use]
    pub fn show_header(mut self, show: bool) -> Self {
        self.show_header = show;
        self
    }

    /// Check the config is usable
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a zero width or a column cap
    /// below 3 characters (room for one character plus `..`).
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(Error::invalid_config("width must be positive"));
        }
        if self.max_column_width < 3 {
            return Err(Error::invalid_config(format!(
                "max_column_width must be at least 3, got {}",
                self.max_column_width
            )));
        }
        Ok(())
    }
}
