//! Plain-text views over resolved previews
//!
//! Renders a [`CanonicalTable`](crate::CanonicalTable) as aligned columns and
//! a metadata grid as wrapped label/value blocks. Output is a list of lines
//! and the caller decides where they go.
//!
//! # Architecture
//!
//! - `ViewConfig` - Width and sampling options shared by the views
//! - `TableView` - Column-aligned table with truncation and search
//! - `GridView` - Label/value blocks with wrapping
//!
//! # Example
//!
//! ```
//! use muestra::{resolve, TableView, ViewConfig};
//! use serde_json::json;
//!
//! let table = resolve(&json!([{"city": "Oslo", "temp": -3}])).unwrap();
//! let view = TableView::new(&table, ViewConfig::default());
//! assert!(view.render_header_line().contains("city"));
//! ```

mod config;
mod grid_view;
mod table_view;
mod text;

pub use config::ViewConfig;
pub use grid_view::GridView;
pub use table_view::TableView;
pub use text::{display_width, truncate_string, wrap_text};
