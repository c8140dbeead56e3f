//! muestra - Dataset preview normalization in Pure Rust
//!
//! Turns the loosely-structured `sample_data` payloads that dataset sellers
//! attach to their listings into a uniform `{columns, rows}` table, and
//! renders scalar values and metadata maps into display strings.
//!
//! # Design Principles
//!
//! 1. **Never reject** - Every payload maps to something renderable or to
//!    "no preview available"; malformed input degrades, it does not fail
//! 2. **Deterministic** - Pure functions over borrowed `serde_json::Value`s
//! 3. **One formatter** - Table cells and metadata grids share the same rules
//!
//! # Quick Start
//!
//! ```
//! use muestra::{format_value, render_grid, resolve};
//! use serde_json::json;
//!
//! let table = resolve(&json!([{"a": 1, "b": 2}, {"b": 3, "c": 4}])).unwrap();
//! assert_eq!(table.columns(), ["a", "b", "c"]);
//!
//! assert_eq!(format_value(&json!(true)), "Yes");
//!
//! let meta = json!({"data_source": "weather_api"});
//! let grid = render_grid(meta.as_object().unwrap());
//! assert_eq!(grid[0].label, "data source");
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::redundant_clone,
        clippy::needless_collect,
        clippy::too_many_lines
    )
)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// CLI module for command-line interface
#[cfg(feature = "cli")]
pub mod cli;
pub mod dataset;
pub mod error;
pub mod format;
pub mod grid;
pub mod payload;
pub mod table;
/// Plain-text table and grid views
pub mod view;

pub use dataset::{load_json, DatasetDetail, DatasetPreview};
pub use error::{Error, Result};
pub use format::{format_cell, format_value, PLACEHOLDER};
pub use grid::{render_grid, render_grid_opt, GridEntry};
pub use payload::{PayloadShape, PreviewPayload};
pub use table::{resolve, resolve_opt, CanonicalTable};
pub use view::{GridView, TableView, ViewConfig};
