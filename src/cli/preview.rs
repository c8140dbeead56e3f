//! Preview, grid and listing commands.

use std::io::Write;
use std::path::Path;

use crate::dataset::{load_json, DatasetDetail};
use crate::grid::render_grid;
use crate::table::{resolve_with_shape, CanonicalTable};
use crate::view::{GridView, TableView, ViewConfig};
use crate::Error;

/// Message shown when a payload yields no table.
pub(crate) const NO_PREVIEW: &str = "No preview available";

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> crate::Result<()> {
    for line in lines {
        writeln!(out, "{line}").map_err(Error::io_no_path)?;
    }
    Ok(())
}

fn write_table<W: Write>(
    table: Option<&CanonicalTable>,
    config: ViewConfig,
    out: &mut W,
) -> crate::Result<()> {
    match table {
        Some(table) => write_lines(out, &TableView::new(table, config).render_lines()),
        None => writeln!(out, "{NO_PREVIEW}").map_err(Error::io_no_path),
    }
}

/// Render a raw sample_data payload.
pub(crate) fn cmd_preview<W: Write>(
    path: &Path,
    json: bool,
    config: ViewConfig,
    out: &mut W,
) -> crate::Result<()> {
    let payload = load_json(path)?;
    let (shape, table) = resolve_with_shape(&payload);
    tracing::info!(path = %path.display(), %shape, "previewing payload");

    if json {
        let text = serde_json::to_string_pretty(&table)?;
        return writeln!(out, "{text}").map_err(Error::io_no_path);
    }

    write_table(table.as_ref(), config, out)
}

/// Render a metadata object.
pub(crate) fn cmd_grid<W: Write>(path: &Path, width: u16, out: &mut W) -> crate::Result<()> {
    let value = load_json(path)?;
    let metadata = value
        .as_object()
        .ok_or_else(|| Error::parse(format!("{}: metadata must be a JSON object", path.display())))?;

    write_lines(out, &GridView::new(render_grid(metadata), width).render_lines())
}

/// Render a full listing: header, facts, preview table and metadata.
pub(crate) fn cmd_show<W: Write>(path: &Path, config: ViewConfig, out: &mut W) -> crate::Result<()> {
    let detail = DatasetDetail::from_path(path)?;
    let preview = detail.preview();

    let mut lines = vec![detail.title.clone()];
    if let Some(category) = &detail.category {
        lines.push(format!("[{category}]"));
    }
    lines.push(String::new());
    if !detail.description.is_empty() {
        lines.push(detail.description.clone());
        lines.push(String::new());
    }
    for fact in detail.facts() {
        lines.push(format!("{}: {}", fact.label, fact.value));
    }
    if !detail.tags.is_empty() {
        lines.push(format!("Tags: {}", detail.tags.join(", ")));
    }
    lines.push(String::new());
    lines.push("Sample Data".to_string());
    write_lines(out, &lines)?;
    write_table(preview.table.as_ref(), config, out)?;

    if !preview.grid.is_empty() {
        writeln!(out).map_err(Error::io_no_path)?;
        writeln!(out, "Metadata").map_err(Error::io_no_path)?;
        write_lines(out, &GridView::new(preview.grid, config.width).render_lines())?;
    }
    Ok(())
}
