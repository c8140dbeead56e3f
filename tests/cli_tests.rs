#![allow(clippy::unwrap_used)] // Tests can use unwrap() for simplicity
#![cfg(feature = "cli")]
//! CLI Integration Tests
//!
//! Runs the `muestra` binary against payload files written to a temporary
//! directory.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn muestra() -> Command {
    Command::cargo_bin("muestra").unwrap()
}

fn write_file(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).unwrap();
    path
}

// ═══════════════════════════════════════════════════════════════════════════════
// preview
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_preview_matrix_payload() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "sample.json", "[[1, 2], [3, 4]]");

    muestra()
        .arg("preview")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Column 1 Column 2"));
}

#[test]
fn test_preview_empty_rows_reports_no_preview() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "sample.json", r#"{"columns": ["a"], "rows": []}"#);

    muestra()
        .arg("preview")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No preview available"));
}

#[test]
fn test_preview_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "sample.json", r#"[{"a": 1}, {"b": 2}]"#);

    muestra()
        .args(["preview", "--json"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"columns\""))
        .stdout(predicate::str::contains("null"));
}

#[test]
fn test_preview_rejects_zero_width() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "sample.json", "42");

    muestra()
        .args(["preview", "--width", "0"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_preview_missing_file() {
    muestra()
        .args(["preview", "/nonexistent/sample.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_preview_rejects_other_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "sample.csv", "a,b\n1,2\n");

    muestra()
        .arg("preview")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("csv"));
}

#[test]
fn test_preview_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "sample.json", "[{");

    muestra().arg("preview").arg(&path).assert().failure();
}

// ═══════════════════════════════════════════════════════════════════════════════
// grid
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_grid_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "meta.json", r#"{"data_source": "weather_api"}"#);

    muestra()
        .arg("grid")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("data source:\n  weather_api"));
}

#[test]
fn test_grid_requires_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "meta.json", "[1, 2, 3]");

    muestra()
        .arg("grid")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("metadata must be a JSON object"));
}

// ═══════════════════════════════════════════════════════════════════════════════
// show
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_show_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        &dir,
        "listing.json",
        r#"{
            "title": "Stock Prices",
            "category": "Finance",
            "row_count": 50000,
            "rating": 4.5,
            "review_count": 8,
            "sample_data": {"columns": ["ticker", "close"], "rows": [["ACME", 12.5]]},
            "metadata": {"update_frequency": "daily"}
        }"#,
    );

    muestra()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Stock Prices\n[Finance]"))
        .stdout(predicate::str::contains("Rows: 50,000"))
        .stdout(predicate::str::contains("Rating: 4.5 (8 reviews)"))
        .stdout(predicate::str::contains("ticker close"))
        .stdout(predicate::str::contains("update frequency:\n  daily"));
}

#[test]
fn test_show_without_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "listing.json", r#"{"title": "Empty"}"#);

    muestra()
        .arg("show")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No preview available"));
}

#[test]
fn test_show_requires_title() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(&dir, "listing.json", r#"{"category": "Finance"}"#);

    muestra().arg("show").arg(&path).assert().failure();
}
