//! Value formatting for display
//!
//! One set of rules shared by table cells and the metadata grid, so a value
//! reads the same wherever it shows up.

use serde_json::{Number, Value};

/// Placeholder rendered for null or absent values (U+2014 EM DASH).
pub const PLACEHOLDER: &str = "\u{2014}";

/// Format a JSON value as a display string
///
/// - `null` renders as [`PLACEHOLDER`]
/// - booleans render as `Yes` / `No`
/// - arrays and objects are pretty-printed with two-space indentation,
///   keys in insertion order
/// - numbers use their natural form; an integral float such as `10.0`
///   reads `10`
/// - strings are not quoted
///
/// # Example
/// ```
/// use muestra::format_value;
/// use serde_json::json;
///
/// assert_eq!(format_value(&json!(null)), "\u{2014}");
/// assert_eq!(format_value(&json!(false)), "No");
/// assert_eq!(format_value(&json!(2.5)), "2.5");
/// assert_eq!(format_value(&json!(10.0)), "10");
/// assert_eq!(format_value(&json!("plain")), "plain");
/// ```
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => PLACEHOLDER.to_string(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Array(_) | Value::Object(_) => pretty(value),
        Value::Number(n) => format_number(n),
        Value::String(s) => s.clone(),
    }
}

/// Format a cell that may be missing entirely
///
/// Ragged rows can be shorter than the column list; the gap reads the same
/// as an explicit null.
pub fn format_cell(value: Option<&Value>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), format_value)
}

/// Integers print as-is; floats go through `f64`'s `Display`, the same
/// rendering listing facts use for prices and sizes
fn format_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => f.to_string(),
        _ => n.to_string(),
    }
}

fn pretty(value: &Value) -> String {
    // Serializing a Value to a String cannot fail (string keys only).
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
