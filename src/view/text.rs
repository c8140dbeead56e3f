//! Text measurement, truncation and wrapping
//!
//! Widths are terminal columns (`unicode-width`), so CJK and other wide
//! characters count double.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculate the display width of a string
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within a maximum display width
///
/// Adds `..` if truncation occurs. Below a width of 3 there is no room for
/// the marker and the string is simply cut.
///
/// # Arguments
/// * `s` - The string to truncate
/// * `max_width` - Maximum display width in columns
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }

    if max_width < 3 {
        return take_width(s, max_width);
    }

    let mut result = take_width(s, max_width - 2);
    result.push_str("..");
    result
}

/// Longest prefix of `s` whose display width fits in `budget`
fn take_width(s: &str, budget: usize) -> String {
    let mut used = 0;
    s.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= budget
        })
        .collect()
}

/// Wrap text to fit within a maximum display width
///
/// Existing line breaks are kept; long lines are split hard at the width.
/// Always returns at least one line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for line in text.lines() {
        if line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        let mut used = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(c);
            used += w;
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Pad a string with trailing spaces up to a display width
pub(crate) fn pad_to(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - w);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - w));
    out
}
