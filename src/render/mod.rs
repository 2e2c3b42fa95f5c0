//! Markdown rendering of pack indexes.

pub mod entity_index;
pub mod map;

use crate::pack::PLACEHOLDER;

/// Makes a value safe to place inside a Markdown table cell.
///
/// Line breaks collapse to single spaces and pipes are escaped, so a
/// multi-line YAML value cannot split the row.
fn cell(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

/// Cell text for an optional field, using the placeholder when absent.
fn optional_cell(value: Option<&str>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), cell)
}

/// Formats one table row from already-escaped cells.
fn row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}
