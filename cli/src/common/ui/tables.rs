//! # Magnum Table Output (`common::ui::tables`)
//!
//! File: cli/src/common/ui/tables.rs
//!
//! ## Overview
//!
//! Renders resource records as bordered, left-aligned text tables using
//! `comfy-table`:
//!
//! - **`print_list`**: One row per record, one column per declared field, rows
//!   sorted by the first column. Used by every `<kind>-list` command.
//! - **`print_dict`**: A two-column `Property | Value` table of a single record,
//!   sorted by property name. Used by `show` and `create`.
//!
//! ```text
//! +--------------------------------------+------+
//! | uuid                                 | name |
//! +--------------------------------------+------+
//! | 0b5e0fd7-4a6b-4ba5-a3a4-54a5f8b8a2c1 | web  |
//! +--------------------------------------+------+
//! ```
//!
//! Cells are rendered from JSON values by `format_value`. Values containing
//! newlines span several table lines.
//!
use crate::core::resource::{Attributes, Resource};
use comfy_table::{presets::ASCII_FULL_CONDENSED, Cell, Table, TableComponent};
use serde_json::Value;
use std::io::{self, Write};

/// Fields rendered as a comma-joined list instead of JSON.
const LIST_FIELDS: &[&str] = &["versions"];

/// Prints `resources` as a table with exactly `columns`, sorted by the first column.
pub fn print_list<W: Write>(out: &mut W, resources: &[Resource], columns: &[&str]) -> io::Result<()> {
    let mut rows: Vec<Vec<String>> = resources
        .iter()
        .map(|resource| {
            columns
                .iter()
                .map(|column| {
                    resource
                        .field(column)
                        .map(|value| format_value(column, value))
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect();
    rows.sort_by(|a, b| a.first().cmp(&b.first()));

    let mut table = new_table();
    table.set_header(columns.to_vec());
    for row in rows {
        table.add_row(row.into_iter().map(Cell::new).collect::<Vec<_>>());
    }
    writeln!(out, "{}", table)
}

/// Prints a single record as `Property | Value` rows, sorted by property.
pub fn print_dict<W: Write>(out: &mut W, info: &Attributes) -> io::Result<()> {
    let mut rows: Vec<(&String, String)> = info
        .iter()
        .map(|(key, value)| (key, format_value(key, value)))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let mut table = new_table();
    table.set_header(vec!["Property", "Value"]);
    for (key, value) in rows {
        table.add_row(vec![Cell::new(key), Cell::new(value)]);
    }
    writeln!(out, "{}", table)
}

/// Text shown in a table cell for `value`.
pub fn format_value(field: &str, value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) if LIST_FIELDS.contains(&field) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// ASCII borders, no lines between data rows, `-` under the header.
fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL_CONDENSED)
        .set_style(TableComponent::HeaderLines, '-')
        .set_style(TableComponent::LeftHeaderIntersection, '+')
        .set_style(TableComponent::MiddleHeaderIntersections, '+')
        .set_style(TableComponent::RightHeaderIntersection, '+');
    table
}
