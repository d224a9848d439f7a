// src/process/clean.rs

use std::collections::HashMap;
use tracing::{debug, warn};

use crate::process::raw_table::RawTable;

/// Canonical name of the identity (player) column.
pub const PLAYER_COLUMN: &str = "player";

/// Section headers that can end up as the first column's label.
const SECTION_LABELS: &[&str] = &["Starters", "Reserves"];

/// Single-tier table keyed by flattened column labels.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Borrowed view of one row, addressed by column label.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    columns: &'a [String],
    cells: &'a [Option<String>],
}

impl<'a> RowView<'a> {
    /// Cell under `column`; `None` when the column is absent or the cell is
    /// missing. First match wins on duplicate labels.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.cells.get(idx)?.as_deref()
    }
}

impl NormalizedTable {
    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter().map(move |cells| RowView {
            columns: &self.columns,
            cells,
        })
    }

    /// Rename columns found in `mapping`; others keep their label.
    pub fn rename_columns(&mut self, mapping: &HashMap<String, &'static str>) {
        for col in &mut self.columns {
            if let Some(&to) = mapping.get(col.as_str()) {
                *col = to.to_string();
            }
        }
    }
}

/// Placeholder the scraper writes for a blank header cell
/// (`Unnamed: 0_level_0`), or the blank cell itself.
pub fn is_unnamed(label: &str) -> bool {
    label.trim().is_empty() || label.contains("Unnamed")
}

/// Flatten the header tiers into one label per column and name the identity
/// column [`PLAYER_COLUMN`].
///
/// Two tiers become `outer_inner`, or just `inner` under a placeholder outer
/// label. Best effort: a header that cannot be flattened is passed through
/// using its innermost tier verbatim, so nothing downstream matches and the
/// file ends up with no records.
pub fn clean(table: RawTable) -> NormalizedTable {
    let RawTable { headers, rows } = table;

    let columns = match flatten_headers(&headers) {
        Some(flat) => finish_labels(flat),
        None => {
            warn!(tiers = headers.len(), "header could not be flattened; leaving as-is");
            headers.last().cloned().unwrap_or_default()
        }
    };
    debug!(?columns, "cleaned header");

    NormalizedTable { columns, rows }
}

fn flatten_headers(headers: &[Vec<String>]) -> Option<Vec<String>> {
    match headers {
        [] => Some(Vec::new()),
        [single] => Some(single.clone()),
        [outer, inner] if outer.len() == inner.len() => Some(
            outer
                .iter()
                .zip(inner)
                .map(|(o, i)| {
                    if is_unnamed(o) {
                        i.clone()
                    } else {
                        format!("{}_{}", o, i)
                    }
                })
                .collect(),
        ),
        _ => None,
    }
}

fn finish_labels(flat: Vec<String>) -> Vec<String> {
    let mut labels: Vec<String> = flat.iter().map(|l| l.trim().to_string()).collect();
    if let Some(first) = labels.first_mut() {
        if SECTION_LABELS.contains(&first.as_str()) || is_unnamed(first) {
            *first = PLAYER_COLUMN.to_string();
        }
    }
    labels
}
