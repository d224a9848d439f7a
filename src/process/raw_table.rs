// src/process/raw_table.rs

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, io::Read, path::Path};

use crate::process::convert::is_missing_token;

/// Header rows in a scraped box-score CSV: category tier + stat tier.
pub const BOX_HEADER_ROWS: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Header tiers, outermost first. Box scores have two: the category row
    /// ("Basic Box Score Stats", "Unnamed: 0_level_0", ...) and the stat row.
    pub headers: Vec<Vec<String>>,
    /// Data rows, padded to the header width. `None` marks a missing cell.
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Number of columns, taken from the widest header tier.
    pub fn width(&self) -> usize {
        self.headers.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Read a delimited box-score file whose first `header_rows` records are
/// header tiers.
pub fn read_box_table<P: AsRef<Path>>(path: P, header_rows: usize) -> Result<RawTable> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_box_table(file, header_rows)
        .with_context(|| format!("reading table from {}", path.display()))
}

pub fn parse_box_table<R: Read>(reader: R, header_rows: usize) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // section rows and footers may be short
        .from_reader(reader);

    let mut headers: Vec<Vec<String>> = Vec::with_capacity(header_rows);
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;

        if headers.len() < header_rows {
            headers.push(record.iter().map(str::to_string).collect());
            continue;
        }

        let row = record
            .iter()
            .map(|cell| {
                if is_missing_token(cell) {
                    None
                } else {
                    Some(cell.to_string())
                }
            })
            .collect();
        rows.push(row);
    }

    if headers.len() < header_rows {
        bail!(
            "expected {} header rows, found {}",
            header_rows,
            headers.len()
        );
    }

    let mut table = RawTable { headers, rows };
    let width = table.width();
    for row in &mut table.rows {
        if row.len() < width {
            row.resize(width, None);
        }
    }
    Ok(table)
}
