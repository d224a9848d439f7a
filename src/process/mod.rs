// src/process/mod.rs

pub mod clean;
pub mod columns;
pub mod convert;
pub mod filename;
pub mod raw_table;
pub mod rows;

use anyhow::Result;
use std::path::Path;

use crate::schema::StatType;
use clean::NormalizedTable;
use raw_table::{RawTable, BOX_HEADER_ROWS};

pub use filename::{parse_filename, BoxFile, FilenameError};

/// Clean a raw table and rename its columns to the stored names for
/// `stat_type`.
pub fn prepare_table(raw: RawTable, stat_type: StatType) -> NormalizedTable {
    let mut table = clean::clean(raw);
    let mapping = columns::map_columns(&table.columns, stat_type);
    table.rename_columns(&mapping);
    table
}

/// Read and prepare one box-score file.
pub fn load_box_table<P: AsRef<Path>>(path: P, stat_type: StatType) -> Result<NormalizedTable> {
    let raw = raw_table::read_box_table(path, BOX_HEADER_ROWS)?;
    Ok(prepare_table(raw, stat_type))
}
