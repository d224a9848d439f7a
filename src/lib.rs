//! Box-score ingestion: turns scraped box-score CSV files into rows of the
//! `nba_game_basic` / `nba_game_advanced` tables.
//!
//! Flow per file: [`process::filename`] recovers the game metadata from the
//! file name, [`process::raw_table`] reads the two-tier CSV,
//! [`process::clean`] and [`process::columns`] normalise the header,
//! [`process::rows`] turns player rows into records and [`duck`] persists
//! them one transaction per file. [`load`] drives a whole directory.

pub mod config;
pub mod duck;
pub mod load;
pub mod process;
pub mod schema;

#[cfg(test)]
pub(crate) mod testutil;
