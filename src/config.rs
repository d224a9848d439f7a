// src/config.rs

use std::{env, path::PathBuf};

pub const DATA_DIR_VAR: &str = "BOXLOAD_DATA_DIR";
pub const DB_PATH_VAR: &str = "BOXLOAD_DB_PATH";

const DEFAULT_DATA_DIR: &str = "./nba_data";
const DEFAULT_DB_PATH: &str = "nba_stats.duckdb";

/// Where to read box-score files from and which database to write into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            db_path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl LoaderConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; empty values fall back to
    /// the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            PathBuf::from(
                lookup(key)
                    .filter(|v| !v.trim().is_empty())
                    .unwrap_or_else(|| default.to_string()),
            )
        };
        Self {
            data_dir: var(DATA_DIR_VAR, DEFAULT_DATA_DIR),
            db_path: var(DB_PATH_VAR, DEFAULT_DB_PATH),
        }
    }

    /// The first positional argument, if any, replaces the data directory.
    pub fn with_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        if let Some(dir) = args.into_iter().next() {
            self.data_dir = PathBuf::from(dir);
        }
        self
    }
}
