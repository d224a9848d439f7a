// src/load.rs

use anyhow::{bail, Context, Result};
use glob::{glob, Pattern};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::{
    duck::RecordSink,
    process::{
        filename::{parse_filename, BoxFile, FilenameError, BOX_FILE_EXTENSION},
        load_box_table, rows,
    },
    schema::StatType,
};

const PROGRESS_EVERY: usize = 100;

/// Why a single file was not loaded. None of these stop the run.
#[derive(Debug, Error)]
pub enum FileFailure {
    #[error("unparseable filename: {0}")]
    Filename(#[from] FilenameError),
    #[error("unknown stat type `{0}`")]
    UnknownStatType(String),
    #[error("no player rows")]
    NoData,
    #[error(transparent)]
    Processing(#[from] anyhow::Error),
}

/// Outcome of one successfully loaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedFile {
    pub stat_type: StatType,
    pub period: String,
    pub records: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub successful_files: usize,
    pub failed_files: usize,
    pub total_records: usize,
}

impl LoadSummary {
    pub fn total_files(&self) -> usize {
        self.successful_files + self.failed_files
    }

    /// Percentage of files loaded, `None` when nothing was attempted.
    pub fn success_rate(&self) -> Option<f64> {
        match self.total_files() {
            0 => None,
            n => Some(self.successful_files as f64 / n as f64 * 100.0),
        }
    }

    pub fn log(&self) {
        let rate = self
            .success_rate()
            .map(|r| format!("{:.1}%", r))
            .unwrap_or_else(|| "N/A".to_string());
        info!(
            successful = self.successful_files,
            failed = self.failed_files,
            records = self.total_records,
            "load complete: {} files ok, {} failed, {} records, success rate {}",
            self.successful_files,
            self.failed_files,
            self.total_records,
            rate
        );
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Load one box-score file into `sink`.
pub fn load_file<S: RecordSink>(path: &Path, sink: &mut S) -> Result<LoadedFile, FileFailure> {
    let file = parse_filename(&file_name(path))?;
    load_parsed(path, file, sink)
}

/// Load a file whose name has already been decoded into `file`.
#[instrument(skip_all, fields(file = %file.source_filename))]
pub fn load_parsed<S: RecordSink>(
    path: &Path,
    file: BoxFile,
    sink: &mut S,
) -> Result<LoadedFile, FileFailure> {
    let stat_type = file
        .stat_kind()
        .ok_or_else(|| FileFailure::UnknownStatType(file.stat_type.clone()))?;

    let table = load_box_table(path, stat_type)?;
    debug!(stat = stat_type.as_str(), rows = table.rows.len(), "table prepared");
    let written = match stat_type {
        StatType::Basic => {
            let records = rows::basic_records(&table, &file);
            if records.is_empty() {
                return Err(FileFailure::NoData);
            }
            sink.write_batch(&records)?
        }
        StatType::Advanced => {
            let records = rows::advanced_records(&table, &file);
            if records.is_empty() {
                return Err(FileFailure::NoData);
            }
            sink.write_batch(&records)?
        }
    };

    match stat_type {
        StatType::Basic => info!(
            "loaded {} basic: {} ({} records)",
            file.period, file.source_filename, written
        ),
        StatType::Advanced => {
            info!("loaded advanced: {} ({} records)", file.source_filename, written)
        }
    }
    Ok(LoadedFile {
        stat_type,
        period: file.period,
        records: written,
    })
}

/// Box-score files directly under `dir`, in name order.
pub fn box_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&dir.display().to_string()),
        BOX_FILE_EXTENSION
    );
    let mut files = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("bad glob pattern {}", pattern))? {
        match entry {
            Ok(p) if p.is_file() => files.push(p),
            Ok(_) => {}
            Err(e) => warn!("skipping unreadable entry: {}", e),
        }
    }
    files.sort();
    Ok(files)
}

/// Progress is reported at every hundredth file index, starting at 0, and
/// only for files whose name parsed.
pub fn progress_due(index: usize) -> bool {
    index % PROGRESS_EVERY == 0
}

/// Load every box-score file in `dir`. Individual file failures are logged
/// and counted; only a missing or unreadable directory is an error.
pub fn load_all<S: RecordSink>(dir: &Path, sink: &mut S) -> Result<LoadSummary> {
    if !dir.is_dir() {
        bail!("data directory {} does not exist", dir.display());
    }
    let files = box_files(dir)?;
    info!("found {} box-score files in {}", files.len(), dir.display());

    let mut summary = LoadSummary::default();
    for (i, path) in files.iter().enumerate() {
        let file = match parse_filename(&file_name(path)) {
            Ok(file) => file,
            Err(e) => {
                summary.failed_files += 1;
                warn!("could not parse filename {}: {}", path.display(), e);
                continue;
            }
        };
        if progress_due(i) {
            info!("processed {}/{} files", i, files.len());
        }

        match load_parsed(path, file, sink) {
            Ok(loaded) => {
                summary.successful_files += 1;
                summary.total_records += loaded.records;
            }
            Err(e) => {
                summary.failed_files += 1;
                warn!("failed to load {}: {}", path.display(), e);
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        duck::{DuckStore, StatRecord, ADVANCED_TABLE, BASIC_TABLE},
        testutil::{
            init_test_logging, write_fixture, LogCapture, ADVANCED_CSV, ADVANCED_FILE, BASIC_CSV,
            BASIC_FILE,
        },
    };
    use tempfile::tempdir;

    fn store() -> Result<DuckStore> {
        let store = DuckStore::open_in_memory()?;
        store.create_tables()?;
        Ok(store)
    }

    /// Sink that refuses every batch.
    struct RejectingSink;

    impl RecordSink for RejectingSink {
        fn write_batch<R: StatRecord>(&mut self, _records: &[R]) -> Result<usize> {
            bail!("database unavailable")
        }
    }

    #[test]
    fn good_and_bad_filenames() -> Result<()> {
        init_test_logging();
        let dir = tempdir()?;
        write_fixture(dir.path(), BASIC_FILE, BASIC_CSV)?;
        write_fixture(dir.path(), "notes.csv", BASIC_CSV)?;

        let mut store = store()?;
        let summary = load_all(dir.path(), &mut store)?;
        assert_eq!(
            summary,
            LoadSummary {
                successful_files: 1,
                failed_files: 1,
                total_records: 4,
            }
        );
        assert_eq!(summary.success_rate(), Some(50.0));
        assert_eq!(store.count_rows(BASIC_TABLE)?, 4);
        Ok(())
    }

    #[test]
    fn routes_by_stat_type() -> Result<()> {
        let dir = tempdir()?;
        write_fixture(dir.path(), BASIC_FILE, BASIC_CSV)?;
        write_fixture(dir.path(), ADVANCED_FILE, ADVANCED_CSV)?;
        // not picked up
        write_fixture(dir.path(), "readme.txt", "hello")?;

        let mut store = store()?;
        let summary = load_all(dir.path(), &mut store)?;
        assert_eq!(summary.successful_files, 2);
        assert_eq!(summary.total_records, 7);
        assert_eq!(store.count_rows(BASIC_TABLE)?, 4);
        assert_eq!(store.count_rows(ADVANCED_TABLE)?, 3);
        Ok(())
    }

    #[test]
    fn reloading_duplicates_rows() -> Result<()> {
        let dir = tempdir()?;
        write_fixture(dir.path(), BASIC_FILE, BASIC_CSV)?;

        let mut store = store()?;
        load_all(dir.path(), &mut store)?;
        load_all(dir.path(), &mut store)?;
        assert_eq!(store.count_rows(BASIC_TABLE)?, 8);
        Ok(())
    }

    #[test]
    fn sink_failure_counts_as_failed_file() -> Result<()> {
        let dir = tempdir()?;
        write_fixture(dir.path(), BASIC_FILE, BASIC_CSV)?;
        write_fixture(dir.path(), ADVANCED_FILE, ADVANCED_CSV)?;

        let summary = load_all(dir.path(), &mut RejectingSink)?;
        assert_eq!(summary.successful_files, 0);
        assert_eq!(summary.failed_files, 2);
        assert_eq!(summary.total_records, 0);
        Ok(())
    }

    #[test]
    fn unknown_stat_type_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = write_fixture(
            dir.path(),
            "202511100MIA_box-CLE-game-fourfactors_2025-11-28.csv",
            BASIC_CSV,
        )?;
        let err = load_file(&path, &mut store()?).unwrap_err();
        assert!(matches!(err, FileFailure::UnknownStatType(ref t) if t == "fourfactors"));
        Ok(())
    }

    #[test]
    fn file_without_players_fails() -> Result<()> {
        let dir = tempdir()?;
        let csv = "\
Unnamed: 0_level_0,Basic Box Score Stats,Basic Box Score Stats
Starters,MP,PTS
Team Totals,240,101
";
        let path = write_fixture(dir.path(), BASIC_FILE, csv)?;
        let mut store = store()?;
        let err = load_file(&path, &mut store).unwrap_err();
        assert!(matches!(err, FileFailure::NoData));
        assert_eq!(store.count_rows(BASIC_TABLE)?, 0);
        Ok(())
    }

    #[test]
    fn truncated_file_is_a_processing_failure() -> Result<()> {
        let dir = tempdir()?;
        let path = write_fixture(dir.path(), BASIC_FILE, "Unnamed: 0_level_0,Basic\n")?;
        let err = load_file(&path, &mut store()?).unwrap_err();
        assert!(matches!(err, FileFailure::Processing(_)));
        Ok(())
    }

    #[test]
    fn loaded_file_reports_period() -> Result<()> {
        let dir = tempdir()?;
        let path = write_fixture(dir.path(), BASIC_FILE, BASIC_CSV)?;
        let loaded = load_file(&path, &mut store()?)?;
        assert_eq!(loaded.stat_type, StatType::Basic);
        assert_eq!(loaded.period, "ot1");
        assert_eq!(loaded.records, 4);
        Ok(())
    }

    #[test]
    fn missing_directory_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let missing = dir.path().join("nope");
        assert!(load_all(&missing, &mut store()?).is_err());
        Ok(())
    }

    #[test]
    fn empty_directory_has_no_success_rate() -> Result<()> {
        let dir = tempdir()?;
        let summary = load_all(dir.path(), &mut store()?)?;
        assert_eq!(summary.total_files(), 0);
        assert_eq!(summary.success_rate(), None);
        Ok(())
    }

    #[test]
    fn progress_every_hundredth_index_from_zero() {
        assert!(progress_due(0));
        assert!(!progress_due(1));
        assert!(!progress_due(99));
        assert!(progress_due(100));
        assert!(progress_due(200));
    }

    #[test]
    fn progress_line_waits_for_a_parsed_name() -> Result<()> {
        let dir = tempdir()?;
        // sorts first and fails to parse, so index 0 reports nothing
        write_fixture(dir.path(), "000_notes.csv", BASIC_CSV)?;
        write_fixture(dir.path(), BASIC_FILE, BASIC_CSV)?;

        let logs = LogCapture::default();
        let summary = logs.capture(|| load_all(dir.path(), &mut store()?))?;
        assert_eq!(summary.failed_files, 1);
        assert_eq!(summary.successful_files, 1);
        assert!(!logs.contents().contains("processed"));

        let dir = tempdir()?;
        write_fixture(dir.path(), BASIC_FILE, BASIC_CSV)?;
        write_fixture(dir.path(), ADVANCED_FILE, ADVANCED_CSV)?;

        let logs = LogCapture::default();
        logs.capture(|| load_all(dir.path(), &mut store()?))?;
        let out = logs.contents();
        assert_eq!(out.matches("processed 0/2 files").count(), 1);
        assert!(!out.contains("processed 1/2"));
        assert!(out.contains("loaded ot1 basic: 202511100MIA_box-CLE-ot1-basic_2025-11-28.csv (4 records)"));
        Ok(())
    }

    #[test]
    fn directory_with_glob_metacharacters() -> Result<()> {
        let root = tempdir()?;
        let dir = root.path().join("box[2025]*?");
        std::fs::create_dir(&dir)?;
        write_fixture(&dir, BASIC_FILE, BASIC_CSV)?;

        let files = box_files(&dir)?;
        assert_eq!(files, vec![dir.join(BASIC_FILE)]);

        let summary = load_all(&dir, &mut store()?)?;
        assert_eq!(summary.successful_files, 1);
        Ok(())
    }

    #[test]
    fn summary_serializes_counts() -> Result<()> {
        let summary = LoadSummary {
            successful_files: 3,
            failed_files: 1,
            total_records: 42,
        };
        let json = serde_json::to_value(&summary)?;
        assert_eq!(
            json,
            serde_json::json!({"successful_files": 3, "failed_files": 1, "total_records": 42})
        );
        Ok(())
    }
}
