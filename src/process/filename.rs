// src/process/filename.rs

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::schema::{HomeAway, Period, StatType};

/// Extension the scraper writes; stripped before the name is split.
pub const BOX_FILE_EXTENSION: &str = "csv";

/// Game metadata recovered from a box-score file name such as
/// `202511100MIA_box-CLE-ot1-basic_2025-11-28.csv`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoxFile {
    pub game_date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    /// Raw period token, see [`Period::parse`] for a typed view.
    pub period: String,
    /// Raw stat-type token; unknown values are rejected at dispatch time.
    pub stat_type: String,
    pub scrape_date: NaiveDate,
    pub source_filename: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilenameError {
    #[error("expected at least 3 underscore-separated segments, found {0}")]
    Segments(usize),
    #[error("game segment `{0}` is shorter than 11 characters")]
    GameSegment(String),
    #[error("box segment `{0}` has fewer than 4 hyphen-separated tokens")]
    BoxSegment(String),
    #[error("invalid game date `{0}`")]
    GameDate(String),
    #[error("invalid scrape date `{0}`")]
    ScrapeDate(String),
}

impl BoxFile {
    pub fn stat_kind(&self) -> Option<StatType> {
        StatType::from_token(&self.stat_type)
    }

    pub fn period_kind(&self) -> Period {
        Period::parse(&self.period)
    }

    /// Side attributed to this file's rows.
    ///
    /// The team code in front of the game id is compared with the box-table
    /// code, so a file reads HOME only when both codes agree. Rows of the home
    /// side in a regular game therefore come out as AWAY; this is the current
    /// stored behaviour and downstream queries rely on it.
    pub fn home_away(&self) -> HomeAway {
        if self.away_team != self.home_team {
            HomeAway::Away
        } else {
            HomeAway::Home
        }
    }
}

/// Decode `<YYYYMMDD><team>_box-<x>-<team>-<period>-<stat>_<YYYY-MM-DD>.csv`.
///
/// Team codes are passed through untouched (no `CHO`/`CHA` style mapping).
pub fn parse_filename(filename: &str) -> Result<BoxFile, FilenameError> {
    let base_name = filename
        .strip_suffix(&format!(".{}", BOX_FILE_EXTENSION))
        .unwrap_or(filename);

    let parts: Vec<&str> = base_name.split('_').collect();
    if parts.len() < 3 {
        return Err(FilenameError::Segments(parts.len()));
    }

    // 1) game id: 8-digit date followed by the team code
    let game_info = parts[0];
    if game_info.chars().count() < 11 {
        return Err(FilenameError::GameSegment(game_info.to_string()));
    }
    let split_at = game_info
        .char_indices()
        .nth(8)
        .map(|(i, _)| i)
        .unwrap_or(game_info.len());
    let (game_date_str, team) = game_info.split_at(split_at);
    // game ids pad the team slot with a leading zero
    let away_team = team.strip_prefix('0').unwrap_or(team);

    // 2) box-<home>-<period>-<stat_type>
    let box_info = parts[1];
    let box_parts: Vec<&str> = box_info.split('-').collect();
    if box_parts.len() < 4 {
        return Err(FilenameError::BoxSegment(box_info.to_string()));
    }

    // 3) dates
    let game_date = parse_yyyymmdd(game_date_str)
        .ok_or_else(|| FilenameError::GameDate(game_date_str.to_string()))?;
    let scrape_date = NaiveDate::parse_from_str(parts[2], "%Y-%m-%d")
        .map_err(|_| FilenameError::ScrapeDate(parts[2].to_string()))?;

    Ok(BoxFile {
        game_date,
        home_team: box_parts[1].to_string(),
        away_team: away_team.to_string(),
        period: box_parts[2].to_string(),
        stat_type: box_parts[3].to_string(),
        scrape_date,
        source_filename: filename.to_string(),
    })
}

/// `"YYYYMMDD"` → date, `None` unless all eight characters are digits and
/// form a real calendar day.
fn parse_yyyymmdd(s: &str) -> Option<NaiveDate> {
    if s.len() != 8 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year: i32 = s[0..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
