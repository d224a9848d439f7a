// src/schema/types.rs

use chrono::NaiveDate;
use serde::Serialize;

/// Which box-score table a file carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatType {
    Basic,
    Advanced,
}

impl StatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatType::Basic => "basic",
            StatType::Advanced => "advanced",
        }
    }

    /// Exact token match; anything else is an unknown stat type.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(StatType::Basic),
            "advanced" => Some(StatType::Advanced),
            _ => None,
        }
    }
}

/// Classification of the raw period token (`game`, `q1`, `h2`, `ot1`, ...).
/// The raw token is what gets stored.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Period {
    Game,
    Quarter(u8),
    Half(u8),
    Overtime(u8),
    Other(String),
}

impl Period {
    pub fn parse(token: &str) -> Self {
        let numbered = |prefix: &str| {
            token
                .strip_prefix(prefix)
                .filter(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
                .and_then(|n| n.parse::<u8>().ok())
        };

        if token == "game" {
            Period::Game
        } else if let Some(n) = numbered("ot") {
            Period::Overtime(n)
        } else if let Some(n) = numbered("q") {
            Period::Quarter(n)
        } else if let Some(n) = numbered("h") {
            Period::Half(n)
        } else {
            Period::Other(token.to_string())
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HomeAway {
    Home,
    Away,
}

impl HomeAway {
    pub fn as_str(&self) -> &'static str {
        match self {
            HomeAway::Home => "HOME",
            HomeAway::Away => "AWAY",
        }
    }
}

/// One player's basic box-score line for one game segment.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BasicRecord {
    pub player: String,
    pub pos: String,
    pub mp: Option<String>,
    pub fg: i64,
    pub fga: i64,
    pub fg_pct: f64,
    pub fg3: i64,
    pub fg3a: i64,
    pub fg3_pct: f64,
    pub ft: i64,
    pub fta: i64,
    pub ft_pct: f64,
    pub orb: i64,
    pub drb: i64,
    pub trb: i64,
    pub ast: i64,
    pub stl: i64,
    pub blk: i64,
    pub tov: i64,
    pub pf: i64,
    pub pts: i64,
    pub gm_sc: f64,
    pub plus_minus: i64,

    pub game_date: NaiveDate,
    pub team: String,
    pub opponent: String,
    pub home_away: HomeAway,
    pub period: String,
    pub is_starter: bool,
    pub source_file: String,
}

/// One player's advanced box-score line for one game. Advanced tables carry
/// no period column.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AdvancedRecord {
    pub player: String,
    pub pos: String,
    pub mp: Option<String>,
    pub ts_pct: f64,
    pub efg_pct: f64,
    pub fg3a_per_fga_pct: f64,
    pub fta_per_fga_pct: f64,
    pub orb_pct: f64,
    pub drb_pct: f64,
    pub trb_pct: f64,
    pub ast_pct: f64,
    pub stl_pct: f64,
    pub blk_pct: f64,
    pub tov_pct: f64,
    pub usg_pct: f64,
    pub off_rtg: f64,
    pub def_rtg: f64,
    pub bpm: f64,

    pub game_date: NaiveDate,
    pub team: String,
    pub opponent: String,
    pub home_away: HomeAway,
    pub is_starter: bool,
    pub source_file: String,
}
