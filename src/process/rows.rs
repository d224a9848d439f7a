// src/process/rows.rs

use crate::{
    process::{
        clean::{NormalizedTable, RowView, PLAYER_COLUMN},
        convert::{safe_convert, safe_convert_minutes, DID_NOT_PLAY},
        filename::BoxFile,
    },
    schema::{AdvancedRecord, BasicRecord},
};

const TEAM_TOTALS: &str = "Team Totals";
const STARTERS: &str = "Starters";
const RESERVES: &str = "Reserves";

/// A row that names a player, with the starter flag in force when it was
/// reached.
#[derive(Debug, Clone, Copy)]
pub struct PlayerRow<'a> {
    pub name: &'a str,
    pub is_starter: bool,
    pub row: RowView<'a>,
}

/// One step of the row walk: given the current starter flag and the row's
/// identity cell, return the next flag and the player name if the row should
/// produce a record.
pub fn classify(is_starter: bool, identity: Option<&str>) -> (bool, Option<&str>) {
    let Some(raw) = identity else {
        return (is_starter, None);
    };
    if raw.is_empty() || [TEAM_TOTALS, STARTERS, RESERVES].contains(&raw) {
        return (is_starter && raw != RESERVES, None);
    }
    if raw.contains(DID_NOT_PLAY) {
        return (is_starter, None);
    }
    let name = raw.trim();
    if name.is_empty() {
        return (is_starter, None);
    }
    (is_starter, Some(name))
}

/// Walk the table top to bottom, starting in the starters section.
pub fn player_rows(table: &NormalizedTable) -> Vec<PlayerRow<'_>> {
    table
        .rows()
        .scan(true, |is_starter, row| {
            let (next, name) = classify(*is_starter, row.get(PLAYER_COLUMN));
            let current = *is_starter;
            *is_starter = next;
            Some(name.map(|name| PlayerRow {
                name,
                is_starter: current,
                row,
            }))
        })
        .flatten()
        .collect()
}

pub fn basic_records(table: &NormalizedTable, file: &BoxFile) -> Vec<BasicRecord> {
    player_rows(table)
        .into_iter()
        .map(|p| basic_record(&p, file))
        .collect()
}

pub fn advanced_records(table: &NormalizedTable, file: &BoxFile) -> Vec<AdvancedRecord> {
    player_rows(table)
        .into_iter()
        .map(|p| advanced_record(&p, file))
        .collect()
}

fn basic_record(p: &PlayerRow<'_>, file: &BoxFile) -> BasicRecord {
    let int = |col: &str| safe_convert::<i64>(p.row.get(col), 0);
    let float = |col: &str| safe_convert::<f64>(p.row.get(col), 0.0);

    BasicRecord {
        player: p.name.to_string(),
        pos: p.row.get("pos").unwrap_or_default().to_string(),
        mp: safe_convert_minutes(p.row.get("mp")),
        fg: int("fg"),
        fga: int("fga"),
        fg_pct: float("fg_pct"),
        fg3: int("fg3"),
        fg3a: int("fg3a"),
        fg3_pct: float("fg3_pct"),
        ft: int("ft"),
        fta: int("fta"),
        ft_pct: float("ft_pct"),
        orb: int("orb"),
        drb: int("drb"),
        trb: int("trb"),
        ast: int("ast"),
        stl: int("stl"),
        blk: int("blk"),
        tov: int("tov"),
        pf: int("pf"),
        pts: int("pts"),
        gm_sc: float("gm_sc"),
        plus_minus: int("plus_minus"),

        game_date: file.game_date,
        team: file.away_team.clone(),
        opponent: file.home_team.clone(),
        home_away: file.home_away(),
        period: file.period.clone(),
        is_starter: p.is_starter,
        source_file: file.source_filename.clone(),
    }
}

fn advanced_record(p: &PlayerRow<'_>, file: &BoxFile) -> AdvancedRecord {
    let float = |col: &str| safe_convert::<f64>(p.row.get(col), 0.0);

    AdvancedRecord {
        player: p.name.to_string(),
        pos: p.row.get("pos").unwrap_or_default().to_string(),
        mp: safe_convert_minutes(p.row.get("mp")),
        ts_pct: float("ts_pct"),
        efg_pct: float("efg_pct"),
        fg3a_per_fga_pct: float("fg3a_per_fga_pct"),
        fta_per_fga_pct: float("fta_per_fga_pct"),
        orb_pct: float("orb_pct"),
        drb_pct: float("drb_pct"),
        trb_pct: float("trb_pct"),
        ast_pct: float("ast_pct"),
        stl_pct: float("stl_pct"),
        blk_pct: float("blk_pct"),
        tov_pct: float("tov_pct"),
        usg_pct: float("usg_pct"),
        off_rtg: float("off_rtg"),
        def_rtg: float("def_rtg"),
        bpm: float("bpm"),

        game_date: file.game_date,
        team: file.away_team.clone(),
        opponent: file.home_team.clone(),
        home_away: file.home_away(),
        is_starter: p.is_starter,
        source_file: file.source_filename.clone(),
    }
}
