// src/process/columns.rs

use std::collections::HashMap;

use crate::schema::StatType;

/// Flattened basic-table labels → stored column names.
pub static BASIC_LABELS: &[(&str, &str)] = &[
    ("Basic Box Score Stats_MP", "mp"),
    ("Basic Box Score Stats_FG", "fg"),
    ("Basic Box Score Stats_FGA", "fga"),
    ("Basic Box Score Stats_FG%", "fg_pct"),
    ("Basic Box Score Stats_3P", "fg3"),
    ("Basic Box Score Stats_3PA", "fg3a"),
    ("Basic Box Score Stats_3P%", "fg3_pct"),
    ("Basic Box Score Stats_FT", "ft"),
    ("Basic Box Score Stats_FTA", "fta"),
    ("Basic Box Score Stats_FT%", "ft_pct"),
    ("Basic Box Score Stats_ORB", "orb"),
    ("Basic Box Score Stats_DRB", "drb"),
    ("Basic Box Score Stats_TRB", "trb"),
    ("Basic Box Score Stats_AST", "ast"),
    ("Basic Box Score Stats_STL", "stl"),
    ("Basic Box Score Stats_BLK", "blk"),
    ("Basic Box Score Stats_TOV", "tov"),
    ("Basic Box Score Stats_PF", "pf"),
    ("Basic Box Score Stats_PTS", "pts"),
    ("Basic Box Score Stats_GmSc", "gm_sc"),
    ("Basic Box Score Stats_+/-", "plus_minus"),
];

/// Flattened advanced-table labels → stored column names.
pub static ADVANCED_LABELS: &[(&str, &str)] = &[
    ("Advanced Box Score Stats_MP", "mp"),
    ("Advanced Box Score Stats_TS%", "ts_pct"),
    ("Advanced Box Score Stats_eFG%", "efg_pct"),
    ("Advanced Box Score Stats_3PAr", "fg3a_per_fga_pct"),
    ("Advanced Box Score Stats_FTr", "fta_per_fga_pct"),
    ("Advanced Box Score Stats_ORB%", "orb_pct"),
    ("Advanced Box Score Stats_DRB%", "drb_pct"),
    ("Advanced Box Score Stats_TRB%", "trb_pct"),
    ("Advanced Box Score Stats_AST%", "ast_pct"),
    ("Advanced Box Score Stats_STL%", "stl_pct"),
    ("Advanced Box Score Stats_BLK%", "blk_pct"),
    ("Advanced Box Score Stats_TOV%", "tov_pct"),
    ("Advanced Box Score Stats_USG%", "usg_pct"),
    ("Advanced Box Score Stats_ORtg", "off_rtg"),
    ("Advanced Box Score Stats_DRtg", "def_rtg"),
    ("Advanced Box Score Stats_BPM", "bpm"),
];

pub fn labels_for(stat_type: StatType) -> &'static [(&'static str, &'static str)] {
    match stat_type {
        StatType::Basic => BASIC_LABELS,
        StatType::Advanced => ADVANCED_LABELS,
    }
}

/// Source label → canonical name, for the labels actually present in
/// `columns`. Expected labels that are absent are left out.
pub fn map_columns(columns: &[String], stat_type: StatType) -> HashMap<String, &'static str> {
    labels_for(stat_type)
        .iter()
        .filter(|(label, _)| columns.iter().any(|c| c == label))
        .map(|&(label, name)| (label.to_string(), name))
        .collect()
}
