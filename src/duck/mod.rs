// src/duck/mod.rs

use anyhow::{Context, Result};
use duckdb::{params, Connection, Statement};
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

use crate::schema::{AdvancedRecord, BasicRecord};

pub const BASIC_TABLE: &str = "nba_game_basic";
pub const ADVANCED_TABLE: &str = "nba_game_advanced";

const CREATE_BASIC: &str = "CREATE TABLE IF NOT EXISTS nba_game_basic(
    id VARCHAR(36) PRIMARY KEY,
    player VARCHAR(100) NOT NULL,
    pos VARCHAR(10),
    mp VARCHAR(20),
    fg INTEGER DEFAULT 0,
    fga INTEGER DEFAULT 0,
    fg_pct DOUBLE DEFAULT 0.0,
    fg3 INTEGER DEFAULT 0,
    fg3a INTEGER DEFAULT 0,
    fg3_pct DOUBLE DEFAULT 0.0,
    ft INTEGER DEFAULT 0,
    fta INTEGER DEFAULT 0,
    ft_pct DOUBLE DEFAULT 0.0,
    orb INTEGER DEFAULT 0,
    drb INTEGER DEFAULT 0,
    trb INTEGER DEFAULT 0,
    ast INTEGER DEFAULT 0,
    stl INTEGER DEFAULT 0,
    blk INTEGER DEFAULT 0,
    tov INTEGER DEFAULT 0,
    pf INTEGER DEFAULT 0,
    pts INTEGER DEFAULT 0,
    gm_sc DOUBLE DEFAULT 0.0,
    plus_minus INTEGER DEFAULT 0,
    game_date DATE NOT NULL,
    team VARCHAR(10) NOT NULL,
    opponent VARCHAR(10) NOT NULL,
    home_away VARCHAR(10),
    period VARCHAR(10),
    is_starter BOOLEAN DEFAULT false,
    source_file VARCHAR(200),
    created_at TIMESTAMP DEFAULT current_timestamp
);";

const CREATE_ADVANCED: &str = "CREATE TABLE IF NOT EXISTS nba_game_advanced(
    id VARCHAR(36) PRIMARY KEY,
    player VARCHAR(100) NOT NULL,
    pos VARCHAR(10),
    mp VARCHAR(20),
    ts_pct DOUBLE DEFAULT 0.0,
    efg_pct DOUBLE DEFAULT 0.0,
    fg3a_per_fga_pct DOUBLE DEFAULT 0.0,
    fta_per_fga_pct DOUBLE DEFAULT 0.0,
    orb_pct DOUBLE DEFAULT 0.0,
    drb_pct DOUBLE DEFAULT 0.0,
    trb_pct DOUBLE DEFAULT 0.0,
    ast_pct DOUBLE DEFAULT 0.0,
    stl_pct DOUBLE DEFAULT 0.0,
    blk_pct DOUBLE DEFAULT 0.0,
    tov_pct DOUBLE DEFAULT 0.0,
    usg_pct DOUBLE DEFAULT 0.0,
    off_rtg DOUBLE DEFAULT 0.0,
    def_rtg DOUBLE DEFAULT 0.0,
    bpm DOUBLE DEFAULT 0.0,
    game_date DATE NOT NULL,
    team VARCHAR(10) NOT NULL,
    opponent VARCHAR(10) NOT NULL,
    home_away VARCHAR(10),
    is_starter BOOLEAN DEFAULT false,
    source_file VARCHAR(200),
    created_at TIMESTAMP DEFAULT current_timestamp
);";

/// A record type with a home table.
pub trait StatRecord {
    const TABLE: &'static str;
    /// Columns written by [`StatRecord::insert`], after `id`.
    const COLUMNS: &'static [&'static str];

    /// Execute `stmt` (built by [`insert_sql`]) for this record.
    fn insert(&self, stmt: &mut Statement<'_>, id: &str) -> duckdb::Result<usize>;
}

/// `INSERT INTO <table> (id, <columns>) VALUES (?, ...)`.
pub fn insert_sql<R: StatRecord>() -> String {
    let placeholders = vec!["?"; R::COLUMNS.len() + 1].join(", ");
    format!(
        "INSERT INTO {} (id, {}) VALUES ({})",
        R::TABLE,
        R::COLUMNS.join(", "),
        placeholders
    )
}

/// Destination for one file's records.
pub trait RecordSink {
    /// Persist `records` as one unit: either all rows land or none do.
    fn write_batch<R: StatRecord>(&mut self, records: &[R]) -> Result<usize>;
}

/// DuckDB-backed store for the box-score tables.
pub struct DuckStore {
    conn: Connection,
}

impl DuckStore {
    /// Open a database on disk at `path`, creating the file if it doesn't exist.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .with_context(|| format!("opening database {}", path.display()))?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("opening in-memory database")?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Create both tables if missing.
    pub fn create_tables(&self) -> Result<()> {
        self.conn
            .execute_batch(CREATE_BASIC)
            .context("creating nba_game_basic")?;
        self.conn
            .execute_batch(CREATE_ADVANCED)
            .context("creating nba_game_advanced")?;
        info!(tables = ?[BASIC_TABLE, ADVANCED_TABLE], "tables ready");
        Ok(())
    }

    pub fn count_rows(&self, table: &str) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table);
        self.conn
            .query_row(&sql, [], |r| r.get(0))
            .with_context(|| format!("counting rows in {}", table))
    }

    /// Row count per period token in the basic table.
    pub fn basic_rows_by_period(&self) -> Result<Vec<(Option<String>, i64)>> {
        let mut stmt = self.conn.prepare(
            "SELECT period, COUNT(*) FROM nba_game_basic GROUP BY period ORDER BY period",
        )?;
        let rows: Vec<(Option<String>, i64)> = stmt
            .query_map([], |r| Ok((r.get(0)?, r.get(1)?)))?
            .collect::<duckdb::Result<Vec<_>>>()?;
        Ok(rows)
    }
}

impl RecordSink for DuckStore {
    fn write_batch<R: StatRecord>(&mut self, records: &[R]) -> Result<usize> {
        // dropping `tx` without commit rolls back
        let tx = self.conn.transaction().context("starting transaction")?;
        {
            let mut stmt = tx
                .prepare(&insert_sql::<R>())
                .with_context(|| format!("preparing insert into {}", R::TABLE))?;
            for (idx, record) in records.iter().enumerate() {
                let id = Uuid::new_v4().to_string();
                record
                    .insert(&mut stmt, &id)
                    .with_context(|| format!("inserting row {} into {}", idx, R::TABLE))?;
            }
        }
        tx.commit()
            .with_context(|| format!("committing {} rows into {}", records.len(), R::TABLE))?;
        debug!(table = R::TABLE, rows = records.len(), "batch committed");
        Ok(records.len())
    }
}

impl StatRecord for BasicRecord {
    const TABLE: &'static str = BASIC_TABLE;
    const COLUMNS: &'static [&'static str] = &[
        "player", "pos", "mp", "fg", "fga", "fg_pct", "fg3", "fg3a", "fg3_pct", "ft", "fta",
        "ft_pct", "orb", "drb", "trb", "ast", "stl", "blk", "tov", "pf", "pts", "gm_sc",
        "plus_minus", "game_date", "team", "opponent", "home_away", "period", "is_starter",
        "source_file",
    ];

    fn insert(&self, stmt: &mut Statement<'_>, id: &str) -> duckdb::Result<usize> {
        stmt.execute(params![
            id,
            self.player,
            self.pos,
            self.mp,
            self.fg,
            self.fga,
            self.fg_pct,
            self.fg3,
            self.fg3a,
            self.fg3_pct,
            self.ft,
            self.fta,
            self.ft_pct,
            self.orb,
            self.drb,
            self.trb,
            self.ast,
            self.stl,
            self.blk,
            self.tov,
            self.pf,
            self.pts,
            self.gm_sc,
            self.plus_minus,
            self.game_date.format("%Y-%m-%d").to_string(),
            self.team,
            self.opponent,
            self.home_away.as_str(),
            self.period,
            self.is_starter,
            self.source_file,
        ])
    }
}

impl StatRecord for AdvancedRecord {
    const TABLE: &'static str = ADVANCED_TABLE;
    const COLUMNS: &'static [&'static str] = &[
        "player", "pos", "mp", "ts_pct", "efg_pct", "fg3a_per_fga_pct", "fta_per_fga_pct",
        "orb_pct", "drb_pct", "trb_pct", "ast_pct", "stl_pct", "blk_pct", "tov_pct", "usg_pct",
        "off_rtg", "def_rtg", "bpm", "game_date", "team", "opponent", "home_away", "is_starter",
        "source_file",
    ];

    fn insert(&self, stmt: &mut Statement<'_>, id: &str) -> duckdb::Result<usize> {
        stmt.execute(params![
            id,
            self.player,
            self.pos,
            self.mp,
            self.ts_pct,
            self.efg_pct,
            self.fg3a_per_fga_pct,
            self.fta_per_fga_pct,
            self.orb_pct,
            self.drb_pct,
            self.trb_pct,
            self.ast_pct,
            self.stl_pct,
            self.blk_pct,
            self.tov_pct,
            self.usg_pct,
            self.off_rtg,
            self.def_rtg,
            self.bpm,
            self.game_date.format("%Y-%m-%d").to_string(),
            self.team,
            self.opponent,
            self.home_away.as_str(),
            self.is_starter,
            self.source_file,
        ])
    }
}
