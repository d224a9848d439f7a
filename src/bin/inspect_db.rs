use anyhow::{bail, Result};
use boxload::{
    config::LoaderConfig,
    duck::{DuckStore, ADVANCED_TABLE, BASIC_TABLE},
};

fn main() -> Result<()> {
    // 1) Configuration: BOXLOAD_DB_PATH or first argument
    let mut cfg = LoaderConfig::from_env();
    if let Some(path) = std::env::args().nth(1) {
        cfg.db_path = path.into();
    }
    if !cfg.db_path.exists() {
        bail!("no database at {}", cfg.db_path.display());
    }

    // 2) Row counts per table
    let store = DuckStore::open(&cfg.db_path)?;
    println!("database: {}", cfg.db_path.display());
    for table in [BASIC_TABLE, ADVANCED_TABLE] {
        println!("{:<20} {:>10}", table, store.count_rows(table)?);
    }

    // 3) Basic rows per period
    println!();
    println!("{} by period:", BASIC_TABLE);
    for (period, n) in store.basic_rows_by_period()? {
        println!("  {:<8} {:>10}", period.as_deref().unwrap_or("<none>"), n);
    }
    Ok(())
}
