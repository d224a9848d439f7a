use anyhow::{Context, Result};
use boxload::{config::LoaderConfig, duck::DuckStore, load};
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,boxload=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    if let Err(e) = run() {
        error!("load aborted: {:#}", e);
        return Err(e);
    }
    info!("all done");
    Ok(())
}

fn run() -> Result<()> {
    // ─── 2) configure ────────────────────────────────────────────────
    let cfg = LoaderConfig::from_env().with_args(std::env::args().skip(1));
    info!(
        data_dir = %cfg.data_dir.display(),
        db = %cfg.db_path.display(),
        "configured"
    );

    // ─── 3) open database & ensure tables ────────────────────────────
    let mut store = DuckStore::open(&cfg.db_path)
        .with_context(|| format!("opening store at {}", cfg.db_path.display()))?;
    store.create_tables()?;

    // ─── 4) load every box-score file ────────────────────────────────
    let start = Instant::now();
    let summary = load::load_all(&cfg.data_dir, &mut store)?;
    info!(elapsed = ?start.elapsed(), "directory processed");

    // ─── 5) report ───────────────────────────────────────────────────
    summary.log();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
