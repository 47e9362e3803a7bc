use anyhow::Result;
use septaload::{
    load::load_all,
    registry::SEPTA_TABLES,
    report::{peek, print_failures, summarize},
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Table previewed at the end of every run.
const PEEK_KEY: &str = "average_daily_ridership_by_mode";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // Quiet by default: the report contract owns stdout. RUST_LOG opts in.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) load every registered CSV ────────────────────────────────
    let data_dir = data_dir();
    info!(
        dir = %data_dir.display(),
        tables = SEPTA_TABLES.len(),
        "loading SEPTA CSVs"
    );
    let run = load_all(&data_dir, &SEPTA_TABLES);

    // ─── 3) report ───────────────────────────────────────────────────
    print_failures(&run);
    summarize(&run);
    peek(&run, PEEK_KEY);

    Ok(())
}

/// Folder holding the SEPTA CSV exports: `$HOME/Desktop/SeptaCsv`.
fn data_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_default();
    PathBuf::from(home).join("Desktop").join("SeptaCsv")
}
