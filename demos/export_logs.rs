//! Exports saved match logs into CSV tables.
//!
//! Usage: `cargo run --example export_logs -- [log dir] [table dir]`
//!
//! Defaults to `logs` and `database`. Rows are appended to `games.csv`,
//! `rounds.csv` and `eliminations.csv` in the table directory.

#![allow(clippy::missing_docs_in_private_items)]

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use warrs::ExportError;
use warrs::export::export_logs;

fn main() -> Result<(), ExportError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let log_dir = PathBuf::from(args.next().unwrap_or_else(|| "logs".to_string()));
    let table_dir = PathBuf::from(args.next().unwrap_or_else(|| "database".to_string()));

    let exported = export_logs(&log_dir, &table_dir)?;
    println!(
        "Exported {exported} logs from {} into {}",
        log_dir.display(),
        table_dir.display()
    );
    Ok(())
}
