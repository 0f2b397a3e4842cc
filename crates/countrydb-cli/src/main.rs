//! countrydb — Command-line interface for countrydb-core
//!
//! This binary browses the bundled world countries dataset from your
//! terminal: dataset statistics, the full country list, per-country details,
//! regions, countries of one region, and a text/region card filter.
//!
//! Usage examples
//! --------------
//!
//! - Show overall stats
//!   $ countrydb stats
//!
//! - Show details for a country by code (two or three letters, any case)
//!   $ countrydb country de
//!   $ countrydb country JPN
//!
//! - List regions, then the countries of one region (exact name)
//!   $ countrydb regions
//!   $ countrydb region Europe
//!
//! - Filter cards by name/capital and region
//!   $ countrydb search --query ber --region Europe
//!
//! Data source
//! -----------
//!
//! By default the dataset compiled into `countrydb-core` is used. Use
//! `--input <path>` (or `COUNTRYDB_DATA`) to load a custom `.json` or
//! `.json.gz` file instead. Set `RUST_LOG=debug` for loader diagnostics.
use anyhow::Context;
use clap::Parser;
use countrydb_cli::args::CliArgs;
use countrydb_cli::commands;
use countrydb_core::CountryDb;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();

    // The dataset is a startup input: failing to load it ends the process.
    let db = load_db(&args).context("failed to load the country dataset")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(db, &args.command, args.json, &mut out)?;
    out.flush()?;

    Ok(())
}

#[cfg(feature = "json")]
fn load_db(args: &CliArgs) -> countrydb_core::Result<&'static CountryDb> {
    match &args.input {
        Some(path) => CountryDb::init_from_path(path),
        None => CountryDb::load(),
    }
}

#[cfg(not(feature = "json"))]
fn load_db(args: &CliArgs) -> countrydb_core::Result<&'static CountryDb> {
    if let Some(path) = &args.input {
        tracing::warn!(path = %path.display(), "--input needs the `json` feature; using the bundled dataset");
    }
    CountryDb::load()
}
