//! bloomcheck CLI
//!
//! Builds a Bloom filter from a dictionary file, queries every token of a
//! lookup file against it, and reports how many were (probably) present.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bloomcheck::{keys, Filter, FilterConfig, DEFAULT_TARGET_FPR};

#[derive(Parser)]
#[command(
    name = "bloomcheck",
    version,
    about = "Probabilistic dictionary membership checks"
)]
struct Args {
    /// Dictionary file: whitespace-separated keys loaded into the filter
    dictionary: PathBuf,

    /// Lookup file: whitespace-separated keys tested against the filter
    lookups: PathBuf,

    /// Target false-positive rate, in (0, 1)
    #[arg(long, default_value_t = DEFAULT_TARGET_FPR)]
    false_positive_rate: f64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> Result<()> {
    let dictionary = keys::read_keys_from_path(&args.dictionary).with_context(|| {
        format!("failed to read dictionary file {}", args.dictionary.display())
    })?;

    let config = FilterConfig::new(dictionary.len(), args.false_positive_rate)
        .context("invalid filter configuration")?;
    info!(
        expected_keys = config.expected_keys(),
        bit_count = config.bit_count(),
        probe_count = config.probe_count(),
        expected_fpr = config.expected_fpr(),
        "derived filter parameters"
    );

    let filter = Filter::build(config, &dictionary).context("failed to build filter")?;

    let lookups = keys::read_keys_from_path(&args.lookups)
        .with_context(|| format!("failed to read lookup file {}", args.lookups.display()))?;
    let report = filter.query_all(&lookups);

    println!(
        "{} of the {} words are in the dictionary!",
        report.matches, report.lookups
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("bloomcheck: failed to initialize logging");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bloomcheck: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
