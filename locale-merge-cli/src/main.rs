//! CLI entrypoint for `locale-merge`.

mod cli;
mod error;
mod output;

use clap::Parser;
use locale_merge::{DEFAULT_LOCALES, discover_locales, merge_locales, resolve_pairs};

use crate::cli::Args;
use crate::error::CliError;

fn main() -> Result<(), CliError> {
    init_tracing();
    run(&Args::parse())
}

fn run(args: &Args) -> Result<(), CliError> {
    let locales = resolve_requested_locales(args)?;
    let pairs = resolve_pairs(&locales)?;
    let reports = merge_locales(&args.root, &pairs, !args.is_dry_run)?;

    let mut stdout = std::io::stdout().lock();
    output::write_summary(&mut stdout, &reports)?;
    Ok(())
}

/// Resolution order: explicit `--locale` flags, then `--all-locales`
/// discovery, then the built-in defaults.
fn resolve_requested_locales(args: &Args) -> Result<Vec<String>, CliError> {
    if !args.locale.is_empty() {
        return Ok(args.locale.clone());
    }

    if args.should_use_all_locales {
        let discovered = discover_locales(&args.root)?;
        if !discovered.is_empty() {
            return Ok(discovered);
        }
    }

    Ok(DEFAULT_LOCALES
        .iter()
        .map(|locale| (*locale).to_owned())
        .collect())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
