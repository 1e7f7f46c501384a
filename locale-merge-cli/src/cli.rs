//! Command-line interface definitions for `locale-merge`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `locale-merge`.
#[derive(Debug, Parser)]
#[command(name = "locale-merge")]
#[command(about = "Merge missing translation keys into locale documents")]
#[command(version)]
pub struct Args {
    /// Directory holding `<locale>.json` and `missing_<locale>.json` pairs.
    #[arg(long, value_name = "path", default_value = "locales")]
    pub root: Utf8PathBuf,
    /// Locale to merge (repeat for multiple locales).
    #[arg(long, value_name = "locale")]
    pub locale: Vec<String>,
    /// Merge every locale with a missing-keys document under the root.
    #[arg(long = "all-locales")]
    pub should_use_all_locales: bool,
    /// Report what would change without writing any document.
    #[arg(long = "dry-run")]
    pub is_dry_run: bool,
}
