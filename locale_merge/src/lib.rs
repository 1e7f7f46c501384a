//! Core crate for the locale merge tooling.
//!
//! Reconciles per-locale translation documents: [`merge_documents`] deep-merges
//! a missing-keys supplement into a base document, [`count_leaf_keys`] reports
//! how many translation keys a document carries, and [`merge_locales`] drives
//! the file-level workflow for a set of locale pairs. The companion
//! `locale-merge` binary wraps this crate with a command-line surface.

mod error;
mod file;
mod flatten;
mod locale;
mod merge;
mod pipeline;

pub use unic_langid::LanguageIdentifier;

pub use error::LocaleMergeError;
pub use file::{open_root, read_document, write_document};
pub use flatten::{count_leaf_keys, flatten_document};
pub use locale::{DEFAULT_LOCALES, LocalePair, discover_locales, parse_locales, resolve_pairs};
pub use merge::{merge_documents, merge_value};
pub use pipeline::{MergeReport, merge_locales};
