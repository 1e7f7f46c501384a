//! Drives the merge of locale document pairs.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tracing::{debug, info};
use unic_langid::LanguageIdentifier;

use crate::error::LocaleMergeError;
use crate::file::{open_root, read_document, write_document};
use crate::flatten::count_leaf_keys;
use crate::locale::LocalePair;
use crate::merge::merge_documents;

/// Outcome of merging one locale pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Locale the report covers.
    pub locale: LanguageIdentifier,
    /// Path of the merged base document.
    pub path: Utf8PathBuf,
    /// Total leaf (translation) keys present after the merge.
    pub leaf_keys: usize,
    /// Leaf keys the supplement added over the base document.
    pub added_keys: usize,
}

struct PendingWrite {
    base_file: String,
    merged: Value,
    report: MergeReport,
}

/// Merges every locale pair under `root`, then writes the results back over
/// their base documents.
///
/// All pairs are read and merged before the first write, so invalid input in
/// any pair aborts the run with every document untouched. With `should_write`
/// unset, the merged documents are discarded and only reports are produced.
///
/// # Errors
///
/// Returns the first [`LocaleMergeError`] encountered; later pairs are not
/// processed.
pub fn merge_locales(
    root: &Utf8Path,
    pairs: &[LocalePair],
    should_write: bool,
) -> Result<Vec<MergeReport>, LocaleMergeError> {
    let dir = open_root(root)?;

    let mut pending = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let base = read_document(&dir, root, &pair.base_file)?;
        let supplement = read_document(&dir, root, &pair.supplement_file)?;
        debug!(
            locale = %pair.locale,
            base = %pair.base_file,
            supplement = %pair.supplement_file,
            "loaded locale pair"
        );

        let merged = merge_documents(&base, &supplement);
        let leaf_keys = count_leaf_keys(&merged);
        let report = MergeReport {
            locale: pair.locale.clone(),
            path: root.join(&pair.base_file),
            leaf_keys,
            added_keys: leaf_keys.saturating_sub(count_leaf_keys(&base)),
        };
        pending.push(PendingWrite {
            base_file: pair.base_file.clone(),
            merged,
            report,
        });
    }

    let mut reports = Vec::with_capacity(pending.len());
    for entry in pending {
        if should_write {
            write_document(&dir, root, &entry.base_file, &entry.merged)?;
        }
        info!(
            locale = %entry.report.locale,
            keys = entry.report.leaf_keys,
            added = entry.report.added_keys,
            written = should_write,
            "merged locale pair"
        );
        reports.push(entry.report);
    }
    Ok(reports)
}
