//! Error types for the `locale-merge` binary.

use locale_merge::LocaleMergeError;
use thiserror::Error;

/// Errors surfaced by the `locale-merge` run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Failure raised by the merge pipeline.
    #[error(transparent)]
    Merge(#[from] LocaleMergeError),

    /// Failure writing the summary report.
    #[error("failed to write summary: {0}")]
    Summary(#[from] std::io::Error),
}
