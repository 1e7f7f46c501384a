//! Error types for locale merge flows.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors surfaced while reconciling locale documents.
///
/// Every variant aborts the whole run: a partially merged translation set
/// would be inconsistent, so there is no recovery, retry, or skip policy.
#[derive(Debug, Error)]
pub enum LocaleMergeError {
    /// A document's contents do not parse as JSON.
    #[error("failed to parse '{path}': {source}")]
    Parse {
        /// Path of the offending document.
        path: Utf8PathBuf,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// A document parsed but its root is not an object.
    #[error("document '{path}' must hold a top-level object")]
    UnexpectedRoot {
        /// Path of the offending document.
        path: Utf8PathBuf,
    },

    /// A locale identifier could not be parsed.
    #[error("failed to parse locale '{value}': {message}")]
    InvalidLocale {
        /// The raw value supplied for the locale.
        value: String,
        /// Diagnostic reported by the locale parser.
        message: String,
    },

    /// A merged document could not be serialized back to JSON.
    #[error("failed to serialize merged document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// I/O failure while reading or writing a document.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path being accessed.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
