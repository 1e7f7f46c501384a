//! Locale selection and document-pair naming.

use std::str::FromStr;

use camino::Utf8Path;
use unic_langid::LanguageIdentifier;

use crate::error::LocaleMergeError;
use crate::file::open_root;

/// Locales merged when none are requested explicitly.
pub const DEFAULT_LOCALES: [&str; 2] = ["en", "fr"];

const SUPPLEMENT_PREFIX: &str = "missing_";
const DOCUMENT_EXTENSION: &str = ".json";

/// A base/supplement document pair for one locale.
///
/// Both file names are relative to the locale root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalePair {
    /// Locale the pair belongs to.
    pub locale: LanguageIdentifier,
    /// Base translation document, overwritten by the merge.
    pub base_file: String,
    /// Missing-keys document supplying keys absent from the base.
    pub supplement_file: String,
}

impl LocalePair {
    /// Builds the conventional pair for `locale`:
    /// `<locale>.json` and `missing_<locale>.json`.
    #[must_use]
    pub fn for_locale(locale: LanguageIdentifier) -> Self {
        let base_file = format!("{locale}{DOCUMENT_EXTENSION}");
        let supplement_file = format!("{SUPPLEMENT_PREFIX}{locale}{DOCUMENT_EXTENSION}");
        Self {
            locale,
            base_file,
            supplement_file,
        }
    }
}

/// Parses locale identifiers, dropping duplicates while preserving order.
///
/// # Errors
///
/// Returns [`LocaleMergeError::InvalidLocale`] for any value that is not a
/// well-formed language identifier.
pub fn parse_locales(values: &[String]) -> Result<Vec<LanguageIdentifier>, LocaleMergeError> {
    let mut output = Vec::new();
    for value in values {
        let locale = LanguageIdentifier::from_str(value).map_err(|err| {
            LocaleMergeError::InvalidLocale {
                value: value.clone(),
                message: err.to_string(),
            }
        })?;
        if output.iter().any(|existing| existing == &locale) {
            continue;
        }
        output.push(locale);
    }
    Ok(output)
}

/// Builds the document pairs for the requested locales.
///
/// # Errors
///
/// Returns [`LocaleMergeError::InvalidLocale`] when any locale fails to
/// parse.
pub fn resolve_pairs(values: &[String]) -> Result<Vec<LocalePair>, LocaleMergeError> {
    Ok(parse_locales(values)?
        .into_iter()
        .map(LocalePair::for_locale)
        .collect())
}

/// Discovers the locales under `root` that are ready to merge.
///
/// A locale qualifies when both `missing_<locale>.json` and `<locale>.json`
/// exist as regular files. The result is sorted for stable ordering.
///
/// # Errors
///
/// Returns [`LocaleMergeError::Io`] when the root directory cannot be read.
pub fn discover_locales(root: &Utf8Path) -> Result<Vec<String>, LocaleMergeError> {
    let dir = open_root(root)?;
    let mut names = Vec::new();
    for entry_result in dir.read_dir(".").map_err(|err| LocaleMergeError::Io {
        path: root.to_path_buf(),
        source: err,
    })? {
        let entry = entry_result.map_err(|err| LocaleMergeError::Io {
            path: root.to_path_buf(),
            source: err,
        })?;
        let file_type = entry.file_type().map_err(|err| LocaleMergeError::Io {
            path: root.to_path_buf(),
            source: err,
        })?;
        if !file_type.is_file() {
            continue;
        }
        let file_name = entry.file_name().map_err(|err| LocaleMergeError::Io {
            path: root.to_path_buf(),
            source: err,
        })?;
        names.push(file_name);
    }

    let mut locales: Vec<String> = names
        .iter()
        .filter_map(|name| {
            name.strip_prefix(SUPPLEMENT_PREFIX)?
                .strip_suffix(DOCUMENT_EXTENSION)
        })
        .filter(|candidate| {
            let base_file = format!("{candidate}{DOCUMENT_EXTENSION}");
            names.iter().any(|name| name == &base_file)
        })
        .map(str::to_owned)
        .collect();
    locales.sort();
    Ok(locales)
}
