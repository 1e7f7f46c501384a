//! Document readers and writers scoped to the locale root directory.

use std::io::{Read, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use serde_json::Value;

use crate::error::LocaleMergeError;

/// Opens the locale root directory.
///
/// All document access goes through the returned handle; paths outside the
/// root are unreachable by construction.
///
/// # Errors
///
/// Returns [`LocaleMergeError::Io`] when the directory is missing or cannot
/// be opened.
pub fn open_root(root: &Utf8Path) -> Result<Dir, LocaleMergeError> {
    Dir::open_ambient_dir(root, ambient_authority()).map_err(|err| LocaleMergeError::Io {
        path: root.to_path_buf(),
        source: err,
    })
}

/// Reads and parses the document stored as `name` under `dir`.
///
/// `root` is only used to report full paths in errors.
///
/// # Errors
///
/// Returns [`LocaleMergeError::Io`] when the file is missing or unreadable,
/// [`LocaleMergeError::Parse`] when its contents are not valid JSON, and
/// [`LocaleMergeError::UnexpectedRoot`] when the JSON root is not an object.
pub fn read_document(dir: &Dir, root: &Utf8Path, name: &str) -> Result<Value, LocaleMergeError> {
    let path = root.join(name);
    let mut handle = dir.open(name).map_err(|err| LocaleMergeError::Io {
        path: path.clone(),
        source: err,
    })?;
    let mut contents = String::new();
    handle
        .read_to_string(&mut contents)
        .map_err(|err| LocaleMergeError::Io {
            path: path.clone(),
            source: err,
        })?;

    let document: Value =
        serde_json::from_str(&contents).map_err(|err| LocaleMergeError::Parse {
            path: path.clone(),
            source: err,
        })?;
    if !document.is_object() {
        return Err(LocaleMergeError::UnexpectedRoot { path });
    }
    Ok(document)
}

/// Serializes `document` over the file stored as `name` under `dir`.
///
/// Output uses pretty formatting with sorted object keys and a trailing
/// newline, so successive merges produce clean diffs. The file is truncated
/// in place; `root` is only used to report full paths.
///
/// # Errors
///
/// Returns [`LocaleMergeError::Io`] when the file cannot be created or
/// written, and [`LocaleMergeError::Serialize`] when serialization fails.
pub fn write_document(
    dir: &Dir,
    root: &Utf8Path,
    name: &str,
    document: &Value,
) -> Result<Utf8PathBuf, LocaleMergeError> {
    let path = root.join(name);
    let mut file = dir
        .open_with(
            name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|err| LocaleMergeError::Io {
            path: path.clone(),
            source: err,
        })?;

    let mut contents = serde_json::to_string_pretty(document)?;
    contents.push('\n');
    file.write_all(contents.as_bytes())
        .map_err(|err| LocaleMergeError::Io {
            path: path.clone(),
            source: err,
        })?;

    Ok(path)
}
