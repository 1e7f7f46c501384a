//! Test helpers shared across crates.
//!
//! This crate currently provides temporary locale-tree fixtures.

pub mod fixtures {
    //! Temporary locale directories populated with document pairs.
    //!
    //! Each fixture owns its backing directory, which is removed when the
    //! fixture is dropped.
    //!
    //! # Examples
    //!
    //! ```
    //! use test_helpers::fixtures::LocaleTree;
    //!
    //! let tree = LocaleTree::new().expect("create locale tree");
    //! tree.write_pair("en", r#"{"a": 1}"#, r#"{"b": 2}"#)
    //!     .expect("write pair");
    //! ```

    use std::fs;

    use anyhow::Context;
    use camino::{Utf8Path, Utf8PathBuf};
    use tempfile::TempDir;

    /// Temporary directory laid out as a locale root.
    pub struct LocaleTree {
        _temp: TempDir,
        root: Utf8PathBuf,
    }

    impl LocaleTree {
        /// Creates an empty locale root in a fresh temporary directory.
        ///
        /// # Errors
        ///
        /// Fails when the temporary directory cannot be created or its path
        /// is not valid UTF-8.
        pub fn new() -> anyhow::Result<Self> {
            let temp = TempDir::new().context("create temporary directory")?;
            let root = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).map_err(|path| {
                anyhow::anyhow!("temporary directory is not UTF-8: {}", path.display())
            })?;
            Ok(Self { _temp: temp, root })
        }

        /// Root of the locale tree.
        #[must_use]
        pub fn root(&self) -> &Utf8Path {
            &self.root
        }

        /// Writes an arbitrary file directly under the root.
        ///
        /// # Errors
        ///
        /// Propagates any I/O failure from the write.
        pub fn write_file(&self, name: &str, contents: &str) -> anyhow::Result<()> {
            fs::write(self.root.join(name), contents).with_context(|| format!("write {name}"))
        }

        /// Writes the `<locale>.json` / `missing_<locale>.json` pair.
        ///
        /// # Errors
        ///
        /// Propagates any I/O failure from the writes.
        pub fn write_pair(&self, locale: &str, base: &str, supplement: &str) -> anyhow::Result<()> {
            self.write_file(&format!("{locale}.json"), base)?;
            self.write_file(&format!("missing_{locale}.json"), supplement)
        }

        /// Reads a file under the root back as a string.
        ///
        /// # Errors
        ///
        /// Propagates any I/O failure from the read.
        pub fn read_file(&self, name: &str) -> anyhow::Result<String> {
            fs::read_to_string(self.root.join(name)).with_context(|| format!("read {name}"))
        }
    }
}
