//! Data files referenced from a configuration.
//!
//! Plots, links, highlights and karyotypes all point Circos at a data file
//! through a `file = <path>` parameter. A [`DataFile`] is either an existing
//! file on disk or a temporary file that was written from in-memory data. In
//! the latter case the [`DataFile`] owns the temporary file, which is removed
//! when the [`DataFile`] is dropped, so the node holding it must outlive the
//! Circos invocation.

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::io::{self};
use std::path::Path;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// The prefix of every temporary data file.
const TEMPORARY_PREFIX: &str = "circosconf-";

/// The suffix of every temporary data file.
const TEMPORARY_SUFFIX: &str = ".txt";

/// The delimiter between the fields of a row written by
/// [`DataFile::from_rows()`].
pub const FIELD_DELIMITER: &str = "\t";

/// The backing storage of a [`DataFile`].
#[derive(Debug)]
enum Inner {
    /// A file that existed before the configuration was built.
    Existing {
        /// The path to the file.
        path: PathBuf,
        /// The open handle.
        handle: File,
    },

    /// A temporary file written from in-memory data.
    Temporary(NamedTempFile),
}

/// A data file referenced by a configuration node.
#[derive(Debug)]
pub struct DataFile(Inner);

impl DataFile {
    /// Opens an existing data file.
    ///
    /// Fails with [`io::ErrorKind::NotFound`] if the path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::config::DataFile;
    ///
    /// let err = DataFile::open("/does/not/exist.txt").unwrap_err();
    /// assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    /// ```
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let handle = File::open(&path)?;
        Ok(Self(Inner::Existing { path, handle }))
    }

    /// Creates a temporary data file whose contents are produced by `produce`.
    ///
    /// The contents are flushed to disk before this method returns.
    pub fn from_writer<F>(produce: F) -> io::Result<Self>
    where
        F: FnOnce(&mut dyn Write) -> io::Result<()>,
    {
        let mut file = tempfile::Builder::new()
            .prefix(TEMPORARY_PREFIX)
            .suffix(TEMPORARY_SUFFIX)
            .tempfile()?;

        {
            let mut writer = BufWriter::new(file.as_file_mut());
            produce(&mut writer)?;
            writer.flush()?;
        }

        file.flush()?;
        Ok(Self(Inner::Temporary(file)))
    }

    /// Creates a temporary data file holding `text` verbatim.
    pub fn from_text(text: &str) -> io::Result<Self> {
        Self::from_writer(|writer| writer.write_all(text.as_bytes()))
    }

    /// Creates a temporary data file from a table.
    ///
    /// Each row is written on its own line with its fields separated by tabs.
    /// No header and no index column are written.
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::config::DataFile;
    ///
    /// let file = DataFile::from_rows([["hs1", "0", "100", "0.5"], ["hs1", "100", "200", "0.25"]])?;
    /// assert_eq!(
    ///     std::fs::read_to_string(file.path())?,
    ///     "hs1\t0\t100\t0.5\nhs1\t100\t200\t0.25\n"
    /// );
    ///
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn from_rows<I, R, F>(rows: I) -> io::Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = F>,
        F: std::fmt::Display,
    {
        Self::from_writer(|writer| {
            for row in rows {
                let row = row
                    .into_iter()
                    .map(|field| field.to_string())
                    .collect::<Vec<_>>();
                writeln!(writer, "{}", row.join(FIELD_DELIMITER))?;
            }

            Ok(())
        })
    }

    /// Gets the path of the data file.
    pub fn path(&self) -> &Path {
        match &self.0 {
            Inner::Existing { path, .. } => path,
            Inner::Temporary(file) => file.path(),
        }
    }

    /// Gets the open handle to the data file.
    pub fn handle(&self) -> &File {
        match &self.0 {
            Inner::Existing { handle, .. } => handle,
            Inner::Temporary(file) => file.as_file(),
        }
    }

    /// Returns whether the data file is owned (and will be removed) by this
    /// [`DataFile`].
    pub fn is_temporary(&self) -> bool {
        matches!(self.0, Inner::Temporary(_))
    }
}

impl std::fmt::Display for DataFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path().display())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read as _;

    use super::*;

    #[test]
    fn test_open_existing_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "hs1 0 10 1.0")?;

        let data = DataFile::open(file.path())?;
        assert_eq!(data.path(), file.path());
        assert!(!data.is_temporary());

        let mut contents = String::new();
        let mut handle = data.handle();
        handle.read_to_string(&mut contents)?;
        assert_eq!(contents, "hs1 0 10 1.0\n");

        Ok(())
    }

    #[test]
    fn test_open_missing_file() {
        let err = DataFile::open("/does/not/exist.txt").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_rows_are_tab_separated() -> Result<(), Box<dyn std::error::Error>> {
        let data = DataFile::from_rows(vec![
            vec![String::from("hs1"), 0.to_string(), 10.to_string()],
            vec![String::from("hs2"), 5.to_string(), 15.to_string()],
        ])?;

        assert!(data.is_temporary());
        assert_eq!(
            std::fs::read_to_string(data.path())?,
            "hs1\t0\t10\nhs2\t5\t15\n"
        );

        Ok(())
    }

    #[test]
    fn test_temporary_file_is_removed_on_drop() -> Result<(), Box<dyn std::error::Error>> {
        let data = DataFile::from_text("chr - hs1 1 0 10 red\n")?;
        let path = data.path().to_path_buf();
        assert!(path.exists());

        drop(data);
        assert!(!path.exists());

        Ok(())
    }
}
