//! A line reader for the flat files consumed by this crate.
//!
//! Every input format handled here (karyotypes, PaxDb abundance tables, and
//! the RegulonDB gene, transcription factor, and network tables) is a
//! line-oriented text file where lines starting with `#` are comments. The
//! [`Reader`] takes care of line endings, comments, blank lines, and line
//! numbering so that each parser only has to deal with the fields of a single
//! line.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::{self};
use std::iter;
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// The prefix for a comment line.
pub const COMMENT_PREFIX: char = '#';

/// The extension that marks a gzip-compressed input file.
const GZIP_EXTENSION: &str = "gz";

/// A flat file reader.
#[derive(Clone, Debug)]
pub struct Reader<T>(T)
where
    T: BufRead;

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates a flat file reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"chr - chr1 1 0 100 blue\n";
    /// let reader = circosconf::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"chr - chr1 1 0 100 blue\n";
    /// let cursor = io::Cursor::new(data);
    ///
    /// let reader = circosconf::Reader::new(cursor);
    /// assert_eq!(reader.inner().position(), 0);
    /// ```
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consumes self and returns the inner reader.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Reads a raw, textual line from the underlying reader.
    ///
    /// The trailing line feed (and carriage return, if present) is removed
    /// from the buffer. The returned count is the number of bytes consumed
    /// from the underlying reader, so `0` means the end of the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"# comment\r\nP1\tSTRX.geneA\t10.0";
    /// let mut reader = circosconf::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 11);
    /// assert_eq!(buffer, "# comment");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 18);
    /// assert_eq!(buffer, "P1\tSTRX.geneA\t10.0");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        read_line(self.inner_mut(), buffer)
    }

    /// Returns an iterator over every line in the underlying reader.
    pub fn lines(&mut self) -> impl Iterator<Item = io::Result<String>> + '_ {
        let mut buffer = String::new();

        iter::from_fn(move || match self.read_line_raw(&mut buffer) {
            Ok(0) => None,
            Ok(_) => Some(Ok(buffer.clone())),
            Err(e) => Some(Err(e)),
        })
    }

    /// Returns an iterator over the data lines in the underlying reader.
    ///
    /// Blank lines and comment lines are skipped. Each item carries the
    /// 1-based line number of the line within the input.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"# header\n\nP1\tSTRX.geneA\t10.0\nP2\tSTRX.geneB\t2.0\n";
    /// let mut reader = circosconf::Reader::new(&data[..]);
    ///
    /// let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(records.len(), 2);
    /// assert_eq!(records[0], (3, String::from("P1\tSTRX.geneA\t10.0")));
    /// assert_eq!(records[1].0, 4);
    ///
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn records(&mut self) -> impl Iterator<Item = io::Result<(usize, String)>> + '_ {
        self.lines()
            .enumerate()
            .filter_map(|(i, result)| match result {
                Ok(line) if is_data_line(&line) => Some(Ok((i + 1, line))),
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            })
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

/// Opens a flat file for reading.
///
/// Files ending in `.gz` are transparently decompressed.
pub fn open(path: impl AsRef<Path>) -> io::Result<Reader<Box<dyn BufRead>>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let inner: Box<dyn BufRead> = match path.extension().and_then(|ext| ext.to_str()) {
        Some(GZIP_EXTENSION) => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };

    Ok(Reader::new(inner))
}

/// Returns whether a line carries data (i.e., it is neither blank nor a
/// comment).
fn is_data_line(line: &str) -> bool {
    !line.trim().is_empty() && !line.starts_with(COMMENT_PREFIX)
}

/// Reads a line from a buffered reader.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}
