//! Karyotypes: the chromosomes (and their bands) drawn around the circle.

pub mod band;
pub mod chromosome;
pub mod record;

use std::collections::HashMap;
use std::io::BufRead;
use std::io::{self};
use std::path::Path;

pub use band::Band;
pub use chromosome::Chromosome;
pub use record::Record;

use crate::Reader;
use crate::config::DataFile;
use crate::reader;

/// The color given to a chromosome when no color was provided for it.
pub const DEFAULT_CHROMOSOME_COLOR: &str = "grey";

/// The first position of a chromosome created from a sequence.
const SEQUENCE_START: u64 = 1;

/// An error related to reading a [`Karyotype`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// An invalid record at the given (1-based) line number.
    Record(usize, record::ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Record(line_no, err) => write!(f, "invalid record at line {line_no}: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// An error where a field of a record is not a single token.
///
/// Record fields are separated by whitespace, so a field that is empty or
/// contains whitespace would not parse back after rendering.
#[derive(Debug, Eq, PartialEq)]
pub struct InvalidTokenError {
    /// The name of the field.
    pub field: &'static str,
    /// The rejected value.
    pub value: String,
}

impl std::fmt::Display for InvalidTokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {}: {:?} is not a single token", self.field, self.value)
    }
}

impl std::error::Error for InvalidTokenError {}

/// Fails unless `value` is a non-empty run of non-whitespace characters.
pub(crate) fn check_token(
    field: &'static str,
    value: &str,
) -> std::result::Result<(), InvalidTokenError> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(InvalidTokenError {
            field,
            value: value.to_string(),
        });
    }

    Ok(())
}

/// An ordered set of karyotype records.
///
/// The order of the records is the order in which they are written to the
/// karyotype file. Conventionally, chromosomes are listed first and are then
/// followed by their bands.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Karyotype {
    /// The records.
    rows: Vec<Record>,
}

impl Karyotype {
    /// Creates a new karyotype from its records.
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::karyotype::Band;
    /// use circosconf::karyotype::Chromosome;
    /// use circosconf::Karyotype;
    ///
    /// let karyotype = Karyotype::new(vec![
    ///     Chromosome::new("hs1", "1", 0, 100, "red").into(),
    ///     Band::new("hs1", "p1", "p1", 0, 50, "gneg").into(),
    /// ]);
    ///
    /// assert_eq!(
    ///     karyotype.to_string(),
    ///     "chr - hs1 1 0 100 red\nband hs1 p1 p1 0 50 gneg"
    /// );
    /// ```
    pub fn new(rows: Vec<Record>) -> Self {
        Self { rows }
    }

    /// Reads a karyotype from a [`Reader`].
    ///
    /// Blank lines and `#` comment lines are skipped; every other line must
    /// be a chromosome or a band record.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"# yeast\nchr - I I 0 230218 red\nchr - II II 0 813184 blue\n";
    /// let reader = circosconf::Reader::new(&data[..]);
    ///
    /// let karyotype = circosconf::Karyotype::from_reader(reader)?;
    /// assert_eq!(karyotype.chromosomes().count(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_reader<T>(mut reader: Reader<T>) -> Result<Self>
    where
        T: BufRead,
    {
        let mut rows = Vec::new();

        for result in reader.records() {
            let (line_no, line) = result.map_err(Error::Io)?;
            let record = line
                .parse::<Record>()
                .map_err(|err| Error::Record(line_no, err))?;
            rows.push(record);
        }

        Ok(Self::new(rows))
    }

    /// Reads a karyotype from a file (optionally gzipped).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        reader::open(path)
            .map_err(Error::Io)
            .and_then(Self::from_reader)
    }

    /// Creates a karyotype with one chromosome per sequence.
    ///
    /// Each sequence is given as `(id, name, length)` and becomes a
    /// chromosome spanning positions `1` through `length`. The color is looked
    /// up by the sequence id in `colors` and falls back to
    /// [`DEFAULT_CHROMOSOME_COLOR`].
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use circosconf::Karyotype;
    ///
    /// let colors = HashMap::from([(String::from("NC_000913.3"), String::from("blue"))]);
    /// let karyotype = Karyotype::from_sequences(
    ///     [("NC_000913.3", "U00096", 4641652), ("pOSAK1", "pOSAK1", 4083)],
    ///     &colors,
    /// );
    ///
    /// assert_eq!(
    ///     karyotype.to_string(),
    ///     "chr - NC_000913.3 U00096 1 4641652 blue\nchr - pOSAK1 pOSAK1 1 4083 grey"
    /// );
    /// ```
    pub fn from_sequences<I, S>(sequences: I, colors: &HashMap<String, String>) -> Self
    where
        I: IntoIterator<Item = (S, S, u64)>,
        S: Into<String>,
    {
        let rows = sequences
            .into_iter()
            .map(|(id, name, length)| {
                let id = id.into();
                let color = colors
                    .get(&id)
                    .map(String::as_str)
                    .unwrap_or(DEFAULT_CHROMOSOME_COLOR)
                    .to_string();
                Record::from(Chromosome::new(id, name, SEQUENCE_START, length, color))
            })
            .collect();

        Self::new(rows)
    }

    /// Gets the records of the karyotype.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Gets an iterator over the chromosomes of the karyotype.
    pub fn chromosomes(&self) -> impl Iterator<Item = &Chromosome> {
        self.rows.iter().filter_map(Record::as_chromosome)
    }

    /// Gets an iterator over the bands of the karyotype.
    pub fn bands(&self) -> impl Iterator<Item = &Band> {
        self.rows.iter().filter_map(Record::as_band)
    }

    /// Writes the karyotype to a new temporary file.
    pub fn to_data_file(&self) -> io::Result<DataFile> {
        DataFile::from_text(&format!("{self}\n"))
    }
}

impl From<Vec<Record>> for Karyotype {
    fn from(rows: Vec<Record>) -> Self {
        Self::new(rows)
    }
}

impl FromIterator<Record> for Karyotype {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl std::str::FromStr for Karyotype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(Reader::new(s.as_bytes()))
    }
}

impl std::fmt::Display for Karyotype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .rows
            .iter()
            .map(|record| record.to_string())
            .collect::<Vec<_>>();

        write!(f, "{}", rows.join("\n"))
    }
}
