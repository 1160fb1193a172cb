//! Protein abundance tables as distributed by PaxDb.
//!
//! Each data line holds three tab-separated fields: an internal identifier, a
//! STRING identifier of the form `<taxon>.<locus>`, and the abundance. Lines
//! starting with `#` are skipped.

use std::collections::HashMap;
use std::io::BufRead;
use std::io::Write;
use std::io::{self};
use std::num::ParseFloatError;
use std::path::Path;

use tracing::debug;

use crate::Reader;
use crate::config::DataFile;
use crate::datasets::FIELD_DELIMITER;
use crate::datasets::Positions;
use crate::reader;

/// The number of fields in a data line.
const NUM_FIELDS: usize = 3;

/// The delimiter between the taxon and the locus of a STRING identifier.
const STRING_ID_DELIMITER: char = '.';

/// An error related to parsing a data line.
#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// The line does not have the expected number of fields.
    FieldCount(usize),

    /// The STRING identifier does not contain a locus.
    InvalidExternalId(String),

    /// The abundance is not a number.
    InvalidAbundance(ParseFloatError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::FieldCount(count) => {
                write!(f, "expected {NUM_FIELDS} fields, found {count}")
            }
            ParseError::InvalidExternalId(id) => write!(f, "invalid external id: {id}"),
            ParseError::InvalidAbundance(err) => write!(f, "invalid abundance: {err}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// An error related to reading an abundance table.
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// An invalid line at the given (1-based) line number.
    Parse(usize, ParseError),

    /// An abundance at the given (1-based) line number that the normalization
    /// is not defined for.
    Normalization(usize, f64),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Parse(line_no, err) => write!(f, "invalid line {line_no}: {err}"),
            Error::Normalization(line_no, value) => write!(
                f,
                "cannot normalize the abundance at line {line_no}: {value} is not positive"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// The transformation applied to every abundance.
#[derive(Clone, Copy, Debug, Default)]
pub enum Normalization {
    /// The natural logarithm.
    #[default]
    NaturalLog,
    /// The base 2 logarithm.
    Log2,
    /// The base 10 logarithm.
    Log10,
    /// No transformation.
    Identity,
    /// A caller-supplied transformation.
    Custom(fn(f64) -> f64),
}

impl Normalization {
    /// Applies the normalization.
    ///
    /// Returns [`None`] when a logarithm is asked of a value that is not
    /// positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::datasets::abundance::Normalization;
    ///
    /// assert_eq!(Normalization::Log10.apply(100.0), Some(2.0));
    /// assert_eq!(Normalization::NaturalLog.apply(0.0), None);
    /// assert_eq!(Normalization::Identity.apply(0.0), Some(0.0));
    /// assert_eq!(Normalization::Custom(|value| value * 2.0).apply(3.0), Some(6.0));
    /// ```
    pub fn apply(&self, value: f64) -> Option<f64> {
        let logarithm = |log: fn(f64) -> f64| (value > 0.0).then(|| log(value));

        match self {
            Normalization::NaturalLog => logarithm(f64::ln),
            Normalization::Log2 => logarithm(f64::log2),
            Normalization::Log10 => logarithm(f64::log10),
            Normalization::Identity => Some(value),
            Normalization::Custom(normalize) => Some(normalize(value)),
        }
    }
}

/// Parses a single data line into a locus and its raw abundance.
fn parse_line(line: &str) -> std::result::Result<(&str, f64), ParseError> {
    let fields = line.split(FIELD_DELIMITER).collect::<Vec<_>>();

    let [_, external_id, abundance] = fields[..] else {
        return Err(ParseError::FieldCount(fields.len()));
    };

    let (_, locus) = external_id
        .split_once(STRING_ID_DELIMITER)
        .filter(|(_, locus)| !locus.is_empty() && !locus.contains(STRING_ID_DELIMITER))
        .ok_or_else(|| ParseError::InvalidExternalId(external_id.to_string()))?;

    let abundance = abundance
        .trim()
        .parse::<f64>()
        .map_err(ParseError::InvalidAbundance)?;

    Ok((locus, abundance))
}

/// Parses an abundance table into normalized abundances keyed by locus.
///
/// A locus that appears more than once keeps its last abundance.
///
/// # Examples
///
/// ```
/// use circosconf::datasets::abundance;
/// use circosconf::datasets::abundance::Normalization;
/// use circosconf::Reader;
///
/// let data = b"#organism: 511145\n9606\t511145.b0001\t100.0\n9607\t511145.b0002\t1.0\n";
/// let abundances = abundance::parse(Reader::new(&data[..]), Normalization::Log10)?;
///
/// assert_eq!(abundances["b0001"], 2.0);
/// assert_eq!(abundances["b0002"], 0.0);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse<T>(mut reader: Reader<T>, normalization: Normalization) -> Result<HashMap<String, f64>>
where
    T: BufRead,
{
    let mut abundances = HashMap::new();

    for result in reader.records() {
        let (line_no, line) = result.map_err(Error::Io)?;
        let (locus, abundance) =
            parse_line(&line).map_err(|err| Error::Parse(line_no, err))?;

        let normalized = normalization
            .apply(abundance)
            .ok_or(Error::Normalization(line_no, abundance))?;

        abundances.insert(locus.to_string(), normalized);
    }

    debug!(loci = abundances.len(), "parsed protein abundances");
    Ok(abundances)
}

/// Parses the abundance table at `path` (which may be gzipped).
pub fn parse_path(
    path: impl AsRef<Path>,
    normalization: Normalization,
) -> Result<HashMap<String, f64>> {
    let reader = reader::open(path).map_err(Error::Io)?;
    parse(reader, normalization)
}

/// Writes abundances as a track: one `chromosome start end value` line per
/// locus with a known position.
///
/// Lines are ordered by chromosome, start, and locus. Loci without a position
/// are skipped. Returns the number of lines written.
pub fn write_track<W>(
    writer: &mut W,
    abundances: &HashMap<String, f64>,
    positions: &Positions,
) -> io::Result<usize>
where
    W: Write + ?Sized,
{
    let mut rows = Vec::with_capacity(abundances.len());

    for (locus, value) in abundances {
        match positions.get(locus) {
            Some(position) => rows.push((position, locus, value)),
            None => debug!(locus, "skipping locus without a position"),
        }
    }

    rows.sort_by(|(a, a_locus, _), (b, b_locus, _)| {
        (a.chromosome(), a.start(), a_locus).cmp(&(b.chromosome(), b.start(), b_locus))
    });

    for (position, _, value) in &rows {
        writeln!(
            writer,
            "{} {} {} {value:.6}",
            position.chromosome(),
            position.start(),
            position.stop()
        )?;
    }

    Ok(rows.len())
}

/// Writes abundances as a track to a new temporary data file.
///
/// See [`write_track()`] for the format.
pub fn to_data_file(abundances: &HashMap<String, f64>, positions: &Positions) -> io::Result<DataFile> {
    DataFile::from_writer(|writer| write_track(writer, abundances, positions).map(|_| ()))
}

#[cfg(test)]
mod tests {
    use crate::datasets::Position;
    use super::*;

    #[test]
    fn test_default_normalization_is_natural_log() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let abundances = parse(
            Reader::new(&b"P1\tSTRX.geneA\t10.0"[..]),
            Normalization::default(),
        )?;

        assert_eq!(abundances.len(), 1);
        assert_eq!(abundances["geneA"], 10.0f64.ln());

        Ok(())
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let data = b"#species: 511145\n#score: 30.2\n\nP1\tSTRX.geneA\t1.0\r\n";
        let abundances = parse(Reader::new(&data[..]), Normalization::Identity)?;

        assert_eq!(abundances.len(), 1);
        assert_eq!(abundances["geneA"], 1.0);

        Ok(())
    }

    #[test]
    fn test_non_positive_abundance_cannot_be_logged() {
        let data = b"P1\tSTRX.geneA\t1.0\nP2\tSTRX.geneB\t0\n";
        let err = parse(Reader::new(&data[..]), Normalization::NaturalLog).unwrap_err();

        assert!(matches!(err, Error::Normalization(2, value) if value == 0.0));
    }

    #[test]
    fn test_invalid_lines() {
        let err = parse(Reader::new(&b"P1\tSTRX.geneA\n"[..]), Normalization::Identity)
            .unwrap_err();
        assert!(matches!(err, Error::Parse(1, ParseError::FieldCount(2))));

        let err = parse(Reader::new(&b"P1\tgeneA\t1.0\n"[..]), Normalization::Identity)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(1, ParseError::InvalidExternalId(ref id)) if id == "geneA"
        ));

        let err = parse(
            Reader::new(&b"P1\t511145.b0001.extra\t1.0\n"[..]),
            Normalization::Identity,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(1, ParseError::InvalidExternalId(ref id)) if id == "511145.b0001.extra"
        ));

        let err = parse(Reader::new(&b"P1\tSTRX.geneA\tmany\n"[..]), Normalization::Identity)
            .unwrap_err();
        assert!(matches!(err, Error::Parse(1, ParseError::InvalidAbundance(_))));
    }

    #[test]
    fn test_write_track() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let abundances = HashMap::from([
            (String::from("b0002"), 2.5),
            (String::from("b0001"), 1.0),
            (String::from("b9999"), 3.0),
        ]);
        let positions = Positions::from([
            (String::from("b0001"), Position::new("chr1", 190, 255)),
            (String::from("b0002"), Position::new("chr1", 337, 2799)),
        ]);

        let mut buffer = Vec::new();
        let written = write_track(&mut buffer, &abundances, &positions)?;

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(buffer)?,
            "chr1 190 255 1.000000\nchr1 337 2799 2.500000\n"
        );

        Ok(())
    }

    #[test]
    fn test_to_data_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let abundances = HashMap::from([(String::from("b0001"), 0.5)]);
        let positions = Positions::from([(String::from("b0001"), Position::new("chr1", 1, 2))]);

        let file = to_data_file(&abundances, &positions)?;
        assert_eq!(std::fs::read_to_string(file.path())?, "chr1 1 2 0.500000\n");

        Ok(())
    }
}
