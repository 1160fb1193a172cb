//! Transcriptional regulatory networks as distributed by RegulonDB.
//!
//! A network is assembled from three tab-separated files:
//!
//! * the gene products (`GeneProductSet.txt`), read by [`parse_genes()`],
//! * the transcription factors (`TFSet.txt`), read by
//!   [`parse_transcription_factors()`], and
//! * the regulatory interactions (`network_tf_gene.txt`), read by
//!   [`parse_interactions()`], which cross-references the two previous
//!   tables.
//!
//! The resulting [`Interaction`]s are turned into a link data file with
//! [`write_links()`] or [`to_data_file()`].

pub mod factor;
pub mod gene;
pub mod interaction;

use std::io::Write;
use std::io::{self};
use std::num::ParseIntError;
use std::path::Path;

pub use factor::TranscriptionFactor;
pub use factor::TranscriptionFactors;
pub use factor::parse_transcription_factors;
pub use gene::Gene;
pub use gene::Genes;
pub use gene::parse_genes;
pub use interaction::Interaction;
pub use interaction::Regulation;
pub use interaction::parse_interactions;

use tracing::debug;
use tracing::info;

use crate::config::DataFile;
use crate::datasets::Positions;
use crate::reader;

/// An error related to parsing a data line.
#[derive(Debug, PartialEq)]
pub enum ParseError {
    /// A required field is missing.
    MissingField(&'static str),

    /// The start position is not an integer.
    InvalidStart(ParseIntError),

    /// The end position is not an integer.
    InvalidEnd(ParseIntError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingField(field) => write!(f, "missing field: {field}"),
            ParseError::InvalidStart(err) => write!(f, "invalid start: {err}"),
            ParseError::InvalidEnd(err) => write!(f, "invalid end: {err}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// An error where a name could not be resolved while cross-referencing the
/// tables.
///
/// These errors are logged and the offending interaction is skipped.
#[derive(Debug, PartialEq)]
pub enum LookupError {
    /// No gene has this name.
    Gene(String),

    /// No transcription factor has this name.
    TranscriptionFactor(String),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Gene(name) => write!(f, "unknown gene: {name}"),
            LookupError::TranscriptionFactor(name) => {
                write!(f, "unknown transcription factor: {name}")
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// An error related to reading a regulatory network.
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// An invalid line at the given (1-based) line number.
    Parse(usize, ParseError),

    /// Two genes with a locus share the same (case-insensitive) name.
    DuplicateName(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Parse(line_no, err) => write!(f, "invalid line {line_no}: {err}"),
            Error::DuplicateName(name) => write!(f, "duplicate gene name: {name}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Gets the field at `index`, failing if it is absent.
pub(crate) fn field<'a>(
    fields: &[&'a str],
    index: usize,
    name: &'static str,
) -> std::result::Result<&'a str, ParseError> {
    fields
        .get(index)
        .copied()
        .ok_or(ParseError::MissingField(name))
}

/// Parses the three tables at the given paths (which may be gzipped) into
/// the interactions of the network.
pub fn parse(
    genes: impl AsRef<Path>,
    transcription_factors: impl AsRef<Path>,
    interactions: impl AsRef<Path>,
) -> Result<Vec<Interaction>> {
    let genes = parse_genes(reader::open(genes).map_err(Error::Io)?)?;
    let transcription_factors =
        parse_transcription_factors(reader::open(transcription_factors).map_err(Error::Io)?)?;
    let interactions = parse_interactions(
        reader::open(interactions).map_err(Error::Io)?,
        &genes,
        &transcription_factors,
    )?;

    info!(
        genes = genes.len(),
        transcription_factors = transcription_factors.len(),
        interactions = interactions.len(),
        "parsed regulatory network"
    );

    Ok(interactions)
}

/// Writes interactions as links: one
/// `chrA startA endA chrB startB endB color=<color>` line per interaction
/// whose regulator and target both have a position.
///
/// The link runs from the regulator to the target and is colored by the
/// [regulation](Regulation::color). Interactions missing a position are
/// dropped. Returns the number of lines written.
///
/// # Examples
///
/// ```
/// use circosconf::datasets::regulondb;
/// use circosconf::datasets::regulondb::Gene;
/// use circosconf::datasets::regulondb::Interaction;
/// use circosconf::datasets::regulondb::Regulation;
/// use circosconf::datasets::position;
///
/// let regulator = Gene::new("crp", "b3357", 3486120, 3486752);
/// let target = Gene::new("araC", "b0064", 70387, 71265);
/// let positions = position::from_genes([&regulator, &target], "chr");
///
/// let interactions = [Interaction::new(regulator, target, Regulation::Activator)];
///
/// let mut buffer = Vec::new();
/// regulondb::write_links(&mut buffer, &interactions, &positions)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "chr 3486120 3486752 chr 70387 71265 color=green\n"
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_links<W>(
    writer: &mut W,
    interactions: &[Interaction],
    positions: &Positions,
) -> io::Result<usize>
where
    W: Write + ?Sized,
{
    let mut written = 0;

    for interaction in interactions {
        let (Some(from), Some(to)) = (
            positions.get(interaction.regulator().locus()),
            positions.get(interaction.target().locus()),
        ) else {
            continue;
        };

        writeln!(
            writer,
            "{} {} {} {} {} {} color={}",
            from.chromosome(),
            from.start(),
            from.stop(),
            to.chromosome(),
            to.start(),
            to.stop(),
            interaction.regulation().color()
        )?;

        written += 1;
    }

    debug!(
        written,
        dropped = interactions.len() - written,
        "wrote regulatory links"
    );

    Ok(written)
}

/// Writes interactions as links to a new temporary data file.
///
/// See [`write_links()`] for the format.
pub fn to_data_file(interactions: &[Interaction], positions: &Positions) -> io::Result<DataFile> {
    DataFile::from_writer(|writer| write_links(writer, interactions, positions).map(|_| ()))
}

#[cfg(test)]
mod tests {
    use crate::datasets::Position;
    use super::*;

    fn gene(name: &str, locus: &str) -> Gene {
        Gene::new(name, locus, 0, 0)
    }

    #[test]
    fn test_regulation_colors_and_missing_positions() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let regulator = gene("crp", "b1");
        let interactions = [
            Interaction::new(regulator.clone(), gene("a", "b2"), Regulation::Activator),
            Interaction::new(regulator.clone(), gene("b", "b3"), Regulation::Repressor),
            Interaction::new(regulator.clone(), gene("c", "b4"), Regulation::Dual),
            Interaction::new(regulator.clone(), gene("d", "b5"), "?".into()),
            Interaction::new(regulator.clone(), gene("e", "b6"), Regulation::Activator),
            Interaction::new(gene("f", "b7"), gene("a", "b2"), Regulation::Activator),
        ];

        let positions = Positions::from([
            (String::from("b1"), Position::new("chr", 1, 2)),
            (String::from("b2"), Position::new("chr", 3, 4)),
            (String::from("b3"), Position::new("chr", 5, 6)),
            (String::from("b4"), Position::new("chr", 7, 8)),
            (String::from("b5"), Position::new("chr", 9, 10)),
        ]);

        let mut buffer = Vec::new();
        let written = write_links(&mut buffer, &interactions, &positions)?;

        assert_eq!(written, 4);
        assert_eq!(
            String::from_utf8(buffer)?,
            "chr 1 2 chr 3 4 color=green\nchr 1 2 chr 5 6 color=red\nchr 1 2 chr 7 8 \
             color=blue\nchr 1 2 chr 9 10 color=grey\n"
        );

        Ok(())
    }

    #[test]
    fn test_to_data_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let interactions = [Interaction::new(
            gene("crp", "b1"),
            gene("a", "b2"),
            Regulation::Repressor,
        )];
        let positions = Positions::from([
            (String::from("b1"), Position::new("chr", 1, 2)),
            (String::from("b2"), Position::new("chr", 3, 4)),
        ]);

        let file = to_data_file(&interactions, &positions)?;
        assert_eq!(
            std::fs::read_to_string(file.path())?,
            "chr 1 2 chr 3 4 color=red\n"
        );

        Ok(())
    }

    #[test]
    fn test_parse_paths() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let directory = tempfile::tempdir()?;

        let genes = directory.path().join("GeneProductSet.txt");
        std::fs::write(
            &genes,
            "# RegulonDB gene products\nECK1\tcrp\tb3357\t3486120\t3486752\nECK2\taraC\tb0064\t70387\t71265\n",
        )?;

        let factors = directory.path().join("TFSet.txt");
        std::fs::write(&factors, "ECK125\tCRP\tcrp\n")?;

        let interactions = directory.path().join("network_tf_gene.txt");
        std::fs::write(&interactions, "CRP\taraC\t+\n")?;

        let interactions = parse(&genes, &factors, &interactions)?;
        assert_eq!(interactions.len(), 1);
        assert_eq!(interactions[0].regulator().locus(), "b3357");
        assert_eq!(interactions[0].target().locus(), "b0064");
        assert_eq!(interactions[0].regulation(), &Regulation::Activator);

        Ok(())
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse("/does/not/exist", "/does/not/exist", "/does/not/exist").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
