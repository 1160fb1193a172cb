//! Transcription factors.

use std::collections::HashMap;
use std::io::BufRead;

use nonempty::NonEmpty;
use tracing::warn;

use crate::Reader;
use crate::datasets::FIELD_DELIMITER;
use crate::datasets::regulondb::Error;
use crate::datasets::regulondb::Result;
use crate::datasets::regulondb::field;

/// The delimiter between the genes encoding a transcription factor.
const GENE_DELIMITER: &str = ", ";

/// A transcription factor and the genes that encode it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TranscriptionFactor {
    /// The identifier.
    id: String,
    /// The name.
    name: String,
    /// The names of the genes that encode the factor.
    genes: NonEmpty<String>,
}

impl TranscriptionFactor {
    /// Creates a new [`TranscriptionFactor`].
    pub fn new(id: impl Into<String>, name: impl Into<String>, genes: NonEmpty<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            genes,
        }
    }

    /// Gets the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the names of the genes that encode the factor.
    pub fn genes(&self) -> &NonEmpty<String> {
        &self.genes
    }
}

/// Transcription factors keyed by uppercased name.
pub type TranscriptionFactors = HashMap<String, TranscriptionFactor>;

/// Parses a transcription factor table.
///
/// Each data line holds the identifier, the name, and the `, `-separated
/// names of the genes encoding a factor. Factors are keyed by their uppercased
/// name. When two lines declare the same name, the last one is kept. Lines
/// that list no gene are skipped.
///
/// # Examples
///
/// ```
/// use circosconf::datasets::regulondb;
/// use circosconf::Reader;
///
/// let data = b"ECK125286586\tAraC\taraC\nECK125286587\tIHF\tihfA, ihfB\n";
/// let factors = regulondb::parse_transcription_factors(Reader::new(&data[..]))?;
///
/// assert_eq!(factors.len(), 2);
/// assert_eq!(factors["IHF"].genes().len(), 2);
/// assert_eq!(factors["ARAC"].genes().first(), "araC");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_transcription_factors<T>(mut reader: Reader<T>) -> Result<TranscriptionFactors>
where
    T: BufRead,
{
    let mut factors = TranscriptionFactors::new();

    for result in reader.records() {
        let (line_no, line) = result.map_err(Error::Io)?;
        let fields = line.split(FIELD_DELIMITER).collect::<Vec<_>>();

        let id = field(&fields, 0, "id").map_err(|err| Error::Parse(line_no, err))?;
        let name = field(&fields, 1, "name").map_err(|err| Error::Parse(line_no, err))?;
        let genes = field(&fields, 2, "genes").map_err(|err| Error::Parse(line_no, err))?;

        let genes = genes
            .split(GENE_DELIMITER)
            .map(str::trim)
            .filter(|gene| !gene.is_empty())
            .map(String::from)
            .collect::<Vec<_>>();

        let Some(genes) = NonEmpty::from_vec(genes) else {
            warn!(line_no, name, "skipping transcription factor without genes");
            continue;
        };

        let factor = TranscriptionFactor::new(id, name, genes);

        if let Some(previous) = factors.insert(name.to_uppercase(), factor) {
            warn!(
                line_no,
                name,
                previous = previous.id(),
                "transcription factor declared more than once, keeping the last declaration"
            );
        }
    }

    Ok(factors)
}

#[cfg(test)]
mod tests {
    use crate::datasets::regulondb::ParseError;
    use super::*;

    #[test]
    fn test_duplicate_factors_keep_the_last() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let data = b"ECK1\tFis\tfis\nECK2\tFIS\tfis, fisB\n";
        let factors = parse_transcription_factors(Reader::new(&data[..]))?;

        assert_eq!(factors.len(), 1);
        assert_eq!(factors["FIS"].id(), "ECK2");
        assert_eq!(factors["FIS"].name(), "FIS");
        assert_eq!(
            factors["FIS"].genes().iter().collect::<Vec<_>>(),
            vec!["fis", "fisB"]
        );

        Ok(())
    }

    #[test]
    fn test_factors_without_genes_are_skipped(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let data = b"ECK1\tFis\t\nECK2\tCRP\tcrp\n";
        let factors = parse_transcription_factors(Reader::new(&data[..]))?;

        assert_eq!(factors.len(), 1);
        assert!(factors.contains_key("CRP"));

        Ok(())
    }

    #[test]
    fn test_missing_genes_field() {
        let err = parse_transcription_factors(Reader::new(&b"ECK1\tFis\n"[..])).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(1, ParseError::MissingField("genes"))
        ));
    }
}
