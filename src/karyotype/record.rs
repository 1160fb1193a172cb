//! A line within a karyotype file.

use std::str::FromStr;

use crate::karyotype::band::BAND_PREFIX;
use crate::karyotype::band::Band;
use crate::karyotype::band;
use crate::karyotype::chromosome::CHROMOSOME_PREFIX;
use crate::karyotype::chromosome::Chromosome;
use crate::karyotype::chromosome;

/// An error associated with parsing a karyotype record.
#[derive(Debug)]
pub enum ParseError {
    /// An invalid chromosome record.
    InvalidChromosome(chromosome::ParseError),
    /// An invalid band record.
    InvalidBand(band::ParseError),
    /// The line does not start with a known record prefix.
    InvalidPrefix(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidChromosome(err) => write!(f, "invalid chromosome record: {err}"),
            ParseError::InvalidBand(err) => write!(f, "invalid band record: {err}"),
            ParseError::InvalidPrefix(prefix) => write!(
                f,
                "invalid prefix: expected \"{CHROMOSOME_PREFIX}\" or \"{BAND_PREFIX}\", found \
                 \"{prefix}\""
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// A single record of a karyotype.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Record {
    /// A chromosome.
    Chromosome(Chromosome),
    /// A band within a chromosome.
    Band(Band),
}

impl Record {
    /// Returns the chromosome if this record is one.
    pub fn as_chromosome(&self) -> Option<&Chromosome> {
        match self {
            Record::Chromosome(chromosome) => Some(chromosome),
            Record::Band(_) => None,
        }
    }

    /// Returns the band if this record is one.
    pub fn as_band(&self) -> Option<&Band> {
        match self {
            Record::Chromosome(_) => None,
            Record::Band(band) => Some(band),
        }
    }
}

impl From<Chromosome> for Record {
    fn from(chromosome: Chromosome) -> Self {
        Record::Chromosome(chromosome)
    }
}

impl From<Band> for Record {
    fn from(band: Band) -> Self {
        Record::Band(band)
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Record::Chromosome(chromosome) => write!(f, "{chromosome}"),
            Record::Band(band) => write!(f, "{band}"),
        }
    }
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_whitespace().next() {
            Some(CHROMOSOME_PREFIX) => s
                .parse::<Chromosome>()
                .map(Record::Chromosome)
                .map_err(ParseError::InvalidChromosome),
            Some(BAND_PREFIX) => s
                .parse::<Band>()
                .map(Record::Band)
                .map_err(ParseError::InvalidBand),
            other => Err(ParseError::InvalidPrefix(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_chromosome_record() -> Result<(), Box<dyn std::error::Error>> {
        let record = "chr - id label 1 10 blue".parse::<Record>()?;
        assert_eq!(
            record,
            Record::Chromosome(Chromosome::new("id", "label", 1, 10, "blue"))
        );
        assert!(record.as_band().is_none());
        Ok(())
    }

    #[test]
    fn test_valid_band_record() -> Result<(), Box<dyn std::error::Error>> {
        let record = "band id band.id band.label 1 10 blue".parse::<Record>()?;
        assert!(matches!(record, Record::Band(_)));
        assert_eq!(record.as_band().unwrap().chromosome_id(), "id");
        assert_eq!(record.to_string(), "band id band.id band.label 1 10 blue");
        Ok(())
    }

    #[test]
    fn test_invalid_chromosome_record() {
        let err = "chr - id label one 10 blue".parse::<Record>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid chromosome record: invalid start: invalid digit found in string"
        );
    }

    #[test]
    fn test_invalid_prefix() {
        let err = "chromosome - id label 1 10 blue"
            .parse::<Record>()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid prefix: expected \"chr\" or \"band\", found \"chromosome\""
        );

        let err = "".parse::<Record>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid prefix: expected \"chr\" or \"band\", found \"\""
        );
    }
}
