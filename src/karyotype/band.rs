//! A band record within a karyotype.

use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::karyotype::InvalidTokenError;
use crate::karyotype::check_token;

/// The prefix for a band record.
pub const BAND_PREFIX: &str = "band";

/// The shape of a band record.
static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^band\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s*$").unwrap()
});

/// An error associated with parsing a band record.
#[derive(Debug)]
pub enum ParseError {
    /// The line does not have the shape of a band record.
    InvalidFormat(String),
    /// An invalid start position.
    InvalidStart(ParseIntError),
    /// An invalid stop position.
    InvalidStop(ParseIntError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidFormat(s) => write!(
                f,
                "invalid format: expected \"band <chromosome> <id> <label> <start> <stop> \
                 <color>\", found \"{s}\""
            ),
            ParseError::InvalidStart(err) => write!(f, "invalid start: {err}"),
            ParseError::InvalidStop(err) => write!(f, "invalid stop: {err}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A cytogenetic band (or any other sub-region) of a chromosome.
///
/// The chromosome a band belongs to is referenced by its identifier only.
/// Whether that chromosome is declared anywhere is not checked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Band {
    /// The identifier of the parent chromosome.
    chromosome_id: String,
    /// The identifier of the band.
    id: String,
    /// The label of the band.
    label: String,
    /// The start position.
    start: u64,
    /// The stop position.
    stop: u64,
    /// The color of the band.
    color: String,
}

impl Band {
    /// Creates a new band record.
    ///
    /// Text fields must be non-empty and free of whitespace for the record to
    /// parse back; [`Band::try_new()`] checks this.
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::karyotype::Band;
    ///
    /// let band = Band::new("id", "band.id", "band.label", 1, 10, "blue");
    /// assert_eq!(band.to_string(), "band id band.id band.label 1 10 blue");
    /// ```
    pub fn new(
        chromosome_id: impl Into<String>,
        id: impl Into<String>,
        label: impl Into<String>,
        start: u64,
        stop: u64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            chromosome_id: chromosome_id.into(),
            id: id.into(),
            label: label.into(),
            start,
            stop,
            color: color.into(),
        }
    }

    /// Creates a new band record, failing if any text field is empty or
    /// contains whitespace.
    pub fn try_new(
        chromosome_id: impl Into<String>,
        id: impl Into<String>,
        label: impl Into<String>,
        start: u64,
        stop: u64,
        color: impl Into<String>,
    ) -> Result<Self, InvalidTokenError> {
        let band = Self::new(chromosome_id, id, label, start, stop, color);

        check_token("chromosome", &band.chromosome_id)?;
        check_token("id", &band.id)?;
        check_token("label", &band.label)?;
        check_token("color", &band.color)?;

        Ok(band)
    }

    /// Returns the identifier of the parent chromosome.
    pub fn chromosome_id(&self) -> &str {
        &self.chromosome_id
    }

    /// Returns the identifier of the band.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the label of the band.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the start position of the band.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Returns the stop position of the band.
    pub fn stop(&self) -> u64 {
        self.stop
    }

    /// Returns the color of the band.
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl FromStr for Band {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups = PATTERN
            .captures(s)
            .ok_or_else(|| ParseError::InvalidFormat(s.into()))?;

        let start = groups[4].parse().map_err(ParseError::InvalidStart)?;
        let stop = groups[5].parse().map_err(ParseError::InvalidStop)?;

        Ok(Self::new(
            &groups[1], &groups[2], &groups[3], start, stop, &groups[6],
        ))
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{BAND_PREFIX} {} {} {} {} {} {}",
            self.chromosome_id, self.id, self.label, self.start, self.stop, self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_display() {
        let band = Band::new("id", "band.id", "band.label", 1, 10, "blue");
        assert_eq!(band.to_string(), "band id band.id band.label 1 10 blue");
    }

    #[test]
    fn test_parsing_band() -> Result<(), Box<dyn std::error::Error>> {
        let band = "band hs1 p36.33 p36.33 0 2300000 gneg".parse::<Band>()?;

        assert_eq!(band.chromosome_id(), "hs1");
        assert_eq!(band.id(), "p36.33");
        assert_eq!(band.label(), "p36.33");
        assert_eq!(band.start(), 0);
        assert_eq!(band.stop(), 2300000);
        assert_eq!(band.color(), "gneg");

        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        for band in [
            Band::new("id", "band.id", "band.label", 1, 10, "blue"),
            Band::new("hs1", "p36.33", "p36.33", 0, 2300000, "gneg"),
        ] {
            assert_eq!(band.to_string().parse::<Band>()?, band);
        }

        Ok(())
    }

    #[test]
    fn test_try_new_rejects_non_tokens() {
        assert!(Band::try_new("hs1", "p36.33", "p36.33", 0, 10, "gneg").is_ok());

        let err = Band::try_new("hs1", "p36.33", "p 36", 0, 10, "gneg").unwrap_err();
        assert_eq!(
            err,
            InvalidTokenError {
                field: "label",
                value: String::from("p 36"),
            }
        );
        assert_eq!(
            Band::try_new("", "p1", "p1", 0, 10, "gneg").unwrap_err().field,
            "chromosome"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert!(matches!(
            "band hs1 p36.33 0 2300000 gneg".parse::<Band>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "chr - hs1 1 0 10 red".parse::<Band>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_invalid_positions() {
        let err = "band hs1 p1 p1 a 10 gneg".parse::<Band>().unwrap_err();
        assert_eq!(err.to_string(), "invalid start: invalid digit found in string");

        let err = "band hs1 p1 p1 0 -10 gneg".parse::<Band>().unwrap_err();
        assert_eq!(err.to_string(), "invalid stop: invalid digit found in string");
    }
}
