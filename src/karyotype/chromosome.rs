//! A chromosome record within a karyotype.

use std::num::ParseIntError;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::karyotype::InvalidTokenError;
use crate::karyotype::check_token;

/// The prefix for a chromosome record.
pub const CHROMOSOME_PREFIX: &str = "chr";

/// The placeholder for the (unused) parent field of a chromosome record.
pub const CHROMOSOME_PARENT: &str = "-";

/// The shape of a chromosome record.
static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^chr\s+-\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s*$").unwrap()
});

/// An error associated with parsing a chromosome record.
#[derive(Debug)]
pub enum ParseError {
    /// The line does not have the shape of a chromosome record.
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
                "invalid format: expected \"chr - <id> <label> <start> <stop> <color>\", found \
                 \"{s}\""
            ),
            ParseError::InvalidStart(err) => write!(f, "invalid start: {err}"),
            ParseError::InvalidStop(err) => write!(f, "invalid stop: {err}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A chromosome within a karyotype.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Chromosome {
    /// The identifier used to reference the chromosome in data files.
    id: String,
    /// The label drawn next to the ideogram.
    label: String,
    /// The start position.
    start: u64,
    /// The stop position.
    stop: u64,
    /// The color of the ideogram.
    color: String,
}

impl Chromosome {
    /// Creates a new chromosome record.
    ///
    /// The id, label and color are written as whitespace-separated fields, so
    /// they must be non-empty and free of whitespace for the record to parse
    /// back. Use [`Chromosome::try_new()`] to have that checked.
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::karyotype::Chromosome;
    ///
    /// let chromosome = Chromosome::new("id", "label", 1, 10, "blue");
    /// assert_eq!(chromosome.to_string(), "chr - id label 1 10 blue");
    /// ```
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        start: u64,
        stop: u64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            start,
            stop,
            color: color.into(),
        }
    }

    /// Creates a new chromosome record, failing if the id, label or color is
    /// empty or contains whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::karyotype::Chromosome;
    ///
    /// assert!(Chromosome::try_new("hs1", "1", 0, 10, "red").is_ok());
    /// assert!(Chromosome::try_new("hs 1", "1", 0, 10, "red").is_err());
    /// ```
    pub fn try_new(
        id: impl Into<String>,
        label: impl Into<String>,
        start: u64,
        stop: u64,
        color: impl Into<String>,
    ) -> Result<Self, InvalidTokenError> {
        let chromosome = Self::new(id, label, start, stop, color);

        check_token("id", &chromosome.id)?;
        check_token("label", &chromosome.label)?;
        check_token("color", &chromosome.color)?;

        Ok(chromosome)
    }

    /// Returns the identifier of the chromosome.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the label of the chromosome.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the start position of the chromosome.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Returns the stop position of the chromosome.
    pub fn stop(&self) -> u64 {
        self.stop
    }

    /// Returns the color of the chromosome.
    pub fn color(&self) -> &str {
        &self.color
    }
}

impl FromStr for Chromosome {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups = PATTERN
            .captures(s)
            .ok_or_else(|| ParseError::InvalidFormat(s.into()))?;

        // SAFETY: every group in the pattern is mandatory, so a match always
        // has all five groups.
        let id = &groups[1];
        let label = &groups[2];
        let start = groups[3].parse().map_err(ParseError::InvalidStart)?;
        let stop = groups[4].parse().map_err(ParseError::InvalidStop)?;
        let color = &groups[5];

        Ok(Self::new(id, label, start, stop, color))
    }
}

impl std::fmt::Display for Chromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{CHROMOSOME_PREFIX} {CHROMOSOME_PARENT} {} {} {} {} {}",
            self.id, self.label, self.start, self.stop, self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chromosome_display() {
        let chromosome = Chromosome::new("id", "label", 1, 10, "blue");
        assert_eq!(chromosome.to_string(), "chr - id label 1 10 blue");
    }

    #[test]
    fn test_parsing_chromosome() -> Result<(), Box<dyn std::error::Error>> {
        let chromosome = "chr - hs1 1 0 249250621 chr1".parse::<Chromosome>()?;

        assert_eq!(chromosome.id(), "hs1");
        assert_eq!(chromosome.label(), "1");
        assert_eq!(chromosome.start(), 0);
        assert_eq!(chromosome.stop(), 249250621);
        assert_eq!(chromosome.color(), "chr1");

        Ok(())
    }

    #[test]
    fn test_parsing_tolerates_repeated_whitespace() -> Result<(), Box<dyn std::error::Error>> {
        let chromosome = "chr -  hs1\t1 0   10 red ".parse::<Chromosome>()?;
        assert_eq!(chromosome, Chromosome::new("hs1", "1", 0, 10, "red"));
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        for chromosome in [
            Chromosome::new("id", "label", 1, 10, "blue"),
            Chromosome::new("NC_000913.3", "E.coli", 0, 4641652, "vvlgrey"),
            Chromosome::new("x", "y", 0, u64::MAX, "black"),
        ] {
            assert_eq!(chromosome.to_string().parse::<Chromosome>()?, chromosome);
        }

        Ok(())
    }

    #[test]
    fn test_try_new_rejects_non_tokens() -> Result<(), Box<dyn std::error::Error>> {
        let chromosome = Chromosome::try_new("hs1", "1", 0, 10, "red")?;
        assert_eq!(chromosome.to_string().parse::<Chromosome>()?, chromosome);

        let err = Chromosome::try_new("hs 1", "1", 0, 10, "red").unwrap_err();
        assert_eq!(err.field, "id");
        assert_eq!(err.value, "hs 1");

        assert_eq!(
            Chromosome::try_new("hs1", "", 0, 10, "red")
                .unwrap_err()
                .field,
            "label"
        );
        assert_eq!(
            Chromosome::try_new("hs1", "1", 0, 10, "dark\tred")
                .unwrap_err()
                .field,
            "color"
        );

        Ok(())
    }

    #[test]
    fn test_invalid_number_of_fields() {
        let err = "chr - hs1 1 0 10".parse::<Chromosome>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid format: expected \"chr - <id> <label> <start> <stop> <color>\", found \
             \"chr - hs1 1 0 10\""
        );

        assert!(matches!(
            "chr - hs1 1 0 10 red extra".parse::<Chromosome>(),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_invalid_start() {
        let err = "chr - hs1 1 ? 10 red".parse::<Chromosome>().unwrap_err();
        assert_eq!(err.to_string(), "invalid start: invalid digit found in string");
    }

    #[test]
    fn test_invalid_stop() {
        let err = "chr - hs1 1 0 10.5 red".parse::<Chromosome>().unwrap_err();
        assert_eq!(err.to_string(), "invalid stop: invalid digit found in string");
    }
}
