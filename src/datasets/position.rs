//! Genomic positions of loci.

use std::collections::HashMap;

use crate::datasets::regulondb::Gene;

/// The position of a locus on a chromosome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    /// The chromosome.
    chromosome: String,
    /// The start position.
    start: u64,
    /// The stop position.
    stop: u64,
}

impl Position {
    /// Creates a new [`Position`].
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::datasets::Position;
    ///
    /// let position = Position::new("NC_000913.3", 190, 255);
    /// assert_eq!(position.chromosome(), "NC_000913.3");
    /// assert_eq!(position.start(), 190);
    /// assert_eq!(position.stop(), 255);
    /// ```
    pub fn new(chromosome: impl Into<String>, start: u64, stop: u64) -> Self {
        Self {
            chromosome: chromosome.into(),
            start,
            stop,
        }
    }

    /// Gets the chromosome.
    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    /// Gets the start position.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Gets the stop position.
    pub fn stop(&self) -> u64 {
        self.stop
    }
}

/// A table of positions keyed by locus.
pub type Positions = HashMap<String, Position>;

/// Builds the positions of genes that all lie on a single chromosome.
///
/// Genes that share a locus keep the position of the last one.
///
/// # Examples
///
/// ```
/// use circosconf::datasets::position;
/// use circosconf::datasets::regulondb::Gene;
///
/// let genes = [Gene::new("thrL", "b0001", 190, 255), Gene::new("thrA", "b0002", 337, 2799)];
/// let positions = position::from_genes(&genes, "NC_000913.3");
///
/// assert_eq!(positions.len(), 2);
/// assert_eq!(positions["b0002"].start(), 337);
/// assert_eq!(positions["b0002"].chromosome(), "NC_000913.3");
/// ```
pub fn from_genes<'a>(genes: impl IntoIterator<Item = &'a Gene>, chromosome: &str) -> Positions {
    genes
        .into_iter()
        .map(|gene| {
            (
                gene.locus().to_string(),
                Position::new(chromosome, gene.start(), gene.end()),
            )
        })
        .collect()
}
