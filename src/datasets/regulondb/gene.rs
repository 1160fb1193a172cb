//! Gene products.

use std::collections::HashMap;
use std::io::BufRead;

use tracing::debug;

use crate::Reader;
use crate::datasets::FIELD_DELIMITER;
use crate::datasets::regulondb::Error;
use crate::datasets::regulondb::ParseError;
use crate::datasets::regulondb::Result;
use crate::datasets::regulondb::field;

/// A gene.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Gene {
    /// The name.
    name: String,
    /// The locus.
    locus: String,
    /// The start position.
    start: u64,
    /// The end position.
    end: u64,
}

impl Gene {
    /// Creates a new [`Gene`].
    pub fn new(name: impl Into<String>, locus: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            name: name.into(),
            locus: locus.into(),
            start,
            end,
        }
    }

    /// Gets the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the locus.
    pub fn locus(&self) -> &str {
        &self.locus
    }

    /// Gets the start position.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Gets the end position.
    pub fn end(&self) -> u64 {
        self.end
    }
}

/// The genes of a network, keyed by locus and by case-insensitive name.
#[derive(Debug, Default)]
pub struct Genes {
    /// The genes keyed by locus.
    by_locus: HashMap<String, Gene>,
    /// The loci keyed by uppercased name.
    loci: HashMap<String, String>,
}

impl Genes {
    /// Inserts a gene.
    ///
    /// Fails if a gene with the same case-insensitive name was already
    /// inserted.
    pub fn insert(&mut self, gene: Gene) -> Result<()> {
        let key = gene.name().to_uppercase();

        if self.loci.contains_key(&key) {
            return Err(Error::DuplicateName(gene.name));
        }

        self.loci.insert(key, gene.locus.clone());
        self.by_locus.insert(gene.locus.clone(), gene);

        Ok(())
    }

    /// Gets a gene by locus.
    pub fn get(&self, locus: &str) -> Option<&Gene> {
        self.by_locus.get(locus)
    }

    /// Finds a gene by its case-insensitive name.
    pub fn find(&self, name: &str) -> Option<&Gene> {
        self.loci
            .get(&name.to_uppercase())
            .and_then(|locus| self.by_locus.get(locus))
    }

    /// Gets an iterator over the genes in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Gene> {
        self.by_locus.values()
    }

    /// Gets the number of genes.
    pub fn len(&self) -> usize {
        self.by_locus.len()
    }

    /// Returns whether there are no genes.
    pub fn is_empty(&self) -> bool {
        self.by_locus.is_empty()
    }
}

/// Parses a single data line into a gene, if it has a locus.
fn parse_line(line: &str) -> std::result::Result<Option<Gene>, ParseError> {
    let fields = line.split(FIELD_DELIMITER).collect::<Vec<_>>();

    let name = field(&fields, 1, "name")?;
    let locus = field(&fields, 2, "locus")?;

    if locus.is_empty() {
        return Ok(None);
    }

    let start = field(&fields, 3, "start")?
        .parse()
        .map_err(ParseError::InvalidStart)?;
    let end = field(&fields, 4, "end")?
        .parse()
        .map_err(ParseError::InvalidEnd)?;

    Ok(Some(Gene::new(name, locus, start, end)))
}

/// Parses a gene product table.
///
/// Each data line holds an identifier, the name, the locus, the start, and
/// the end of a gene. Genes without a locus are ignored. Two genes sharing a
/// case-insensitive name is an error.
///
/// # Examples
///
/// ```
/// use circosconf::datasets::regulondb;
/// use circosconf::Reader;
///
/// let data = b"ECK1\tthrL\tb0001\t190\t255\nECK2\tphantom\t\t\t\n";
/// let genes = regulondb::parse_genes(Reader::new(&data[..]))?;
///
/// assert_eq!(genes.len(), 1);
/// assert_eq!(genes.find("THRL").map(|gene| gene.locus()), Some("b0001"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_genes<T>(mut reader: Reader<T>) -> Result<Genes>
where
    T: BufRead,
{
    let mut genes = Genes::default();

    for result in reader.records() {
        let (line_no, line) = result.map_err(Error::Io)?;

        match parse_line(&line).map_err(|err| Error::Parse(line_no, err))? {
            Some(gene) => genes.insert(gene)?,
            None => debug!(line_no, "skipping gene without a locus"),
        }
    }

    Ok(genes)
}
