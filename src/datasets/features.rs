//! Annotated sequence features drawn as tiles.
//!
//! An annotated sequence (e.g., a GenBank record) carries features such as
//! genes or coding sequences. Features of the selected types become one tile
//! each, to be drawn by a [tile plot](crate::config::plot::Tile).

use std::io::Write;
use std::io::{self};

use tracing::debug;

use crate::config::DataFile;

/// The feature types drawn when none are selected.
pub const DEFAULT_FEATURE_TYPES: [&str; 1] = ["gene"];

/// The value written for every tile.
const TILE_VALUE: u8 = 1;

/// An annotated feature spanning the 0-based, half-open `start..end`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feature {
    /// The type of the feature (e.g., `gene` or `CDS`).
    kind: String,
    /// The 0-based start.
    start: u64,
    /// The exclusive end.
    end: u64,
}

impl Feature {
    /// Creates a new [`Feature`].
    pub fn new(kind: impl Into<String>, start: u64, end: u64) -> Self {
        Self {
            kind: kind.into(),
            start,
            end,
        }
    }

    /// Gets the type of the feature.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Gets the 0-based start.
    pub fn start(&self) -> u64 {
        self.start
    }

    /// Gets the exclusive end.
    pub fn end(&self) -> u64 {
        self.end
    }
}

/// An annotated sequence: its id and its features.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sequence {
    /// The id, which is also the chromosome id in the karyotype.
    id: String,
    /// The features.
    features: Vec<Feature>,
}

impl Sequence {
    /// Creates a new [`Sequence`].
    pub fn new(id: impl Into<String>, features: Vec<Feature>) -> Self {
        Self {
            id: id.into(),
            features,
        }
    }

    /// Gets the id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the features.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }
}

/// Writes one `chromosome start end 1` tile per feature whose type is one of
/// `feature_types`.
///
/// Starts are converted to 1-based positions. Sequences are written in the
/// order given and features in their annotation order. Returns the number of
/// tiles written.
///
/// # Examples
///
/// ```
/// use circosconf::datasets::features;
/// use circosconf::datasets::features::DEFAULT_FEATURE_TYPES;
/// use circosconf::datasets::features::Feature;
/// use circosconf::datasets::features::Sequence;
///
/// let sequence = Sequence::new(
///     "NC_000913.3",
///     vec![
///         Feature::new("source", 0, 4641652),
///         Feature::new("gene", 189, 255),
///     ],
/// );
///
/// let mut buffer = Vec::new();
/// features::write_tiles(&mut buffer, [&sequence], &DEFAULT_FEATURE_TYPES)?;
/// assert_eq!(String::from_utf8(buffer)?, "NC_000913.3 190 255 1\n");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_tiles<'a, W>(
    writer: &mut W,
    sequences: impl IntoIterator<Item = &'a Sequence>,
    feature_types: &[&str],
) -> io::Result<usize>
where
    W: Write + ?Sized,
{
    let mut written = 0;

    for sequence in sequences {
        for feature in sequence
            .features()
            .iter()
            .filter(|feature| feature_types.iter().any(|kind| *kind == feature.kind()))
        {
            writeln!(
                writer,
                "{} {} {} {TILE_VALUE}",
                sequence.id(),
                feature.start() + 1,
                feature.end()
            )?;

            written += 1;
        }
    }

    debug!(written, "wrote feature tiles");
    Ok(written)
}

/// Writes the tiles of `sequences` to a new temporary data file.
///
/// See [`write_tiles()`] for the format.
pub fn to_data_file<'a>(
    sequences: impl IntoIterator<Item = &'a Sequence>,
    feature_types: &[&str],
) -> io::Result<DataFile> {
    DataFile::from_writer(|writer| write_tiles(writer, sequences, feature_types).map(|_| ()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequences() -> Vec<Sequence> {
        vec![
            Sequence::new(
                "chr",
                vec![
                    Feature::new("source", 0, 5000),
                    Feature::new("gene", 0, 100),
                    Feature::new("CDS", 0, 100),
                    Feature::new("gene", 199, 400),
                ],
            ),
            Sequence::new("plasmid", vec![Feature::new("gene", 9, 20)]),
            Sequence::new("empty", Vec::new()),
        ]
    }

    #[test]
    fn test_genes_are_tiled_by_default() -> Result<(), Box<dyn std::error::Error>> {
        let sequences = sequences();

        let mut buffer = Vec::new();
        let written = write_tiles(&mut buffer, &sequences, &DEFAULT_FEATURE_TYPES)?;

        assert_eq!(written, 3);
        assert_eq!(
            String::from_utf8(buffer)?,
            "chr 1 100 1\nchr 200 400 1\nplasmid 10 20 1\n"
        );

        Ok(())
    }

    #[test]
    fn test_selected_feature_types() -> Result<(), Box<dyn std::error::Error>> {
        let sequences = sequences();

        let mut buffer = Vec::new();
        write_tiles(&mut buffer, &sequences, &["CDS", "source"])?;
        assert_eq!(String::from_utf8(buffer)?, "chr 1 5000 1\nchr 1 100 1\n");

        let mut buffer = Vec::new();
        assert_eq!(write_tiles(&mut buffer, &sequences, &[])?, 0);
        assert!(buffer.is_empty());

        Ok(())
    }

    #[test]
    fn test_to_data_file() -> Result<(), Box<dyn std::error::Error>> {
        let file = to_data_file(&sequences(), &DEFAULT_FEATURE_TYPES)?;
        let contents = std::fs::read_to_string(file.path())?;

        assert_eq!(contents.lines().count(), 3);
        assert!(contents.starts_with("chr 1 100 1\n"));

        Ok(())
    }
}
