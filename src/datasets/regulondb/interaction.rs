//! Regulatory interactions.

use std::io::BufRead;

use tracing::error;

use crate::Reader;
use crate::datasets::FIELD_DELIMITER;
use crate::datasets::regulondb::Error;
use crate::datasets::regulondb::Gene;
use crate::datasets::regulondb::Genes;
use crate::datasets::regulondb::LookupError;
use crate::datasets::regulondb::Result;
use crate::datasets::regulondb::TranscriptionFactor;
use crate::datasets::regulondb::TranscriptionFactors;
use crate::datasets::regulondb::field;

/// The effect a regulator has on its target.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Regulation {
    /// Activation (`+`).
    Activator,
    /// Repression (`-`).
    Repressor,
    /// Both activation and repression (`+-`).
    Dual,
    /// Any other tag (e.g., `?`).
    Other(String),
}

impl Regulation {
    /// Gets the color of links for this regulation.
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::datasets::regulondb::Regulation;
    ///
    /// assert_eq!(Regulation::from("+").color(), "green");
    /// assert_eq!(Regulation::from("-").color(), "red");
    /// assert_eq!(Regulation::from("+-").color(), "blue");
    /// assert_eq!(Regulation::from("?").color(), "grey");
    /// ```
    pub fn color(&self) -> &'static str {
        match self {
            Regulation::Activator => "green",
            Regulation::Repressor => "red",
            Regulation::Dual => "blue",
            Regulation::Other(_) => "grey",
        }
    }
}

impl From<&str> for Regulation {
    fn from(tag: &str) -> Self {
        match tag {
            "+" => Regulation::Activator,
            "-" => Regulation::Repressor,
            "+-" => Regulation::Dual,
            other => Regulation::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Regulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Regulation::Activator => write!(f, "+"),
            Regulation::Repressor => write!(f, "-"),
            Regulation::Dual => write!(f, "+-"),
            Regulation::Other(tag) => write!(f, "{tag}"),
        }
    }
}

/// A regulator gene acting on a target gene.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Interaction {
    /// The regulator.
    regulator: Gene,
    /// The target.
    target: Gene,
    /// The regulation.
    regulation: Regulation,
}

impl Interaction {
    /// Creates a new [`Interaction`].
    pub fn new(regulator: Gene, target: Gene, regulation: Regulation) -> Self {
        Self {
            regulator,
            target,
            regulation,
        }
    }

    /// Gets the regulator.
    pub fn regulator(&self) -> &Gene {
        &self.regulator
    }

    /// Gets the target.
    pub fn target(&self) -> &Gene {
        &self.target
    }

    /// Gets the regulation.
    pub fn regulation(&self) -> &Regulation {
        &self.regulation
    }
}

/// Resolves a gene by name.
fn find_gene<'a>(genes: &'a Genes, name: &str) -> std::result::Result<&'a Gene, LookupError> {
    genes
        .find(name)
        .ok_or_else(|| LookupError::Gene(name.to_string()))
}

/// Resolves a transcription factor by name.
fn find_factor<'a>(
    factors: &'a TranscriptionFactors,
    name: &str,
) -> std::result::Result<&'a TranscriptionFactor, LookupError> {
    factors
        .get(&name.to_uppercase())
        .ok_or_else(|| LookupError::TranscriptionFactor(name.to_string()))
}

/// Parses an interaction table.
///
/// Each data line holds the name of a transcription factor, the name of the
/// target gene, and the regulation tag. One [`Interaction`] is produced for
/// every gene encoding the factor.
///
/// Names are resolved case-insensitively. A line whose factor or target
/// cannot be resolved is logged and skipped; a gene encoding the factor that
/// cannot be resolved is logged and only its interaction is skipped.
pub fn parse_interactions<T>(
    mut reader: Reader<T>,
    genes: &Genes,
    factors: &TranscriptionFactors,
) -> Result<Vec<Interaction>>
where
    T: BufRead,
{
    let mut interactions = Vec::new();

    for result in reader.records() {
        let (line_no, line) = result.map_err(Error::Io)?;
        let fields = line.split(FIELD_DELIMITER).collect::<Vec<_>>();

        let factor_name =
            field(&fields, 0, "transcription factor").map_err(|err| Error::Parse(line_no, err))?;
        let target_name = field(&fields, 1, "target").map_err(|err| Error::Parse(line_no, err))?;
        let regulation = field(&fields, 2, "regulation")
            .map(Regulation::from)
            .map_err(|err| Error::Parse(line_no, err))?;

        let resolved = find_gene(genes, target_name)
            .and_then(|target| find_factor(factors, factor_name).map(|factor| (target, factor)));

        let (target, factor) = match resolved {
            Ok(resolved) => resolved,
            Err(err) => {
                error!(line_no, "skipping interaction: {err}");
                continue;
            }
        };

        for name in factor.genes().iter() {
            match find_gene(genes, name) {
                Ok(regulator) => interactions.push(Interaction::new(
                    regulator.clone(),
                    target.clone(),
                    regulation.clone(),
                )),
                Err(err) => error!(
                    line_no,
                    factor = factor.name(),
                    "skipping interaction: {err}"
                ),
            }
        }
    }

    Ok(interactions)
}

#[cfg(test)]
mod tests {
    use crate::datasets::regulondb::ParseError;
    use crate::datasets::regulondb::parse_genes;
    use crate::datasets::regulondb::parse_transcription_factors;
    use super::*;

    const GENES: &[u8] = b"ECK1\tcrp\tb3357\t3486120\t3486752
ECK2\taraC\tb0064\t70387\t71265
ECK3\tihfA\tb1712\t1789153\t1789452
ECK4\tlacZ\tb0344\t362455\t365529
";

    const FACTORS: &[u8] = b"ECK10\tCRP\tcrp
ECK11\tIHF\tihfA, ihfB
ECK12\tAraC\taraC
";

    fn tables() -> std::result::Result<(Genes, TranscriptionFactors), Box<dyn std::error::Error>> {
        Ok((
            parse_genes(Reader::new(GENES))?,
            parse_transcription_factors(Reader::new(FACTORS))?,
        ))
    }

    fn pairs(interactions: &[Interaction]) -> Vec<(&str, &str, String)> {
        interactions
            .iter()
            .map(|interaction| {
                (
                    interaction.regulator().name(),
                    interaction.target().name(),
                    interaction.regulation().to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_unknown_names_are_skipped() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let (genes, factors) = tables()?;
        let data = b"# TF\ttarget\teffect
CRP\taraC\t+
Nope\taraC\t-
CRP\tnope\t-
araC\tLACZ\t-
";

        let interactions = parse_interactions(Reader::new(&data[..]), &genes, &factors)?;
        assert_eq!(
            pairs(&interactions),
            vec![
                ("crp", "araC", String::from("+")),
                ("araC", "lacZ", String::from("-")),
            ]
        );

        Ok(())
    }

    #[test]
    fn test_one_interaction_per_encoding_gene() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let (genes, factors) = tables()?;

        // `ihfB` is not a known gene, so only the `ihfA` interaction survives.
        let data = b"IHF\tlacZ\t+-\nCRP\tlacZ\t?\n";
        let interactions = parse_interactions(Reader::new(&data[..]), &genes, &factors)?;

        assert_eq!(
            pairs(&interactions),
            vec![
                ("ihfA", "lacZ", String::from("+-")),
                ("crp", "lacZ", String::from("?")),
            ]
        );
        assert_eq!(
            interactions[1].regulation(),
            &Regulation::Other(String::from("?"))
        );

        Ok(())
    }

    #[test]
    fn test_missing_field() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let (genes, factors) = tables()?;
        let err = parse_interactions(Reader::new(&b"CRP\taraC\n"[..]), &genes, &factors)
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Parse(1, ParseError::MissingField("regulation"))
        ));

        Ok(())
    }
}
