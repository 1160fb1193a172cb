//! Converts a RegulonDB regulatory network into a Circos link file for a
//! single-chromosome genome and prints it to stdout.
//!
//! ```
//! cargo run --example regulatory_links <GENES> <TRANSCRIPTION_FACTORS> <NETWORK> <CHROMOSOME>
//! ```

use std::env;
use std::io::{self};

use circosconf::datasets::position;
use circosconf::datasets::regulondb;
use circosconf::reader;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let genes = env::args().nth(1).expect("missing genes path");
    let factors = env::args().nth(2).expect("missing transcription factors path");
    let network = env::args().nth(3).expect("missing network path");
    let chromosome = env::args().nth(4).expect("missing chromosome");

    let genes = regulondb::parse_genes(reader::open(genes)?)?;
    let factors = regulondb::parse_transcription_factors(reader::open(factors)?)?;
    let interactions = regulondb::parse_interactions(reader::open(network)?, &genes, &factors)?;

    let positions = position::from_genes(genes.iter(), &chromosome);

    let mut stdout = io::stdout().lock();
    let written = regulondb::write_links(&mut stdout, &interactions, &positions)?;

    eprintln!(
        "{} genes, {} transcription factors, {} interactions, {} links",
        genes.len(),
        factors.len(),
        interactions.len(),
        written
    );

    Ok(())
}
