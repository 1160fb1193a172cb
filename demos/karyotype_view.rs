//! Prints the records of a karyotype file as a table.
//!
//! ```
//! cargo run --example karyotype_view <KARYOTYPE>
//! ```

use std::env;

use circosconf::Karyotype;
use circosconf::karyotype::Record;
use tabled::builder::Builder;
use tabled::settings::Alignment;
use tabled::settings::Style;
use tabled::settings::object::Rows;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let src = env::args().nth(1).expect("missing src");
    let karyotype = Karyotype::from_path(src)?;

    let mut builder = Builder::default();
    builder.push_record([
        "Kind", "Chromosome", "ID", "Label", "Start", "Stop", "Color",
    ]);

    for record in karyotype.rows() {
        match record {
            Record::Chromosome(chromosome) => builder.push_record([
                "chr",
                chromosome.id(),
                chromosome.id(),
                chromosome.label(),
                &chromosome.start().to_string(),
                &chromosome.stop().to_string(),
                chromosome.color(),
            ]),
            Record::Band(band) => builder.push_record([
                "band",
                band.chromosome_id(),
                band.id(),
                band.label(),
                &band.start().to_string(),
                &band.stop().to_string(),
                band.color(),
            ]),
        }
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .modify(Rows::new(1..), Alignment::left())
        .to_string();

    println!("{}", table);
    println!(
        "{} chromosomes, {} bands",
        karyotype.chromosomes().count(),
        karyotype.bands().count()
    );

    Ok(())
}
