//! `circosconf` is a crate for describing [Circos](https://circos.ca) plots in
//! Rust and generating the configuration Circos reads.
//!
//! The crate provides three main points of entry:
//!
//! - Describing a plot with the [configuration object model](config).
//! - Reading [karyotypes](Karyotype) and biological [datasets] into the data
//!   files plots and links point to.
//! - [Rendering](render) a configuration by running a Circos installation.
//!
//! ## Describing a plot
//!
//! Every block of a Circos configuration has a counterpart in [`config`] that
//! renders itself through its [`Display`](std::fmt::Display) implementation.
//! A complete configuration is a [`config::Circos`] assembled with a
//! [`config::circos::Builder`]. Only a karyotype is required: every other
//! part of the configuration falls back to an empty or default block.
//!
//! Plots, links, and highlights read their data from a [`config::DataFile`].
//! A data file is either an existing file or a temporary file written from
//! in-memory rows. Temporary files are removed when the node owning them is
//! dropped, so the configuration must be kept alive until Circos has run.
//!
//! ```
//! use circosconf::config::circos::Builder;
//! use circosconf::config::plot::Histogram;
//! use circosconf::config::DataFile;
//! use circosconf::Karyotype;
//!
//! let karyotype = "chr - hs1 1 0 1000 red\nchr - hs2 2 0 500 blue".parse::<Karyotype>()?;
//!
//! let data = DataFile::from_rows([["hs1", "0", "500", "0.5"], ["hs2", "0", "250", "0.75"]])?;
//! let mut histogram = Histogram::new(data, 0.8, 0.95);
//! histogram.set_color("vdblue");
//!
//! let circos = Builder::default()
//!     .karyotype(karyotype)
//!     .plot(histogram)
//!     .try_build()?;
//!
//! let configuration = circos.to_string();
//! assert!(configuration.starts_with("karyotype = "));
//! assert!(configuration.contains("<plot>\ntype = histogram\n"));
//! assert!(configuration.contains("color = vdblue\n"));
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Reading datasets
//!
//! The parsers in [`datasets`] read PaxDb protein abundance tables and
//! RegulonDB regulatory networks. Joined with a table of
//! [positions](datasets::Position), they produce tracks and links.
//!
//! ```
//! use circosconf::datasets::position;
//! use circosconf::datasets::regulondb;
//! use circosconf::Reader;
//!
//! let genes = b"ECK1\tcrp\tb3357\t3486120\t3486752\nECK2\taraC\tb0064\t70387\t71265\n";
//! let factors = b"ECK10\tCRP\tcrp\n";
//! let network = b"CRP\taraC\t+\nCRP\tunknown\t-\n";
//!
//! let genes = regulondb::parse_genes(Reader::new(&genes[..]))?;
//! let factors = regulondb::parse_transcription_factors(Reader::new(&factors[..]))?;
//! let interactions = regulondb::parse_interactions(Reader::new(&network[..]), &genes, &factors)?;
//! assert_eq!(interactions.len(), 1);
//!
//! let positions = position::from_genes(genes.iter(), "ecoli");
//! let links = regulondb::to_data_file(&interactions, &positions)?;
//! assert_eq!(
//!     std::fs::read_to_string(links.path())?,
//!     "ecoli 3486120 3486752 ecoli 70387 71265 color=green\n"
//! );
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod datasets;
pub mod karyotype;
pub mod reader;
pub mod render;

pub use karyotype::Karyotype;

pub use self::reader::Reader;
