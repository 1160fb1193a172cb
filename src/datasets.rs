//! Parsers for biological datasets and their conversion to Circos data
//! files.
//!
//! Each parser turns a tab-separated flat file into an in-memory mapping keyed
//! by locus. The mappings are then joined with a table of genomic
//! [positions](position::Position) to produce the data files read by plots
//! and links. Annotated sequence [features] are turned into tiles directly.

pub mod abundance;
pub mod features;
pub mod position;
pub mod regulondb;

pub use position::Position;
pub use position::Positions;

/// The delimiter between the fields of every dataset.
pub(crate) const FIELD_DELIMITER: char = '\t';
