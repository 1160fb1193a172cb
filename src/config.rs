//! The configuration object model.
//!
//! Each node in this module mirrors one block of the Circos configuration
//! schema and renders itself to Circos' configuration syntax through its
//! [`Display`](std::fmt::Display) implementation. Rendering is a pure
//! function of the node: nothing is written to disk and no shared state is
//! touched (the per-plot option tables are `static` and never mutated).
//!
//! Values that are not set are never rendered. Parameters that are
//! [`Option`]s are skipped when [`None`], and [`Attributes`] cannot hold an
//! unset value in the first place.

pub mod attributes;
pub mod axis;
pub mod background;
pub mod circos;
pub mod collection;
pub mod data;
pub mod highlight;
pub mod ideogram;
pub mod link;
pub mod plot;
pub mod rule;
pub mod tick;
pub mod value;

pub use attributes::Attributes;
pub use axis::Axes;
pub use axis::Axis;
pub use background::Background;
pub use background::Backgrounds;
pub use circos::Circos;
pub use collection::Collection;
pub use collection::Element;
pub use data::DataFile;
pub use highlight::Highlight;
pub use highlight::Highlights;
pub use ideogram::Ideogram;
pub use link::Link;
pub use link::Links;
pub use plot::Plot;
pub use plot::Plots;
pub use rule::Rule;
pub use rule::Rules;
pub use tick::Tick;
pub use tick::Ticks;
pub use value::Value;

use std::fmt::Display;
use std::fmt::Formatter;

/// The unit suffix for a position relative to the image radius.
pub(crate) const RELATIVE: &str = "r";

/// The unit suffix for pixels.
pub(crate) const PIXELS: &str = "p";

/// The unit suffix for chromosome units.
pub(crate) const CHROMOSOME_UNITS: &str = "u";

/// An error where a parameter key is already written by the block itself.
#[derive(Debug, PartialEq)]
pub struct ReservedKeyError(pub String);

impl std::fmt::Display for ReservedKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "`{}` is a fixed field of the block", self.0)
    }
}

impl std::error::Error for ReservedKeyError {}

/// Fails if `key` is one of the `reserved` keys of a block.
pub(crate) fn check_key(reserved: &[&str], key: &str) -> Result<(), ReservedKeyError> {
    if reserved.contains(&key) {
        return Err(ReservedKeyError(key.to_string()));
    }

    Ok(())
}

/// Writes a single `key = value` parameter line.
pub(crate) fn write_parameter(
    f: &mut Formatter<'_>,
    key: &str,
    value: impl Display,
) -> std::fmt::Result {
    writeln!(f, "{key} = {value}")
}

/// Writes a `key = value` parameter line if the value is set.
pub(crate) fn write_optional<T: Display>(
    f: &mut Formatter<'_>,
    key: &str,
    value: Option<T>,
) -> std::fmt::Result {
    match value {
        Some(value) => write_parameter(f, key, value),
        None => Ok(()),
    }
}

/// Writes a `key = <value><unit>` parameter line if the value is set.
pub(crate) fn write_optional_unit<T: Display>(
    f: &mut Formatter<'_>,
    key: &str,
    value: Option<T>,
    unit: &str,
) -> std::fmt::Result {
    write_optional(f, key, value.map(|value| format!("{value}{unit}")))
}

/// Writes a nested block (a collection or a sub-node) if it renders to
/// anything at all.
pub(crate) fn write_nested(f: &mut Formatter<'_>, block: impl Display) -> std::fmt::Result {
    let block = block.to_string();

    if block.is_empty() {
        return Ok(());
    }

    writeln!(f, "{block}")
}
