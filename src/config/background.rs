//! Background bands behind a plot.

use crate::config::Collection;
use crate::config::Element;
use crate::config::RELATIVE;
use crate::config::write_optional;
use crate::config::write_parameter;

/// A `<background>` block spanning `y0` to `y1` of the plot track.
#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    /// The start of the band, relative to the track.
    pub y0: f64,
    /// The end of the band, relative to the track.
    pub y1: f64,
    /// The color of the band.
    pub color: Option<String>,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            y0: 0.0,
            y1: 1.0,
            color: None,
        }
    }
}

impl Element for Background {
    const BLOCK: &'static str = "backgrounds";
}

impl std::fmt::Display for Background {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<background>")?;
        write_parameter(f, "y0", format!("{}{RELATIVE}", self.y0))?;
        write_parameter(f, "y1", format!("{}{RELATIVE}", self.y1))?;
        write_optional(f, "color", self.color.as_deref())?;
        write!(f, "</background>")
    }
}

/// A `<backgrounds>` block.
pub type Backgrounds = Collection<Background>;
