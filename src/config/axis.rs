//! Axis lines drawn across a plot track.

use crate::config::Collection;
use crate::config::Element;
use crate::config::PIXELS;
use crate::config::RELATIVE;
use crate::config::write_optional;
use crate::config::write_optional_unit;
use crate::config::write_parameter;

/// An `<axis>` block.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    /// The start of the axis lines, relative to the track.
    pub y0: f64,
    /// The end of the axis lines, relative to the track.
    pub y1: f64,
    /// The spacing of the axis lines, relative to the track.
    pub spacing: Option<f64>,
    /// Fixed position(s) for axis lines.
    pub position: Option<String>,
    /// Fixed position(s) to skip when drawing axis lines.
    pub position_skip: Option<String>,
    /// The color of the axis lines.
    pub color: Option<String>,
    /// The thickness of the axis lines (in pixels).
    pub thickness: Option<f64>,
}

impl Axis {
    /// Creates axis lines spanning `y0` to `y1` with everything else left to
    /// Circos.
    pub fn new(y0: f64, y1: f64) -> Self {
        Self {
            y0,
            y1,
            spacing: None,
            position: None,
            position_skip: None,
            color: None,
            thickness: None,
        }
    }
}

impl Element for Axis {
    const BLOCK: &'static str = "axes";
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<axis>")?;
        write_optional_unit(f, "spacing", self.spacing, RELATIVE)?;
        write_optional(f, "position", self.position.as_deref())?;
        write_optional(f, "position_skip", self.position_skip.as_deref())?;
        write_parameter(f, "y0", format!("{}{RELATIVE}", self.y0))?;
        write_parameter(f, "y1", format!("{}{RELATIVE}", self.y1))?;
        write_optional(f, "color", self.color.as_deref())?;
        write_optional_unit(f, "thickness", self.thickness, PIXELS)?;
        write!(f, "</axis>")
    }
}

/// An `<axes>` block.
pub type Axes = Collection<Axis>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_display() {
        let axis = Axis {
            spacing: Some(0.1),
            color: Some(String::from("lgrey")),
            thickness: Some(2.0),
            ..Axis::new(0.0, 1.0)
        };

        assert_eq!(
            axis.to_string(),
            "<axis>\nspacing = 0.1r\ny0 = 0r\ny1 = 1r\ncolor = lgrey\nthickness = 2p\n</axis>"
        );
    }

    #[test]
    fn test_axes_display() {
        assert_eq!(Axes::default().to_string(), "");
        assert_eq!(
            Axes::new(Axis::new(0.2, 0.8)).to_string(),
            "<axes>\n<axis>\ny0 = 0.2r\ny1 = 0.8r\n</axis>\n</axes>"
        );
    }
}
