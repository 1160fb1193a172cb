//! Tick marks along the ideogram.

use crate::config::CHROMOSOME_UNITS;
use crate::config::Collection;
use crate::config::Element;
use crate::config::PIXELS;
use crate::config::RELATIVE;
use crate::config::Value;
use crate::config::write_optional;
use crate::config::write_optional_unit;
use crate::config::write_parameter;

/// A `<tick>` block: one class of tick marks.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// The length of the tick marks (in pixels).
    pub size: Option<f64>,
    /// The distance between tick marks (in chromosome units).
    pub spacing: Option<f64>,
    /// The color of the tick marks.
    pub color: Option<String>,
    /// Whether tick labels are drawn.
    pub show_label: bool,
    /// The size of the tick labels (in pixels).
    pub label_size: Option<f64>,
    /// The `printf`-style format of the tick labels.
    pub format: Option<String>,
    /// Whether grid lines are drawn at the tick marks.
    pub grid: bool,
    /// The color of the grid lines.
    pub grid_color: Option<String>,
    /// The thickness of the grid lines (in pixels).
    pub grid_thickness: Option<f64>,
    /// The radial positions at which the tick marks are drawn.
    pub radii: Vec<f64>,
}

impl Tick {
    /// Creates a tick drawn at a single radius.
    pub fn at_radius(radius: f64) -> Self {
        Self {
            radii: vec![radius],
            ..Default::default()
        }
    }
}

impl Default for Tick {
    fn default() -> Self {
        Self {
            size: None,
            spacing: None,
            color: None,
            show_label: true,
            label_size: None,
            format: None,
            grid: false,
            grid_color: None,
            grid_thickness: None,
            radii: Vec::new(),
        }
    }
}

impl Element for Tick {
    const BLOCK: &'static str = "ticks";
}

impl std::fmt::Display for Tick {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<tick>")?;
        write_optional_unit(f, "spacing", self.spacing, CHROMOSOME_UNITS)?;
        write_optional_unit(f, "size", self.size, PIXELS)?;
        write_optional(f, "color", self.color.as_deref())?;
        write_parameter(f, "show_label", Value::from(self.show_label))?;
        write_optional_unit(f, "label_size", self.label_size, PIXELS)?;
        write_optional(f, "format", self.format.as_deref())?;
        write_parameter(f, "grid", Value::from(self.grid))?;
        write_optional(f, "grid_color", self.grid_color.as_deref())?;
        write_optional_unit(f, "grid_thickness", self.grid_thickness, PIXELS)?;

        for radius in &self.radii {
            write_parameter(f, "radius", format!("{radius}{RELATIVE}"))?;
        }

        write!(f, "</tick>")
    }
}

/// The tick marks of a plot.
///
/// Unlike the other collections, ticks carry two global switches that are
/// written outside of the `<ticks>` block.
#[derive(Clone, Debug, PartialEq)]
pub struct Ticks {
    /// The ticks.
    ticks: Collection<Tick>,
    /// Whether tick labels are drawn at all.
    pub show_label: bool,
}

impl Ticks {
    /// Creates a new set of ticks.
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::config::Tick;
    /// use circosconf::config::Ticks;
    ///
    /// let ticks = Ticks::new(Tick {
    ///     spacing: Some(5.0),
    ///     size: Some(10.0),
    ///     ..Default::default()
    /// });
    ///
    /// assert_eq!(ticks.len(), 1);
    /// assert!(ticks.to_string().starts_with("show_ticks = yes\n"));
    /// ```
    pub fn new(ticks: impl Into<Collection<Tick>>) -> Self {
        Self {
            ticks: ticks.into(),
            show_label: true,
        }
    }

    /// Gets the ticks.
    pub fn ticks(&self) -> &Collection<Tick> {
        &self.ticks
    }

    /// Appends a tick.
    pub fn push(&mut self, tick: Tick) {
        self.ticks.push(tick);
    }

    /// Gets the number of ticks.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Returns whether there are no ticks.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

impl Default for Ticks {
    fn default() -> Self {
        Self::new(None)
    }
}

impl From<Tick> for Ticks {
    fn from(tick: Tick) -> Self {
        Self::new(tick)
    }
}

impl From<Vec<Tick>> for Ticks {
    fn from(ticks: Vec<Tick>) -> Self {
        Self::new(ticks)
    }
}

impl From<Option<Tick>> for Ticks {
    fn from(tick: Option<Tick>) -> Self {
        Self::new(tick)
    }
}

impl From<Collection<Tick>> for Ticks {
    fn from(ticks: Collection<Tick>) -> Self {
        Self::new(ticks)
    }
}

impl std::fmt::Display for Ticks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "show_ticks = {}", Value::from(false));
        }

        write_parameter(f, "show_ticks", Value::from(true))?;
        write_parameter(f, "show_tick_labels", Value::from(self.show_label))?;
        write!(f, "{}", self.ticks)
    }
}
