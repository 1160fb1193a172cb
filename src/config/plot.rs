//! Data tracks.
//!
//! Every track is a [`Plot`] of some [`Kind`]. Options that Circos understands
//! for a kind are kept in an open-ended [`Attributes`] store. Each kind has a
//! static table of well-known options: reading an option that was never set
//! returns the default from the table, and setting a well-known option checks
//! the value against the table. Only options that were explicitly set are
//! rendered.
//!
//! The wrappers in [`kinds`] add typed accessors for the well-known options.

pub mod kinds;
pub mod options;

pub use kinds::Heatmap;
pub use kinds::Histogram;
pub use kinds::Line;
pub use kinds::Scatter;
pub use kinds::Text;
pub use kinds::Tile;
pub use options::Glyph;
pub use options::InvalidOptionError;
pub use options::LayersOverflow;
pub use options::OptionSpec;
pub use options::Orientation;

use crate::config::Attributes;
use crate::config::Axes;
use crate::config::Backgrounds;
use crate::config::Collection;
use crate::config::DataFile;
use crate::config::Element;
use crate::config::RELATIVE;
use crate::config::Rules;
use crate::config::Value;
use crate::config::check_key;
use crate::config::write_nested;
use crate::config::write_parameter;

/// The keys a plot writes as fixed fields.
pub const RESERVED_KEYS: [&str; 4] = ["type", "file", "r0", "r1"];

/// The kind of a plot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// A heatmap.
    Heatmap,
    /// A histogram.
    Histogram,
    /// A line plot.
    Line,
    /// A scatter plot.
    Scatter,
    /// A text track.
    Text,
    /// A tile track.
    Tile,
}

impl Kind {
    /// Gets the table of well-known options for this kind.
    pub fn options(&self) -> &'static [OptionSpec] {
        match self {
            Kind::Heatmap => &options::HEATMAP,
            Kind::Histogram => &options::HISTOGRAM,
            Kind::Line => &options::LINE,
            Kind::Scatter => &options::SCATTER,
            Kind::Text => &options::TEXT,
            Kind::Tile => &options::TILE,
        }
    }

    /// Looks up a well-known option.
    pub fn option(&self, key: &str) -> Option<&'static OptionSpec> {
        self.options().iter().find(|option| option.key == key)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Heatmap => write!(f, "heatmap"),
            Kind::Histogram => write!(f, "histogram"),
            Kind::Line => write!(f, "line"),
            Kind::Scatter => write!(f, "scatter"),
            Kind::Text => write!(f, "text"),
            Kind::Tile => write!(f, "tile"),
        }
    }
}

/// A `<plot>` block.
///
/// # Examples
///
/// ```
/// use circosconf::config::plot::Kind;
/// use circosconf::config::DataFile;
/// use circosconf::config::Plot;
/// use circosconf::config::Value;
///
/// let mut plot = Plot::new(Kind::Scatter, DataFile::from_text("hs1 0 10 0.5\n")?, 0.8, 0.9);
///
/// // Unset options read through to their defaults and are not rendered.
/// assert_eq!(plot.option("glyph"), Some(&Value::text("circle")));
/// assert!(!plot.to_string().contains("glyph"));
///
/// plot.set("glyph", "triangle")?;
/// assert_eq!(plot.option("glyph"), Some(&Value::text("triangle")));
/// assert!(plot.to_string().contains("glyph = triangle\n"));
///
/// // Well-known options are checked.
/// assert!(plot.set("glyph", "hexagon").is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Plot {
    /// The kind of plot.
    kind: Kind,
    /// The data file.
    file: DataFile,
    /// The inner radius.
    r0: f64,
    /// The outer radius.
    r1: f64,
    /// The options that were explicitly set.
    attributes: Attributes,
    /// The background bands.
    pub backgrounds: Backgrounds,
    /// The axis lines.
    pub axes: Axes,
    /// The rules applied to individual data points.
    pub rules: Rules,
}

impl Plot {
    /// Creates a plot of `kind` reading from `file` between `r0` and `r1`.
    pub fn new(kind: Kind, file: DataFile, r0: f64, r1: f64) -> Self {
        Self {
            kind,
            file,
            r0,
            r1,
            attributes: Attributes::new(),
            backgrounds: Backgrounds::default(),
            axes: Axes::default(),
            rules: Rules::default(),
        }
    }

    /// Gets the kind of plot.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Gets the data file.
    pub fn file(&self) -> &DataFile {
        &self.file
    }

    /// Gets the inner radius.
    pub fn r0(&self) -> f64 {
        self.r0
    }

    /// Gets the outer radius.
    pub fn r1(&self) -> f64 {
        self.r1
    }

    /// Gets the options that were explicitly set.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Gets the value of an option, falling back to the default of a
    /// well-known option.
    pub fn option(&self, key: &str) -> Option<&Value> {
        self.attributes
            .get(key)
            .or_else(|| self.kind.option(key).and_then(|option| option.default.as_ref()))
    }

    /// Sets an option.
    ///
    /// Options that are not well-known for this kind are accepted as is,
    /// except for the [fixed fields](RESERVED_KEYS) of the block.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), InvalidOptionError> {
        let key = key.into();
        let value = value.into();

        let accepted = match self.kind.option(&key) {
            Some(option) => option.check.accepts(&value),
            None => check_key(&RESERVED_KEYS, &key).is_ok(),
        };

        if !accepted {
            return Err(InvalidOptionError {
                kind: self.kind,
                key,
                value,
            });
        }

        self.attributes.set(key, value);
        Ok(())
    }

    /// Unsets an option so that it reads as its default again.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.attributes.remove(key)
    }

    /// Gets the color.
    pub fn color(&self) -> &str {
        self.text("color")
    }

    /// Sets the color.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.attributes.set("color", color.into());
    }

    /// Reads a text option.
    fn text(&self, key: &str) -> &str {
        self.option(key).and_then(Value::as_str).unwrap_or_default()
    }

    /// Reads a numeric option.
    fn number(&self, key: &str) -> f64 {
        self.option(key).and_then(Value::as_f64).unwrap_or_default()
    }
}

impl Element for Plot {
    const BLOCK: &'static str = "plots";
}

impl std::fmt::Display for Plot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<plot>")?;
        write_parameter(f, "type", self.kind)?;
        write_parameter(f, "file", &self.file)?;
        write_parameter(f, "r0", format!("{}{RELATIVE}", self.r0))?;
        write_parameter(f, "r1", format!("{}{RELATIVE}", self.r1))?;
        write!(f, "{}", self.attributes)?;
        write_nested(f, &self.backgrounds)?;
        write_nested(f, &self.axes)?;
        write_nested(f, &self.rules)?;
        write!(f, "</plot>")
    }
}

/// A `<plots>` block.
pub type Plots = Collection<Plot>;

#[cfg(test)]
mod tests {
    use crate::config::Axis;
    use crate::config::Background;
    use crate::config::Rule;
    use super::*;

    #[test]
    fn test_defaults_read_through() -> Result<(), Box<dyn std::error::Error>> {
        let plot = Plot::new(Kind::Heatmap, DataFile::from_text("")?, 0.5, 0.6);

        assert_eq!(plot.color(), "black");
        assert_eq!(plot.option("orientation"), Some(&Value::text("out")));
        assert_eq!(plot.option("color_mapping"), Some(&Value::Integer(0)));
        assert_eq!(plot.option("color_alt"), None);
        assert_eq!(plot.option("not_an_option"), None);
        assert!(plot.attributes().is_empty());

        Ok(())
    }

    #[test]
    fn test_set_overrides_default() -> Result<(), Box<dyn std::error::Error>> {
        let mut plot = Plot::new(Kind::Histogram, DataFile::from_text("")?, 0.5, 0.6);

        plot.set("stroke_thickness", 3)?;
        assert_eq!(plot.option("stroke_thickness"), Some(&Value::Integer(3)));

        plot.set("fill_color", "red")?;
        assert_eq!(plot.option("fill_color"), Some(&Value::from("red")));

        assert_eq!(plot.unset("stroke_thickness"), Some(Value::Integer(3)));
        assert_eq!(plot.option("stroke_thickness"), Some(&Value::Integer(1)));

        Ok(())
    }

    #[test]
    fn test_invalid_option() -> Result<(), Box<dyn std::error::Error>> {
        let mut plot = Plot::new(Kind::Histogram, DataFile::from_text("")?, 0.5, 0.6);

        let err = plot.set("orientation", "on").unwrap_err();
        assert_eq!(err.kind, Kind::Histogram);
        assert_eq!(err.key, "orientation");
        assert_eq!(
            err.to_string(),
            "invalid value for the `orientation` option of a histogram plot: on"
        );
        assert!(plot.attributes().is_empty());

        Ok(())
    }

    #[test]
    fn test_fixed_fields_cannot_be_set() -> Result<(), Box<dyn std::error::Error>> {
        let mut plot = Plot::new(Kind::Line, DataFile::from_text("")?, 0.7, 0.8);

        for key in RESERVED_KEYS {
            let err = plot.set(key, 0.1).unwrap_err();
            assert_eq!(err.key, key);
        }

        assert!(plot.set("type", "scatter").is_err());
        assert!(plot.attributes().is_empty());

        let rendered = plot.to_string();
        assert_eq!(rendered.matches("\nr0 = ").count(), 1);
        assert_eq!(rendered.matches("\ntype = ").count(), 1);
        assert!(rendered.contains("type = line\n"));

        Ok(())
    }

    #[test]
    fn test_plot_display() -> Result<(), Box<dyn std::error::Error>> {
        let file = DataFile::from_text("")?;
        let path = file.path().display().to_string();

        let mut plot = Plot::new(Kind::Line, file, 0.7, 0.8);
        plot.set_color("blue");
        plot.set("thickness", 2)?;
        plot.backgrounds.push(Background::default());
        plot.axes.push(Axis::new(0.0, 1.0));
        plot.rules.push(Rule::default());

        assert_eq!(
            plot.to_string(),
            format!(
                "<plot>\ntype = line\nfile = {path}\nr0 = 0.7r\nr1 = 0.8r\ncolor = \
                 blue\nthickness = 2\n<backgrounds>\n<background>\ny0 = 0r\ny1 = \
                 1r\n</background>\n</backgrounds>\n<axes>\n<axis>\ny0 = 0r\ny1 = \
                 1r\n</axis>\n</axes>\n<rules>\n<rule>\nshow = \
                 yes\n</rule>\n</rules>\n</plot>"
            )
        );

        Ok(())
    }

    #[test]
    fn test_unset_options_are_not_rendered() -> Result<(), Box<dyn std::error::Error>> {
        let file = DataFile::from_text("")?;
        let path = file.path().display().to_string();
        let plot = Plot::new(Kind::Tile, file, 0.7, 0.8);

        assert_eq!(
            plot.to_string(),
            format!("<plot>\ntype = tile\nfile = {path}\nr0 = 0.7r\nr1 = 0.8r\n</plot>")
        );

        Ok(())
    }
}
