//! Per-kind plot option tables.

use std::str::FromStr;

use crate::config::Value;
use crate::config::plot::Kind;

/// How a value set for an option is checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Check {
    /// Any value is accepted.
    Any,
    /// The value must be text.
    Text,
    /// The value must be a number.
    Number,
    /// The value must be an integer.
    Integer,
    /// The value must be one of the listed words.
    OneOf(&'static [&'static str]),
}

impl Check {
    /// Returns whether `value` passes the check.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Check::Any => true,
            Check::Text => value.as_str().is_some(),
            Check::Number => value.is_number(),
            Check::Integer => value.as_i64().is_some(),
            Check::OneOf(words) => value.as_str().is_some_and(|value| words.contains(&value)),
        }
    }
}

/// A well-known option of a plot kind.
#[derive(Debug)]
pub struct OptionSpec {
    /// The name of the option.
    pub key: &'static str,
    /// The value read back when the option is not set.
    pub default: Option<Value>,
    /// The check applied when the option is set.
    pub check: Check,
}

/// An error where a plot option was set to a value it does not accept.
#[derive(Debug, PartialEq)]
pub struct InvalidOptionError {
    /// The kind of plot.
    pub kind: Kind,
    /// The option.
    pub key: String,
    /// The rejected value.
    pub value: Value,
}

impl std::fmt::Display for InvalidOptionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid value for the `{}` option of a {} plot: {}",
            self.key, self.kind, self.value
        )
    }
}

impl std::error::Error for InvalidOptionError {}

/// An error where a word could not be parsed into one of the option enums.
#[derive(Debug, PartialEq)]
pub struct ParseWordError(String);

impl std::fmt::Display for ParseWordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown word: {}", self.0)
    }
}

impl std::error::Error for ParseWordError {}

/// The direction in which plot values grow.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Orientation {
    /// Towards the center.
    In,
    /// Away from the center.
    #[default]
    Out,
}

impl Orientation {
    /// The accepted words.
    pub const WORDS: &'static [&'static str] = &["in", "out"];

    /// Gets the word for the orientation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::In => "in",
            Orientation::Out => "out",
        }
    }
}

impl FromStr for Orientation {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Orientation::In),
            "out" => Ok(Orientation::Out),
            _ => Err(ParseWordError(s.to_string())),
        }
    }
}

/// The glyph drawn for each scatter point.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Glyph {
    /// A circle.
    #[default]
    Circle,
    /// A rectangle.
    Rectangle,
    /// A square.
    Square,
    /// A triangle.
    Triangle,
    /// A cross.
    Cross,
}

impl Glyph {
    /// The accepted words.
    pub const WORDS: &'static [&'static str] =
        &["circle", "rectangle", "square", "triangle", "cross"];

    /// Gets the word for the glyph.
    pub fn as_str(&self) -> &'static str {
        match self {
            Glyph::Circle => "circle",
            Glyph::Rectangle => "rectangle",
            Glyph::Square => "square",
            Glyph::Triangle => "triangle",
            Glyph::Cross => "cross",
        }
    }
}

impl FromStr for Glyph {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circle" => Ok(Glyph::Circle),
            "rectangle" => Ok(Glyph::Rectangle),
            "square" => Ok(Glyph::Square),
            "triangle" => Ok(Glyph::Triangle),
            "cross" => Ok(Glyph::Cross),
            _ => Err(ParseWordError(s.to_string())),
        }
    }
}

/// What happens to tiles that do not fit in the available layers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LayersOverflow {
    /// The tiles are not drawn.
    #[default]
    Hide,
    /// More layers are added.
    Grow,
    /// The tiles are drawn on the last layer.
    Collapse,
}

impl LayersOverflow {
    /// The accepted words.
    pub const WORDS: &'static [&'static str] = &["hide", "grow", "collapse"];

    /// Gets the word for the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            LayersOverflow::Hide => "hide",
            LayersOverflow::Grow => "grow",
            LayersOverflow::Collapse => "collapse",
        }
    }
}

impl FromStr for LayersOverflow {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hide" => Ok(LayersOverflow::Hide),
            "grow" => Ok(LayersOverflow::Grow),
            "collapse" => Ok(LayersOverflow::Collapse),
            _ => Err(ParseWordError(s.to_string())),
        }
    }
}

/// A shorthand for an entry of an option table.
const fn spec(key: &'static str, default: Option<Value>, check: Check) -> OptionSpec {
    OptionSpec {
        key,
        default,
        check,
    }
}

/// The color option shared by most kinds.
const BLACK_COLOR: OptionSpec = spec("color", Some(Value::text("black")), Check::Text);

/// The orientation option shared by most kinds.
const ORIENTATION_OUT: OptionSpec = spec(
    "orientation",
    Some(Value::text("out")),
    Check::OneOf(Orientation::WORDS),
);

/// The options of heatmaps.
pub(crate) static HEATMAP: [OptionSpec; 6] = [
    BLACK_COLOR,
    ORIENTATION_OUT,
    spec("color_alt", None, Check::Text),
    spec("color_mapping", Some(Value::Integer(0)), Check::Integer),
    spec("scale_log_base", Some(Value::Integer(1)), Check::Number),
    spec("stroke_thickness", Some(Value::Integer(1)), Check::Number),
];

/// The options of histograms.
pub(crate) static HISTOGRAM: [OptionSpec; 3] = [
    BLACK_COLOR,
    ORIENTATION_OUT,
    spec("stroke_thickness", Some(Value::Integer(1)), Check::Number),
];

/// The options of line plots.
pub(crate) static LINE: [OptionSpec; 3] = [
    BLACK_COLOR,
    ORIENTATION_OUT,
    spec("thickness", Some(Value::Integer(1)), Check::Number),
];

/// The options of scatter plots.
pub(crate) static SCATTER: [OptionSpec; 6] = [
    BLACK_COLOR,
    ORIENTATION_OUT,
    spec(
        "glyph",
        Some(Value::text("circle")),
        Check::OneOf(Glyph::WORDS),
    ),
    spec("glyph_size", Some(Value::Integer(10)), Check::Number),
    spec("stroke_color", Some(Value::text("black")), Check::Text),
    spec("stroke_thickness", Some(Value::Integer(0)), Check::Number),
];

/// The options of text tracks.
pub(crate) static TEXT: [OptionSpec; 1] = [BLACK_COLOR];

/// The options of tile tracks.
pub(crate) static TILE: [OptionSpec; 9] = [
    spec("color", Some(Value::text("grey")), Check::Text),
    ORIENTATION_OUT,
    spec("stroke_color", Some(Value::text("vgrey")), Check::Text),
    spec("stroke_thickness", Some(Value::Integer(1)), Check::Number),
    spec("layers", Some(Value::Integer(10)), Check::Integer),
    spec(
        "layers_overflow",
        Some(Value::text("hide")),
        Check::OneOf(LayersOverflow::WORDS),
    ),
    spec("margin", Some(Value::text("1u")), Check::Any),
    spec("padding", Some(Value::Integer(3)), Check::Number),
    spec("thickness", Some(Value::Integer(10)), Check::Number),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checks() {
        assert!(Check::Any.accepts(&Value::from(true)));
        assert!(Check::Text.accepts(&Value::from("red")));
        assert!(!Check::Text.accepts(&Value::from(1)));
        assert!(Check::Number.accepts(&Value::from(1)));
        assert!(Check::Number.accepts(&Value::from(0.5)));
        assert!(!Check::Integer.accepts(&Value::from(0.5)));
        assert!(Check::OneOf(Orientation::WORDS).accepts(&Value::from("in")));
        assert!(!Check::OneOf(Orientation::WORDS).accepts(&Value::from("on")));
    }

    #[test]
    fn test_words() {
        for word in Glyph::WORDS {
            assert_eq!(word.parse::<Glyph>().map(|glyph| glyph.as_str()), Ok(*word));
        }

        for word in LayersOverflow::WORDS {
            assert_eq!(
                word.parse::<LayersOverflow>().map(|overflow| overflow.as_str()),
                Ok(*word)
            );
        }

        assert_eq!(
            "on".parse::<Orientation>(),
            Err(ParseWordError(String::from("on")))
        );
    }

    #[test]
    fn test_tables_have_unique_keys() {
        let tables: [&[OptionSpec]; 6] = [&HEATMAP, &HISTOGRAM, &LINE, &SCATTER, &TEXT, &TILE];

        for table in tables {
            let mut keys = table.iter().map(|option| option.key).collect::<Vec<_>>();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), table.len());
        }
    }
}
