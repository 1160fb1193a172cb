//! Highlights: colored arcs at genomic positions.

use crate::config::Attributes;
use crate::config::Collection;
use crate::config::DataFile;
use crate::config::Element;
use crate::config::RELATIVE;
use crate::config::ReservedKeyError;
use crate::config::Value;
use crate::config::check_key;
use crate::config::write_parameter;

/// The keys a highlight writes as fixed fields.
pub const RESERVED_KEYS: [&str; 3] = ["file", "r0", "r1"];

/// The attribute key of the fill color.
const FILL_COLOR: &str = "fill_color";

/// The attribute key of the counter initialization.
const INIT_COUNTER: &str = "init_counter";

/// A `<highlight>` block spanning `r0` to `r1`.
///
/// Apart from the fill color and the counter initialization, any Circos
/// highlight parameter can be set through [`Highlight::set()`].
///
/// # Examples
///
/// ```
/// use circosconf::config::DataFile;
/// use circosconf::config::Highlight;
///
/// let mut highlight = Highlight::new(DataFile::from_text("hs1 0 100\n")?, 0.9, 0.95);
/// highlight.set_fill_color(Some("red"));
/// highlight.set("stroke_thickness", 2)?;
/// assert!(highlight.set("r0", 0.5).is_err());
///
/// let rendered = highlight.to_string();
/// assert!(rendered.contains("r0 = 0.9r\nr1 = 0.95r\n"));
/// assert!(rendered.contains("fill_color = red\nstroke_thickness = 2\n"));
/// assert!(!rendered.contains("init_counter"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Highlight {
    /// The data file.
    file: DataFile,
    /// The inner radius.
    r0: f64,
    /// The outer radius.
    r1: f64,
    /// The remaining parameters.
    attributes: Attributes,
}

impl Highlight {
    /// Creates a highlight track reading from `file`.
    pub fn new(file: DataFile, r0: f64, r1: f64) -> Self {
        Self {
            file,
            r0,
            r1,
            attributes: Attributes::new(),
        }
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

    /// Gets the fill color.
    pub fn fill_color(&self) -> Option<&str> {
        self.attributes.get(FILL_COLOR).and_then(Value::as_str)
    }

    /// Sets (or, with [`None`], unsets) the fill color.
    pub fn set_fill_color(&mut self, color: Option<&str>) {
        self.attributes.set_optional(FILL_COLOR, color);
    }

    /// Gets the counter initialization (e.g., `highlight:1`).
    pub fn init_counter(&self) -> Option<&str> {
        self.attributes.get(INIT_COUNTER).and_then(Value::as_str)
    }

    /// Sets (or, with [`None`], unsets) the counter initialization.
    pub fn set_init_counter(&mut self, counter: Option<&str>) {
        self.attributes.set_optional(INIT_COUNTER, counter);
    }

    /// Gets the attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Sets a parameter.
    ///
    /// The [fixed fields](RESERVED_KEYS) of the block cannot be set.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), ReservedKeyError> {
        let key = key.into();
        check_key(&RESERVED_KEYS, &key)?;
        self.attributes.set(key, value);
        Ok(())
    }

    /// Unsets a parameter.
    pub fn unset(&mut self, key: &str) -> Option<Value> {
        self.attributes.remove(key)
    }
}

impl Element for Highlight {
    const BLOCK: &'static str = "highlights";
}

impl std::fmt::Display for Highlight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<highlight>")?;
        write_parameter(f, "file", &self.file)?;
        write_parameter(f, "r0", format!("{}{RELATIVE}", self.r0))?;
        write_parameter(f, "r1", format!("{}{RELATIVE}", self.r1))?;
        write!(f, "{}", self.attributes)?;
        write!(f, "</highlight>")
    }
}

/// A `<highlights>` block.
pub type Highlights = Collection<Highlight>;
