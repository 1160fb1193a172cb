//! Links: ribbons connecting two genomic positions.

use crate::config::Collection;
use crate::config::DataFile;
use crate::config::Element;
use crate::config::RELATIVE;
use crate::config::Rules;
use crate::config::Value;
use crate::config::write_nested;
use crate::config::write_optional;
use crate::config::write_optional_unit;
use crate::config::write_parameter;

/// A `<link>` block.
///
/// The data file holds one link per line in the form
/// `chrA startA endA chrB startB endB [options]`.
///
/// # Examples
///
/// ```
/// use circosconf::config::DataFile;
/// use circosconf::config::Link;
///
/// let mut link = Link::new(DataFile::from_text("hs1 0 10 hs2 5 15 color=red\n")?);
/// link.radius = Some(0.8);
///
/// let rendered = link.to_string();
/// assert!(rendered.starts_with("<link>\nfile = "));
/// assert!(rendered.contains("radius = 0.8r\n"));
/// assert!(rendered.contains("ribbon = no\n"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Link {
    /// The data file.
    file: DataFile,
    /// The default color of the links.
    pub color: Option<String>,
    /// The radial position of the link ends, relative to the image radius.
    pub radius: Option<f64>,
    /// The radial position of the Bézier control point.
    pub bezier_radius: f64,
    /// The purity of the Bézier curve.
    pub bezier_radius_purity: f64,
    /// The crest of the curve.
    pub crest: f64,
    /// Whether links are drawn as ribbons.
    pub ribbon: bool,
    /// The thickness of the links.
    pub thickness: f64,
    /// The rules applied to individual links.
    pub rules: Rules,
}

impl Link {
    /// Creates a link track reading from `file` with the default curve shape.
    pub fn new(file: DataFile) -> Self {
        Self {
            file,
            color: None,
            radius: None,
            bezier_radius: 0.1,
            bezier_radius_purity: 0.75,
            crest: 0.5,
            ribbon: false,
            thickness: 1.0,
            rules: Rules::default(),
        }
    }

    /// Gets the data file.
    pub fn file(&self) -> &DataFile {
        &self.file
    }
}

impl Element for Link {
    const BLOCK: &'static str = "links";
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "<link>")?;
        write_parameter(f, "file", &self.file)?;
        write_optional(f, "color", self.color.as_deref())?;
        write_optional_unit(f, "radius", self.radius, RELATIVE)?;
        write_parameter(f, "bezier_radius", format!("{}{RELATIVE}", self.bezier_radius))?;
        write_parameter(f, "bezier_radius_purity", self.bezier_radius_purity)?;
        write_parameter(f, "crest", self.crest)?;
        write_parameter(f, "ribbon", Value::from(self.ribbon))?;
        write_parameter(f, "thickness", self.thickness)?;
        write_nested(f, &self.rules)?;
        write!(f, "</link>")
    }
}

/// A `<links>` block.
pub type Links = Collection<Link>;
