//! The root of a configuration.

use std::io::{self};

use nonempty::NonEmpty;
use tracing::debug;

use crate::Karyotype;
use crate::config::Attributes;
use crate::config::DataFile;
use crate::config::Highlight;
use crate::config::Highlights;
use crate::config::Ideogram;
use crate::config::Link;
use crate::config::Links;
use crate::config::PIXELS;
use crate::config::Plot;
use crate::config::Plots;
use crate::config::ReservedKeyError;
use crate::config::Ticks;
use crate::config::Value;
use crate::config::check_key;
use crate::config::write_nested;
use crate::config::write_parameter;

/// The includes that precede any caller-supplied include.
pub const DEFAULT_INCLUDES: [&str; 2] = ["etc/housekeeping.conf", "etc/colors_fonts_patterns.conf"];

/// The include holding the image defaults shipped with Circos.
const IMAGE_INCLUDE: &str = "etc/image.conf";

/// The default width of the image (in pixels).
pub const DEFAULT_WIDTH: u32 = 750;

/// The keys the root writes as fixed fields.
pub const RESERVED_KEYS: [&str; 1] = ["karyotype"];

/// An error that occurs when a required field was never provided to the
/// [`Builder`].
#[derive(Debug)]
pub enum MissingError {
    /// No karyotype was provided to the [`Builder`].
    Karyotype,
}

impl std::fmt::Display for MissingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingError::Karyotype => write!(f, "karyotype"),
        }
    }
}

impl std::error::Error for MissingError {}

/// An error that occurs when a singular field was provided multiple times to
/// the [`Builder`].
#[derive(Debug)]
pub enum MultipleError {
    /// The ideogram was provided multiple times to the [`Builder`].
    Ideogram,

    /// The ticks were provided multiple times to the [`Builder`].
    Ticks,
}

impl std::fmt::Display for MultipleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultipleError::Ideogram => write!(f, "ideogram"),
            MultipleError::Ticks => write!(f, "ticks"),
        }
    }
}

impl std::error::Error for MultipleError {}

/// An error related to a [`Builder`].
#[derive(Debug)]
pub enum Error {
    /// An error where a required field was never provided to the [`Builder`].
    Missing(MissingError),

    /// An error where a singular field was provided to the [`Builder`] more
    /// than once.
    Multiple(MultipleError),

    /// A top-level parameter collides with a fixed field.
    Reserved(ReservedKeyError),

    /// An I/O error while writing the karyotype files.
    Io(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Missing(err) => write!(f, "missing required field: {err}"),
            Error::Multiple(err) => write!(f, "singular field set multiple times: {err}"),
            Error::Reserved(err) => write!(f, "invalid parameter: {err}"),
            Error::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A complete Circos configuration.
///
/// A [`Circos`] owns every data file its configuration points to, so it must
/// be kept alive until Circos has been run.
#[derive(Debug)]
pub struct Circos {
    /// The karyotypes.
    karyotypes: NonEmpty<Karyotype>,
    /// The files the karyotypes were written to.
    karyotype_files: Vec<DataFile>,
    /// The ideogram.
    ideogram: Ideogram,
    /// The ticks.
    ticks: Ticks,
    /// The links.
    links: Links,
    /// The highlights.
    highlights: Highlights,
    /// The plots.
    plots: Plots,
    /// The included files.
    includes: Vec<String>,
    /// The width of the image (in pixels).
    width: u32,
    /// The top-level parameters.
    attributes: Attributes,
}

impl Circos {
    /// Gets the karyotypes.
    pub fn karyotypes(&self) -> &NonEmpty<Karyotype> {
        &self.karyotypes
    }

    /// Gets the files the karyotypes were written to.
    pub fn karyotype_files(&self) -> &[DataFile] {
        &self.karyotype_files
    }

    /// Gets the ideogram.
    pub fn ideogram(&self) -> &Ideogram {
        &self.ideogram
    }

    /// Gets the ticks.
    pub fn ticks(&self) -> &Ticks {
        &self.ticks
    }

    /// Gets the links.
    pub fn links(&self) -> &Links {
        &self.links
    }

    /// Gets the highlights.
    pub fn highlights(&self) -> &Highlights {
        &self.highlights
    }

    /// Gets the plots.
    pub fn plots(&self) -> &Plots {
        &self.plots
    }

    /// Gets the included files in order.
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// Gets the width of the image (in pixels).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Gets the radius of the image (in whole pixels).
    pub fn radius(&self) -> u32 {
        self.width / 2
    }

    /// Gets the top-level parameters.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

impl std::fmt::Display for Circos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let karyotypes = self
            .karyotype_files
            .iter()
            .map(|file| file.to_string())
            .collect::<Vec<_>>()
            .join(",");

        write_parameter(f, "karyotype", karyotypes)?;
        write!(f, "{}", self.attributes)?;
        writeln!(f)?;

        writeln!(f, "<image>")?;
        writeln!(f, "<<include {IMAGE_INCLUDE}>>")?;
        writeln!(f, "radius* = {}{PIXELS}", self.radius())?;
        writeln!(f, "</image>")?;
        writeln!(f)?;

        for include in &self.includes {
            writeln!(f, "<<include {include}>>")?;
        }

        writeln!(f)?;
        write_nested(f, &self.ideogram)?;
        write_nested(f, &self.ticks)?;
        write_nested(f, &self.links)?;
        write_nested(f, &self.highlights)?;
        write_nested(f, &self.plots)
    }
}

/// A builder for a [`Circos`].
#[derive(Debug, Default)]
pub struct Builder {
    /// The karyotypes.
    karyotypes: Option<NonEmpty<Karyotype>>,
    /// The ideogram.
    ideogram: Option<Ideogram>,
    /// The ticks.
    ticks: Option<Ticks>,
    /// The links.
    links: Links,
    /// The highlights.
    highlights: Highlights,
    /// The plots.
    plots: Plots,
    /// The caller-supplied includes.
    includes: Vec<String>,
    /// Whether the default includes are left out.
    exclude_defaults: bool,
    /// The width of the image.
    width: Option<u32>,
    /// The top-level parameters.
    attributes: Attributes,
}

impl Builder {
    /// Pushes a karyotype into the [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::config::circos::Builder;
    /// use circosconf::karyotype::Chromosome;
    /// use circosconf::Karyotype;
    ///
    /// let karyotype = Karyotype::from(vec![Chromosome::new("hs1", "1", 0, 100, "red").into()]);
    /// let builder = Builder::default().karyotype(karyotype);
    /// ```
    pub fn karyotype(mut self, karyotype: Karyotype) -> Self {
        let karyotypes = match self.karyotypes {
            Some(mut karyotypes) => {
                karyotypes.push(karyotype);
                karyotypes
            }
            None => NonEmpty::new(karyotype),
        };

        self.karyotypes = Some(karyotypes);
        self
    }

    /// Pushes multiple karyotypes into the [`Builder`].
    pub fn karyotypes(self, karyotypes: impl IntoIterator<Item = Karyotype>) -> Self {
        karyotypes
            .into_iter()
            .fold(self, |builder, karyotype| builder.karyotype(karyotype))
    }

    /// Sets the ideogram for the [`Builder`].
    pub fn ideogram(mut self, ideogram: Ideogram) -> Result<Self> {
        if self.ideogram.is_some() {
            return Err(Error::Multiple(MultipleError::Ideogram));
        }

        self.ideogram = Some(ideogram);
        Ok(self)
    }

    /// Sets the ticks for the [`Builder`].
    pub fn ticks(mut self, ticks: impl Into<Ticks>) -> Result<Self> {
        if self.ticks.is_some() {
            return Err(Error::Multiple(MultipleError::Ticks));
        }

        self.ticks = Some(ticks.into());
        Ok(self)
    }

    /// Pushes a link track into the [`Builder`].
    pub fn link(mut self, link: Link) -> Self {
        self.links.push(link);
        self
    }

    /// Pushes multiple link tracks into the [`Builder`].
    pub fn links(self, links: impl Into<Links>) -> Self {
        links.into().into_iter().fold(self, Self::link)
    }

    /// Pushes a highlight track into the [`Builder`].
    pub fn highlight(mut self, highlight: Highlight) -> Self {
        self.highlights.push(highlight);
        self
    }

    /// Pushes multiple highlight tracks into the [`Builder`].
    pub fn highlights(self, highlights: impl Into<Highlights>) -> Self {
        highlights.into().into_iter().fold(self, Self::highlight)
    }

    /// Pushes a plot into the [`Builder`].
    pub fn plot(mut self, plot: impl Into<Plot>) -> Self {
        self.plots.push(plot.into());
        self
    }

    /// Pushes multiple plots into the [`Builder`].
    pub fn plots(self, plots: impl Into<Plots>) -> Self {
        plots
            .into()
            .into_iter()
            .fold(self, |builder, plot| builder.plot(plot))
    }

    /// Pushes an include into the [`Builder`].
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.includes.push(include.into());
        self
    }

    /// Sets whether the default includes ([`DEFAULT_INCLUDES`]) precede the
    /// caller-supplied includes. They do unless this is set to `false`.
    pub fn include_defaults(mut self, include_defaults: bool) -> Self {
        self.exclude_defaults = !include_defaults;
        self
    }

    /// Sets the width of the image (in pixels).
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets a top-level parameter.
    ///
    /// The [fixed fields](RESERVED_KEYS) of the root cannot be set.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Self> {
        let key = key.into();
        check_key(&RESERVED_KEYS, &key).map_err(Error::Reserved)?;
        self.attributes.set(key, value);
        Ok(self)
    }

    /// Consumes `self` to attempt to build a [`Circos`].
    ///
    /// Every karyotype is written to its own temporary data file.
    ///
    /// # Examples
    ///
    /// ```
    /// use circosconf::config::circos::Builder;
    /// use circosconf::karyotype::Chromosome;
    /// use circosconf::Karyotype;
    ///
    /// let karyotype = Karyotype::from(vec![Chromosome::new("hs1", "1", 0, 100, "red").into()]);
    ///
    /// let circos = Builder::default()
    ///     .karyotype(karyotype)
    ///     .include("etc/tracks/link.conf")
    ///     .width(1000)
    ///     .try_build()?;
    ///
    /// assert_eq!(circos.radius(), 500);
    /// assert_eq!(
    ///     circos.includes(),
    ///     &[
    ///         "etc/housekeeping.conf",
    ///         "etc/colors_fonts_patterns.conf",
    ///         "etc/tracks/link.conf"
    ///     ]
    /// );
    /// assert!(circos.to_string().contains("radius* = 500p\n"));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<Circos> {
        let karyotypes = self
            .karyotypes
            .ok_or(Error::Missing(MissingError::Karyotype))?;

        let karyotype_files = karyotypes
            .iter()
            .map(Karyotype::to_data_file)
            .collect::<io::Result<Vec<_>>>()
            .map_err(Error::Io)?;

        let mut includes = Vec::new();

        if !self.exclude_defaults {
            includes.extend(DEFAULT_INCLUDES.iter().map(|include| include.to_string()));
        }

        includes.extend(self.includes);

        debug!(
            karyotypes = karyotypes.len(),
            plots = self.plots.len(),
            links = self.links.len(),
            highlights = self.highlights.len(),
            "built configuration"
        );

        Ok(Circos {
            karyotypes,
            karyotype_files,
            ideogram: self.ideogram.unwrap_or_default(),
            ticks: self.ticks.unwrap_or_default(),
            links: self.links,
            highlights: self.highlights,
            plots: self.plots,
            includes,
            width: self.width.unwrap_or(DEFAULT_WIDTH),
            attributes: self.attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Tick;
    use crate::config::plot::Histogram;
    use crate::karyotype::Chromosome;
    use super::*;

    fn karyotype() -> Karyotype {
        Karyotype::from(vec![
            Chromosome::new("hs1", "1", 0, 100, "red").into(),
            Chromosome::new("hs2", "2", 0, 50, "blue").into(),
        ])
    }

    #[test]
    fn test_missing_karyotype() {
        let err = Builder::default().try_build().unwrap_err();
        assert!(matches!(err, Error::Missing(MissingError::Karyotype)));
        assert_eq!(err.to_string(), "missing required field: karyotype");
    }

    #[test]
    fn test_multiple_ideograms() -> Result<()> {
        let err = Builder::default()
            .ideogram(Ideogram::default())?
            .ideogram(Ideogram::default())
            .unwrap_err();

        assert!(matches!(err, Error::Multiple(MultipleError::Ideogram)));
        Ok(())
    }

    #[test]
    fn test_defaults() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let circos = Builder::default().karyotype(karyotype()).try_build()?;

        assert_eq!(circos.karyotypes().len(), 1);
        assert_eq!(circos.width(), DEFAULT_WIDTH);
        assert_eq!(circos.radius(), 375);
        assert_eq!(circos.ideogram(), &Ideogram::default());
        assert!(circos.ticks().is_empty());
        assert!(circos.links().is_empty());
        assert!(circos.highlights().is_empty());
        assert!(circos.plots().is_empty());
        assert_eq!(circos.includes(), &DEFAULT_INCLUDES);

        let contents = std::fs::read_to_string(circos.karyotype_files()[0].path())?;
        assert_eq!(contents, "chr - hs1 1 0 100 red\nchr - hs2 2 0 50 blue\n");

        Ok(())
    }

    #[test]
    fn test_include_defaults_can_be_suppressed() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let circos = Builder::default()
            .karyotype(karyotype())
            .include("etc/custom.conf")
            .include_defaults(false)
            .try_build()?;

        assert_eq!(circos.includes(), &[String::from("etc/custom.conf")]);
        Ok(())
    }

    #[test]
    fn test_odd_width_radius() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let circos = Builder::default()
            .karyotype(karyotype())
            .width(751)
            .try_build()?;

        assert_eq!(circos.radius(), 375);
        assert!(circos.to_string().contains("radius* = 375p\n"));

        Ok(())
    }

    #[test]
    fn test_karyotype_cannot_be_set_as_attribute() {
        let err = Builder::default()
            .karyotype(karyotype())
            .attribute("karyotype", "elsewhere.txt")
            .unwrap_err();

        assert!(matches!(err, Error::Reserved(ReservedKeyError(ref key)) if key == "karyotype"));
    }

    #[test]
    fn test_circos_display() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let circos = Builder::default()
            .karyotypes(vec![karyotype(), karyotype()])
            .ticks(Tick::at_radius(1.0))?
            .plot(Histogram::new(DataFile::from_text("")?, 0.8, 0.9))
            .attribute("chromosomes_units", 1000)?
            .try_build()?;

        let paths = circos
            .karyotype_files()
            .iter()
            .map(|file| file.path().display().to_string())
            .collect::<Vec<_>>();

        let rendered = circos.to_string();
        let expected_head = format!(
            "karyotype = {},{}\nchromosomes_units = 1000\n\n<image>\n<<include \
             etc/image.conf>>\nradius* = 375p\n</image>\n\n<<include \
             etc/housekeeping.conf>>\n<<include etc/colors_fonts_patterns.conf>>\n\n<ideogram>\n",
            paths[0], paths[1]
        );

        assert!(rendered.starts_with(&expected_head));
        assert!(rendered.contains("</ideogram>\nshow_ticks = yes\n"));
        assert!(rendered.contains("</ticks>\n<plots>\n<plot>\ntype = histogram\n"));
        assert!(rendered.ends_with("</plot>\n</plots>\n"));
        assert!(!rendered.contains("<links>"));
        assert!(!rendered.contains("<highlights>"));

        Ok(())
    }
}
