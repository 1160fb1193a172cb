//! The ideogram: the ring of chromosomes.

use crate::config::CHROMOSOME_UNITS;
use crate::config::PIXELS;
use crate::config::RELATIVE;
use crate::config::Value;

/// The `<ideogram>` block.
///
/// The default ideogram draws filled black chromosomes at 85% of the image
/// radius with bands shown and no labels.
///
/// `label_radius` is rendered as an offset from the ideogram radius
/// (`dims(ideogram,radius) + 0.05r`) rather than as a bare `0.05`, so labels
/// sit just outside the ideogram instead of near the center of the image.
#[derive(Clone, Debug, PartialEq)]
pub struct Ideogram {
    /// The spacing between adjacent chromosomes (in chromosome units).
    pub default_spacing: f64,
    /// The spacing at axis breaks (in chromosome units).
    pub break_spacing: f64,
    /// The thickness of the ideogram (in pixels).
    pub thickness: f64,
    /// The thickness of the ideogram outline.
    pub stroke_thickness: f64,
    /// The color of the ideogram outline.
    pub stroke_color: String,
    /// Whether the ideogram is filled.
    pub fill: bool,
    /// The default fill color (overridden by the karyotype colors).
    pub fill_color: String,
    /// The radial position of the ideogram, relative to the image radius.
    pub radius: f64,
    /// Whether chromosome labels are drawn.
    pub show_label: bool,
    /// The font of the labels.
    pub label_font: String,
    /// The distance of the labels from the ideogram, relative to the image
    /// radius.
    pub label_radius: f64,
    /// The size of the labels.
    pub label_size: f64,
    /// Whether labels are drawn parallel to the ideogram.
    pub label_parallel: bool,
    /// The case of the labels.
    pub label_case: String,
    /// The thickness of the band outlines.
    pub band_stroke_thickness: f64,
    /// Whether band outlines are drawn.
    pub show_bands: bool,
    /// Whether bands are filled with their karyotype color.
    pub fill_bands: bool,
}

impl Default for Ideogram {
    fn default() -> Self {
        Self {
            default_spacing: 0.0,
            break_spacing: 0.0,
            thickness: 1.0,
            stroke_thickness: 2.0,
            stroke_color: String::from("black"),
            fill: true,
            fill_color: String::from("black"),
            radius: 0.85,
            show_label: false,
            label_font: String::from("default"),
            label_radius: 0.05,
            label_size: 60.0,
            label_parallel: true,
            label_case: String::from("upper"),
            band_stroke_thickness: 1.0,
            show_bands: true,
            fill_bands: true,
        }
    }
}

impl std::fmt::Display for Ideogram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let yes_no = |value: bool| Value::from(value);

        writeln!(f, "<ideogram>")?;
        writeln!(f)?;

        writeln!(f, "<spacing>")?;
        writeln!(f, "default = {}{CHROMOSOME_UNITS}", self.default_spacing)?;
        writeln!(f, "break   = {}{CHROMOSOME_UNITS}", self.break_spacing)?;
        writeln!(f, "</spacing>")?;
        writeln!(f)?;

        writeln!(f, "thickness        = {}{PIXELS}", self.thickness)?;
        writeln!(f, "stroke_thickness = {}", self.stroke_thickness)?;
        writeln!(f, "stroke_color     = {}", self.stroke_color)?;
        writeln!(f, "fill             = {}", yes_no(self.fill))?;
        writeln!(f, "fill_color       = {}", self.fill_color)?;
        writeln!(f)?;

        writeln!(f, "radius         = {}{RELATIVE}", self.radius)?;
        writeln!(f, "show_label     = {}", yes_no(self.show_label))?;
        writeln!(f, "label_font     = {}", self.label_font)?;
        writeln!(
            f,
            "label_radius   = dims(ideogram,radius) + {}{RELATIVE}",
            self.label_radius
        )?;
        writeln!(f, "label_size     = {}", self.label_size)?;
        writeln!(f, "label_parallel = {}", yes_no(self.label_parallel))?;
        writeln!(f, "label_case     = {}", self.label_case)?;
        writeln!(f)?;

        writeln!(f, "band_stroke_thickness = {}", self.band_stroke_thickness)?;
        writeln!(f, "show_bands            = {}", yes_no(self.show_bands))?;
        writeln!(f, "fill_bands            = {}", yes_no(self.fill_bands))?;
        writeln!(f)?;

        write!(f, "</ideogram>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The rendering of the default ideogram.
    const DEFAULT_IDEOGRAM: &str = "<ideogram>

<spacing>
default = 0u
break   = 0u
</spacing>

thickness        = 1p
stroke_thickness = 2
stroke_color     = black
fill             = yes
fill_color       = black

radius         = 0.85r
show_label     = no
label_font     = default
label_radius   = dims(ideogram,radius) + 0.05r
label_size     = 60
label_parallel = yes
label_case     = upper

band_stroke_thickness = 1
show_bands            = yes
fill_bands            = yes

</ideogram>";

    #[test]
    fn test_default_ideogram_values() {
        let ideogram = Ideogram::default();

        assert_eq!(ideogram.default_spacing, 0.0);
        assert_eq!(ideogram.break_spacing, 0.0);
        assert_eq!(ideogram.thickness, 1.0);
        assert_eq!(ideogram.stroke_thickness, 2.0);
        assert_eq!(ideogram.stroke_color, "black");
        assert!(ideogram.fill);
        assert_eq!(ideogram.fill_color, "black");
        assert_eq!(ideogram.radius, 0.85);
        assert!(!ideogram.show_label);
        assert_eq!(ideogram.label_font, "default");
        assert_eq!(ideogram.label_radius, 0.05);
        assert_eq!(ideogram.label_size, 60.0);
        assert!(ideogram.label_parallel);
        assert_eq!(ideogram.label_case, "upper");
        assert_eq!(ideogram.band_stroke_thickness, 1.0);
        assert!(ideogram.show_bands);
        assert!(ideogram.fill_bands);
    }

    #[test]
    fn test_default_ideogram_display() {
        assert_eq!(Ideogram::default().to_string(), DEFAULT_IDEOGRAM);
    }

    #[test]
    fn test_custom_ideogram_display() {
        let ideogram = Ideogram {
            default_spacing: 0.005,
            radius: 0.9,
            show_label: true,
            fill_color: String::from("grey"),
            ..Default::default()
        };

        let rendered = ideogram.to_string();
        assert!(rendered.contains("default = 0.005u\n"));
        assert!(rendered.contains("radius         = 0.9r\n"));
        assert!(rendered.contains("show_label     = yes\n"));
        assert!(rendered.contains("fill_color       = grey\n"));
    }
}
