//! Typed wrappers for each kind of plot.

use crate::config::DataFile;
use crate::config::Plot;
use crate::config::Value;
use crate::config::plot::Glyph;
use crate::config::plot::Kind;
use crate::config::plot::LayersOverflow;
use crate::config::plot::Orientation;

/// Declares a wrapper around a [`Plot`] of a single kind.
macro_rules! plot_kind {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name(Plot);

        impl $name {
            #[doc = concat!("Creates a new [`", stringify!($name), "`] reading from `file` between `r0` and `r1`.")]
            pub fn new(file: DataFile, r0: f64, r1: f64) -> Self {
                Self(Plot::new($kind, file, r0, r1))
            }

            /// Consumes `self` and returns the inner [`Plot`].
            pub fn into_inner(self) -> Plot {
                self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = Plot;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<$name> for Plot {
            fn from(plot: $name) -> Self {
                plot.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

/// Declares the orientation accessors of a wrapper.
macro_rules! orientation {
    ($name:ident) => {
        impl $name {
            /// Gets the direction in which values grow.
            pub fn orientation(&self) -> Orientation {
                self.0.text("orientation").parse().unwrap_or_default()
            }

            /// Sets the direction in which values grow.
            pub fn set_orientation(&mut self, orientation: Orientation) {
                self.0
                    .attributes
                    .set("orientation", Value::text(orientation.as_str()));
            }
        }
    };
}

plot_kind!(
    /// A heatmap track.
    Heatmap,
    Kind::Heatmap
);
orientation!(Heatmap);

impl Heatmap {
    /// Gets the alternate color.
    pub fn color_alt(&self) -> Option<&str> {
        self.0.option("color_alt").and_then(Value::as_str)
    }

    /// Sets (or, with [`None`], unsets) the alternate color.
    pub fn set_color_alt(&mut self, color: Option<&str>) {
        self.0.attributes.set_optional("color_alt", color);
    }

    /// Gets how values are mapped to colors.
    pub fn color_mapping(&self) -> i64 {
        self.0
            .option("color_mapping")
            .and_then(Value::as_i64)
            .unwrap_or_default()
    }

    /// Sets how values are mapped to colors.
    pub fn set_color_mapping(&mut self, mapping: i64) {
        self.0.attributes.set("color_mapping", mapping);
    }

    /// Gets the base of the logarithmic color scale.
    pub fn scale_log_base(&self) -> f64 {
        self.0.number("scale_log_base")
    }

    /// Sets the base of the logarithmic color scale.
    pub fn set_scale_log_base(&mut self, base: f64) {
        self.0.attributes.set("scale_log_base", base);
    }

    /// Gets the outline thickness.
    pub fn stroke_thickness(&self) -> f64 {
        self.0.number("stroke_thickness")
    }

    /// Sets the outline thickness.
    pub fn set_stroke_thickness(&mut self, thickness: f64) {
        self.0.attributes.set("stroke_thickness", thickness);
    }
}

plot_kind!(
    /// A histogram track.
    Histogram,
    Kind::Histogram
);
orientation!(Histogram);

impl Histogram {
    /// Gets the outline thickness.
    pub fn stroke_thickness(&self) -> f64 {
        self.0.number("stroke_thickness")
    }

    /// Sets the outline thickness.
    pub fn set_stroke_thickness(&mut self, thickness: f64) {
        self.0.attributes.set("stroke_thickness", thickness);
    }
}

plot_kind!(
    /// A line track.
    Line,
    Kind::Line
);
orientation!(Line);

impl Line {
    /// Gets the line thickness.
    pub fn thickness(&self) -> f64 {
        self.0.number("thickness")
    }

    /// Sets the line thickness.
    pub fn set_thickness(&mut self, thickness: f64) {
        self.0.attributes.set("thickness", thickness);
    }
}

plot_kind!(
    /// A scatter track.
    Scatter,
    Kind::Scatter
);
orientation!(Scatter);

impl Scatter {
    /// Gets the glyph.
    pub fn glyph(&self) -> Glyph {
        self.0.text("glyph").parse().unwrap_or_default()
    }

    /// Sets the glyph.
    pub fn set_glyph(&mut self, glyph: Glyph) {
        self.0.attributes.set("glyph", Value::text(glyph.as_str()));
    }

    /// Gets the glyph size.
    pub fn glyph_size(&self) -> f64 {
        self.0.number("glyph_size")
    }

    /// Sets the glyph size.
    pub fn set_glyph_size(&mut self, size: f64) {
        self.0.attributes.set("glyph_size", size);
    }

    /// Gets the glyph outline color.
    pub fn stroke_color(&self) -> &str {
        self.0.text("stroke_color")
    }

    /// Sets the glyph outline color.
    pub fn set_stroke_color(&mut self, color: impl Into<String>) {
        self.0.attributes.set("stroke_color", color.into());
    }

    /// Gets the glyph outline thickness.
    pub fn stroke_thickness(&self) -> f64 {
        self.0.number("stroke_thickness")
    }

    /// Sets the glyph outline thickness.
    pub fn set_stroke_thickness(&mut self, thickness: f64) {
        self.0.attributes.set("stroke_thickness", thickness);
    }
}

plot_kind!(
    /// A text track.
    ///
    /// Text tracks have no well-known options apart from the color; use
    /// [`Plot::set()`] for anything else.
    Text,
    Kind::Text
);

plot_kind!(
    /// A tile track.
    Tile,
    Kind::Tile
);
orientation!(Tile);

impl Tile {
    /// Gets the tile outline color.
    pub fn stroke_color(&self) -> &str {
        self.0.text("stroke_color")
    }

    /// Sets the tile outline color.
    pub fn set_stroke_color(&mut self, color: impl Into<String>) {
        self.0.attributes.set("stroke_color", color.into());
    }

    /// Gets the tile outline thickness.
    pub fn stroke_thickness(&self) -> f64 {
        self.0.number("stroke_thickness")
    }

    /// Sets the tile outline thickness.
    pub fn set_stroke_thickness(&mut self, thickness: f64) {
        self.0.attributes.set("stroke_thickness", thickness);
    }

    /// Gets the number of layers.
    pub fn layers(&self) -> i64 {
        self.0
            .option("layers")
            .and_then(Value::as_i64)
            .unwrap_or_default()
    }

    /// Sets the number of layers.
    pub fn set_layers(&mut self, layers: i64) {
        self.0.attributes.set("layers", layers);
    }

    /// Gets what happens to tiles that do not fit in the layers.
    pub fn layers_overflow(&self) -> LayersOverflow {
        self.0.text("layers_overflow").parse().unwrap_or_default()
    }

    /// Sets what happens to tiles that do not fit in the layers.
    pub fn set_layers_overflow(&mut self, overflow: LayersOverflow) {
        self.0
            .attributes
            .set("layers_overflow", Value::text(overflow.as_str()));
    }

    /// Gets the margin between tiles on the same layer (e.g., `1u`).
    pub fn margin(&self) -> String {
        self.0
            .option("margin")
            .map(|margin| margin.to_string())
            .unwrap_or_default()
    }

    /// Sets the margin between tiles on the same layer.
    pub fn set_margin(&mut self, margin: impl Into<Value>) {
        self.0.attributes.set("margin", margin);
    }

    /// Gets the padding between layers.
    pub fn padding(&self) -> f64 {
        self.0.number("padding")
    }

    /// Sets the padding between layers.
    pub fn set_padding(&mut self, padding: f64) {
        self.0.attributes.set("padding", padding);
    }

    /// Gets the thickness of the tiles.
    pub fn thickness(&self) -> f64 {
        self.0.number("thickness")
    }

    /// Sets the thickness of the tiles.
    pub fn set_thickness(&mut self, thickness: f64) {
        self.0.attributes.set("thickness", thickness);
    }
}
