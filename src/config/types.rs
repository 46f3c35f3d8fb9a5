//! Configuration type definitions.

use serde::{Deserialize, Serialize};

use super::enums::{ColorSpec, LineCap, LineJoin};

/// Paint settings applied to the drawing surface.
///
/// These are applied once when a surface is attached and stay fixed for the
/// whole session; there is no per-shape restyling.
#[derive(Debug, Serialize, Deserialize)]
pub struct PaintConfig {
    /// Stroke width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Stroke color - either a named color (red, green, blue, yellow, orange,
    /// pink, white, black) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Fill color, recorded for surfaces that support filled shapes
    /// (the built-in renderers only stroke)
    #[serde(default = "default_fill_color")]
    pub fill_color: ColorSpec,

    /// Join style where stroked segments meet (miter, round, bevel)
    #[serde(default = "default_line_join")]
    pub line_join: LineJoin,

    /// Cap style at open stroke ends (butt, round, square)
    #[serde(default = "default_line_cap")]
    pub line_cap: LineCap,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            stroke_color: default_stroke_color(),
            fill_color: default_fill_color(),
            line_join: default_line_join(),
            line_cap: default_line_cap(),
        }
    }
}

/// Shape completion settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Number of committed vertices that completes a polygon
    /// (valid range: 3 - 64)
    #[serde(default = "default_polygon_vertices")]
    pub polygon_vertices: usize,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            polygon_vertices: default_polygon_vertices(),
        }
    }
}

/// Arrow appearance settings.
///
/// Controls the arrowhead drawn at the second vertex of the arrow kind.
#[derive(Debug, Serialize, Deserialize)]
pub struct ArrowConfig {
    /// Arrowhead length in pixels (valid range: 5.0 - 50.0)
    #[serde(default = "default_arrow_length")]
    pub length: f64,

    /// Arrowhead angle in degrees (valid range: 15.0 - 60.0)
    /// Smaller angles create narrower arrowheads, larger angles create wider ones
    #[serde(default = "default_arrow_angle")]
    pub angle_degrees: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            length: default_arrow_length(),
            angle_degrees: default_arrow_angle(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_line_width() -> f64 {
    1.0
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_fill_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_line_join() -> LineJoin {
    LineJoin::Round
}

fn default_line_cap() -> LineCap {
    LineCap::Round
}

fn default_polygon_vertices() -> usize {
    4
}

fn default_arrow_length() -> f64 {
    20.0
}

fn default_arrow_angle() -> f64 {
    30.0
}
