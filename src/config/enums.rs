//! Configuration enum types.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::draw::{Color, color::RED};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// stroke_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// stroke_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are resolved through [`Color::from_name`]. Unknown
    /// color names default to red with a warning. RGB arrays are converted
    /// from 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::from_name(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using red", name);
                RED
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}

/// Join style where two stroked segments meet.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    /// Sharp corner
    Miter,
    /// Rounded corner (stock style)
    Round,
    /// Flattened corner
    Bevel,
}

/// Cap style at the open ends of a stroked path.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    /// Stroke stops exactly at the endpoint
    Butt,
    /// Rounded end (stock style)
    Round,
    /// Squared end extending past the endpoint
    Square,
}
