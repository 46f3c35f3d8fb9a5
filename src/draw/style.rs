//! Resolved paint style for the drawing surface.

use super::color::{self, Color};
use crate::config::{LineCap, LineJoin};

/// Stroke and fill settings applied once when a surface is attached.
///
/// This is the runtime form of the paint configuration, with color names
/// already resolved. The fill color is recorded for surfaces that support
/// filled shapes; the built-in renderers only stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintStyle {
    /// Stroke width in pixels
    pub line_width: f64,
    /// Stroke color
    pub stroke: Color,
    /// Fill color
    pub fill: Color,
    /// Join style where stroked segments meet
    pub line_join: LineJoin,
    /// Cap style at open stroke ends
    pub line_cap: LineCap,
}

impl Default for PaintStyle {
    /// Stock style: 1px red strokes with rounded joins and caps.
    fn default() -> Self {
        Self {
            line_width: 1.0,
            stroke: color::RED,
            fill: color::RED,
            line_join: LineJoin::Round,
            line_cap: LineCap::Round,
        }
    }
}
