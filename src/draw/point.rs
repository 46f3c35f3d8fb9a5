//! 2D pixel coordinate type.

use serde::{Deserialize, Serialize};

/// A point on the canvas in pixel coordinates.
///
/// Vertices are recorded at integer pixel positions (the serialized form is
/// consumed by hosts that parse whole-number tokens). Conversion to `f64`
/// happens at the canvas boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position in pixels
    pub x: i32,
    /// Vertical position in pixels
    pub y: i32,
}

impl Point {
    /// Creates a point from pixel coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    ///
    /// Used for radius calculation when a circle is defined by its center
    /// and a rim point.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }
}
