//! Shape kind selection.

use crate::backend::Cursor;

/// Kind of figure being drawn.
///
/// The active kind determines how many vertices complete a shape and how
/// the committed vertices are stroked. `Cursor` is the non-drawing default;
/// mouse clicks place no vertices while it is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Hand cursor - no drawing (default)
    Cursor,
    /// Freehand stroke - follows the mouse path
    Pen,
    /// Straight line between two clicked points
    Line,
    /// Triangle from three clicked vertices
    Triangle,
    /// Axis-aligned rectangle from two opposite corners
    Rect,
    /// Closed polygon with a configurable vertex count
    Polygon,
    /// Circle from a center click and a rim click
    Circle,
    /// Line with an arrowhead at the second point
    Arrow,
    /// Parallelogram from four clicked vertices
    Parallelogram,
    /// Trapezoid from four clicked vertices
    Trapezoid,
}

impl Default for ShapeKind {
    fn default() -> Self {
        Self::Cursor
    }
}

impl ShapeKind {
    /// Returns the numeric code used in the host exchange format.
    pub fn code(self) -> u8 {
        match self {
            Self::Cursor => 0,
            Self::Pen => 1,
            Self::Line => 2,
            Self::Triangle => 3,
            Self::Rect => 4,
            Self::Polygon => 5,
            Self::Circle => 6,
            Self::Arrow => 21,
            Self::Parallelogram => 41,
            Self::Trapezoid => 42,
        }
    }

    /// Looks up a kind by its numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Cursor),
            1 => Some(Self::Pen),
            2 => Some(Self::Line),
            3 => Some(Self::Triangle),
            4 => Some(Self::Rect),
            5 => Some(Self::Polygon),
            6 => Some(Self::Circle),
            21 => Some(Self::Arrow),
            41 => Some(Self::Parallelogram),
            42 => Some(Self::Trapezoid),
            _ => None,
        }
    }

    /// Returns true for kinds that place vertices on clicks.
    pub fn is_drawable(self) -> bool {
        !matches!(self, Self::Cursor)
    }

    /// Number of committed vertices that completes a shape of this kind.
    ///
    /// `Polygon` takes its target from configuration. `Pen` and `Cursor`
    /// return `None`: freehand strokes end on an explicit click and the
    /// cursor kind never draws.
    ///
    /// # Arguments
    /// * `polygon_vertices` - Configured polygon vertex target
    pub fn vertex_target(self, polygon_vertices: usize) -> Option<usize> {
        match self {
            Self::Cursor | Self::Pen => None,
            Self::Line | Self::Rect | Self::Circle | Self::Arrow => Some(2),
            Self::Triangle => Some(3),
            Self::Polygon => Some(polygon_vertices),
            Self::Parallelogram | Self::Trapezoid => Some(4),
        }
    }

    /// Cursor style shown on the surface while this kind is selected.
    pub fn cursor_style(self) -> Cursor {
        if self.is_drawable() {
            Cursor::Crosshair
        } else {
            Cursor::Pointer
        }
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cursor" => Ok(Self::Cursor),
            "pen" => Ok(Self::Pen),
            "line" => Ok(Self::Line),
            "trian" | "triangle" => Ok(Self::Triangle),
            "rect" | "rectangle" => Ok(Self::Rect),
            "poly" | "polygon" => Ok(Self::Polygon),
            "circle" => Ok(Self::Circle),
            "arrow" => Ok(Self::Arrow),
            "parallel" | "parallelogram" => Ok(Self::Parallelogram),
            "trapezoid" => Ok(Self::Trapezoid),
            _ => Err(()),
        }
    }
}
