//! Shape serialization types shared with embedding hosts.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::draw::Point;

/// Errors surfaced to embedding hosts.
#[derive(Debug, Error)]
pub enum AnnotationError {
    /// The host could not provide a usable drawing surface.
    #[error("Rendering target '{target}' is unavailable")]
    RenderingUnavailable { target: String },

    /// A vertex index was outside the outline bounds.
    #[error("Vertex index {index} is out of range for an outline of {len} points")]
    InvalidVertexIndex { index: usize, len: usize },

    /// A serialized shape could not be parsed.
    #[error("Malformed shape spec: {0}")]
    MalformedShapeSpec(String),
}

/// A labeled vertex list in the host exchange format.
///
/// The serialized form is a single space-delimited string: the label
/// followed by each vertex's x and y in placement order, for example
/// `door 10 20 30 40 50 60 70 80`. Labels are single tokens; whitespace
/// inside a label would not survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeSpec {
    /// Name attached to the shape (typically the scanned image name)
    pub label: String,
    /// Vertices in placement order
    pub points: Vec<Point>,
}

impl ShapeSpec {
    /// Creates a spec from an already-validated label and vertex list.
    pub fn new(label: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    /// Builds a spec from a label and flattened `[x1, y1, x2, y2, ...]` coordinates.
    ///
    /// # Errors
    /// Returns [`AnnotationError::MalformedShapeSpec`] if the label is empty
    /// or contains whitespace, or if the coordinate list has an odd length.
    pub fn from_flat(label: impl Into<String>, coords: &[i32]) -> Result<Self, AnnotationError> {
        let label = label.into();
        if label.is_empty() || label.contains(char::is_whitespace) {
            return Err(AnnotationError::MalformedShapeSpec(format!(
                "label '{label}' must be a single non-empty token"
            )));
        }
        if coords.len() % 2 != 0 {
            return Err(AnnotationError::MalformedShapeSpec(format!(
                "odd coordinate count {}",
                coords.len()
            )));
        }

        let points = coords
            .chunks_exact(2)
            .map(|pair| Point::new(pair[0], pair[1]))
            .collect();

        Ok(Self { label, points })
    }
}

impl fmt::Display for ShapeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        for point in &self.points {
            write!(f, " {} {}", point.x, point.y)?;
        }
        Ok(())
    }
}

impl FromStr for ShapeSpec {
    type Err = AnnotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        let label = match tokens.next() {
            Some(label) => label,
            None => {
                return Err(AnnotationError::MalformedShapeSpec(
                    "empty spec".to_string(),
                ));
            }
        };

        let coords = tokens
            .map(|token| {
                token.parse::<i32>().map_err(|_| {
                    AnnotationError::MalformedShapeSpec(format!(
                        "non-numeric coordinate '{token}'"
                    ))
                })
            })
            .collect::<Result<Vec<i32>, _>>()?;

        if coords.is_empty() {
            return Err(AnnotationError::MalformedShapeSpec(format!(
                "no coordinates after label '{label}'"
            )));
        }

        Self::from_flat(label, &coords)
    }
}
