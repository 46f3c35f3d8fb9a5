//! Ordered vertex container for the shape being drawn.

use super::point::Point;
use crate::annotation::AnnotationError;
use serde::{Deserialize, Serialize};

/// An ordered, growable sequence of vertices.
///
/// Insertion order is significant: it defines the stroked path and, for
/// closed kinds, the closure order back to the first vertex. The length is
/// always derived from the underlying sequence, so removals can never leave
/// a stale count behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    points: Vec<Point>,
}

impl Outline {
    /// Creates an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an outline from vertices in placement order.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Appends a vertex.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Overwrites the vertex at `index`.
    ///
    /// # Errors
    /// Returns [`AnnotationError::InvalidVertexIndex`] if `index` is out of
    /// range.
    pub fn replace(&mut self, index: usize, point: Point) -> Result<(), AnnotationError> {
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                Ok(())
            }
            None => Err(AnnotationError::InvalidVertexIndex {
                index,
                len: self.points.len(),
            }),
        }
    }

    /// Overwrites the last vertex.
    ///
    /// # Errors
    /// Returns [`AnnotationError::InvalidVertexIndex`] if the outline is
    /// empty.
    pub fn replace_last(&mut self, point: Point) -> Result<(), AnnotationError> {
        match self.points.len() {
            0 => Err(AnnotationError::InvalidVertexIndex { index: 0, len: 0 }),
            len => self.replace(len - 1, point),
        }
    }

    /// Removes and returns the last vertex.
    pub fn pop(&mut self) -> Option<Point> {
        self.points.pop()
    }

    /// Removes and returns the first vertex.
    pub fn pop_front(&mut self) -> Option<Point> {
        if self.points.is_empty() {
            None
        } else {
            Some(self.points.remove(0))
        }
    }

    /// Vertices in placement order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if no vertex has been placed.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First vertex, if any.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Last vertex, if any.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }
}
