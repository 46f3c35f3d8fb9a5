//! Drawing surface abstraction and host integration.
//!
//! The annotator never talks to a rasterizer directly; it drives a
//! [`Canvas`] handed over by a [`CanvasHost`]. This keeps the widget
//! embeddable: hosts supply whatever surface they render with, and tests
//! run against the in-memory [`RecordingCanvas`].

use std::collections::HashMap;

use crate::draw::PaintStyle;

#[cfg(feature = "cairo")]
pub mod cairo;
pub mod recording;

#[cfg(feature = "cairo")]
pub use cairo::CairoCanvas;
pub use recording::{CanvasOp, RecordingCanvas};

/// Pointer shape requested on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Host's default pointer (after teardown)
    Default,
    /// Crosshair shown while a drawable kind is selected
    Crosshair,
    /// Hand pointer shown in the non-drawing mode
    Pointer,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::Default
    }
}

/// A 2D drawing surface the annotator strokes shapes onto.
///
/// The operations mirror a path-based rasterizer: a path is assembled with
/// `begin_path`/`move_to`/`line_to`/`close_path`/`arc` and consumed by
/// `stroke`. Styling is applied once per attachment and persists across
/// strokes. Surfaces that cannot honor an operation (e.g. cursor changes on
/// an offscreen buffer) record or ignore it rather than fail; drawing is
/// infallible by contract.
pub trait Canvas {
    /// Starts a fresh path, discarding any unconsumed one.
    fn begin_path(&mut self);

    /// Sets the current path position without drawing.
    fn move_to(&mut self, x: f64, y: f64);

    /// Extends the current path with a straight segment.
    fn line_to(&mut self, x: f64, y: f64);

    /// Closes the current path back to its starting position.
    fn close_path(&mut self);

    /// Extends the current path with a circular arc around (`cx`, `cy`).
    ///
    /// Angles are in radians, measured clockwise from the positive x axis.
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);

    /// Strokes and consumes the current path.
    fn stroke(&mut self);

    /// Erases the whole surface.
    fn clear(&mut self);

    /// Applies stroke styling for all subsequent drawing.
    fn apply_style(&mut self, style: &PaintStyle);

    /// Requests a pointer shape over the surface.
    fn set_cursor(&mut self, cursor: Cursor);
}

/// Source of drawing surfaces, keyed by host-assigned identifier.
///
/// Models the lookup an embedding host performs when the annotator asks for
/// its drawing target. Acquisition transfers ownership of the surface to
/// the caller.
pub trait CanvasHost {
    /// Surface type this host produces.
    type Surface: Canvas;

    /// Hands over the surface registered under `id`, or `None` if the host
    /// has nothing by that name.
    fn acquire(&mut self, id: &str) -> Option<Self::Surface>;
}

/// Simple in-memory [`CanvasHost`] backed by a map of named surfaces.
#[derive(Debug, Default)]
pub struct CanvasRegistry<C: Canvas> {
    surfaces: HashMap<String, C>,
}

impl<C: Canvas> CanvasRegistry<C> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            surfaces: HashMap::new(),
        }
    }

    /// Registers a surface under `id`, returning any surface it replaces.
    pub fn insert(&mut self, id: impl Into<String>, surface: C) -> Option<C> {
        self.surfaces.insert(id.into(), surface)
    }

    /// Returns true if a surface is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.surfaces.contains_key(id)
    }
}

impl<C: Canvas> CanvasHost for CanvasRegistry<C> {
    type Surface = C;

    fn acquire(&mut self, id: &str) -> Option<C> {
        self.surfaces.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_hands_surfaces_over_once() {
        let mut registry = CanvasRegistry::new();
        registry.insert("page", RecordingCanvas::new());

        assert!(registry.contains("page"));
        assert!(registry.acquire("page").is_some());
        assert!(!registry.contains("page"));
        assert!(registry.acquire("page").is_none());
    }

    #[test]
    fn registry_misses_unknown_ids() {
        let mut registry: CanvasRegistry<RecordingCanvas> = CanvasRegistry::new();
        assert!(registry.acquire("nowhere").is_none());
    }
}
