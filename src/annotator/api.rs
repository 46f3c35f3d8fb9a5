//! Public widget operations called by embedding hosts.

use log::{debug, info};

use crate::annotation::{AnnotationError, ShapeSpec};
use crate::backend::{Canvas, CanvasHost, Cursor};
use crate::draw::Outline;
use crate::input::ShapeKind;

use super::{Annotator, DrawingState};

impl<C: Canvas> Annotator<C> {
    /// Attaches the annotator to a drawing surface provided by `host`.
    ///
    /// Acquires the surface registered under `target`, applies the paint
    /// configuration to it, and starts processing pointer events. Any
    /// previously attached surface is dropped.
    ///
    /// # Arguments
    /// * `host` - Surface provider, typically a
    ///   [`CanvasRegistry`](crate::backend::CanvasRegistry)
    /// * `target` - Identifier of the surface to acquire
    ///
    /// # Errors
    /// Returns [`AnnotationError::RenderingUnavailable`] if the host has
    /// no surface under `target`.
    pub fn init<H>(&mut self, host: &mut H, target: &str) -> Result<(), AnnotationError>
    where
        H: CanvasHost<Surface = C>,
    {
        let mut surface = match host.acquire(target) {
            Some(surface) => surface,
            None => {
                return Err(AnnotationError::RenderingUnavailable {
                    target: target.to_string(),
                });
            }
        };

        surface.apply_style(&self.paint);
        self.canvas = Some(surface);
        self.attached = true;
        info!("Attached to rendering target '{target}'");
        Ok(())
    }

    /// Loads and displays a previously serialized shape.
    ///
    /// Switches to the polygon kind, records the spec's label, replaces
    /// the current outline with the spec's vertices, and draws them once.
    /// The loaded shape is treated as already finalized, so the annotator
    /// is left idle rather than mid-drawing.
    ///
    /// # Errors
    /// Returns [`AnnotationError::RenderingUnavailable`] if no surface is
    /// attached, or [`AnnotationError::MalformedShapeSpec`] if the spec
    /// carries no vertices.
    pub fn begin(&mut self, spec: ShapeSpec) -> Result<(), AnnotationError> {
        if self.canvas.is_none() {
            return Err(AnnotationError::RenderingUnavailable {
                target: "drawing surface".to_string(),
            });
        }
        if spec.points.is_empty() {
            return Err(AnnotationError::MalformedShapeSpec(
                "no vertices to load".to_string(),
            ));
        }

        let count = spec.points.len();
        self.kind = ShapeKind::Polygon;
        self.label = spec.label;
        self.start_point = spec.points.first().copied();
        self.outline = Some(Outline::from_points(spec.points));
        self.state = DrawingState::Idle;

        if let Some(canvas) = self.canvas.as_mut() {
            canvas.set_cursor(ShapeKind::Polygon.cursor_style());
        }
        self.draw_current(None);

        debug!("Loaded shape '{}' ({count} vertices)", self.label);
        Ok(())
    }

    /// Switches the active shape kind.
    ///
    /// Any in-progress drawing is abandoned without repainting, so
    /// committed vertices stay in memory and on screen. The surface
    /// cursor is updated to match the new kind.
    pub fn select(&mut self, kind: ShapeKind) {
        self.kind = kind;
        self.state = DrawingState::Idle;
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.set_cursor(kind.cursor_style());
        }
        debug!("Switched to {kind:?} mode");
    }

    /// Switches to the non-drawing cursor mode.
    ///
    /// Stops any in-progress drawing and restores the pointer cursor.
    /// A pure mode reset with no data mutation.
    pub fn hand(&mut self) {
        self.select(ShapeKind::Cursor);
    }

    /// Replaces the label used when serializing the current shape.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Serializes the current shape for the embedding host.
    ///
    /// # Returns
    /// `"none"` if no shape exists, otherwise the label followed by each
    /// vertex's x and y in placement order, space-delimited.
    pub fn result(&self) -> String {
        match &self.outline {
            Some(outline) => {
                ShapeSpec::new(self.label.clone(), outline.points().to_vec()).to_string()
            }
            None => "none".to_string(),
        }
    }

    /// Clears the surface and ends the interaction session.
    ///
    /// Pointer events are ignored afterwards, the cursor returns to its
    /// default style, and the current shape is dropped. The surface
    /// itself stays attached so a subsequent [`begin`](Self::begin) can
    /// still display a loaded shape; attach a fresh surface with
    /// [`init`](Self::init) to resume interactive drawing.
    pub fn clear(&mut self) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.clear();
            canvas.set_cursor(Cursor::Default);
        }
        self.attached = false;
        self.state = DrawingState::Idle;
        self.outline = None;
        self.start_point = None;
        debug!("Cleared annotation session");
    }
}
