use log::{debug, info};

use crate::backend::Canvas;
use crate::draw::{self, Outline, Point};
use crate::input::{MouseButton, ShapeKind};

use super::{Annotator, DrawingState};

impl<C: Canvas> Annotator<C> {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Mouse X coordinate
    /// * `y` - Mouse Y coordinate
    ///
    /// # Behavior
    /// - Primary click while idle: starts a fresh shape at the click point
    /// - Primary click while drawing: commits a vertex, completing the
    ///   shape once the kind's vertex target is reached
    /// - Secondary click: cancels the in-progress drawing
    ///
    /// Events arriving after [`clear`](Self::clear) are ignored.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: i32, y: i32) {
        if !self.attached {
            return;
        }

        match button {
            MouseButton::Left => self.on_left_press(Point::new(x, y)),
            MouseButton::Right => self.cancel_drawing(),
            MouseButton::Middle => {}
        }
    }

    /// Processes mouse motion events.
    ///
    /// # Arguments
    /// * `x` - Current mouse X coordinate
    /// * `y` - Current mouse Y coordinate
    ///
    /// # Behavior
    /// Motion is meaningful only while drawing. Freehand strokes commit
    /// the point and render the new segment incrementally; every other
    /// kind repaints with the cursor position as an uncommitted preview
    /// vertex.
    pub fn on_mouse_motion(&mut self, x: i32, y: i32) {
        if !self.attached || !self.is_drawing() || self.start_point.is_none() {
            return;
        }

        let p = Point::new(x, y);

        if self.kind == ShapeKind::Pen {
            let from = match self.outline.as_ref().and_then(|outline| outline.last()) {
                Some(last) => last,
                None => return,
            };
            if let Some(outline) = self.outline.as_mut() {
                outline.push(p);
            }
            if let Some(canvas) = self.canvas.as_mut() {
                draw::render_segment(canvas, from, p);
            }
            return;
        }

        self.state = DrawingState::Drawing { preview: Some(p) };
        self.repaint();
        self.draw_current(Some(p));
    }

    /// Starts a fresh shape or commits a vertex to the one in progress.
    fn on_left_press(&mut self, p: Point) {
        if !self.kind.is_drawable() {
            return;
        }

        if self.is_drawing() {
            self.commit_vertex(p);
        } else {
            // A new shape replaces whatever was loaded or drawn before.
            self.outline = Some(Outline::from_points(vec![p]));
            self.start_point = Some(p);
            self.state = DrawingState::Drawing { preview: None };
            debug!("Started {:?} at ({}, {})", self.kind, p.x, p.y);
        }
    }

    /// Appends a vertex and finishes the shape once the target is reached.
    ///
    /// Intermediate commits do not repaint; the next motion event redraws
    /// with the committed vertex included.
    fn commit_vertex(&mut self, p: Point) {
        let outline = match self.outline.as_mut() {
            Some(outline) => outline,
            None => return,
        };

        outline.push(p);
        let committed = outline.len();
        let done = match self.kind.vertex_target(self.polygon_vertices) {
            Some(target) => committed >= target,
            // Freehand strokes grow on motion and end on the next click.
            None => self.kind == ShapeKind::Pen,
        };

        self.state = DrawingState::Drawing { preview: None };
        if done {
            self.finish_shape();
        }
    }

    /// Finalizes the in-progress shape and repaints it without a preview.
    fn finish_shape(&mut self) {
        self.state = DrawingState::Idle;
        self.repaint();
        self.draw_current(None);

        if let Some(outline) = &self.outline {
            info!(
                "Completed {:?} '{}' with {} vertices",
                self.kind,
                self.label,
                outline.len()
            );
            for (i, point) in outline.points().iter().enumerate() {
                debug!("  vertex {i}: ({}, {})", point.x, point.y);
            }
        }
    }

    /// Cancels the in-progress drawing, leaving the surface blank.
    ///
    /// Committed vertices stay in memory, so `result` still reports them.
    /// Safe to call repeatedly; cancelling while idle is a no-op.
    fn cancel_drawing(&mut self) {
        if !self.is_drawing() {
            return;
        }

        debug!("Cancelled {:?} drawing", self.kind);
        self.repaint();
        self.state = DrawingState::Idle;
    }
}
