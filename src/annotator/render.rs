use crate::backend::Canvas;
use crate::draw::{self, Point};

use super::Annotator;

impl<C: Canvas> Annotator<C> {
    /// Clears the attached surface.
    pub(super) fn repaint(&mut self) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.clear();
        }
    }

    /// Draws the current outline onto the attached surface.
    ///
    /// `preview`, when present, is appended as an uncommitted trailing
    /// vertex so the shape follows the cursor between clicks. Callers
    /// wanting a clean frame call [`repaint`](Self::repaint) first.
    pub(super) fn draw_current(&mut self, preview: Option<Point>) {
        let outline = match self.outline.as_ref() {
            Some(outline) => outline,
            None => return,
        };
        let canvas = match self.canvas.as_mut() {
            Some(canvas) => canvas,
            None => return,
        };

        draw::render_shape(
            canvas,
            self.kind,
            outline.points(),
            preview,
            self.arrow_length,
            self.arrow_angle,
        );
    }
}
