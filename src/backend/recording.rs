//! In-memory recording surface for headless use.

use super::{Canvas, Cursor};
use crate::draw::PaintStyle;

/// A single drawing instruction captured by [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasOp {
    BeginPath,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    ClosePath,
    Arc {
        cx: f64,
        cy: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Stroke,
    Clear,
    ApplyStyle(PaintStyle),
    SetCursor(Cursor),
}

/// Canvas that records instructions instead of rasterizing them.
///
/// Useful in two places: tests can assert on exactly what would have been
/// drawn, and hosts without a local rasterizer can replay the instruction
/// log against whatever they render with. `clear` is recorded like any
/// other instruction; the log itself only empties through [`take_ops`].
///
/// [`take_ops`]: RecordingCanvas::take_ops
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
    cursor: Cursor,
}

impl RecordingCanvas {
    /// Creates an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instructions recorded so far, in execution order.
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Drains and returns the recorded instructions.
    pub fn take_ops(&mut self) -> Vec<CanvasOp> {
        std::mem::take(&mut self.ops)
    }

    /// Pointer shape most recently requested on this surface.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }
}

impl Canvas for RecordingCanvas {
    fn begin_path(&mut self) {
        self.ops.push(CanvasOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(CanvasOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(CanvasOp::LineTo(x, y));
    }

    fn close_path(&mut self) {
        self.ops.push(CanvasOp::ClosePath);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.ops.push(CanvasOp::Arc {
            cx,
            cy,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) {
        self.ops.push(CanvasOp::Stroke);
    }

    fn clear(&mut self) {
        self.ops.push(CanvasOp::Clear);
    }

    fn apply_style(&mut self, style: &PaintStyle) {
        self.ops.push(CanvasOp::ApplyStyle(style.clone()));
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.ops.push(CanvasOp::SetCursor(cursor));
    }
}
