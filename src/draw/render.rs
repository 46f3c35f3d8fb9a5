//! Rendering routines for every shape kind.

use super::point::Point;
use crate::backend::Canvas;
use crate::input::ShapeKind;
use crate::util;

/// Renders the in-progress or completed shape for `kind`.
///
/// `points` holds the committed vertices in placement order. `preview`,
/// when present, is the live cursor position drawn as a trailing vertex
/// that has not been committed yet. The function only strokes; callers
/// clear the canvas first when a full repaint is wanted.
///
/// # Arguments
/// * `canvas` - Drawing surface to stroke onto
/// * `kind` - Shape kind deciding how the vertices are connected
/// * `points` - Committed vertices
/// * `preview` - Optional uncommitted trailing vertex
/// * `arrow_length` - Arrowhead length in pixels (arrow kind only)
/// * `arrow_angle` - Arrowhead angle in degrees (arrow kind only)
pub fn render_shape<C: Canvas>(
    canvas: &mut C,
    kind: ShapeKind,
    points: &[Point],
    preview: Option<Point>,
    arrow_length: f64,
    arrow_angle: f64,
) {
    match kind {
        ShapeKind::Cursor => {}
        ShapeKind::Pen | ShapeKind::Line => render_path(canvas, points, preview, false),
        ShapeKind::Triangle | ShapeKind::Polygon | ShapeKind::Parallelogram
        | ShapeKind::Trapezoid => render_path(canvas, points, preview, true),
        ShapeKind::Rect => render_rect(canvas, points, preview),
        ShapeKind::Circle => render_circle(canvas, points, preview),
        ShapeKind::Arrow => render_arrow(canvas, points, preview, arrow_length, arrow_angle),
    }
}

/// Strokes a single segment; used for incremental freehand drawing.
pub fn render_segment<C: Canvas>(canvas: &mut C, from: Point, to: Point) {
    canvas.begin_path();
    canvas.move_to(from.x as f64, from.y as f64);
    canvas.line_to(to.x as f64, to.y as f64);
    canvas.stroke();
}

/// Strokes a path visiting every vertex in order, optionally closing it.
fn render_path<C: Canvas>(canvas: &mut C, points: &[Point], preview: Option<Point>, close: bool) {
    let mut vertices = points.iter().copied().chain(preview);
    let first = match vertices.next() {
        Some(first) => first,
        None => return,
    };

    canvas.begin_path();
    canvas.move_to(first.x as f64, first.y as f64);
    for p in vertices {
        canvas.line_to(p.x as f64, p.y as f64);
    }
    if close {
        canvas.close_path();
    }
    canvas.stroke();
}

/// Strokes an axis-aligned rectangle between two opposite corners.
fn render_rect<C: Canvas>(canvas: &mut C, points: &[Point], preview: Option<Point>) {
    let (a, b) = match corner_pair(points, preview) {
        Some(pair) => pair,
        None => return,
    };

    canvas.begin_path();
    canvas.move_to(a.x as f64, a.y as f64);
    canvas.line_to(b.x as f64, a.y as f64);
    canvas.line_to(b.x as f64, b.y as f64);
    canvas.line_to(a.x as f64, b.y as f64);
    canvas.close_path();
    canvas.stroke();
}

/// Strokes a circle from a center vertex and a rim vertex.
fn render_circle<C: Canvas>(canvas: &mut C, points: &[Point], preview: Option<Point>) {
    let (center, rim) = match corner_pair(points, preview) {
        Some(pair) => pair,
        None => return,
    };

    let radius = center.distance_to(rim);
    if radius == 0.0 {
        return;
    }

    canvas.begin_path();
    canvas.arc(
        center.x as f64,
        center.y as f64,
        radius,
        0.0,
        std::f64::consts::PI * 2.0,
    );
    canvas.stroke();
}

/// Strokes a shaft with a V-shaped arrowhead at the second vertex.
fn render_arrow<C: Canvas>(
    canvas: &mut C,
    points: &[Point],
    preview: Option<Point>,
    arrow_length: f64,
    arrow_angle: f64,
) {
    let (tail, tip) = match corner_pair(points, preview) {
        Some(pair) => pair,
        None => return,
    };

    // Shaft
    render_segment(canvas, tail, tip);

    // Arrowhead at the tip, pointing away from the tail
    let head = util::calculate_arrowhead(tip, tail, arrow_length, arrow_angle);

    canvas.begin_path();
    canvas.move_to(tip.x as f64, tip.y as f64);
    canvas.line_to(head[0].0, head[0].1);
    canvas.stroke();

    canvas.begin_path();
    canvas.move_to(tip.x as f64, tip.y as f64);
    canvas.line_to(head[1].0, head[1].1);
    canvas.stroke();
}

/// First committed vertex plus the second committed vertex or the preview.
fn corner_pair(points: &[Point], preview: Option<Point>) -> Option<(Point, Point)> {
    let first = points.first().copied()?;
    let second = points.get(1).copied().or(preview)?;
    Some((first, second))
}
