use super::*;
use crate::annotation::{AnnotationError, ShapeSpec};
use crate::backend::{CanvasOp, CanvasRegistry, Cursor, RecordingCanvas};
use crate::config::Config;
use crate::input::{MouseButton, ShapeKind};

fn create_test_annotator() -> Annotator<RecordingCanvas> {
    let mut host = CanvasRegistry::new();
    host.insert("page", RecordingCanvas::new());

    let mut annotator = Annotator::new(&Config::default());
    annotator.init(&mut host, "page").unwrap();
    annotator
}

/// Drains recorded surface operations accumulated so far.
fn flush_ops(annotator: &mut Annotator<RecordingCanvas>) -> Vec<CanvasOp> {
    annotator.canvas_mut().unwrap().take_ops()
}

#[test]
fn test_result_is_none_before_any_shape() {
    let annotator = create_test_annotator();
    assert_eq!(annotator.result(), "none");
}

#[test]
fn test_init_fails_for_unknown_target() {
    let mut host: CanvasRegistry<RecordingCanvas> = CanvasRegistry::new();
    let mut annotator = Annotator::new(&Config::default());

    let err = annotator.init(&mut host, "missing").unwrap_err();
    match err {
        AnnotationError::RenderingUnavailable { target } => assert_eq!(target, "missing"),
        other => panic!("Expected RenderingUnavailable, got {other:?}"),
    }

    // A failed init leaves the annotator detached
    annotator.on_mouse_press(MouseButton::Left, 10, 10);
    assert!(!annotator.is_drawing());
    assert!(annotator.outline().is_none());
}

#[test]
fn test_first_click_starts_drawing() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Polygon);

    annotator.on_mouse_press(MouseButton::Left, 10, 20);

    assert!(annotator.is_drawing());
    let outline = annotator.outline().unwrap();
    assert_eq!(outline.len(), 1);
    assert_eq!(outline.first().map(|p| (p.x, p.y)), Some((10, 20)));
}

#[test]
fn test_clicks_are_ignored_in_cursor_mode() {
    let mut annotator = create_test_annotator();
    assert_eq!(annotator.kind(), ShapeKind::Cursor);

    annotator.on_mouse_press(MouseButton::Left, 10, 20);

    assert!(!annotator.is_drawing());
    assert!(annotator.outline().is_none());
}

#[test]
fn test_polygon_completes_after_four_clicks() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Polygon);
    annotator.set_label("cut01");

    annotator.on_mouse_press(MouseButton::Left, 0, 0);
    annotator.on_mouse_press(MouseButton::Left, 100, 0);
    annotator.on_mouse_press(MouseButton::Left, 100, 80);
    assert!(annotator.is_drawing());

    annotator.on_mouse_press(MouseButton::Left, 0, 80);
    assert!(!annotator.is_drawing());
    assert_eq!(annotator.result(), "cut01 0 0 100 0 100 80 0 80");

    // A further click starts a fresh shape instead of extending the old one
    annotator.on_mouse_press(MouseButton::Left, 5, 5);
    assert!(annotator.is_drawing());
    assert_eq!(annotator.outline().unwrap().len(), 1);
}

#[test]
fn test_intermediate_clicks_do_not_repaint() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Polygon);

    annotator.on_mouse_press(MouseButton::Left, 0, 0);
    flush_ops(&mut annotator);

    annotator.on_mouse_press(MouseButton::Left, 10, 0);
    annotator.on_mouse_press(MouseButton::Left, 10, 10);
    assert!(flush_ops(&mut annotator).is_empty());
}

#[test]
fn test_completion_repaints_the_final_shape() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Polygon);

    annotator.on_mouse_press(MouseButton::Left, 0, 0);
    annotator.on_mouse_press(MouseButton::Left, 10, 0);
    annotator.on_mouse_press(MouseButton::Left, 10, 10);
    flush_ops(&mut annotator);

    annotator.on_mouse_press(MouseButton::Left, 0, 10);
    assert_eq!(
        flush_ops(&mut annotator),
        vec![
            CanvasOp::Clear,
            CanvasOp::BeginPath,
            CanvasOp::MoveTo(0.0, 0.0),
            CanvasOp::LineTo(10.0, 0.0),
            CanvasOp::LineTo(10.0, 10.0),
            CanvasOp::LineTo(0.0, 10.0),
            CanvasOp::ClosePath,
            CanvasOp::Stroke,
        ]
    );
}

#[test]
fn test_motion_previews_without_committing() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Polygon);

    annotator.on_mouse_press(MouseButton::Left, 10, 10);
    flush_ops(&mut annotator);

    annotator.on_mouse_motion(50, 60);

    // Still one committed vertex; the cursor position is only previewed
    assert_eq!(annotator.outline().unwrap().len(), 1);
    assert!(matches!(
        annotator.state,
        DrawingState::Drawing {
            preview: Some(p)
        } if (p.x, p.y) == (50, 60)
    ));
    assert_eq!(
        flush_ops(&mut annotator),
        vec![
            CanvasOp::Clear,
            CanvasOp::BeginPath,
            CanvasOp::MoveTo(10.0, 10.0),
            CanvasOp::LineTo(50.0, 60.0),
            CanvasOp::ClosePath,
            CanvasOp::Stroke,
        ]
    );
}

#[test]
fn test_motion_while_idle_is_a_no_op() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Polygon);
    flush_ops(&mut annotator);

    annotator.on_mouse_motion(50, 60);

    assert!(annotator.outline().is_none());
    assert!(flush_ops(&mut annotator).is_empty());
}

#[test]
fn test_right_click_cancels_and_is_idempotent() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Polygon);
    annotator.set_label("cut01");

    annotator.on_mouse_press(MouseButton::Left, 0, 0);
    annotator.on_mouse_press(MouseButton::Left, 10, 0);
    flush_ops(&mut annotator);

    annotator.on_mouse_press(MouseButton::Right, 99, 99);
    assert!(!annotator.is_drawing());
    // The render is discarded, not redrawn
    assert_eq!(flush_ops(&mut annotator), vec![CanvasOp::Clear]);

    // Committed vertices stay in memory
    assert_eq!(annotator.result(), "cut01 0 0 10 0");

    // Cancelling again is safe and does nothing
    annotator.on_mouse_press(MouseButton::Right, 99, 99);
    assert!(!annotator.is_drawing());
    assert!(flush_ops(&mut annotator).is_empty());
}

#[test]
fn test_begin_round_trips_through_result() {
    let mut annotator = create_test_annotator();

    let spec = ShapeSpec::from_flat("labelA", &[10, 20, 30, 40, 50, 60]).unwrap();
    annotator.begin(spec).unwrap();

    assert_eq!(annotator.kind(), ShapeKind::Polygon);
    assert_eq!(annotator.canvas().unwrap().cursor(), Cursor::Crosshair);
    assert_eq!(annotator.result(), "labelA 10 20 30 40 50 60");

    // Re-feeding the serialized form yields an identical string
    let reparsed: ShapeSpec = annotator.result().parse().unwrap();
    annotator.begin(reparsed).unwrap();
    assert_eq!(annotator.result(), "labelA 10 20 30 40 50 60");
}

#[test]
fn test_begin_draws_the_loaded_shape_once() {
    let mut annotator = create_test_annotator();
    flush_ops(&mut annotator);

    let spec = ShapeSpec::from_flat("labelA", &[0, 0, 10, 0, 10, 10]).unwrap();
    annotator.begin(spec).unwrap();

    let ops = flush_ops(&mut annotator);
    // Drawn over the existing frame, not after a clear
    assert!(!ops.contains(&CanvasOp::Clear));
    assert!(ops.contains(&CanvasOp::ClosePath));

    // The loaded shape is finalized; motion does not start a preview
    assert!(!annotator.is_drawing());
    annotator.on_mouse_motion(50, 60);
    assert!(flush_ops(&mut annotator).is_empty());
}

#[test]
fn test_begin_requires_a_surface() {
    let mut annotator: Annotator<RecordingCanvas> = Annotator::new(&Config::default());

    let spec = ShapeSpec::from_flat("labelA", &[10, 20]).unwrap();
    let err = annotator.begin(spec).unwrap_err();
    assert!(matches!(err, AnnotationError::RenderingUnavailable { .. }));
}

#[test]
fn test_begin_rejects_specs_without_vertices() {
    let mut annotator = create_test_annotator();

    let spec = ShapeSpec::from_flat("labelA", &[]).unwrap();
    let err = annotator.begin(spec).unwrap_err();
    assert!(matches!(err, AnnotationError::MalformedShapeSpec(_)));
}

#[test]
fn test_clear_detaches_pointer_handlers() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Polygon);
    annotator.on_mouse_press(MouseButton::Left, 10, 10);

    annotator.clear();
    assert!(!annotator.is_drawing());
    assert_eq!(annotator.result(), "none");
    assert_eq!(annotator.canvas().unwrap().cursor(), Cursor::Default);

    // Pointer events no longer mutate anything
    annotator.on_mouse_press(MouseButton::Left, 20, 20);
    annotator.on_mouse_motion(30, 30);
    assert!(!annotator.is_drawing());
    assert!(annotator.outline().is_none());
}

#[test]
fn test_begin_still_displays_after_clear() {
    let mut annotator = create_test_annotator();
    annotator.clear();
    flush_ops(&mut annotator);

    let spec = ShapeSpec::from_flat("labelA", &[0, 0, 10, 0, 10, 10]).unwrap();
    annotator.begin(spec).unwrap();

    assert_eq!(annotator.result(), "labelA 0 0 10 0 10 10");
    assert!(flush_ops(&mut annotator).contains(&CanvasOp::Stroke));
}

#[test]
fn test_hand_restores_pointer_cursor() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Polygon);
    annotator.on_mouse_press(MouseButton::Left, 10, 10);
    assert_eq!(annotator.canvas().unwrap().cursor(), Cursor::Crosshair);

    annotator.hand();

    assert_eq!(annotator.kind(), ShapeKind::Cursor);
    assert_eq!(annotator.canvas().unwrap().cursor(), Cursor::Pointer);
    assert!(!annotator.is_drawing());
    // Mode resets never touch shape data
    assert_eq!(annotator.outline().unwrap().len(), 1);
}

#[test]
fn test_line_completes_after_two_clicks() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Line);
    annotator.set_label("edge");

    annotator.on_mouse_press(MouseButton::Left, 0, 0);
    assert!(annotator.is_drawing());

    annotator.on_mouse_press(MouseButton::Left, 30, 40);
    assert!(!annotator.is_drawing());
    assert_eq!(annotator.result(), "edge 0 0 30 40");
}

#[test]
fn test_pen_commits_on_motion_and_ends_on_click() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Pen);

    annotator.on_mouse_press(MouseButton::Left, 0, 0);
    annotator.on_mouse_motion(1, 1);
    annotator.on_mouse_motion(2, 2);
    assert_eq!(annotator.outline().unwrap().len(), 3);

    // Each motion strokes only the new segment
    flush_ops(&mut annotator);
    annotator.on_mouse_motion(3, 3);
    assert_eq!(
        flush_ops(&mut annotator),
        vec![
            CanvasOp::BeginPath,
            CanvasOp::MoveTo(2.0, 2.0),
            CanvasOp::LineTo(3.0, 3.0),
            CanvasOp::Stroke,
        ]
    );

    annotator.on_mouse_press(MouseButton::Left, 4, 4);
    assert!(!annotator.is_drawing());
    assert_eq!(annotator.outline().unwrap().len(), 5);
}

#[test]
fn test_select_abandons_preview_but_keeps_vertices() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Polygon);
    annotator.set_label("cut01");

    annotator.on_mouse_press(MouseButton::Left, 10, 10);
    annotator.on_mouse_motion(50, 60);

    annotator.select(ShapeKind::Line);

    assert!(!annotator.is_drawing());
    assert_eq!(annotator.kind(), ShapeKind::Line);
    assert_eq!(annotator.result(), "cut01 10 10");
}

#[test]
fn test_set_label_changes_serialization() {
    let mut annotator = create_test_annotator();

    let spec = ShapeSpec::from_flat("scan_a", &[1, 2, 3, 4]).unwrap();
    annotator.begin(spec).unwrap();
    assert_eq!(annotator.result(), "scan_a 1 2 3 4");

    annotator.set_label("scan_b");
    assert_eq!(annotator.result(), "scan_b 1 2 3 4");
}

#[test]
fn test_take_canvas_stops_event_processing() {
    let mut annotator = create_test_annotator();
    annotator.select(ShapeKind::Polygon);

    let canvas = annotator.take_canvas();
    assert!(canvas.is_some());

    annotator.on_mouse_press(MouseButton::Left, 10, 10);
    assert!(!annotator.is_drawing());
    assert!(annotator.canvas().is_none());
}

#[test]
fn test_configured_vertex_target_controls_completion() {
    let mut host = CanvasRegistry::new();
    host.insert("page", RecordingCanvas::new());

    let mut config = Config::default();
    config.shape.polygon_vertices = 3;
    let mut annotator = Annotator::new(&config);
    annotator.init(&mut host, "page").unwrap();
    annotator.select(ShapeKind::Polygon);

    annotator.on_mouse_press(MouseButton::Left, 0, 0);
    annotator.on_mouse_press(MouseButton::Left, 10, 0);
    assert!(annotator.is_drawing());

    annotator.on_mouse_press(MouseButton::Left, 10, 10);
    assert!(!annotator.is_drawing());
    assert_eq!(annotator.outline().unwrap().len(), 3);
}
