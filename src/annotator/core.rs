//! Annotation state machine and session state.

use crate::backend::Canvas;
use crate::config::Config;
use crate::draw::{Outline, PaintStyle, Point};
use crate::input::ShapeKind;

/// Current drawing mode state machine.
///
/// Tracks whether the widget is idle or actively placing vertices.
/// State transitions occur based on mouse events and API calls.
#[derive(Debug)]
pub enum DrawingState {
    /// Not actively drawing - waiting for input
    Idle,
    /// Actively placing vertices (primary clicks commit them)
    Drawing {
        /// Live cursor position, rendered as an uncommitted trailing vertex
        preview: Option<Point>,
    },
}

/// Main annotation controller holding all session state.
///
/// One annotator drives one drawing surface. The surface is acquired
/// from a [`CanvasHost`](crate::backend::CanvasHost) during
/// [`init`](Annotator::init), so independent annotators never share
/// state. All pointer events and API calls go through this struct.
pub struct Annotator<C: Canvas> {
    /// Drawing surface acquired from the host during `init`
    pub(super) canvas: Option<C>,
    /// Whether pointer events are currently processed (`clear` detaches)
    pub(super) attached: bool,
    /// Shape kind the next primary click starts drawing
    pub(super) kind: ShapeKind,
    /// Label attached to the serialized shape
    pub(super) label: String,
    /// Committed vertices of the current shape, if one exists
    pub(super) outline: Option<Outline>,
    /// First committed vertex of the current shape
    pub(super) start_point: Option<Point>,
    /// Current drawing mode state machine
    pub(super) state: DrawingState,
    /// Resolved stroke settings applied to the surface
    pub(super) paint: PaintStyle,
    /// Arrowhead length in pixels (from config)
    pub(super) arrow_length: f64,
    /// Arrowhead angle in degrees (from config)
    pub(super) arrow_angle: f64,
    /// Number of committed vertices that completes a polygon (from config)
    pub(super) polygon_vertices: usize,
}

impl<C: Canvas> Annotator<C> {
    /// Creates a new annotator from resolved configuration.
    ///
    /// The annotator starts detached and in the non-drawing cursor mode;
    /// call [`init`](Self::init) to acquire a drawing surface and
    /// [`select`](Self::select) to choose a shape kind.
    ///
    /// # Arguments
    /// * `config` - Validated configuration (see [`Config::load`])
    pub fn new(config: &Config) -> Self {
        Self {
            canvas: None,
            attached: false,
            kind: ShapeKind::default(),
            label: String::new(),
            outline: None,
            start_point: None,
            state: DrawingState::Idle,
            paint: config.paint_style(),
            arrow_length: config.arrow.length,
            arrow_angle: config.arrow.angle_degrees,
            polygon_vertices: config.shape.polygon_vertices,
        }
    }

    /// Returns whether a shape is currently being placed.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    /// Returns the active shape kind.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Returns the active annotation label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the committed vertices of the current shape, if any.
    pub fn outline(&self) -> Option<&Outline> {
        self.outline.as_ref()
    }

    /// Returns the attached drawing surface, if any.
    pub fn canvas(&self) -> Option<&C> {
        self.canvas.as_ref()
    }

    /// Returns the attached drawing surface mutably, if any.
    ///
    /// Useful for backend-specific work such as exporting pixels.
    pub fn canvas_mut(&mut self) -> Option<&mut C> {
        self.canvas.as_mut()
    }

    /// Releases the drawing surface back to the caller.
    ///
    /// Subsequent pointer events and draw calls become no-ops until a
    /// new surface is attached via [`init`](Self::init).
    pub fn take_canvas(&mut self) -> Option<C> {
        self.attached = false;
        self.canvas.take()
    }
}
