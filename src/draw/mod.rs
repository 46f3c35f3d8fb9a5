//! Drawing primitives and shape rendering.
//!
//! This module defines the core drawing types used for annotation:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`Point`]: An integer vertex on the drawing surface
//! - [`Outline`]: The ordered vertices of the shape being placed
//! - [`PaintStyle`]: Resolved stroke settings applied to the surface
//! - Rendering functions generic over the [`Canvas`](crate::backend::Canvas) trait

pub mod color;
pub mod outline;
pub mod point;
pub mod render;
pub mod style;

// Re-export commonly used types at module level
pub use color::Color;
pub use outline::Outline;
pub use point::Point;
pub use render::{render_segment, render_shape};
pub use style::PaintStyle;

// Re-export color constants for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
