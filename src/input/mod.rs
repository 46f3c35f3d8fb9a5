//! Input vocabulary for the annotation widget.
//!
//! This module defines the event and shape-kind types the annotator
//! dispatches on. Hosts translate their native pointer events into
//! [`MouseButton`] values and pick the active [`ShapeKind`] from their
//! toolbar.

pub mod events;
pub mod kind;

// Re-export commonly used types at module level
pub use events::MouseButton;
pub use kind::ShapeKind;
