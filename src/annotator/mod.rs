//! Interactive annotation controller.
//!
//! Wires pointer events, shape state, and a drawing surface together.

mod api;
mod core;
mod mouse;
mod render;
#[cfg(test)]
mod tests;

pub use core::{Annotator, DrawingState};
