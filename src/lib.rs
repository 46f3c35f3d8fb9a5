//! Canvas shape annotation for embedding hosts.
//!
//! Provides an [`Annotator`] controller that turns pointer events into
//! labeled shape outlines on a host-provided drawing surface, plus the
//! serialization format those outlines travel in ([`ShapeSpec`]). Hosts
//! supply surfaces through the [`backend::CanvasHost`] trait; an
//! offscreen Cairo implementation is available behind the `cairo`
//! feature.

pub mod annotation;
pub mod annotator;
pub mod backend;
pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use annotation::{AnnotationError, ShapeSpec};
pub use annotator::Annotator;
pub use config::Config;
