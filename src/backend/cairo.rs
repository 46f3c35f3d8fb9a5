//! Cairo image-surface backend for offscreen rasterization.

use std::fs::File;
use std::path::Path;

use anyhow::{Context as _, Result};
use log::warn;

use super::{Canvas, Cursor};
use crate::annotation::AnnotationError;
use crate::config::{LineCap, LineJoin};
use crate::draw::PaintStyle;

/// Canvas backed by a Cairo ARGB image surface.
///
/// Rasterizes drawing instructions offscreen; hosts can export the result
/// as PNG or keep a handle to the surface for compositing. Cursor requests
/// are tracked but not displayed, since an offscreen buffer has no pointer.
pub struct CairoCanvas {
    surface: cairo::ImageSurface,
    ctx: cairo::Context,
    cursor: Cursor,
}

impl CairoCanvas {
    /// Creates a canvas over a fresh transparent surface.
    ///
    /// # Errors
    /// Returns [`AnnotationError::RenderingUnavailable`] if the surface or
    /// its drawing context cannot be created.
    pub fn new(width: i32, height: i32) -> Result<Self, AnnotationError> {
        let target = format!("{width}x{height} image surface");
        match cairo::ImageSurface::create(cairo::Format::ARgb32, width, height) {
            Ok(surface) => Self::from_surface(surface),
            Err(err) => {
                warn!("Failed to create {target}: {err}");
                Err(AnnotationError::RenderingUnavailable { target })
            }
        }
    }

    /// Wraps an existing image surface.
    ///
    /// The caller may keep its own handle to `surface`; pixel data becomes
    /// readable once this canvas (and the context it holds) is dropped.
    ///
    /// # Errors
    /// Returns [`AnnotationError::RenderingUnavailable`] if a drawing
    /// context cannot be acquired for the surface.
    pub fn from_surface(surface: cairo::ImageSurface) -> Result<Self, AnnotationError> {
        match cairo::Context::new(&surface) {
            Ok(ctx) => Ok(Self {
                surface,
                ctx,
                cursor: Cursor::Default,
            }),
            Err(err) => {
                warn!("Failed to acquire drawing context: {err}");
                Err(AnnotationError::RenderingUnavailable {
                    target: "image surface context".to_string(),
                })
            }
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Underlying surface handle, for hosts that composite the result.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Pointer shape most recently requested on this surface.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Writes the surface contents to a PNG file.
    pub fn write_png(&mut self, path: &Path) -> Result<()> {
        self.surface.flush();
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        self.surface
            .write_to_png(&mut file)
            .with_context(|| format!("Failed to write PNG to {}", path.display()))?;
        Ok(())
    }
}

fn map_join(join: LineJoin) -> cairo::LineJoin {
    match join {
        LineJoin::Miter => cairo::LineJoin::Miter,
        LineJoin::Round => cairo::LineJoin::Round,
        LineJoin::Bevel => cairo::LineJoin::Bevel,
    }
}

fn map_cap(cap: LineCap) -> cairo::LineCap {
    match cap {
        LineCap::Butt => cairo::LineCap::Butt,
        LineCap::Round => cairo::LineCap::Round,
        LineCap::Square => cairo::LineCap::Square,
    }
}

impl Canvas for CairoCanvas {
    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.ctx.arc(cx, cy, radius, start_angle, end_angle);
    }

    fn stroke(&mut self) {
        let _ = self.ctx.stroke(); // Ignore errors - a failed stroke leaves the surface unchanged
    }

    fn clear(&mut self) {
        self.ctx.save().ok();
        self.ctx.set_operator(cairo::Operator::Clear);
        let _ = self.ctx.paint();
        self.ctx.restore().ok();
    }

    fn apply_style(&mut self, style: &PaintStyle) {
        self.ctx.set_line_width(style.line_width);
        self.ctx.set_line_join(map_join(style.line_join));
        self.ctx.set_line_cap(map_cap(style.line_cap));
        self.ctx.set_source_rgba(
            style.stroke.r,
            style.stroke.g,
            style.stroke.b,
            style.stroke.a,
        );
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
    }
}
