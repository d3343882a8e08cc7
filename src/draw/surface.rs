//! Drawing-surface abstraction consumed by the renderer.
//!
//! Rendering backends (a 2D canvas, a GPU quad batcher, a test recorder)
//! implement [`DrawSurface`]. The pad core only ever talks to this trait:
//! it queries logical dimensions, asks for resize reconfiguration, and emits
//! a small set of drawing primitives.

use crate::draw::color::Color;
use crate::draw::font::FontSize;
use crate::util::Rect;

/// Horizontal text alignment for [`DrawSurface::fill_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Render target owned by the pad.
///
/// Implementations own the pixel buffer, device-scale factors and any
/// backend handles. `update_dimensions` must clear and reconfigure the
/// target; callers are responsible for re-initializing the controller
/// afterwards since control positions depend on surface size.
pub trait DrawSurface {
    /// Logical width and height in surface coordinates.
    fn dimensions(&self) -> (f64, f64);

    /// Resizes the target, recomputing device scale and clearing content.
    fn update_dimensions(&mut self, width: f64, height: f64);

    /// Clears the whole target.
    fn clear(&mut self);

    /// Fills a circle.
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color);

    /// Strokes a circle outline.
    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, line_width: f64, color: Color);

    /// Fills a rounded rectangle. `radius` is already clamped by the caller
    /// via [`crate::util::corner_radius`].
    fn fill_round_rect(&mut self, rect: Rect, radius: f64, color: Color);

    /// Strokes a rounded rectangle outline.
    fn stroke_round_rect(&mut self, rect: Rect, radius: f64, line_width: f64, color: Color);

    /// Draws a text run anchored at (x, y) with vertical centering.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, size: FontSize, align: TextAlign, color: Color);
}

/// A recorded drawing primitive, for assertions and headless use.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear,
    FillCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        color: Color,
    },
    StrokeCircle {
        cx: f64,
        cy: f64,
        radius: f64,
        line_width: f64,
        color: Color,
    },
    FillRoundRect {
        rect: Rect,
        radius: f64,
        color: Color,
    },
    StrokeRoundRect {
        rect: Rect,
        radius: f64,
        line_width: f64,
        color: Color,
    },
    FillText {
        text: String,
        x: f64,
        y: f64,
        size: FontSize,
        align: TextAlign,
        color: Color,
    },
}

/// Surface that records every primitive instead of rasterizing.
///
/// Used by the test suite and useful for consumers that replay the ops
/// against their own backend.
#[derive(Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    scale: (f64, f64),
    /// Recorded primitives in emission order.
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    /// Creates a recording surface with the given logical dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scale: (1.0, 1.0),
            ops: Vec::new(),
        }
    }

    /// Device scale factors recomputed on resize.
    pub fn scale(&self) -> (f64, f64) {
        self.scale
    }

    /// Drops all recorded ops.
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn dimensions(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn update_dimensions(&mut self, width: f64, height: f64) {
        // Scale is relative to the initial dimensions, mirroring a
        // device-pixel-ratio recompute on a real backend.
        if self.width > 0.0 && self.height > 0.0 {
            self.scale = (width / self.width, height / self.height);
        }
        self.width = width;
        self.height = height;
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
    }

    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Color) {
        self.ops.push(DrawOp::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, cx: f64, cy: f64, radius: f64, line_width: f64, color: Color) {
        self.ops.push(DrawOp::StrokeCircle {
            cx,
            cy,
            radius,
            line_width,
            color,
        });
    }

    fn fill_round_rect(&mut self, rect: Rect, radius: f64, color: Color) {
        self.ops.push(DrawOp::FillRoundRect {
            rect,
            radius,
            color,
        });
    }

    fn stroke_round_rect(&mut self, rect: Rect, radius: f64, line_width: f64, color: Color) {
        self.ops.push(DrawOp::StrokeRoundRect {
            rect,
            radius,
            line_width,
            color,
        });
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        size: FontSize,
        align: TextAlign,
        color: Color,
    ) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
            size,
            align,
            color,
        });
    }
}
