//! Canvas 2D backend
//!
//! Pixel density is fixed at 1: the backing store matches the CSS size.

use glam::DVec2;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{FONT_FAMILY, Surface};

/// A `<canvas>` element and its 2D context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    font_size: f64,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        let mut surface = Self {
            canvas,
            ctx,
            font_size: 12.0,
        };
        surface.apply_text_style();
        surface
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Resizing a canvas resets its context state, so alignment must be reapplied
    fn apply_text_style(&mut self) {
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_font(&format!("{}px {}", self.font_size, FONT_FAMILY));
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.apply_text_style();
    }

    fn clear(&mut self, gray: u8) {
        self.ctx
            .set_fill_style_str(&format!("rgb({0},{0},{0})", gray));
        let (w, h) = self.size();
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn reset_transform(&mut self) {
        if let Err(e) = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0) {
            log::warn!("setTransform failed: {:?}", e);
        }
    }

    fn translate(&mut self, offset: DVec2) {
        if let Err(e) = self.ctx.translate(offset.x, offset.y) {
            log::warn!("translate failed: {:?}", e);
        }
    }

    fn set_fill(&mut self, rgb: [u8; 3], alpha: f64) {
        let a = (alpha / 255.0).clamp(0.0, 1.0);
        self.ctx
            .set_fill_style_str(&format!("rgba({},{},{},{})", rgb[0], rgb[1], rgb[2], a));
    }

    fn set_font_size(&mut self, px: f64) {
        self.font_size = px;
        self.ctx.set_font(&format!("{}px {}", px, FONT_FAMILY));
    }

    fn measure_text(&self, text: &str) -> f64 {
        self.ctx
            .measure_text(text)
            .map(|m| m.width())
            .unwrap_or(0.0)
    }

    fn fill_text(&mut self, text: &str, pos: DVec2) {
        // Failures here are per-glyph and not actionable
        let _ = self.ctx.fill_text(text, pos.x, pos.y);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }
}
