//! In-memory surface that records draw calls
//!
//! Used by the native runner and by tests. Text is measured as monospace at 0.6em
//! per character.

use glam::DVec2;

use super::surface::Surface;

/// Monospace advance as a fraction of font size
const MONO_ADVANCE: f64 = 0.6;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    ResetTransform,
    Clear(u8),
    Translate(DVec2),
    SetFill([u8; 3], f64),
    SetFont(f64),
    Text(String, DVec2),
    Save,
    Restore,
}

/// Surface that keeps the draw calls of the most recent frame
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: u32,
    height: u32,
    font_size: f64,
    font_stack: Vec<f64>,
    ops: Vec<DrawOp>,
}

impl HeadlessSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            font_size: 12.0,
            font_stack: Vec::new(),
            ops: Vec::new(),
        }
    }

    /// Draw calls since the last clear
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Single-glyph text draws (particles)
    pub fn glyphs_drawn(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text(s, _) if s.chars().count() == 1))
            .count()
    }

    /// Multi-character text draws (caption lines)
    pub fn caption_lines_drawn(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Text(s, _) if s.chars().count() > 1))
            .count()
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self, gray: u8) {
        // Keep the transform reset that precedes a clear
        let keep = matches!(self.ops.last(), Some(DrawOp::ResetTransform));
        self.ops.clear();
        if keep {
            self.ops.push(DrawOp::ResetTransform);
        }
        self.ops.push(DrawOp::Clear(gray));
    }

    fn reset_transform(&mut self) {
        self.ops.push(DrawOp::ResetTransform);
    }

    fn translate(&mut self, offset: DVec2) {
        self.ops.push(DrawOp::Translate(offset));
    }

    fn set_fill(&mut self, rgb: [u8; 3], alpha: f64) {
        self.ops.push(DrawOp::SetFill(rgb, alpha));
    }

    fn set_font_size(&mut self, px: f64) {
        self.font_size = px;
        self.ops.push(DrawOp::SetFont(px));
    }

    fn measure_text(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.font_size * MONO_ADVANCE
    }

    fn fill_text(&mut self, text: &str, pos: DVec2) {
        self.ops.push(DrawOp::Text(text.to_string(), pos));
    }

    fn save(&mut self) {
        self.font_stack.push(self.font_size);
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        if let Some(size) = self.font_stack.pop() {
            self.font_size = size;
        }
        self.ops.push(DrawOp::Restore);
    }
}
