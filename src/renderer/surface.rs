//! Drawing surface contract
//!
//! The painter only needs a handful of 2D text primitives; anything that can clear,
//! translate, set a fill and draw centered monospace text can host the sketch.

use glam::DVec2;

/// Font family used for glyphs and caption
pub const FONT_FAMILY: &str = "monospace";

/// A 2D text drawing target
pub trait Surface {
    /// Current size in pixels
    fn size(&self) -> (u32, u32);

    /// Resize the backing store
    fn resize(&mut self, width: u32, height: u32);

    /// Fill the whole surface with an opaque gray level
    fn clear(&mut self, gray: u8);

    /// Reset any translation back to the top-left origin
    fn reset_transform(&mut self);

    /// Move the coordinate origin
    fn translate(&mut self, offset: DVec2);

    /// Set the fill color; `alpha` is on a 0-255 scale
    fn set_fill(&mut self, rgb: [u8; 3], alpha: f64);

    /// Set the monospace font size; text is centered horizontally and vertically
    fn set_font_size(&mut self, px: f64);

    /// Width of `text` in the current font
    fn measure_text(&self, text: &str) -> f64;

    /// Draw one line of text centered at `pos`
    fn fill_text(&mut self, text: &str, pos: DVec2);

    /// Push drawing state (fill, font, transform)
    fn save(&mut self);

    /// Pop drawing state
    fn restore(&mut self);

    /// Size as a vector, for centering math
    fn size_vec(&self) -> DVec2 {
        let (w, h) = self.size();
        DVec2::new(w as f64, h as f64)
    }
}
