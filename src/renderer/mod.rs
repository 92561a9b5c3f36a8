//! Rendering module
//!
//! Everything is text: one glyph per particle plus an optional caption, drawn through
//! the [`Surface`] trait. Canvas 2D in the browser, a recording surface elsewhere.

#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
pub mod headless;
pub mod painter;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas2d::CanvasSurface;
pub use headless::{DrawOp, HeadlessSurface};
pub use painter::{draw_frame, layout_caption};
pub use surface::Surface;
