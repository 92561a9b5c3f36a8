//! Platform abstraction layer
//!
//! The sketch never schedules itself. A [`FrameDriver`] calls back once per display
//! refresh and whenever the host viewport changes size:
//! - `manual`: driven explicitly (native runner, tests)
//! - `web`: `requestAnimationFrame` + window `resize` (wasm32)

pub mod manual;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use manual::ManualDriver;
#[cfg(target_arch = "wasm32")]
pub use web::RafDriver;

/// Per-frame callback; receives the host timestamp in milliseconds
pub type TickCallback = Box<dyn FnMut(f64)>;
/// Resize notification callback
pub type ResizeCallback = Box<dyn FnMut()>;

/// Source of frame ticks and resize notifications.
///
/// Ticks and resizes are delivered on one thread and never overlap.
pub trait FrameDriver {
    /// Register the per-frame callback, replacing any previous one
    fn on_tick(&mut self, callback: TickCallback);

    /// Register the resize callback, replacing any previous one
    fn on_resize(&mut self, callback: ResizeCallback);
}
