//! Deterministic particle field simulation
//!
//! Pure logic, no rendering or platform dependencies:
//! - Fixed step per frame (no wall-clock time)
//! - Seeded RNG only, used once at setup for glyphs
//! - Stable iteration order (by particle index)

pub mod interaction;
pub mod state;
pub mod tick;

pub use interaction::{Interaction, InteractionMode, InteractionTracker, PointerSnapshot};
pub use state::{CAPTION_LINES, FieldState, GlyphSet, Particle, SphereOptions};
pub use tick::{TickInput, repulsion_force, reveal_target, spring_force, tick};
