//! Glyph Sphere - a rotating cloud of glyph particles
//!
//! Core modules:
//! - `config`: Canvas sizing from container width, plus tunable physics
//! - `sim`: Deterministic particle field (state, interaction, per-frame tick)
//! - `renderer`: Drawing surface contract, frame painter, Canvas 2D backend
//! - `platform`: Frame/resize driver abstraction (requestAnimationFrame on web)
//! - `sketch`: Application object tying the above together

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod sketch;

pub use config::{CanvasConfig, Tuning, compute_config};
pub use error::{SketchError, TuningError};
pub use sketch::Sketch;

use glam::DVec2;

/// Simulation constants
pub mod consts {
    /// Spring pull toward the rotating home position
    pub const ATTRACTION: f64 = 0.01;
    /// Velocity multiplier applied every frame
    pub const DAMPING: f64 = 0.9;
    /// Peak repulsion impulse (at distance ~0 from the interaction point)
    pub const REPEL_STRENGTH: f64 = 28.0;
    /// Global rotation advance per frame (radians)
    pub const ANGLE_STEP: f64 = 0.01;

    /// Squared distance below which a particle is exempt from repulsion
    pub const REPEL_EXEMPT_DIST_SQ: f64 = 0.1;

    /// Low-pass factor for the caption alpha
    pub const REVEAL_SMOOTHING: f64 = 0.1;
    /// Caption is fully hidden at this fraction of the sphere radius and beyond
    pub const REVEAL_RADIUS_FRACTION: f64 = 0.9;
    /// Fully opaque alpha (p5-style 0-255 scale)
    pub const ALPHA_MAX: f64 = 255.0;
}

/// Rotating home position of particle `index` at global `angle` on a sphere of `radius`.
///
/// Not physical trigonometry: `sin(i²)`/`cos(i²)` scatter indices pseudo-randomly over a
/// disc-like projection of a sphere, `sin(i + angle)` makes it turn.
#[inline]
pub fn home_position(index: usize, angle: f64, radius: f64) -> DVec2 {
    let i = index as f64;
    let i_sq = i * i;
    DVec2::new((i + angle).sin() * i_sq.sin() * radius, i_sq.cos() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_home_position_index_zero() {
        // sin(0) = 0, cos(0) = 1 → top of the sphere regardless of angle
        let home = home_position(0, 1.234, 250.0);
        assert!(home.x.abs() < 1e-12);
        assert!((home.y - 250.0).abs() < 1e-12);
    }

    #[test]
    fn test_home_position_stays_within_radius_box() {
        for i in 0..500 {
            let home = home_position(i, 0.37, 160.0);
            assert!(home.x.abs() <= 160.0 + 1e-9);
            assert!(home.y.abs() <= 160.0 + 1e-9);
        }
    }

    proptest! {
        #[test]
        fn prop_home_is_deterministic(index in 0usize..10_000, angle in 0.0f64..1000.0, radius in 1.0f64..500.0) {
            let a = home_position(index, angle, radius);
            let b = home_position(index, angle, radius);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_home_y_ignores_angle(index in 0usize..10_000, a1 in 0.0f64..100.0, a2 in 0.0f64..100.0) {
            let h1 = home_position(index, a1, 250.0);
            let h2 = home_position(index, a2, 250.0);
            prop_assert!((h1.y - h2.y).abs() < 1e-9);
        }
    }
}
