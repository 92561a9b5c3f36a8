//! Per-frame field update
//!
//! Spring toward the rotating home, push away from the interaction point, damp,
//! integrate. Particles never interact with each other.

use glam::DVec2;

use super::state::FieldState;
use crate::consts::{ALPHA_MAX, REPEL_EXEMPT_DIST_SQ, REVEAL_RADIUS_FRACTION};
use crate::home_position;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Interaction point relative to the sphere center, if any
    pub interaction: Option<DVec2>,
}

/// Spring impulse pulling `pos` toward `home`
#[inline]
pub fn spring_force(pos: DVec2, home: DVec2, attraction: f64) -> DVec2 {
    (home - pos) * attraction
}

/// Repulsion impulse on a particle at `pos` from the interaction point `from`.
///
/// Falls off linearly from `strength` at the point to zero at `repel_radius`.
/// Zero outside the radius and for particles sitting on the point itself.
pub fn repulsion_force(pos: DVec2, from: DVec2, repel_radius: f64, strength: f64) -> DVec2 {
    let away = pos - from;
    let dist_sq = away.length_squared();
    if dist_sq <= REPEL_EXEMPT_DIST_SQ || dist_sq >= repel_radius * repel_radius {
        return DVec2::ZERO;
    }
    let distance = dist_sq.sqrt();
    away / distance * (strength * (1.0 - distance / repel_radius))
}

/// Caption alpha the reveal is heading toward for this frame
pub fn reveal_target(interaction: Option<DVec2>, radius: f64) -> f64 {
    match interaction {
        Some(point) => {
            let max_dist = radius * REVEAL_RADIUS_FRACTION;
            let t = 1.0 - (point.length() / max_dist).clamp(0.0, 1.0);
            ALPHA_MAX * t
        }
        None => 0.0,
    }
}

/// Advance the field by one frame
pub fn tick(state: &mut FieldState, input: &TickInput) {
    let tuning = state.tuning;

    if state.options.caption_reveal {
        let target = reveal_target(input.interaction, state.radius);
        state.reveal_alpha += (target - state.reveal_alpha) * tuning.reveal_smoothing;
    }

    let (angle, radius, repel_radius) = (state.angle, state.radius, state.repel_radius);
    for p in &mut state.particles {
        let home = home_position(p.index, angle, radius);
        p.vel += spring_force(p.pos, home, tuning.attraction);

        if let Some(point) = input.interaction {
            p.vel += repulsion_force(p.pos, point, repel_radius, tuning.repel_strength);
        }

        p.vel *= tuning.damping;
        p.pos += p.vel;
    }

    state.angle += tuning.angle_step;
    state.frame_count += 1;
}
