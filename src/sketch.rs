//! The running sketch: one surface, one particle field
//!
//! Owned by the frame driver's callbacks. Each frame samples input, advances the
//! field and paints it; a resize rescales in place.

use crate::config::{CanvasConfig, Tuning};
use crate::renderer::{Surface, draw_frame};
use crate::sim::{
    FieldState, Interaction, InteractionMode, InteractionTracker, PointerSnapshot, SphereOptions,
    TickInput, tick,
};

/// Sketch instance holding all animation state
pub struct Sketch<S: Surface> {
    surface: S,
    field: FieldState,
    config: CanvasConfig,
    tracker: InteractionTracker,
    mode: InteractionMode,
}

impl<S: Surface> Sketch<S> {
    /// Size `surface` for `config` and build the particle field
    pub fn new(
        mut surface: S,
        config: CanvasConfig,
        options: SphereOptions,
        tuning: Tuning,
        seed: u64,
    ) -> Self {
        surface.resize(config.width, config.height);
        let field = FieldState::new(&config, options, tuning, seed);
        log::info!(
            "Sketch set up: {}x{}, radius {:.1}, {} {} particles",
            config.width,
            config.height,
            config.radius,
            field.len(),
            options.glyphs.as_str()
        );
        Self {
            surface,
            field,
            config,
            tracker: InteractionTracker::new(),
            mode: InteractionMode::Idle,
        }
    }

    /// Run one animation frame
    pub fn frame(&mut self, pointer: &PointerSnapshot) -> Interaction {
        let interaction = self.tracker.sample(pointer, self.surface.size_vec());
        if interaction.mode != self.mode {
            log::debug!("Interaction: {:?} -> {:?}", self.mode, interaction.mode);
            self.mode = interaction.mode;
        }

        tick(
            &mut self.field,
            &TickInput {
                interaction: interaction.point,
            },
        );
        draw_frame(&self.field, &mut self.surface);
        interaction
    }

    /// Apply a new configuration after the host resized.
    ///
    /// The particle count is fixed at setup; only sizes change. Particles are snapped
    /// onto their homes at the current angle with their velocities left untouched.
    pub fn resize(&mut self, config: CanvasConfig) {
        if config.particle_count != self.field.len() {
            log::debug!(
                "Resize wants {} particles, keeping {}",
                config.particle_count,
                self.field.len()
            );
        }
        self.surface.resize(config.width, config.height);
        self.field.apply_config(&config);
        self.field.snap_to_home();
        self.config = CanvasConfig {
            particle_count: self.field.len(),
            ..config
        };
        log::info!(
            "Resized to {}x{}, radius {:.1}",
            config.width,
            config.height,
            config.radius
        );
    }

    pub fn field(&self) -> &FieldState {
        &self.field
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn options(&self) -> SphereOptions {
        self.field.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_config;
    use crate::home_position;
    use crate::renderer::HeadlessSurface;
    use glam::DVec2;

    fn sketch(width: Option<f64>) -> Sketch<HeadlessSurface> {
        let config = compute_config(width);
        Sketch::new(
            HeadlessSurface::new(1, 1),
            config,
            SphereOptions::digits(),
            Tuning::default(),
            2024,
        )
    }

    #[test]
    fn test_setup_sizes_surface() {
        let sketch = sketch(Some(700.0));
        assert_eq!(sketch.surface().size(), (620, 482));
        assert_eq!(sketch.field().len(), 8000);
    }

    #[test]
    fn test_frame_draws_every_particle() {
        let mut sketch = sketch(None);
        sketch.frame(&PointerSnapshot::default());
        assert_eq!(sketch.surface().glyphs_drawn(), 8000);
        assert_eq!(sketch.mode(), InteractionMode::Idle);
    }

    #[test]
    fn test_pointer_sweep_scatters_then_settles() {
        let mut sketch = sketch(Some(300.0));
        let mut pointer = PointerSnapshot::default();
        sketch.frame(&pointer);

        // Drag across the middle of the sphere
        for step in 0..60 {
            pointer.position = DVec2::new(60.0 + step as f64 * 4.0, 180.0);
            pointer.pressed = true;
            let interaction = sketch.frame(&pointer);
            assert_eq!(interaction.mode, InteractionMode::Interacting);
        }
        let disturbed = sketch.field().mean_home_distance();
        assert!(sketch.field().reveal_alpha > 0.0);

        pointer.pressed = false;
        for _ in 0..400 {
            sketch.frame(&pointer);
        }
        assert_eq!(sketch.mode(), InteractionMode::Idle);
        assert!(sketch.field().mean_home_distance() < disturbed);
        assert!(sketch.field().reveal_alpha < 1e-6);
    }

    #[test]
    fn test_resize_keeps_count_and_snaps() {
        let mut sketch = sketch(Some(1200.0));
        for _ in 0..10 {
            sketch.frame(&PointerSnapshot::default());
        }
        let count = sketch.field().len();
        let angle = sketch.field().angle;

        let smaller = compute_config(Some(300.0));
        sketch.resize(smaller);

        assert_eq!(sketch.field().len(), count);
        // Mobile config asks for 4000; the setup count stays authoritative
        assert_eq!(sketch.config().particle_count, count);
        assert_eq!(sketch.config().radius, 160.0);
        assert_eq!(sketch.surface().size(), (360, 360));
        assert_eq!(sketch.field().radius, 160.0);
        assert_eq!(sketch.field().repel_radius, 60.0);
        assert_eq!(sketch.field().text_size, 3.0);
        for p in &sketch.field().particles {
            assert_eq!(p.pos, home_position(p.index, angle, 160.0));
        }
    }

    #[test]
    fn test_resize_leaves_velocities() {
        let mut sketch = sketch(Some(1200.0));
        let mut pointer = PointerSnapshot {
            position: DVec2::new(450.0, 350.0),
            pressed: true,
            touches: Vec::new(),
        };
        sketch.frame(&pointer);
        pointer.pressed = false;
        let before: Vec<DVec2> = sketch.field().particles.iter().map(|p| p.vel).collect();
        assert!(before.iter().any(|v| *v != DVec2::ZERO));

        sketch.resize(compute_config(Some(700.0)));
        let after: Vec<DVec2> = sketch.field().particles.iter().map(|p| p.vel).collect();
        assert_eq!(before, after);
    }
}
