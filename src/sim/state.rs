//! Particle field state
//!
//! The particle collection is sized once at setup and never grows or shrinks.
//! Everything the frame update mutates (positions, velocities, rotation angle,
//! caption alpha) lives on [`FieldState`].

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{CanvasConfig, Tuning};
use crate::home_position;

/// Weighted digit alphabet: 1 and 3 appear twice as often as 4
pub const DIGIT_GLYPHS: [char; 5] = ['1', '1', '3', '3', '4'];

/// Caption revealed inside the sphere (digit variant)
pub const CAPTION_LINES: [&str; 4] = [
    "Digital visual artist",
    "From generative systems to interactive environments",
    "Code, motion, structure",
    "Open to collaborations",
];

/// Which alphabet particles draw their glyph from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    #[default]
    Digits,
    Letters,
}

impl GlyphSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            GlyphSet::Digits => "digits",
            GlyphSet::Letters => "letters",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "digits" | "digit" | "numbers" => Some(GlyphSet::Digits),
            "letters" | "letter" | "alpha" => Some(GlyphSet::Letters),
            _ => None,
        }
    }

    /// Draw one glyph from this set
    pub fn pick(&self, rng: &mut impl Rng) -> char {
        match self {
            GlyphSet::Digits => DIGIT_GLYPHS[rng.random_range(0..DIGIT_GLYPHS.len())],
            GlyphSet::Letters => rng.random_range(b'A'..=b'Z') as char,
        }
    }

    /// Screen-reader description of the visual
    pub fn description(&self) -> &'static str {
        match self {
            GlyphSet::Digits => {
                "A rotating sphere-like cloud of white digits (1, 3, 4) on a black background, \
                 scatters and reforms when interacted with by the mouse or touch, \
                 creating a circular repulsion effect around the cursor."
            }
            GlyphSet::Letters => {
                "A rotating sphere-like cloud of white letters on a black background, \
                 scatters and reforms when interacted with by the mouse or touch, \
                 creating a circular repulsion effect around the cursor."
            }
        }
    }
}

/// Feature switches distinguishing the sphere variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SphereOptions {
    pub glyphs: GlyphSet,
    /// Fade in the caption as the pointer nears the sphere center
    pub caption_reveal: bool,
    /// Swallow touch events so dragging on the canvas does not scroll the page
    pub prevent_touch_scroll: bool,
}

impl SphereOptions {
    /// Digit sphere with caption; page still scrolls on vertical swipes
    pub fn digits() -> Self {
        Self {
            glyphs: GlyphSet::Digits,
            caption_reveal: true,
            prevent_touch_scroll: false,
        }
    }

    /// Letter sphere, no caption, touch drags stay on the canvas
    pub fn letters() -> Self {
        Self {
            glyphs: GlyphSet::Letters,
            caption_reveal: false,
            prevent_touch_scroll: true,
        }
    }

    /// Whether a touch event of this type should have its default action cancelled.
    ///
    /// Only start/move scroll the page; cancelling end/cancel would also swallow the
    /// synthetic click.
    pub fn blocks_touch_event(&self, event_type: &str) -> bool {
        self.prevent_touch_scroll && matches!(event_type, "touchstart" | "touchmove")
    }

    pub fn for_glyphs(glyphs: GlyphSet) -> Self {
        match glyphs {
            GlyphSet::Digits => Self::digits(),
            GlyphSet::Letters => Self::letters(),
        }
    }
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self::digits()
    }
}

/// One glyph particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Fixed at creation; drives the home orbit
    pub index: usize,
    pub pos: DVec2,
    pub vel: DVec2,
    pub glyph: char,
}

/// Live particle field
#[derive(Debug, Clone)]
pub struct FieldState {
    /// Seed the glyphs were drawn with
    pub seed: u64,
    pub options: SphereOptions,
    pub tuning: Tuning,
    /// Flat, fixed-size collection; `particles[i].index == i`
    pub particles: Vec<Particle>,
    /// Global rotation angle, advanced once per frame
    pub angle: f64,
    /// Caption alpha in [0, 255]
    pub reveal_alpha: f64,
    /// Sphere radius currently applied
    pub radius: f64,
    /// Repulsion radius currently applied
    pub repel_radius: f64,
    /// Glyph font size currently applied
    pub text_size: f64,
    /// Frames simulated since setup
    pub frame_count: u64,
}

impl FieldState {
    /// Build the field for `config`: particles at rest on their homes at angle 0
    pub fn new(config: &CanvasConfig, options: SphereOptions, tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let radius = config.radius;

        let particles = (0..config.particle_count)
            .map(|index| Particle {
                index,
                pos: home_position(index, 0.0, radius),
                vel: DVec2::ZERO,
                glyph: options.glyphs.pick(&mut rng),
            })
            .collect();

        Self {
            seed,
            options,
            tuning,
            particles,
            angle: 0.0,
            reveal_alpha: 0.0,
            radius,
            repel_radius: config.repel_radius,
            text_size: config.text_size,
            frame_count: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Apply new canvas dimensions without touching the particle count
    pub fn apply_config(&mut self, config: &CanvasConfig) {
        self.radius = config.radius;
        self.repel_radius = config.repel_radius;
        self.text_size = config.text_size;
    }

    /// Move every particle onto its home at the current angle.
    ///
    /// Velocities are left as they are.
    pub fn snap_to_home(&mut self) {
        let (angle, radius) = (self.angle, self.radius);
        for p in &mut self.particles {
            p.pos = home_position(p.index, angle, radius);
        }
    }

    /// Mean distance of particles from their current home (0 when fully at rest)
    pub fn mean_home_distance(&self) -> f64 {
        if self.particles.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .particles
            .iter()
            .map(|p| (home_position(p.index, self.angle, self.radius) - p.pos).length())
            .sum();
        total / self.particles.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> CanvasConfig {
        CanvasConfig {
            particle_count: 300,
            ..CanvasConfig::DESKTOP
        }
    }

    #[test]
    fn test_field_setup_at_rest_on_home() {
        let field = FieldState::new(&small_config(), SphereOptions::digits(), Tuning::default(), 7);
        assert_eq!(field.len(), 300);
        assert_eq!(field.angle, 0.0);
        for (i, p) in field.particles.iter().enumerate() {
            assert_eq!(p.index, i);
            assert_eq!(p.vel, DVec2::ZERO);
            assert_eq!(p.pos, home_position(i, 0.0, 250.0));
        }
        assert!(field.mean_home_distance() < 1e-12);
    }

    #[test]
    fn test_digit_glyphs_weighted() {
        let config = CanvasConfig {
            particle_count: 5000,
            ..CanvasConfig::DESKTOP
        };
        let field = FieldState::new(&config, SphereOptions::digits(), Tuning::default(), 42);
        let count = |c: char| field.particles.iter().filter(|p| p.glyph == c).count();
        let (ones, threes, fours) = (count('1'), count('3'), count('4'));
        assert_eq!(ones + threes + fours, 5000);
        // Expected 2000 / 2000 / 1000
        assert!(ones > fours && threes > fours);
        assert!((800..1200).contains(&fours));
    }

    #[test]
    fn test_letter_glyphs_uppercase() {
        let field = FieldState::new(&small_config(), SphereOptions::letters(), Tuning::default(), 3);
        assert!(field.particles.iter().all(|p| p.glyph.is_ascii_uppercase()));
    }

    #[test]
    fn test_same_seed_same_glyphs() {
        let a = FieldState::new(&small_config(), SphereOptions::digits(), Tuning::default(), 99);
        let b = FieldState::new(&small_config(), SphereOptions::digits(), Tuning::default(), 99);
        assert!(a.particles.iter().zip(&b.particles).all(|(p, q)| p.glyph == q.glyph));
    }

    #[test]
    fn test_snap_keeps_velocity() {
        let mut field = FieldState::new(&small_config(), SphereOptions::digits(), Tuning::default(), 1);
        field.particles[5].vel = DVec2::new(3.0, -2.0);
        field.particles[5].pos = DVec2::new(1000.0, 1000.0);
        field.angle = 0.5;
        field.snap_to_home();
        assert_eq!(field.particles[5].pos, home_position(5, 0.5, 250.0));
        assert_eq!(field.particles[5].vel, DVec2::new(3.0, -2.0));
    }

    #[test]
    fn test_touch_blocking_limited_to_start_and_move() {
        let letters = SphereOptions::letters();
        assert!(letters.blocks_touch_event("touchstart"));
        assert!(letters.blocks_touch_event("touchmove"));
        assert!(!letters.blocks_touch_event("touchend"));
        assert!(!letters.blocks_touch_event("touchcancel"));

        let digits = SphereOptions::digits();
        for name in ["touchstart", "touchmove", "touchend", "touchcancel"] {
            assert!(!digits.blocks_touch_event(name));
        }
    }

    #[test]
    fn test_glyph_set_parse() {
        assert_eq!(GlyphSet::parse("Letters"), Some(GlyphSet::Letters));
        assert_eq!(GlyphSet::parse(" digits "), Some(GlyphSet::Digits));
        assert_eq!(GlyphSet::parse("emoji"), None);
        assert_eq!(GlyphSet::parse(GlyphSet::Letters.as_str()), Some(GlyphSet::Letters));
    }
}
