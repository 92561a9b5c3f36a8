//! Canvas configuration and physics tuning
//!
//! Canvas parameters are recomputed from the container width on setup and on every
//! resize. Tuning overrides come from the page (JSON in a data attribute).

use serde::{Deserialize, Serialize};

use crate::consts::{ANGLE_STEP, ATTRACTION, DAMPING, REPEL_STRENGTH, REVEAL_SMOOTHING};
use crate::error::TuningError;

/// Horizontal padding reserved around the canvas inside its container
pub const CONTAINER_PADDING: f64 = 80.0;
/// Target widths within this distance of the mobile width snap to the mobile baseline
pub const MOBILE_SNAP_MARGIN: f64 = 50.0;
/// Below this target width the sketch uses the mobile particle count
pub const FULL_DENSITY_MIN_WIDTH: f64 = 600.0;

/// Sizing and density for one canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in CSS pixels
    pub width: u32,
    /// Canvas height in CSS pixels
    pub height: u32,
    /// Ratio of the target width to the desktop design width
    pub scale: f64,
    /// Sphere radius
    pub radius: f64,
    /// Distance from the interaction point at which repulsion starts
    pub repel_radius: f64,
    /// Glyph font size
    pub text_size: f64,
    /// Number of particles to create at setup
    pub particle_count: usize,
}

impl CanvasConfig {
    /// Desktop design baseline
    pub const DESKTOP: Self = Self {
        width: 900,
        height: 700,
        scale: 1.0,
        radius: 250.0,
        repel_radius: 90.0,
        text_size: 4.0,
        particle_count: 8000,
    };

    /// Mobile fallback for very small containers
    pub const MOBILE: Self = Self {
        width: 360,
        height: 360,
        scale: 360.0 / 900.0,
        radius: 160.0,
        repel_radius: 60.0,
        text_size: 3.0,
        particle_count: 4000,
    };
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self::DESKTOP
    }
}

/// Compute canvas parameters for a container of the given pixel width.
///
/// `None` (no container) and zero width (container not laid out yet) both yield the
/// desktop baseline.
pub fn compute_config(container_width: Option<f64>) -> CanvasConfig {
    let desktop = CanvasConfig::DESKTOP;
    let mobile = CanvasConfig::MOBILE;

    let container_width = match container_width {
        Some(w) if w > 0.0 => w,
        _ => return desktop,
    };

    let desktop_width = desktop.width as f64;
    let mobile_width = mobile.width as f64;

    let target_width = (container_width - CONTAINER_PADDING)
        .min(desktop_width)
        .max(mobile_width);

    // Hard cutover, not a blend
    if target_width <= mobile_width + MOBILE_SNAP_MARGIN {
        return mobile;
    }

    let scale = target_width / desktop_width;
    let text_size = (desktop.text_size * scale.sqrt()).clamp(mobile.text_size, desktop.text_size);
    let particle_count = if target_width < FULL_DENSITY_MIN_WIDTH {
        mobile.particle_count
    } else {
        desktop.particle_count
    };

    CanvasConfig {
        width: target_width.round() as u32,
        height: (desktop.height as f64 * scale).round() as u32,
        scale,
        radius: desktop.radius * scale,
        repel_radius: desktop.repel_radius * scale,
        text_size,
        particle_count,
    }
}

/// Physics constants that a page may override
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Spring pull toward home
    pub attraction: f64,
    /// Per-frame velocity multiplier
    pub damping: f64,
    /// Peak repulsion impulse
    pub repel_strength: f64,
    /// Rotation advance per frame
    pub angle_step: f64,
    /// Caption alpha low-pass factor
    pub reveal_smoothing: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            attraction: ATTRACTION,
            damping: DAMPING,
            repel_strength: REPEL_STRENGTH,
            angle_step: ANGLE_STEP,
            reveal_smoothing: REVEAL_SMOOTHING,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would let the field diverge or push alpha out of [0, 255]
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("attraction", self.attraction),
            ("damping", self.damping),
            ("repel_strength", self.repel_strength),
            ("angle_step", self.angle_step),
            ("reveal_smoothing", self.reveal_smoothing),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::OutOfRange { field: *name, value: *value });
        }

        if self.attraction < 0.0 {
            return Err(TuningError::OutOfRange { field: "attraction", value: self.attraction });
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(TuningError::OutOfRange { field: "damping", value: self.damping });
        }
        if self.repel_strength < 0.0 {
            return Err(TuningError::OutOfRange {
                field: "repel_strength",
                value: self.repel_strength,
            });
        }
        if self.reveal_smoothing <= 0.0 || self.reveal_smoothing > 1.0 {
            return Err(TuningError::OutOfRange {
                field: "reveal_smoothing",
                value: self.reveal_smoothing,
            });
        }
        Ok(())
    }

    /// Parse an optional override, falling back to defaults on absence or error
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json {
            Some(json) => match Self::from_json(json) {
                Ok(tuning) => {
                    log::info!("Using tuning override: {:?}", tuning);
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring tuning override: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
