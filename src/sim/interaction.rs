//! Pointer/touch sampling
//!
//! Turns raw pointer state into the per-frame interaction point. Touch wins over
//! mouse; a mouse counts only while held or while it moved since the last frame.

use glam::DVec2;

/// Raw input state for one frame, in surface-local pixels (origin top-left)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Last known pointer position
    pub position: DVec2,
    /// Primary button held
    pub pressed: bool,
    /// Active touch points, in the order the platform reports them
    pub touches: Vec<DVec2>,
}

/// Whether anything is pushing the particles this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    Interacting,
}

/// Result of sampling input for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub mode: InteractionMode,
    /// Interaction point relative to the surface center
    pub point: Option<DVec2>,
}

/// Remembers the previous frame's pointer position so motion can be detected
#[derive(Debug, Clone, Default)]
pub struct InteractionTracker {
    prev_position: Option<DVec2>,
}

impl InteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample `snapshot` for a surface of `size` pixels. Call exactly once per frame.
    pub fn sample(&mut self, snapshot: &PointerSnapshot, size: DVec2) -> Interaction {
        let center = size * 0.5;
        let moved = self
            .prev_position
            .is_some_and(|prev| prev != snapshot.position);
        self.prev_position = Some(snapshot.position);

        let point = if let Some(touch) = snapshot.touches.first() {
            Some(*touch - center)
        } else if snapshot.pressed || moved {
            Some(snapshot.position - center)
        } else {
            None
        };

        Interaction {
            mode: if point.is_some() {
                InteractionMode::Interacting
            } else {
                InteractionMode::Idle
            },
            point,
        }
    }
}
