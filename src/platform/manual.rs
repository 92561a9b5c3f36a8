//! Explicitly stepped frame driver

use super::{FrameDriver, ResizeCallback, TickCallback};

/// Nominal frame interval used by [`ManualDriver::run_frames`] (60 Hz)
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Driver whose ticks are fired by the caller
#[derive(Default)]
pub struct ManualDriver {
    tick: Option<TickCallback>,
    resize: Option<ResizeCallback>,
    time_ms: f64,
    frames: u64,
}

impl ManualDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire one tick at an explicit timestamp. Returns false when no callback is registered.
    pub fn fire_tick(&mut self, time_ms: f64) -> bool {
        self.time_ms = time_ms;
        match self.tick.as_mut() {
            Some(callback) => {
                callback(time_ms);
                self.frames += 1;
                true
            }
            None => false,
        }
    }

    /// Fire `count` ticks spaced one nominal frame apart
    pub fn run_frames(&mut self, count: u32) {
        for _ in 0..count {
            let next = self.time_ms + FRAME_MS;
            if !self.fire_tick(next) {
                log::warn!("No tick callback registered");
                return;
            }
        }
    }

    /// Fire the resize callback, if any
    pub fn fire_resize(&mut self) -> bool {
        match self.resize.as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Ticks delivered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameDriver for ManualDriver {
    fn on_tick(&mut self, callback: TickCallback) {
        self.tick = Some(callback);
    }

    fn on_resize(&mut self, callback: ResizeCallback) {
        self.resize = Some(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_ticks_without_callback() {
        let mut driver = ManualDriver::new();
        assert!(!driver.fire_tick(0.0));
        assert!(!driver.fire_resize());
        assert_eq!(driver.frames(), 0);
    }

    #[test]
    fn test_run_frames_advances_time() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut driver = ManualDriver::new();
        {
            let seen = seen.clone();
            driver.on_tick(Box::new(move |t| seen.borrow_mut().push(t)));
        }
        driver.run_frames(3);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!((seen[2] - 3.0 * FRAME_MS).abs() < 1e-9);
        assert_eq!(driver.frames(), 3);
    }

    #[test]
    fn test_resize_callback_replaced() {
        let hits = Rc::new(RefCell::new((0, 0)));
        let mut driver = ManualDriver::new();
        {
            let hits = hits.clone();
            driver.on_resize(Box::new(move || hits.borrow_mut().0 += 1));
        }
        {
            let hits = hits.clone();
            driver.on_resize(Box::new(move || hits.borrow_mut().1 += 1));
        }
        assert!(driver.fire_resize());
        assert_eq!(*hits.borrow(), (0, 1));
    }
}
