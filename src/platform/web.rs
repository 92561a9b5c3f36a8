//! Browser frame driver: `requestAnimationFrame` loop and window `resize` events

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::{FrameDriver, ResizeCallback, TickCallback};

/// Runs the tick callback on every animation frame for the page's lifetime
#[derive(Default)]
pub struct RafDriver {
    started: bool,
    tick: Rc<RefCell<Option<TickCallback>>>,
}

impl RafDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameDriver for RafDriver {
    fn on_tick(&mut self, callback: TickCallback) {
        *self.tick.borrow_mut() = Some(callback);
        if !self.started {
            self.started = true;
            request_animation_frame(self.tick.clone());
        }
    }

    fn on_resize(&mut self, mut callback: ResizeCallback) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; resize handling disabled");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            callback();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn request_animation_frame(tick: Rc<RefCell<Option<TickCallback>>>) {
    let Some(window) = web_sys::window() else {
        log::error!("No window; animation loop stopped");
        return;
    };
    let closure = Closure::once(move |time: f64| {
        if let Some(callback) = tick.borrow_mut().as_mut() {
            callback(time);
        }
        request_animation_frame(tick);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}
