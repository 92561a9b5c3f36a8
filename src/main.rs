//! Glyph Sphere entry point
//!
//! Browser: mounts the sketch into `#visual-sketch` and runs it off
//! `requestAnimationFrame`. Native: runs a scripted headless session and logs stats.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_sketch {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, MouseEvent, TouchEvent,
        Window,
    };

    use glyph_sphere::platform::{FrameDriver, RafDriver};
    use glyph_sphere::renderer::CanvasSurface;
    use glyph_sphere::sim::{GlyphSet, PointerSnapshot, SphereOptions};
    use glyph_sphere::{Sketch, SketchError, Tuning, compute_config};

    /// Element the canvas is mounted into
    const CONTAINER_ID: &str = "visual-sketch";
    /// Menu toggle button
    const MENU_TOGGLE_SELECTOR: &str = ".menu-toggle";

    pub fn run() -> Result<(), SketchError> {
        let window = web_sys::window().ok_or(SketchError::NoWindow)?;
        let document = window.document().ok_or(SketchError::NoDocument)?;

        setup_menu_toggle(&document);

        let container = document.get_element_by_id(CONTAINER_ID);
        if container.is_none() {
            log::warn!("#{} not found, using desktop layout", CONTAINER_ID);
        }
        let config = compute_config(container_width(container.as_ref()));
        let options = read_options(container.as_ref());
        let tuning = Tuning::from_json_or_default(
            container
                .as_ref()
                .and_then(|c| c.get_attribute("data-tuning"))
                .as_deref(),
        );

        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| SketchError::NotACanvas)?;
        canvas.set_attribute("role", "img")?;
        canvas.set_attribute("aria-label", options.glyphs.description())?;
        match &container {
            Some(container) => container.append_child(&canvas)?,
            None => document
                .body()
                .ok_or(SketchError::NoDocument)?
                .append_child(&canvas)?,
        };

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(SketchError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| SketchError::ContextUnavailable)?;

        let seed = js_sys::Date::now() as u64;
        let sketch = Rc::new(RefCell::new(Sketch::new(
            CanvasSurface::new(canvas.clone(), ctx),
            config,
            options,
            tuning,
            seed,
        )));
        log::info!("Glyph seed: {}", seed);

        let pointer = Rc::new(RefCell::new(PointerSnapshot::default()));
        setup_pointer_handlers(&window, &canvas, pointer.clone(), options);

        let mut driver = RafDriver::new();
        {
            let sketch = sketch.clone();
            driver.on_resize(Box::new(move || {
                // No container means nothing to fit against
                let Some(container) = document.get_element_by_id(CONTAINER_ID) else {
                    return;
                };
                let config = compute_config(container_width(Some(&container)));
                sketch.borrow_mut().resize(config);
            }));
        }
        driver.on_tick(Box::new(move |_time: f64| {
            let pointer = pointer.borrow();
            sketch.borrow_mut().frame(&pointer);
        }));

        log::info!("Glyph Sphere running!");
        Ok(())
    }

    fn container_width(container: Option<&Element>) -> Option<f64> {
        container.map(|c| c.client_width() as f64)
    }

    fn read_options(container: Option<&Element>) -> SphereOptions {
        let Some(name) = container.and_then(|c| c.get_attribute("data-glyphs")) else {
            return SphereOptions::digits();
        };
        match GlyphSet::parse(&name) {
            Some(glyphs) => SphereOptions::for_glyphs(glyphs),
            None => {
                log::warn!("Unknown glyph set {:?}, using digits", name);
                SphereOptions::digits()
            }
        }
    }

    /// Canvas-local position of a viewport point
    fn canvas_local(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> DVec2 {
        let rect = canvas.get_bounding_client_rect();
        DVec2::new(client_x as f64 - rect.left(), client_y as f64 - rect.top())
    }

    fn setup_pointer_handlers(
        window: &Window,
        canvas: &HtmlCanvasElement,
        pointer: Rc<RefCell<PointerSnapshot>>,
        options: SphereOptions,
    ) {
        // Mouse move - tracked on the window so leaving the canvas still updates it
        {
            let pointer = pointer.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                pointer.borrow_mut().position =
                    canvas_local(&canvas, event.client_x(), event.client_y());
            });
            let _ = window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse down/up
        for (name, pressed) in [("mousedown", true), ("mouseup", false)] {
            let pointer = pointer.clone();
            let canvas = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut p = pointer.borrow_mut();
                p.pressed = pressed;
                p.position = canvas_local(&canvas, event.client_x(), event.client_y());
            });
            let _ = window.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touches - the active list is replaced wholesale on every change
        for name in ["touchstart", "touchmove", "touchend", "touchcancel"] {
            let pointer = pointer.clone();
            let canvas_clone = canvas.clone();
            let block = options.blocks_touch_event(name);
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if block && event.cancelable() {
                    event.prevent_default();
                }
                let list = event.touches();
                let touches = (0..list.length())
                    .filter_map(|i| list.get(i))
                    .map(|t| canvas_local(&canvas_clone, t.client_x(), t.client_y()))
                    .collect();
                pointer.borrow_mut().touches = touches;
            });
            let _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_menu_toggle(document: &Document) {
        if document.ready_state() != "loading" {
            attach_menu_toggle(document);
            return;
        }
        let doc = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            attach_menu_toggle(&doc);
        });
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn attach_menu_toggle(document: &Document) {
        let Some(toggle) = document.query_selector(MENU_TOGGLE_SELECTOR).ok().flatten() else {
            log::debug!("No {} element", MENU_TOGGLE_SELECTOR);
            return;
        };
        // Placeholder until the menu itself exists
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            log::info!("Menu clicked");
        });
        let _ = toggle.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Glyph Sphere starting...");
    if let Err(e) = wasm_sketch::run() {
        log::error!("Sketch setup failed: {}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Glyph Sphere (native, headless) starting...");
    log::info!("Browser build: `trunk serve`");

    let width = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<f64>().unwrap_or_else(|_| {
            log::warn!("Invalid container width {:?}, using 900", arg);
            900.0
        }),
        None => 900.0,
    };
    headless::run(width);
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec2;

    use glyph_sphere::platform::{FrameDriver, ManualDriver};
    use glyph_sphere::renderer::HeadlessSurface;
    use glyph_sphere::sim::{PointerSnapshot, SphereOptions};
    use glyph_sphere::{Sketch, Tuning, compute_config};

    const SEED: u64 = 0x5eed;

    /// Settle, sweep the pointer through the sphere, release, then resize
    pub fn run(container_width: f64) {
        let config = compute_config(Some(container_width));
        let sketch = Rc::new(RefCell::new(Sketch::new(
            HeadlessSurface::new(config.width, config.height),
            config,
            SphereOptions::digits(),
            Tuning::default(),
            SEED,
        )));
        let pointer = Rc::new(RefCell::new(PointerSnapshot::default()));

        let mut driver = ManualDriver::new();
        {
            let sketch = sketch.clone();
            let pointer = pointer.clone();
            driver.on_tick(Box::new(move |_time| {
                let pointer = pointer.borrow();
                sketch.borrow_mut().frame(&pointer);
            }));
        }
        {
            let sketch = sketch.clone();
            driver.on_resize(Box::new(move || {
                let config = compute_config(Some(container_width * 0.5));
                sketch.borrow_mut().resize(config);
            }));
        }

        driver.run_frames(120);
        report("settled", &sketch.borrow());

        let (w, h) = (config.width as f64, config.height as f64);
        for step in 0..120 {
            let t = step as f64 / 119.0;
            {
                let mut p = pointer.borrow_mut();
                p.position = DVec2::new(w * (0.2 + 0.6 * t), h * 0.5);
                p.pressed = true;
            }
            driver.run_frames(1);
        }
        report("sweep", &sketch.borrow());

        pointer.borrow_mut().pressed = false;
        driver.run_frames(240);
        report("released", &sketch.borrow());

        driver.fire_resize();
        driver.run_frames(60);
        report("resized", &sketch.borrow());

        log::info!("{} frames simulated", driver.frames());
    }

    fn report(phase: &str, sketch: &Sketch<HeadlessSurface>) {
        let field = sketch.field();
        log::info!(
            "[{}] mean home distance {:.2}px, reveal alpha {:.1}, {} glyphs drawn, mode {:?}",
            phase,
            field.mean_home_distance(),
            field.reveal_alpha,
            sketch.surface().glyphs_drawn(),
            sketch.mode()
        );
    }
}
