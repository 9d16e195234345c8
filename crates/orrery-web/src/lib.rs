//! `#[wasm_bindgen]` surface of the visualizer.
//!
//! The host page drives everything through these exports: it binds the
//! canvas with `viz_init`, forwards fetched JSON via `viz_load_*`, and
//! maps its controls 1:1 onto the `viz_*` functions. Network access
//! stays on the JS side; only parsed strings cross the boundary.

pub mod app;
pub mod painter;
pub mod schedule;

pub use app::{AppCell, OrreryApp, SELECTION_EVENT};
pub use painter::CanvasPainter;
pub use schedule::RafScheduler;

use std::cell::RefCell;
use std::rc::Rc;

use orrery_core::sim::date::simulation_date_string;
use orrery_core::{ScaleMode, ViewPreset};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

thread_local! {
    static APP: RefCell<Option<Rc<AppCell>>> = RefCell::new(None);
}

fn with_app<R>(f: impl FnOnce(&Rc<AppCell>) -> R) -> R {
    APP.with(|slot| {
        let borrow = slot.borrow();
        let cell = borrow
            .as_ref()
            .expect("Visualizer not initialized. Call viz_init() first.");
        f(cell)
    })
}

fn start_loop(cell: &Rc<AppCell>) {
    let tick_cell = Rc::clone(cell);
    cell.scheduler.start(move |dt| app::run_tick(&tick_cell, dt));
}

/// Bind the visualizer to a canvas element and draw the first (stopped)
/// frame from the builtin catalog.
#[wasm_bindgen]
pub fn viz_init(canvas_id: &str) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("canvas #{canvas_id} not found")))?
        .dyn_into::<HtmlCanvasElement>()?;

    let cell = Rc::new(AppCell::new(OrreryApp::new(canvas)?));
    app::install_listeners(&cell)?;
    APP.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&cell)));

    app::run_tick(&cell, 0.0);
    log::info!("orrery: initialized");
    Ok(())
}

// ---- Data feeds (host fetches, core parses) ----

#[wasm_bindgen]
pub fn viz_load_catalog(json: &str) {
    with_app(|cell| {
        cell.app.borrow_mut().load_catalog(json);
        app::run_tick(cell, 0.0);
    })
}

#[wasm_bindgen]
pub fn viz_load_body_detail(json: &str) {
    with_app(|cell| {
        cell.app.borrow_mut().load_detail(json);
        app::run_tick(cell, 0.0);
    })
}

// ---- Playback ----

#[wasm_bindgen]
pub fn viz_play() {
    with_app(|cell| {
        cell.app.borrow_mut().state.play();
        start_loop(cell);
    })
}

#[wasm_bindgen]
pub fn viz_pause() {
    with_app(|cell| {
        cell.app.borrow_mut().state.pause();
        cell.scheduler.stop();
    })
}

/// Toggle play/pause; returns the new playing state.
#[wasm_bindgen]
pub fn viz_toggle_play() -> bool {
    with_app(|cell| {
        let playing = cell.app.borrow_mut().state.toggle();
        if playing {
            start_loop(cell);
        } else {
            cell.scheduler.stop();
        }
        playing
    })
}

#[wasm_bindgen]
pub fn viz_reset() {
    with_app(|cell| {
        cell.app.borrow_mut().reset();
        cell.scheduler.stop();
        app::run_tick(cell, 0.0);
    })
}

#[wasm_bindgen]
pub fn viz_set_speed(speed: f64) {
    with_app(|cell| cell.app.borrow_mut().state.set_speed(speed))
}

#[wasm_bindgen]
pub fn viz_speed_preset(index: u32) {
    with_app(|cell| cell.app.borrow_mut().state.speed_preset(index as usize))
}

#[wasm_bindgen]
pub fn viz_time_jump(years: f64) {
    with_app(|cell| {
        cell.app.borrow_mut().state.time_jump(years);
        app::run_tick(cell, 0.0);
    })
}

#[wasm_bindgen]
pub fn viz_time_today() {
    with_app(|cell| {
        cell.app.borrow_mut().state.time_today();
        app::run_tick(cell, 0.0);
    })
}

// ---- View ----

#[wasm_bindgen]
pub fn viz_set_scale_mode(mode: &str) {
    let mode = match mode {
        "visual" => ScaleMode::Visual,
        "realistic" => ScaleMode::Realistic,
        other => {
            log::warn!("unknown scale mode {other:?}");
            return;
        }
    };
    with_app(|cell| {
        cell.app.borrow_mut().set_scale_mode(mode);
        app::run_tick(cell, 0.0);
    })
}

#[wasm_bindgen]
pub fn viz_set_view_preset(preset: &str) {
    let preset = match preset {
        "overview" => ViewPreset::Overview,
        "inner" => ViewPreset::Inner,
        "outer" => ViewPreset::Outer,
        other => {
            log::warn!("unknown view preset {other:?}");
            return;
        }
    };
    with_app(|cell| {
        cell.app.borrow_mut().apply_view_preset(preset);
        app::run_tick(cell, 0.0);
    })
}

#[wasm_bindgen]
pub fn viz_show_orbits(on: bool) {
    with_app(|cell| {
        cell.app.borrow_mut().state.show_orbits = on;
        app::run_tick(cell, 0.0);
    })
}

#[wasm_bindgen]
pub fn viz_show_labels(on: bool) {
    with_app(|cell| {
        cell.app.borrow_mut().state.show_labels = on;
        app::run_tick(cell, 0.0);
    })
}

#[wasm_bindgen]
pub fn viz_show_trails(on: bool) {
    with_app(|cell| {
        cell.app.borrow_mut().show_trails(on);
        app::run_tick(cell, 0.0);
    })
}

/// Explicit resize for hosts that manage layout themselves (the window
/// resize listener handles the common case).
#[wasm_bindgen]
pub fn viz_resize(width: f32, height: f32) {
    with_app(|cell| {
        cell.app.borrow_mut().resize_to(width, height);
        app::run_tick(cell, 0.0);
    })
}

// ---- Read accessors for the host UI ----

#[wasm_bindgen]
pub fn viz_sim_time() -> f64 {
    with_app(|cell| cell.app.borrow().state.time)
}

#[wasm_bindgen]
pub fn viz_speed() -> f64 {
    with_app(|cell| cell.app.borrow().state.speed)
}

#[wasm_bindgen]
pub fn viz_zoom() -> f64 {
    with_app(|cell| cell.app.borrow().state.zoom)
}

#[wasm_bindgen]
pub fn viz_is_playing() -> bool {
    with_app(|cell| cell.app.borrow().state.playing)
}

/// Simulated calendar date, e.g. "March 1, 2026".
#[wasm_bindgen]
pub fn viz_date_string() -> String {
    with_app(|cell| simulation_date_string(cell.app.borrow().state.time))
}

#[wasm_bindgen]
pub fn viz_selected_id() -> Option<String> {
    with_app(|cell| cell.app.borrow().state.selected.clone())
}
