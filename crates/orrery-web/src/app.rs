use std::cell::RefCell;
use std::rc::Rc;

use orrery_core::{
    BodyDetail, Catalog, DetailStore, InputEvent, InputQueue, RenderLoop, ScaleMode,
    SimulationState, ViewPreset, ViewerEvent, ViewportController, VizConfig,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, CustomEvent, CustomEventInit,
    HtmlCanvasElement, MouseEvent, WheelEvent,
};

use crate::painter::CanvasPainter;
use crate::schedule::RafScheduler;

/// DOM event name for selection notifications; `detail` carries the
/// merged body record as a JSON string.
pub const SELECTION_EVENT: &str = "orrery:body-selected";

/// The visualizer bound to one canvas: core components wired together
/// plus the painter that puts frames on screen.
pub struct OrreryApp {
    pub(crate) canvas: HtmlCanvasElement,
    painter: CanvasPainter,
    pub(crate) cfg: VizConfig,
    pub(crate) catalog: Catalog,
    pub(crate) details: DetailStore,
    pub(crate) state: SimulationState,
    pub(crate) rloop: RenderLoop,
    viewport: ViewportController,
    pub(crate) input: InputQueue,
    events: Vec<ViewerEvent>,
}

impl OrreryApp {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let cfg = VizConfig::default();
        let state = SimulationState::new(&cfg);
        let rloop = RenderLoop::new(cfg.clone(), canvas.width() as f32, canvas.height() as f32);
        let viewport = ViewportController::new(cfg.clone());

        let mut app = Self {
            canvas,
            painter: CanvasPainter::new(ctx),
            cfg,
            catalog: Catalog::builtin(),
            details: DetailStore::new(),
            state,
            rloop,
            viewport,
            input: InputQueue::new(),
            events: Vec::new(),
        };
        app.refit();
        Ok(app)
    }

    /// Process input, advance, repaint. Returns serialized selection
    /// payloads so the caller can dispatch DOM events after releasing
    /// the borrow on the app (host listeners may call back in).
    pub fn tick(&mut self, dt: f32) -> Vec<String> {
        self.viewport.process(
            &mut self.state,
            &mut self.input,
            self.rloop.geometry(),
            &self.catalog,
            &self.details,
            &mut self.events,
        );
        self.rloop.frame(&mut self.state, &self.catalog, dt);

        let (width, height) = self.rloop.size();
        if let Err(err) = self
            .painter
            .paint(self.rloop.draw_list(), width as f64, height as f64)
        {
            log::error!("paint failed: {err:?}");
        }

        self.events
            .drain(..)
            .filter_map(|event| {
                let ViewerEvent::BodySelected(selected) = event;
                match serde_json::to_string(&selected) {
                    Ok(json) => Some(json),
                    Err(err) => {
                        log::error!("selection payload failed to serialize: {err}");
                        None
                    }
                }
            })
            .collect()
    }

    /// Fit the canvas to its container. Zero-area containers are ignored;
    /// simulated time, pan, and zoom are never touched by a refit.
    pub fn refit(&mut self) {
        let (width, height) = match self.canvas.parent_element() {
            Some(parent) => (parent.client_width(), parent.client_height()),
            None => (self.canvas.width() as i32, self.canvas.height() as i32),
        };
        self.resize_to(width as f32, height as f32);
    }

    pub fn resize_to(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.rloop.resize(width, height);
    }

    /// Swap in a fetched catalog. A document that fails validation keeps
    /// the current catalog so the visualizer never goes blank.
    pub fn load_catalog(&mut self, json: &str) {
        match Catalog::from_json(json) {
            Ok((catalog, warnings)) => {
                log::info!(
                    "catalog loaded: {} bodies, {} entries dropped",
                    catalog.len(),
                    warnings.len()
                );
                self.catalog = catalog;
            }
            Err(err) => log::warn!("catalog rejected, keeping current one: {err}"),
        }
    }

    /// Cache a fetched detail record; if it belongs to the selected body,
    /// re-emit the selection with the richer payload.
    pub fn load_detail(&mut self, json: &str) {
        match BodyDetail::from_json(json) {
            Ok(detail) => {
                let selected = self.state.selected.as_deref() == Some(detail.id.as_str());
                self.details.insert(detail);
                if selected {
                    self.viewport.refresh_selection(
                        &self.state,
                        &self.catalog,
                        &self.details,
                        &mut self.events,
                    );
                }
            }
            Err(err) => log::warn!("body detail rejected: {err}"),
        }
    }

    pub fn reset(&mut self) {
        self.rloop.reset(&mut self.state);
    }

    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.rloop.set_scale_mode(&mut self.state, mode);
    }

    pub fn apply_view_preset(&mut self, preset: ViewPreset) {
        self.state.apply_view_preset(preset, &self.cfg);
    }

    pub fn show_trails(&mut self, on: bool) {
        self.state.show_trails = on;
        if !on {
            self.rloop.clear_trails();
        }
    }
}

/// The app plus its frame scheduler, shared between the exported
/// functions and the DOM listener closures.
pub struct AppCell {
    pub app: RefCell<OrreryApp>,
    pub scheduler: RafScheduler,
}

impl AppCell {
    pub fn new(app: OrreryApp) -> Self {
        Self {
            app: RefCell::new(app),
            scheduler: RafScheduler::new(),
        }
    }
}

/// Run one frame and dispatch any selection events afterwards, outside
/// the app borrow.
pub fn run_tick(cell: &Rc<AppCell>, dt: f64) {
    let (canvas, payloads) = {
        let mut app = cell.app.borrow_mut();
        let payloads = app.tick(dt as f32);
        (app.canvas.clone(), payloads)
    };
    for payload in payloads {
        if let Err(err) = dispatch_selection(&canvas, &payload) {
            log::error!("selection event dispatch failed: {err:?}");
        }
    }
}

fn dispatch_selection(canvas: &HtmlCanvasElement, payload: &str) -> Result<(), JsValue> {
    let init = CustomEventInit::new();
    init.set_detail(&JsValue::from_str(payload));
    let event = CustomEvent::new_with_event_init_dict(SELECTION_EVENT, &init)?;
    canvas.dispatch_event(&event)?;
    Ok(())
}

fn pointer_pos(canvas: &HtmlCanvasElement, event: &MouseEvent) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (
        (event.client_x() as f64 - rect.left()) as f32,
        (event.client_y() as f64 - rect.top()) as f32,
    )
}

/// Feed one input event in; while stopped, repaint synchronously so the
/// view stays live without the frame loop running.
fn push_input(cell: &Rc<AppCell>, event: InputEvent) {
    let stopped = {
        let mut app = cell.app.borrow_mut();
        app.input.push(event);
        !app.state.playing
    };
    if stopped {
        run_tick(cell, 0.0);
    }
}

/// Wire the DOM listeners the visualizer needs: pointer drag/click,
/// wheel zoom (non-passive, default scrolling suppressed), and window
/// resize. Installed once at init; the closures live for the page.
pub fn install_listeners(cell: &Rc<AppCell>) -> Result<(), JsValue> {
    let canvas = cell.app.borrow().canvas.clone();

    let on_mouse = |cell: &Rc<AppCell>, to_event: fn(f32, f32) -> InputEvent| {
        let cell = Rc::clone(cell);
        Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            let (x, y) = {
                let app = cell.app.borrow();
                pointer_pos(&app.canvas, &e)
            };
            push_input(&cell, to_event(x, y));
        })
    };

    let down = on_mouse(cell, |x, y| InputEvent::PointerDown { x, y });
    canvas.add_event_listener_with_callback("mousedown", down.as_ref().unchecked_ref())?;
    down.forget();

    let mv = on_mouse(cell, |x, y| InputEvent::PointerMove { x, y });
    canvas.add_event_listener_with_callback("mousemove", mv.as_ref().unchecked_ref())?;
    mv.forget();

    let up = on_mouse(cell, |x, y| InputEvent::PointerUp { x, y });
    canvas.add_event_listener_with_callback("mouseup", up.as_ref().unchecked_ref())?;
    up.forget();

    let leave = {
        let cell = Rc::clone(cell);
        Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
            push_input(&cell, InputEvent::PointerLeave);
        })
    };
    canvas.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;
    leave.forget();

    let wheel = {
        let cell = Rc::clone(cell);
        Closure::<dyn FnMut(WheelEvent)>::new(move |e: WheelEvent| {
            e.prevent_default();
            push_input(
                &cell,
                InputEvent::Wheel {
                    delta_y: e.delta_y() as f32,
                },
            );
        })
    };
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        wheel.as_ref().unchecked_ref(),
        &options,
    )?;
    wheel.forget();

    let resize = {
        let cell = Rc::clone(cell);
        Closure::<dyn FnMut()>::new(move || {
            cell.app.borrow_mut().refit();
            run_tick(&cell, 0.0);
        })
    };
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
    resize.forget();

    Ok(())
}
