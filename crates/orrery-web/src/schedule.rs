use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// The animation-frame loop with an explicit start/stop contract.
///
/// `start` schedules a `requestAnimationFrame` chain that calls the tick
/// callback with the elapsed seconds since the previous frame; `stop`
/// cancels the pending frame so no dangling callback keeps firing. The
/// core itself never touches timers; tests drive it by calling
/// `tick(dt)` directly.
pub struct RafScheduler {
    inner: Rc<Inner>,
}

struct Inner {
    /// Pending rAF handle. `Some` means the loop is running.
    raf_id: Cell<Option<i32>>,
    last_timestamp: Cell<Option<f64>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

fn window() -> web_sys::Window {
    web_sys::window().expect("no global window")
}

fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> i32 {
    window()
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .expect("requestAnimationFrame failed")
}

impl RafScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(Inner {
                raf_id: Cell::new(None),
                last_timestamp: Cell::new(None),
                callback: RefCell::new(None),
            }),
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.raf_id.get().is_some()
    }

    /// Begin the frame chain. A no-op if already running.
    pub fn start(&self, mut tick: impl FnMut(f64) + 'static) {
        if self.is_running() {
            return;
        }
        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            let dt = match inner.last_timestamp.replace(Some(timestamp)) {
                // Clamp so a backgrounded tab does not deliver one huge step.
                Some(previous) => ((timestamp - previous) / 1000.0).clamp(0.0, 0.25),
                None => 0.0,
            };
            tick(dt);
            // Re-request only if stop() has not run in the meantime.
            if inner.raf_id.get().is_some() {
                if let Some(callback) = inner.callback.borrow().as_ref() {
                    inner.raf_id.set(Some(request_frame(callback)));
                }
            }
        }) as Box<dyn FnMut(f64)>);

        let id = request_frame(&closure);
        self.inner.callback.replace(Some(closure));
        self.inner.raf_id.set(Some(id));
    }

    /// Cancel the pending frame. Deterministic: after this returns, the
    /// tick callback will not fire again until the next `start`.
    pub fn stop(&self) {
        if let Some(id) = self.inner.raf_id.take() {
            let _ = window().cancel_animation_frame(id);
        }
        self.inner.last_timestamp.set(None);
    }
}

impl Default for RafScheduler {
    fn default() -> Self {
        Self::new()
    }
}
