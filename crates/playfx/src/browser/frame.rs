//! Frame scheduling, clock, and heap readout on the browser runtime.

use playfx_core::{bytes_to_mb, Clock, MemoryProbe};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// `performance.now()` clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.performance())
            .map_or(0.0, |performance| performance.now())
    }
}

/// Heap readout through the non-standard `performance.memory`.
///
/// Only Chromium exposes it; everywhere else the probe reports absent, and
/// the overlay shows `n/a` instead of a fabricated figure.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapProbe;

impl MemoryProbe for HeapProbe {
    fn used_mb(&self) -> Option<f64> {
        let performance = web_sys::window()?.performance()?;
        let memory =
            js_sys::Reflect::get(performance.as_ref(), &JsValue::from_str("memory")).ok()?;
        if memory.is_undefined() || memory.is_null() {
            return None;
        }
        let used =
            js_sys::Reflect::get(&memory, &JsValue::from_str("usedJSHeapSize")).ok()?;
        used.as_f64().map(bytes_to_mb)
    }
}

/// Self-rescheduling `requestAnimationFrame` loop with idempotent cancel.
///
/// Cancelling clears the pending frame and disarms rescheduling, but a
/// frame already dispatched by the browser may still run once; callers
/// suppress its effect through the engine phase, not by assuming the
/// cancellation won the race.
pub struct FrameLoop {
    active: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    _callback: Rc<Closure<dyn FnMut(f64)>>,
}

impl FrameLoop {
    /// Start calling `on_frame` with the frame timestamp on every animation
    /// frame.
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let active = Rc::new(Cell::new(true));
        let raf_id = Rc::new(Cell::new(None));

        let callback = Rc::new_cyclic(|weak: &std::rc::Weak<Closure<dyn FnMut(f64)>>| {
            let weak = weak.clone();
            let active = Rc::clone(&active);
            let raf_id = Rc::clone(&raf_id);
            Closure::new(move |now: f64| {
                on_frame(now);
                if active.get() {
                    if let Some(callback) = weak.upgrade() {
                        raf_id.set(request_frame(&callback));
                    }
                }
            })
        });

        raf_id.set(request_frame(&callback));

        Self {
            active,
            raf_id,
            _callback: callback,
        }
    }

    /// Cancel the pending frame and stop rescheduling. Safe to call
    /// repeatedly.
    pub fn cancel(&self) {
        self.active.set(false);
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    web_sys::window().and_then(|window| {
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    })
}
