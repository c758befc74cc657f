//! WASM playground application entry point.

use crate::browser::engine::JsEngine;
use crate::browser::frame::{FrameLoop, HeapProbe, PerformanceClock};
use crate::browser::observer::SizeObserver;
use playfx_core::{
    randomize, ParticleConfig, PlaygroundController, PlaygroundMessage, PlaygroundState,
    TelemetrySnapshot,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

type Controller = PlaygroundController<
    JsEngine,
    Box<dyn FnMut(&ParticleConfig) -> JsEngine>,
    PerformanceClock,
    HeapProbe,
>;

struct Inner {
    controller: Controller,
    state: PlaygroundState,
}

type SharedCallback = Rc<RefCell<Option<js_sys::Function>>>;

/// Serialize `payload` and hand it to the registered callback, if any.
///
/// The cell borrow is released before the JS call so a callback that
/// re-enters the app cannot trip a double borrow.
fn emit_json<T: serde::Serialize>(callback: &SharedCallback, payload: &T) {
    let Some(callback) = callback.borrow().clone() else {
        return;
    };
    if let Ok(json) = serde_json::to_string(payload) {
        let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&json));
    }
}

/// Playground application bound to one host container.
///
/// Owns the size subscription, the telemetry frame loop, and the
/// controller; exposes the control surface the page's UI drives. All JSON
/// crossing the boundary uses the engine's camelCase field names.
#[wasm_bindgen]
pub struct PlaygroundApp {
    inner: Rc<RefCell<Inner>>,
    observer: SizeObserver,
    frames: Rc<RefCell<Option<FrameLoop>>>,
    init_callback: SharedCallback,
    stats_callback: SharedCallback,
}

#[wasm_bindgen]
impl PlaygroundApp {
    /// Mount the playground against a container element by id.
    ///
    /// The engine itself is not created here: construction waits for the
    /// container's first positive size measurement.
    #[wasm_bindgen(constructor)]
    pub fn new(container_id: &str) -> Result<PlaygroundApp, JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| JsValue::from_str(&format!("Container '{container_id}' not found")))?;

        let factory_container = container.clone();
        let factory: Box<dyn FnMut(&ParticleConfig) -> JsEngine> =
            Box::new(move |config| JsEngine::create(&factory_container, config));

        let inner = Rc::new(RefCell::new(Inner {
            controller: PlaygroundController::new(factory, PerformanceClock, HeapProbe),
            state: PlaygroundState::default(),
        }));

        let frames: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
        let init_callback: SharedCallback = Rc::new(RefCell::new(None));
        let stats_callback: SharedCallback = Rc::new(RefCell::new(None));

        let observer = {
            let inner = Rc::clone(&inner);
            let frames = Rc::clone(&frames);
            let init_callback = Rc::clone(&init_callback);
            let stats_callback = Rc::clone(&stats_callback);

            SizeObserver::observe(&container, move |size| {
                let init = {
                    let inner_ref = &mut *inner.borrow_mut();
                    inner_ref.controller.notify_resize(size, &inner_ref.state)
                };
                let Some(init) = init else { return };

                // the engine is live: start the telemetry frame loop
                let loop_inner = Rc::clone(&inner);
                let loop_stats = Rc::clone(&stats_callback);
                *frames.borrow_mut() = Some(FrameLoop::start(move |now| {
                    let snapshot = loop_inner.borrow_mut().controller.on_frame(now);
                    if let Some(snapshot) = snapshot {
                        emit_json(&loop_stats, &snapshot);
                    }
                }));

                web_sys::console::log_1(&JsValue::from_str(&format!(
                    "playfx: engine built with {} particles",
                    init.particle_count
                )));
                emit_json(&init_callback, &init);
            })?
        };

        Ok(Self {
            inner,
            observer,
            frames,
            init_callback,
            stats_callback,
        })
    }

    /// Register a callback receiving the one-time engine init report as
    /// JSON (`{"particleCount":…,"speed":…,"gravityFactor":…}`).
    pub fn on_init(&self, callback: js_sys::Function) {
        *self.init_callback.borrow_mut() = Some(callback);
    }

    /// Register a callback receiving each telemetry snapshot as JSON.
    pub fn on_stats(&self, callback: js_sys::Function) {
        *self.stats_callback.borrow_mut() = Some(callback);
    }

    /// Replace the engine configuration from camelCase JSON.
    pub fn set_config(&self, json: &str) -> Result<(), JsValue> {
        let config: ParticleConfig = serde_json::from_str(json)
            .map_err(|error| JsValue::from_str(&format!("Invalid config: {error}")))?;
        self.dispatch(PlaygroundMessage::SetConfig(config));
        Ok(())
    }

    /// Draw a random configuration, apply it, and return it as JSON so the
    /// control panel can reflect the new values.
    pub fn randomize(&self) -> String {
        let next = {
            let inner = self.inner.borrow();
            randomize(&inner.state.config, &mut rand::thread_rng())
        };
        let json = serde_json::to_string(&next).unwrap_or_default();
        self.dispatch(PlaygroundMessage::SetConfig(next));
        json
    }

    /// Request a one-shot particle reset.
    pub fn reset(&self) {
        self.dispatch(PlaygroundMessage::Reset);
    }

    /// Request a one-shot particle explosion.
    pub fn explode(&self) {
        self.dispatch(PlaygroundMessage::Explode);
    }

    /// Point the engine at a new source image; other parameters are
    /// untouched.
    pub fn set_image(&self, url: &str) {
        self.dispatch(PlaygroundMessage::SetImage(url.to_string()));
    }

    /// Current configuration as JSON.
    pub fn config_json(&self) -> String {
        serde_json::to_string(&self.inner.borrow().state.config).unwrap_or_default()
    }

    /// Latest telemetry snapshot as JSON; zeroed before the first window
    /// closes.
    pub fn stats_json(&self) -> String {
        let inner = self.inner.borrow();
        let snapshot = inner.controller.latest().cloned().unwrap_or(TelemetrySnapshot {
            fps: 0,
            particle_count: 0,
            memory_mb: None,
            warnings: Vec::new(),
        });
        serde_json::to_string(&snapshot).unwrap_or_default()
    }

    /// Unmount: stop size notifications, cancel the frame loop, then
    /// destroy the engine — in that order. Idempotent.
    ///
    /// The frame closure is cancelled but kept alive until the app is
    /// freed, so a dispose issued from inside a frame callback cannot drop
    /// the closure out from under itself.
    pub fn dispose(&mut self) {
        self.observer.disconnect();
        if let Some(frames) = self.frames.borrow().as_ref() {
            frames.cancel();
        }
        self.inner.borrow_mut().controller.unmount();
    }
}

impl PlaygroundApp {
    fn dispatch(&self, msg: PlaygroundMessage) {
        let inner = &mut *self.inner.borrow_mut();
        inner.state.update(msg);
        inner.controller.apply(&inner.state);
    }
}
