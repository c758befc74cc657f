//! Bindings to the external particle-engine package.
//!
//! The engine is a JS library; configuration crosses the boundary as JSON
//! parsed into plain objects, so the Rust side never mirrors the engine's
//! internal option handling.

use playfx_core::{ConfigPatch, EngineOptions, ParticleConfig, ParticleEngine};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen(module = "package-particlefx")]
extern "C" {
    /// Opaque handle returned by `createParticleCanvas`.
    pub type ParticleHandle;

    #[wasm_bindgen(js_name = createParticleCanvas)]
    fn create_particle_canvas(container: &Element, options: &JsValue) -> ParticleHandle;

    #[wasm_bindgen(method, js_name = updateConfig)]
    fn update_config(this: &ParticleHandle, config: &JsValue);

    #[wasm_bindgen(method, js_name = resetParticles)]
    fn reset_particles(this: &ParticleHandle);

    #[wasm_bindgen(method, js_name = explodeParticles)]
    fn explode_particles(this: &ParticleHandle);

    #[wasm_bindgen(method, js_name = getParticleCount)]
    fn get_particle_count(this: &ParticleHandle) -> u32;

    #[wasm_bindgen(method)]
    fn destroy(this: &ParticleHandle);
}

/// Serialize through JSON into a plain JS object.
fn to_js<T: Serialize>(value: &T) -> JsValue {
    serde_json::to_string(value)
        .ok()
        .and_then(|json| js_sys::JSON::parse(&json).ok())
        .unwrap_or(JsValue::NULL)
}

/// Adapter implementing the engine contract over the JS handle.
pub struct JsEngine {
    handle: ParticleHandle,
}

impl JsEngine {
    /// Create an engine bound to `container`, forced to fill it.
    #[must_use]
    pub fn create(container: &Element, config: &ParticleConfig) -> Self {
        let options = to_js(&EngineOptions::full_size(config));
        Self {
            handle: create_particle_canvas(container, &options),
        }
    }
}

impl ParticleEngine for JsEngine {
    fn update_config(&mut self, patch: &ConfigPatch) {
        self.handle.update_config(&to_js(patch));
    }

    fn reset_particles(&mut self) {
        self.handle.reset_particles();
    }

    fn explode_particles(&mut self) {
        self.handle.explode_particles();
    }

    fn particle_count(&self) -> u32 {
        self.handle.get_particle_count()
    }

    fn destroy(&mut self) {
        self.handle.destroy();
    }
}
