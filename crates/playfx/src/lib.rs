//! Browser playground runtime for an external particle engine.
//!
//! This crate is the bridge between the host-agnostic controller in
//! [`playfx_core`] and the browser: `ResizeObserver` feeds the size gate,
//! `requestAnimationFrame` drives telemetry, `performance.now()` is the
//! clock, and the particle engine itself is the external JS package bound
//! through `wasm-bindgen`.

pub mod browser;
pub mod stats;

#[cfg(target_arch = "wasm32")]
pub use browser::PlaygroundApp;
pub use stats::overlay_lines;
