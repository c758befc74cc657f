//! Browser bindings connecting the playground controller to the DOM.
//!
//! Everything here needs a real browser environment, so the modules are
//! compiled for wasm targets only.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod engine;
#[cfg(target_arch = "wasm32")]
pub mod frame;
#[cfg(target_arch = "wasm32")]
pub mod observer;

#[cfg(target_arch = "wasm32")]
pub use app::PlaygroundApp;
#[cfg(target_arch = "wasm32")]
pub use engine::JsEngine;
#[cfg(target_arch = "wasm32")]
pub use frame::{FrameLoop, HeapProbe, PerformanceClock};
#[cfg(target_arch = "wasm32")]
pub use observer::SizeObserver;
