//! Host-region size observation.

use playfx_core::RegionSize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, ResizeObserver, ResizeObserverEntry};

/// `ResizeObserver` wrapper reporting every measured size of one element.
///
/// Disconnecting is idempotent: the observer is taken out on the first
/// call, and dropping the wrapper disconnects as well.
pub struct SizeObserver {
    observer: Option<ResizeObserver>,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl SizeObserver {
    /// Observe `target`, invoking `on_size` for every reported measurement.
    pub fn observe(
        target: &Element,
        mut on_size: impl FnMut(RegionSize) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<ResizeObserverEntry>() {
                    let rect = entry.content_rect();
                    on_size(RegionSize::new(rect.width(), rect.height()));
                }
            }
        });

        let observer = ResizeObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(target);

        Ok(Self {
            observer: Some(observer),
            _callback: callback,
        })
    }

    /// Stop all future notifications. Safe to call more than once.
    pub fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for SizeObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
