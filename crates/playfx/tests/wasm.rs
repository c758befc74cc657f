//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use playfx::browser::{HeapProbe, PerformanceClock};
use playfx_core::{Clock, MemoryProbe, ParticleConfig};

// ============================================================================
// Host Primitive Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_performance_clock_is_monotonic() {
    let clock = PerformanceClock;
    let first = clock.now_ms();
    let second = clock.now_ms();
    assert!(second >= first);
    assert!(first >= 0.0);
}

#[wasm_bindgen_test]
fn test_heap_probe_never_panics() {
    // Chromium exposes performance.memory, other engines do not; either
    // way the probe must answer without fabricating a value
    let probe = HeapProbe;
    if let Some(mb) = probe.used_mb() {
        assert!(mb > 0.0);
        // rounded to one decimal
        let scaled = mb * 10.0;
        assert!((scaled - scaled.round()).abs() < 1e-9);
    }
}

// ============================================================================
// Boundary Serialization Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_config_parses_into_plain_js_object() {
    let config = ParticleConfig::default();
    let json = serde_json::to_string(&config).expect("serialize");
    let value = js_sys::JSON::parse(&json).expect("parse");
    let gap = js_sys::Reflect::get(&value, &"particleGap".into()).expect("field");
    assert_eq!(gap.as_f64(), Some(4.0));
}
