//! Change propagation from playground state into the engine.

use crate::config::{ConfigPatch, ParticleConfig};
use crate::engine::ParticleEngine;
use crate::state::PlaygroundState;

/// Propagates external state changes into idempotent engine calls.
///
/// Each reaction compares the incoming value against the value it last
/// applied and skips the engine call when nothing changed. Trigger counters
/// are edge-triggered instead: every observed increase above the previously
/// observed value fires exactly once, and the values captured at
/// construction never fire on their own.
#[derive(Debug, Clone)]
pub struct SyncBridge {
    applied_config: ParticleConfig,
    applied_image: String,
    seen_reset: u64,
    seen_explode: u64,
}

impl SyncBridge {
    /// Capture the state snapshot the engine was built against.
    #[must_use]
    pub fn new(state: &PlaygroundState) -> Self {
        Self {
            applied_config: state.config.clone(),
            applied_image: state.image_src.clone(),
            seen_reset: state.reset_trigger,
            seen_explode: state.explode_trigger,
        }
    }

    /// Apply whatever changed since the last pass.
    ///
    /// The four reactions are independent; none blocks another, and each
    /// fires at most once per pass.
    pub fn sync<E: ParticleEngine>(&mut self, state: &PlaygroundState, engine: &mut E) {
        if state.config != self.applied_config {
            engine.update_config(&ConfigPatch::full(&state.config));
            self.applied_config = state.config.clone();
        }

        if state.reset_trigger > self.seen_reset {
            engine.reset_particles();
            self.seen_reset = state.reset_trigger;
        }

        if state.explode_trigger > self.seen_explode {
            engine.explode_particles();
            self.seen_explode = state.explode_trigger;
        }

        if state.image_src != self.applied_image {
            engine.update_config(&ConfigPatch::image(state.image_src.clone()));
            self.applied_image = state.image_src.clone();
        }
    }
}
