//! Canvas lifecycle and telemetry controller.
//!
//! Coordinates one engine instance against one host region: construction is
//! deferred until the region first measures positive on both axes, state
//! changes are propagated without rebuilding, per-second telemetry rolls
//! while the engine is live, and teardown is exact-once.

use crate::config::ParticleConfig;
use crate::engine::{EngineCell, EngineInit, EnginePhase, ParticleEngine};
use crate::host::{Clock, MemoryProbe};
use crate::size::{RegionSize, SizeWatcher};
use crate::state::PlaygroundState;
use crate::sync::SyncBridge;
use crate::telemetry::{TelemetrySampler, TelemetrySnapshot};

/// Lifecycle and telemetry controller for one playground canvas.
///
/// Single-threaded and callback-driven: every method is invoked from a
/// host-delivered event (size notification, animation frame, state change),
/// so the phase guards in [`EngineCell`] are the only synchronization
/// needed.
pub struct PlaygroundController<E, F, C, P> {
    factory: F,
    clock: C,
    memory: P,
    watcher: SizeWatcher,
    cell: EngineCell<E>,
    sampler: Option<TelemetrySampler>,
    bridge: Option<SyncBridge>,
    latest: Option<TelemetrySnapshot>,
}

impl<E, F, C, P> PlaygroundController<E, F, C, P>
where
    E: ParticleEngine,
    F: FnMut(&ParticleConfig) -> E,
    C: Clock,
    P: MemoryProbe,
{
    /// Create a controller that will build engines through `factory`.
    pub fn new(factory: F, clock: C, memory: P) -> Self {
        Self {
            factory,
            clock,
            memory,
            watcher: SizeWatcher::new(),
            cell: EngineCell::new(),
            sampler: None,
            bridge: None,
            latest: None,
        }
    }

    /// Feed a host-region size measurement.
    ///
    /// On the first measurement with both axes positive, the engine is
    /// built against `state`, telemetry starts, and the one-time init
    /// report is returned. Every other call returns `None`.
    pub fn notify_resize(
        &mut self,
        size: RegionSize,
        state: &PlaygroundState,
    ) -> Option<EngineInit> {
        self.watcher.observe(size)?;

        let factory = &mut self.factory;
        if !self.cell.build_with(|| factory(&state.config)) {
            return None;
        }

        self.sampler = Some(TelemetrySampler::new(self.clock.now_ms()));
        self.bridge = Some(SyncBridge::new(state));

        let particle_count = self.cell.engine().map_or(0, ParticleEngine::particle_count);
        Some(EngineInit {
            particle_count,
            speed: 1.0,
            gravity_factor: state.config.gravity,
        })
    }

    /// Propagate external state changes into the engine.
    ///
    /// A no-op until the engine is built and after it is destroyed.
    pub fn apply(&mut self, state: &PlaygroundState) {
        if let (Some(bridge), Some(engine)) = (self.bridge.as_mut(), self.cell.engine_mut()) {
            bridge.sync(state, engine);
        }
    }

    /// Count one animation frame at `now_ms`.
    ///
    /// Publishes a snapshot whenever a one-second window closes. A frame
    /// that lands after destruction is detected by phase and ignored; the
    /// race with cancellation is harmless.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<TelemetrySnapshot> {
        if self.cell.phase() != EnginePhase::Built {
            return None;
        }
        let fps = self.sampler.as_mut()?.on_frame(now_ms)?;

        let particle_count = self.cell.engine().map_or(0, ParticleEngine::particle_count);
        let snapshot = TelemetrySnapshot::compose(fps, particle_count, self.memory.used_mb());
        self.latest = Some(snapshot.clone());
        Some(snapshot)
    }

    /// Latest published snapshot, if any window has closed yet.
    #[must_use]
    pub fn latest(&self) -> Option<&TelemetrySnapshot> {
        self.latest.as_ref()
    }

    /// Current engine phase.
    #[must_use]
    pub fn phase(&self) -> EnginePhase {
        self.cell.phase()
    }

    /// Tear down: telemetry stops, then the engine is destroyed at most
    /// once. Idempotent, and terminal — later size events cannot build.
    pub fn unmount(&mut self) {
        self.sampler = None;
        self.cell.destroy();
    }
}
