//! External particle-engine contract and handle lifecycle.

use crate::config::ConfigPatch;
use serde::Serialize;

/// Contract with an external particle-engine instance.
///
/// The engine is consumed, not reimplemented: an instance is produced by a
/// factory once the host region has positive measured size, and every call
/// here is fire-and-forget from the controller's point of view.
pub trait ParticleEngine {
    /// Merge the given fields into the engine's configuration; omitted
    /// fields are left unchanged.
    fn update_config(&mut self, patch: &ConfigPatch);

    /// Return all particles to their origin positions.
    fn reset_particles(&mut self);

    /// Scatter all particles outward.
    fn explode_particles(&mut self);

    /// Current number of live particles.
    fn particle_count(&self) -> u32;

    /// Release the engine's resources. Called at most once per instance.
    fn destroy(&mut self);
}

/// Observable lifecycle phase of an [`EngineCell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// No engine yet; waiting for a positive size measurement
    Unbuilt,
    /// Engine is live
    Built,
    /// Torn down; terminal
    Destroyed,
}

/// Owns at most one engine instance across the `Unbuilt → Built → Destroyed`
/// lifecycle.
///
/// `Destroyed` is terminal: a cell is never rebuilt, so a callback that
/// races teardown can check the phase instead of relying on cancellation
/// winning.
#[derive(Debug)]
pub struct EngineCell<E> {
    slot: Slot<E>,
}

#[derive(Debug)]
enum Slot<E> {
    Unbuilt,
    Built(E),
    Destroyed,
}

impl<E: ParticleEngine> EngineCell<E> {
    /// Create an unbuilt cell.
    #[must_use]
    pub const fn new() -> Self {
        Self { slot: Slot::Unbuilt }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> EnginePhase {
        match self.slot {
            Slot::Unbuilt => EnginePhase::Unbuilt,
            Slot::Built(_) => EnginePhase::Built,
            Slot::Destroyed => EnginePhase::Destroyed,
        }
    }

    /// Run `factory` and store its engine, but only from `Unbuilt`.
    ///
    /// Returns whether the factory ran; a repeated ready event while
    /// `Built` or `Destroyed` is ignored.
    pub fn build_with(&mut self, factory: impl FnOnce() -> E) -> bool {
        match self.slot {
            Slot::Unbuilt => {
                self.slot = Slot::Built(factory());
                true
            }
            Slot::Built(_) | Slot::Destroyed => false,
        }
    }

    /// Shared access to the engine while built.
    #[must_use]
    pub fn engine(&self) -> Option<&E> {
        match &self.slot {
            Slot::Built(engine) => Some(engine),
            Slot::Unbuilt | Slot::Destroyed => None,
        }
    }

    /// Mutable access to the engine while built.
    pub fn engine_mut(&mut self) -> Option<&mut E> {
        match &mut self.slot {
            Slot::Built(engine) => Some(engine),
            Slot::Unbuilt | Slot::Destroyed => None,
        }
    }

    /// Tear down: releases the engine when built, no-op otherwise.
    ///
    /// Always leaves the cell in `Destroyed`, so a late ready event can
    /// never build after teardown. Idempotent.
    pub fn destroy(&mut self) {
        if let Slot::Built(engine) = &mut self.slot {
            engine.destroy();
        }
        self.slot = Slot::Destroyed;
    }
}

impl<E: ParticleEngine> Default for EngineCell<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// One-time report published when the engine is first built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineInit {
    /// Particle population right after construction
    pub particle_count: u32,
    /// Nominal speed multiplier; the engine does not expose a real value
    pub speed: f64,
    /// Gravity the engine was configured with
    pub gravity_factor: f64,
}

impl Default for EngineInit {
    fn default() -> Self {
        Self {
            particle_count: 0,
            speed: 1.0,
            gravity_factor: 0.92,
        }
    }
}

/// Engine double that records every call, for tests.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    /// Patches received through `update_config`, in order
    pub updates: Vec<ConfigPatch>,
    /// Number of `reset_particles` calls
    pub resets: u32,
    /// Number of `explode_particles` calls
    pub explosions: u32,
    /// Number of `destroy` calls
    pub destroys: u32,
    /// Particle count to report
    pub count: u32,
}

impl RecordingEngine {
    /// Create a recording engine reporting `count` particles.
    #[must_use]
    pub fn with_count(count: u32) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }
}

impl ParticleEngine for RecordingEngine {
    fn update_config(&mut self, patch: &ConfigPatch) {
        self.updates.push(patch.clone());
    }

    fn reset_particles(&mut self) {
        self.resets += 1;
    }

    fn explode_particles(&mut self) {
        self.explosions += 1;
    }

    fn particle_count(&self) -> u32 {
        self.count
    }

    fn destroy(&mut self) {
        self.destroys += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_starts_unbuilt() {
        let cell: EngineCell<RecordingEngine> = EngineCell::new();
        assert_eq!(cell.phase(), EnginePhase::Unbuilt);
        assert!(cell.engine().is_none());
    }

    #[test]
    fn test_build_runs_factory_exactly_once() {
        let mut cell = EngineCell::new();
        assert!(cell.build_with(|| RecordingEngine::with_count(500)));
        assert_eq!(cell.phase(), EnginePhase::Built);
        assert_eq!(cell.engine().map(RecordingEngine::particle_count), Some(500));

        // a second ready event is ignored
        assert!(!cell.build_with(|| RecordingEngine::with_count(999)));
        assert_eq!(cell.engine().map(RecordingEngine::particle_count), Some(500));
    }

    #[test]
    fn test_destroy_releases_engine_once() {
        use std::cell::Cell;
        use std::rc::Rc;

        struct CountedDestroy(Rc<Cell<u32>>);
        impl ParticleEngine for CountedDestroy {
            fn update_config(&mut self, _patch: &ConfigPatch) {}
            fn reset_particles(&mut self) {}
            fn explode_particles(&mut self) {}
            fn particle_count(&self) -> u32 {
                0
            }
            fn destroy(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let destroys = Rc::new(Cell::new(0));
        let mut cell = EngineCell::new();
        cell.build_with(|| CountedDestroy(Rc::clone(&destroys)));

        cell.destroy();
        assert_eq!(cell.phase(), EnginePhase::Destroyed);
        assert_eq!(destroys.get(), 1);

        // idempotent: no second release, same observable state
        cell.destroy();
        assert_eq!(cell.phase(), EnginePhase::Destroyed);
        assert_eq!(destroys.get(), 1);
    }

    #[test]
    fn test_destroy_before_build_is_terminal() {
        let mut cell: EngineCell<RecordingEngine> = EngineCell::new();
        cell.destroy();
        assert_eq!(cell.phase(), EnginePhase::Destroyed);
        assert!(!cell.build_with(RecordingEngine::default));
        assert!(cell.engine().is_none());
    }

    #[test]
    fn test_default_init_report() {
        let init = EngineInit::default();
        assert_eq!(init.particle_count, 0);
        assert!((init.speed - 1.0).abs() < f64::EPSILON);
        assert!((init.gravity_factor - 0.92).abs() < f64::EPSILON);
    }
}
