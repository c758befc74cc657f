//! Core controller for the PlayFX particle playground.
//!
//! This crate holds everything the playground needs that is not browser
//! plumbing:
//! - Deferred engine construction gated on host-region size: [`SizeWatcher`]
//! - The engine contract and its lifecycle cell: [`ParticleEngine`],
//!   [`EngineCell`]
//! - Per-second telemetry with derived warnings: [`TelemetrySampler`],
//!   [`TelemetrySnapshot`]
//! - State synchronization without engine rebuilds: [`SyncBridge`]
//! - Bounded configuration randomization: [`randomize`]
//! - Host-runtime seams with test fakes: [`Clock`], [`MemoryProbe`]
//!
//! The [`PlaygroundController`] ties these together for one mounted canvas.

mod config;
mod controller;
mod engine;
mod host;
mod random;
mod size;
mod state;
mod sync;
mod telemetry;

pub use config::{
    control_ranges, ColorFilter, ConfigPatch, EngineOptions, ParamRange, ParticleConfig,
    ParticleShape, RangedParam,
};
pub use controller::PlaygroundController;
pub use engine::{EngineCell, EngineInit, EnginePhase, ParticleEngine, RecordingEngine};
pub use host::{bytes_to_mb, Clock, FixedMemory, ManualClock, MemoryProbe, NoMemory};
pub use random::{randomize, randomize_with};
pub use size::{RegionSize, SizeWatcher};
pub use state::{PlaygroundMessage, PlaygroundState, DEFAULT_IMAGE_SRC};
pub use sync::SyncBridge;
pub use telemetry::{TelemetrySampler, TelemetrySnapshot};
