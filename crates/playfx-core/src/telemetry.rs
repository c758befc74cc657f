//! Per-second telemetry aggregation and warning derivation.

use serde::Serialize;

/// Aggregation window length. A soft boundary: the window closes on the
/// first frame at or after this much time has elapsed.
const WINDOW_MS: f64 = 1000.0;

/// FPS floor below which the low-FPS warning trips.
const LOW_FPS: u32 = 30;
/// Particle population above which the count warning trips.
const HIGH_PARTICLES: u32 = 2000;
/// Memory ceiling in MB above which the memory warning trips.
const HIGH_MEMORY_MB: f64 = 400.0;

/// Snapshot of one closed telemetry window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySnapshot {
    /// Frames per second over the window
    pub fps: u32,
    /// Particle population at the window boundary
    pub particle_count: u32,
    /// Used heap in MB; `None` when the host exposes no readout
    #[serde(rename = "memoryMB")]
    pub memory_mb: Option<f64>,
    /// Tripped warnings, in a fixed derivation order
    pub warnings: Vec<&'static str>,
}

impl TelemetrySnapshot {
    /// Compose a snapshot, deriving warnings independently and in their
    /// fixed order: low FPS, high particle count, high memory.
    #[must_use]
    pub fn compose(fps: u32, particle_count: u32, memory_mb: Option<f64>) -> Self {
        let mut warnings = Vec::new();
        if fps < LOW_FPS {
            warnings.push("Low FPS");
        }
        if particle_count > HIGH_PARTICLES {
            warnings.push("High particle count");
        }
        if let Some(mb) = memory_mb {
            if mb > HIGH_MEMORY_MB {
                warnings.push("High memory");
            }
        }
        Self {
            fps,
            particle_count,
            memory_mb,
            warnings,
        }
    }
}

/// Frame counter that rolls one-second windows into an FPS figure.
#[derive(Debug, Clone)]
pub struct TelemetrySampler {
    window_start: f64,
    frames: u32,
}

impl TelemetrySampler {
    /// Start sampling, opening the first window at `now_ms`.
    #[must_use]
    pub const fn new(now_ms: f64) -> Self {
        Self {
            window_start: now_ms,
            frames: 0,
        }
    }

    /// Count one frame.
    ///
    /// Closes the window and returns its FPS once at least a full second
    /// has elapsed since the window opened; the next window starts at the
    /// closing frame's timestamp.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<u32> {
        self.frames += 1;
        let elapsed = now_ms - self.window_start;
        if elapsed < WINDOW_MS {
            return None;
        }
        let fps = (f64::from(self.frames) * 1000.0 / elapsed).round() as u32;
        self.frames = 0;
        self.window_start = now_ms;
        Some(fps)
    }
}
