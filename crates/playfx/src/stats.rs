//! Overlay text for the live stats readout.

use playfx_core::TelemetrySnapshot;

/// Render the monospace overlay lines for a snapshot.
///
/// One line each for FPS, particle count, and memory (`n/a` when the host
/// exposes no readout), followed by a comma-joined warnings line only when
/// at least one warning tripped.
#[must_use]
pub fn overlay_lines(snapshot: &TelemetrySnapshot) -> Vec<String> {
    let memory = snapshot
        .memory_mb
        .map_or_else(|| "n/a".to_string(), |mb| mb.to_string());

    let mut lines = vec![
        format!("FPS: {}", snapshot.fps),
        format!("Particles: {}", snapshot.particle_count),
        format!("Memory: {memory} MB"),
    ];
    if !snapshot.warnings.is_empty() {
        lines.push(snapshot.warnings.join(", "));
    }
    lines
}
