//! Configuration randomizer.
//!
//! Produces bounded variations of a configuration: every parameter in the
//! range table is resampled on its declared lattice, the categorical fields
//! are redrawn uniformly, and everything else is copied unchanged. The
//! generator is injected so callers (and tests) control determinism.

use crate::config::{control_ranges, ColorFilter, ParamRange, ParticleConfig, ParticleShape, RangedParam};
use rand::Rng;

/// Probability that a randomize pass enables vortex mode.
const VORTEX_CHANCE: f64 = 0.3;

/// Produce a random variation of `current` using the standard control
/// ranges.
#[must_use]
pub fn randomize<R: Rng + ?Sized>(current: &ParticleConfig, rng: &mut R) -> ParticleConfig {
    randomize_with(current, &control_ranges(), rng)
}

/// Produce a random variation of `current` over an explicit range table.
///
/// Each listed parameter is set to `min + k * step` with `k` drawn
/// uniformly from `[0, floor((max - min) / step)]`; fractional-step
/// parameters are rounded to 2 decimals to keep the lattice exact.
/// Parameters absent from the table keep their current values.
#[must_use]
pub fn randomize_with<R: Rng + ?Sized>(
    current: &ParticleConfig,
    ranges: &[(RangedParam, ParamRange)],
    rng: &mut R,
) -> ParticleConfig {
    let mut next = current.clone();

    for &(param, range) in ranges {
        next.set(param, sample(range, rng));
    }

    next.particle_shape = ParticleShape::ALL[rng.gen_range(0..ParticleShape::ALL.len())];
    next.color_filter = ColorFilter::ALL[rng.gen_range(0..ColorFilter::ALL.len())];
    next.vortex_mode = rng.gen_bool(VORTEX_CHANCE);

    next
}

/// Draw one lattice point from `range`.
fn sample<R: Rng + ?Sized>(range: ParamRange, rng: &mut R) -> f64 {
    let k = rng.gen_range(0..=range.steps());
    let value = (k as f64).mul_add(range.step, range.min);
    if range.step < 1.0 {
        (value * 100.0).round() / 100.0
    } else {
        value
    }
}
