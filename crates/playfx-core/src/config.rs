//! Engine configuration model and parameter domains.
//!
//! The external engine consumes camelCase JSON, so every type here derives
//! serde with `rename_all = "camelCase"` and the categorical fields
//! serialize as the lowercase strings the engine expects.

use serde::{Deserialize, Serialize};

/// Shape drawn for each particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleShape {
    /// Axis-aligned square (engine default)
    #[default]
    Square,
    /// Filled circle
    Circle,
    /// Upward-pointing triangle
    Triangle,
}

impl ParticleShape {
    /// Every shape the engine supports, in declaration order.
    pub const ALL: [Self; 3] = [Self::Square, Self::Circle, Self::Triangle];
}

/// Color filter applied to the source image before particle conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFilter {
    /// Unfiltered image colors
    #[default]
    None,
    /// Luminance-only rendering
    Grayscale,
    /// Warm sepia tone
    Sepia,
    /// Inverted channels
    Invert,
}

impl ColorFilter {
    /// Every filter the engine supports, in declaration order.
    pub const ALL: [Self; 4] = [Self::None, Self::Grayscale, Self::Sepia, Self::Invert];
}

/// Inclusive numeric domain with a sampling step.
///
/// A value belongs to the domain when it is reachable as `min + k * step`
/// for some non-negative integer `k` and lies within `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound (inclusive)
    pub max: f64,
    /// Lattice step
    pub step: f64,
}

impl ParamRange {
    /// Create a range.
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Number of whole steps that fit in the range.
    #[must_use]
    pub fn steps(&self) -> u64 {
        ((self.max - self.min) / self.step).floor() as u64
    }

    /// Whether `value` lies on the range's lattice.
    #[must_use]
    pub fn admits(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        let k = (value - self.min) / self.step;
        (k - k.round()).abs() < 1e-6
    }
}

/// Ranged parameters open to randomization and slider control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangedParam {
    /// Pixel spacing between sampled particles
    ParticleGap,
    /// Pointer attraction force
    MouseForce,
    /// Return-to-origin gravity
    Gravity,
    /// Per-frame positional jitter
    Noise,
    /// Click ripple strength
    ClickStrength,
    /// Hue rotation in degrees
    HueRotation,
}

impl RangedParam {
    /// Every ranged parameter, in control-panel order.
    pub const ALL: [Self; 6] = [
        Self::ParticleGap,
        Self::MouseForce,
        Self::Gravity,
        Self::Noise,
        Self::ClickStrength,
        Self::HueRotation,
    ];

    /// The declared control range for this parameter.
    #[must_use]
    pub const fn range(self) -> ParamRange {
        match self {
            Self::ParticleGap => ParamRange::new(2.0, 10.0, 1.0),
            Self::MouseForce => ParamRange::new(10.0, 100.0, 1.0),
            Self::Gravity => ParamRange::new(0.01, 0.2, 0.01),
            Self::Noise => ParamRange::new(0.0, 50.0, 1.0),
            Self::ClickStrength => ParamRange::new(0.0, 200.0, 1.0),
            Self::HueRotation => ParamRange::new(0.0, 360.0, 1.0),
        }
    }
}

/// The full control-range table, one entry per ranged parameter.
#[must_use]
pub fn control_ranges() -> [(RangedParam, ParamRange); 6] {
    RangedParam::ALL.map(|param| (param, param.range()))
}

/// Full engine configuration.
///
/// The image source is deliberately not part of this record; it lives in the
/// playground state and reaches the engine only through an image-only
/// [`ConfigPatch`], so reconfigurations never disturb it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleConfig {
    /// Pixel spacing between sampled particles
    pub particle_gap: u32,
    /// Pointer attraction force
    pub mouse_force: u32,
    /// Return-to-origin gravity
    pub gravity: f64,
    /// Per-frame positional jitter
    pub noise: u32,
    /// Click ripple strength
    pub click_strength: u32,
    /// Hue rotation in degrees
    pub hue_rotation: u32,
    /// Shape drawn for each particle
    pub particle_shape: ParticleShape,
    /// Color filter applied to the source image
    #[serde(rename = "filter", default)]
    pub color_filter: ColorFilter,
    /// Swirl particles around the pointer instead of attracting them
    pub vortex_mode: bool,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            particle_gap: 4,
            mouse_force: 45,
            gravity: 0.08,
            noise: 10,
            click_strength: 100,
            hue_rotation: 0,
            particle_shape: ParticleShape::Square,
            color_filter: ColorFilter::None,
            vortex_mode: false,
        }
    }
}

impl ParticleConfig {
    /// Read a ranged parameter as `f64`.
    #[must_use]
    pub fn get(&self, param: RangedParam) -> f64 {
        match param {
            RangedParam::ParticleGap => f64::from(self.particle_gap),
            RangedParam::MouseForce => f64::from(self.mouse_force),
            RangedParam::Gravity => self.gravity,
            RangedParam::Noise => f64::from(self.noise),
            RangedParam::ClickStrength => f64::from(self.click_strength),
            RangedParam::HueRotation => f64::from(self.hue_rotation),
        }
    }

    /// Write a ranged parameter from a value sampled in its range.
    pub fn set(&mut self, param: RangedParam, value: f64) {
        match param {
            RangedParam::ParticleGap => self.particle_gap = value as u32,
            RangedParam::MouseForce => self.mouse_force = value as u32,
            RangedParam::Gravity => self.gravity = value,
            RangedParam::Noise => self.noise = value as u32,
            RangedParam::ClickStrength => self.click_strength = value as u32,
            RangedParam::HueRotation => self.hue_rotation = value as u32,
        }
    }
}

/// Partial configuration update for the engine's `updateConfig` call.
///
/// Absent fields are omitted from the serialized form entirely, so the
/// engine leaves them untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particle_gap: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse_force: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub noise: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_strength: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue_rotation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particle_shape: Option<ParticleShape>,
    #[serde(rename = "filter", skip_serializing_if = "Option::is_none")]
    pub color_filter: Option<ColorFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vortex_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
}

impl ConfigPatch {
    /// Patch carrying every field of `config` (a full reconfiguration).
    #[must_use]
    pub fn full(config: &ParticleConfig) -> Self {
        Self {
            particle_gap: Some(config.particle_gap),
            mouse_force: Some(config.mouse_force),
            gravity: Some(config.gravity),
            noise: Some(config.noise),
            click_strength: Some(config.click_strength),
            hue_rotation: Some(config.hue_rotation),
            particle_shape: Some(config.particle_shape),
            color_filter: Some(config.color_filter),
            vortex_mode: Some(config.vortex_mode),
            image_src: None,
        }
    }

    /// Patch carrying only a new image source.
    #[must_use]
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            image_src: Some(src.into()),
            ..Self::default()
        }
    }
}

/// Options handed to the engine factory: the configuration merged with
/// forced full-size sizing so the canvas always fills its host region.
#[derive(Debug, Clone, Serialize)]
pub struct EngineOptions<'a> {
    #[serde(flatten)]
    pub config: &'a ParticleConfig,
    pub width: &'static str,
    pub height: &'static str,
}

impl<'a> EngineOptions<'a> {
    /// Full-size options for `config`.
    #[must_use]
    pub const fn full_size(config: &'a ParticleConfig) -> Self {
        Self {
            config,
            width: "100%",
            height: "100%",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_engine_defaults() {
        let config = ParticleConfig::default();
        assert_eq!(config.particle_gap, 4);
        assert_eq!(config.mouse_force, 45);
        assert!((config.gravity - 0.08).abs() < f64::EPSILON);
        assert_eq!(config.noise, 10);
        assert_eq!(config.click_strength, 100);
        assert_eq!(config.hue_rotation, 0);
        assert_eq!(config.particle_shape, ParticleShape::Square);
        assert_eq!(config.color_filter, ColorFilter::None);
        assert!(!config.vortex_mode);
    }

    #[test]
    fn test_default_config_is_in_domain() {
        let config = ParticleConfig::default();
        for param in RangedParam::ALL {
            assert!(
                param.range().admits(config.get(param)),
                "{param:?} default out of domain"
            );
        }
    }

    #[test]
    fn test_range_steps() {
        assert_eq!(RangedParam::ParticleGap.range().steps(), 8);
        assert_eq!(RangedParam::MouseForce.range().steps(), 90);
        assert_eq!(RangedParam::HueRotation.range().steps(), 360);
        assert_eq!(RangedParam::Gravity.range().steps(), 19);
    }

    #[test]
    fn test_range_admits_lattice_points_only() {
        let range = ParamRange::new(2.0, 10.0, 1.0);
        assert!(range.admits(2.0));
        assert!(range.admits(7.0));
        assert!(range.admits(10.0));
        assert!(!range.admits(1.0));
        assert!(!range.admits(11.0));
        assert!(!range.admits(2.5));
    }

    #[test]
    fn test_range_admits_fractional_step() {
        let range = RangedParam::Gravity.range();
        assert!(range.admits(0.01));
        assert!(range.admits(0.08));
        assert!(range.admits(0.2));
        assert!(!range.admits(0.015));
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let config = ParticleConfig::default();
        let json = serde_json::to_value(&config).expect("serialize");
        assert_eq!(json["particleGap"], 4);
        assert_eq!(json["mouseForce"], 45);
        assert_eq!(json["clickStrength"], 100);
        assert_eq!(json["hueRotation"], 0);
        assert_eq!(json["particleShape"], "square");
        assert_eq!(json["filter"], "none");
        assert_eq!(json["vortexMode"], false);
    }

    #[test]
    fn test_config_roundtrip_json() {
        let mut config = ParticleConfig::default();
        config.particle_shape = ParticleShape::Triangle;
        config.color_filter = ColorFilter::Sepia;
        config.vortex_mode = true;

        let json = serde_json::to_string(&config).expect("serialize");
        let back: ParticleConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }

    #[test]
    fn test_full_patch_covers_every_config_field() {
        let config = ParticleConfig::default();
        let patch = ConfigPatch::full(&config);
        let json = serde_json::to_value(&patch).expect("serialize");
        let object = json.as_object().expect("object");
        // every config field, and nothing for the image
        assert_eq!(object.len(), 9);
        assert!(!object.contains_key("imageSrc"));
    }

    #[test]
    fn test_image_patch_carries_only_the_image() {
        let patch = ConfigPatch::image("logo.png");
        let json = serde_json::to_value(&patch).expect("serialize");
        let object = json.as_object().expect("object");
        assert_eq!(object.len(), 1);
        assert_eq!(json["imageSrc"], "logo.png");
    }

    #[test]
    fn test_engine_options_force_full_size() {
        let config = ParticleConfig::default();
        let options = EngineOptions::full_size(&config);
        let json = serde_json::to_value(&options).expect("serialize");
        assert_eq!(json["width"], "100%");
        assert_eq!(json["height"], "100%");
        // flattened config fields ride along
        assert_eq!(json["particleGap"], 4);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut config = ParticleConfig::default();
        config.set(RangedParam::Gravity, 0.15);
        assert!((config.get(RangedParam::Gravity) - 0.15).abs() < f64::EPSILON);
        config.set(RangedParam::Noise, 42.0);
        assert_eq!(config.noise, 42);
    }
}
