//! Owned playground state and its update messages.
//!
//! All externally-driven state lives in one record so that
//! changed-since-last-applied comparisons stay well-defined, instead of
//! being scattered across independent mutable cells.

use crate::config::ParticleConfig;
use serde::{Deserialize, Serialize};

/// Image the engine renders when the playground first loads.
pub const DEFAULT_IMAGE_SRC: &str = "favicon_io/img.png";

/// The playground's externally-driven state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundState {
    /// Engine configuration
    pub config: ParticleConfig,
    /// Source image URL
    pub image_src: String,
    /// Monotonic counter; each increase requests one particle reset
    pub reset_trigger: u64,
    /// Monotonic counter; each increase requests one explosion
    pub explode_trigger: u64,
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self {
            config: ParticleConfig::default(),
            image_src: DEFAULT_IMAGE_SRC.to_string(),
            reset_trigger: 0,
            explode_trigger: 0,
        }
    }
}

/// Messages that update the playground state.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaygroundMessage {
    /// Replace the whole engine configuration
    SetConfig(ParticleConfig),
    /// Point the engine at a new source image
    SetImage(String),
    /// Request a one-shot particle reset
    Reset,
    /// Request a one-shot particle explosion
    Explode,
}

impl PlaygroundState {
    /// Apply a message.
    ///
    /// Trigger counters only ever increase; their absolute values carry no
    /// meaning beyond ordering.
    pub fn update(&mut self, msg: PlaygroundMessage) {
        match msg {
            PlaygroundMessage::SetConfig(config) => self.config = config,
            PlaygroundMessage::SetImage(src) => self.image_src = src,
            PlaygroundMessage::Reset => self.reset_trigger += 1,
            PlaygroundMessage::Explode => self.explode_trigger += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = PlaygroundState::default();
        assert_eq!(state.image_src, DEFAULT_IMAGE_SRC);
        assert_eq!(state.reset_trigger, 0);
        assert_eq!(state.explode_trigger, 0);
        assert_eq!(state.config, ParticleConfig::default());
    }

    #[test]
    fn test_triggers_are_monotonic() {
        let mut state = PlaygroundState::default();
        for expected in 1..=4 {
            state.update(PlaygroundMessage::Reset);
            assert_eq!(state.reset_trigger, expected);
        }
        state.update(PlaygroundMessage::Explode);
        assert_eq!(state.explode_trigger, 1);
        // independent counters
        assert_eq!(state.reset_trigger, 4);
    }

    #[test]
    fn test_set_image_replaces_source() {
        let mut state = PlaygroundState::default();
        state.update(PlaygroundMessage::SetImage("sprite.png".into()));
        assert_eq!(state.image_src, "sprite.png");
    }

    #[test]
    fn test_set_config_replaces_config_only() {
        let mut state = PlaygroundState::default();
        state.update(PlaygroundMessage::Reset);

        let mut config = ParticleConfig::default();
        config.mouse_force = 80;
        state.update(PlaygroundMessage::SetConfig(config.clone()));

        assert_eq!(state.config, config);
        assert_eq!(state.reset_trigger, 1);
        assert_eq!(state.image_src, DEFAULT_IMAGE_SRC);
    }
}
