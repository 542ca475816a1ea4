//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::animation::pose::paws_interval_ms;

/// Default animation frame duration (ms)
pub const DEFAULT_FRAME_DURATION_MS: u32 = 200;

/// Default display timeout (ms)
pub const DEFAULT_DISPLAY_TIMEOUT_MS: u32 = 60_000;

/// Period at which the host should call the render entry point (ms)
///
/// The frame gate admits a step only once strictly more than one frame
/// duration has passed, so a render period that divides the frame duration
/// lands every step one whole period late. Calling every millisecond keeps
/// frames one millisecond past the frame duration.
pub const REFRESH_INTERVAL_MS: u32 = 1;

/// Tapping lasts this many frame durations after the last activity
pub const TAP_FRAMES_AFTER_ACTIVITY: u32 = 2;

/// Paws stay down until this many frame durations after the last activity
pub const PAWS_FRAMES_AFTER_ACTIVITY: u32 = 8;

/// What refreshes the activity timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActivitySource {
    /// Every registered key press
    #[default]
    KeyPress,
    /// Key presses, plus any tick where the WPM sample went up
    Wpm,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Frame duration must be non-zero
    ZeroFrameDuration,
    /// Display would sleep before the cat reaches its idle cycle
    TimeoutTooShort,
}

/// Animation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnimationConfig {
    /// Time between animation frames (ms)
    pub frame_duration_ms: u32,
    /// Inactivity before the display powers off (ms)
    pub display_timeout_ms: u32,
    /// Activity timestamp update strategy
    pub activity: ActivitySource,
    /// Show the layer icon on the status screen
    pub show_layer: bool,
    /// Show modifier icons on the status screen
    pub show_mods: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
            display_timeout_ms: DEFAULT_DISPLAY_TIMEOUT_MS,
            activity: ActivitySource::KeyPress,
            show_layer: false,
            show_mods: false,
        }
    }
}

impl AnimationConfig {
    /// Check the configuration for values the animation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_duration_ms == 0 {
            return Err(ConfigError::ZeroFrameDuration);
        }
        if self.display_timeout_ms < paws_interval_ms(self.frame_duration_ms) {
            return Err(ConfigError::TimeoutTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnimationConfig::default();
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_frame_duration() {
        let config = AnimationConfig {
            frame_duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameDuration));
    }

    #[test]
    fn test_timeout_too_short() {
        let config = AnimationConfig {
            display_timeout_ms: 1000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TimeoutTooShort));
    }

    #[test]
    fn test_timeout_equal_to_idle_threshold() {
        let config = AnimationConfig {
            display_timeout_ms: 1600,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }
}
