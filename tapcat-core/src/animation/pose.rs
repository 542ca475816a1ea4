//! Animation poses

use crate::config::{PAWS_FRAMES_AFTER_ACTIVITY, TAP_FRAMES_AFTER_ACTIVITY};

/// What the cat is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pose {
    /// Typing just happened; paws alternate every frame
    Tapping,
    /// Typing stopped recently; both paws rest on the keyboard
    Cooldown,
    /// No recent typing; cycling through idle frames
    Idling,
}

/// Elapsed time below which the cat is tapping
pub(crate) const fn tap_interval_ms(frame_duration_ms: u32) -> u32 {
    frame_duration_ms.saturating_mul(TAP_FRAMES_AFTER_ACTIVITY)
}

/// Elapsed time below which the cat rests its paws
pub(crate) const fn paws_interval_ms(frame_duration_ms: u32) -> u32 {
    frame_duration_ms.saturating_mul(PAWS_FRAMES_AFTER_ACTIVITY)
}

impl Pose {
    /// Pose for a given time since the last activity
    ///
    /// Thresholds are exclusive upper bounds: an elapsed time equal to a
    /// threshold already belongs to the slower pose, so with no new activity
    /// the pose only ever moves Tapping -> Cooldown -> Idling.
    pub fn from_elapsed(elapsed_ms: u32, frame_duration_ms: u32) -> Self {
        if elapsed_ms < tap_interval_ms(frame_duration_ms) {
            Pose::Tapping
        } else if elapsed_ms < paws_interval_ms(frame_duration_ms) {
            Pose::Cooldown
        } else {
            Pose::Idling
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: u32 = 200;

    #[test]
    fn test_thresholds() {
        assert_eq!(Pose::from_elapsed(0, D), Pose::Tapping);
        assert_eq!(Pose::from_elapsed(399, D), Pose::Tapping);
        assert_eq!(Pose::from_elapsed(400, D), Pose::Cooldown);
        assert_eq!(Pose::from_elapsed(1599, D), Pose::Cooldown);
        assert_eq!(Pose::from_elapsed(1600, D), Pose::Idling);
        assert_eq!(Pose::from_elapsed(u32::MAX, D), Pose::Idling);
    }

    #[test]
    fn test_progression_is_monotonic() {
        let mut last = Pose::Tapping;
        for elapsed in (0..4000).step_by(7) {
            let pose = Pose::from_elapsed(elapsed, D);
            let rank = |p: Pose| match p {
                Pose::Tapping => 0,
                Pose::Cooldown => 1,
                Pose::Idling => 2,
            };
            assert!(rank(pose) >= rank(last));
            last = pose;
        }
    }

    #[test]
    fn test_scales_with_frame_duration() {
        assert_eq!(Pose::from_elapsed(150, 100), Pose::Tapping);
        assert_eq!(Pose::from_elapsed(250, 100), Pose::Cooldown);
        assert_eq!(Pose::from_elapsed(800, 100), Pose::Idling);
    }

    #[test]
    fn test_intervals() {
        assert_eq!(tap_interval_ms(D), 400);
        assert_eq!(paws_interval_ms(D), 1600);
        assert_eq!(paws_interval_ms(u32::MAX), u32::MAX);
    }
}
