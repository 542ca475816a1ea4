//! Sub-frame counters

use tapcat_rle::EncodedFrame;

use super::Pose;
use crate::frames::{CatFrames, IDLE_FRAMES, TAP_FRAMES};

/// Animation counters carried between ticks
///
/// Only reset at startup. Nothing here depends on the keyboard side, so the
/// same state drives either frame set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationState {
    /// Current idle sub-frame
    idle_index: u8,
    /// Current tap sub-frame
    tap_index: u8,
}

impl AnimationState {
    /// Create counters at the first sub-frame
    pub const fn new() -> Self {
        Self {
            idle_index: 0,
            tap_index: 0,
        }
    }

    /// Current idle sub-frame index
    pub fn idle_index(&self) -> usize {
        self.idle_index as usize
    }

    /// Current tap sub-frame index
    pub fn tap_index(&self) -> usize {
        self.tap_index as usize
    }

    /// Move the counter for `pose` to its next sub-frame
    pub fn advance(&mut self, pose: Pose) {
        match pose {
            Pose::Tapping => {
                self.tap_index = ((self.tap_index as usize + 1) % TAP_FRAMES) as u8;
            }
            Pose::Cooldown => {}
            Pose::Idling => {
                self.idle_index = if (self.idle_index as usize) < IDLE_FRAMES - 1 {
                    self.idle_index + 1
                } else {
                    0
                };
            }
        }
    }

    /// Frame for `pose` at the current counters
    pub fn frame(&self, pose: Pose, frames: &CatFrames) -> EncodedFrame {
        match pose {
            Pose::Tapping => frames.tap[self.tap_index()],
            Pose::Cooldown => frames.paws,
            Pose::Idling => frames.idle[self.idle_index()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_cycle_wraps() {
        let mut state = AnimationState::new();
        let mut visited = [0usize; 5];
        for slot in visited.iter_mut() {
            state.advance(Pose::Idling);
            *slot = state.idle_index();
        }
        assert_eq!(visited, [1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_tap_toggles() {
        let mut state = AnimationState::new();
        state.advance(Pose::Tapping);
        assert_eq!(state.tap_index(), 1);
        state.advance(Pose::Tapping);
        assert_eq!(state.tap_index(), 0);
    }

    #[test]
    fn test_cooldown_leaves_counters() {
        let mut state = AnimationState::new();
        state.advance(Pose::Idling);
        state.advance(Pose::Tapping);
        let before = state;

        state.advance(Pose::Cooldown);
        assert_eq!(state, before);
    }

    #[test]
    fn test_counters_are_independent() {
        let mut state = AnimationState::new();
        state.advance(Pose::Idling);
        state.advance(Pose::Idling);
        state.advance(Pose::Tapping);
        assert_eq!(state.idle_index(), 2);
        assert_eq!(state.tap_index(), 1);
    }

    #[test]
    fn test_frame_lookup() {
        let frames = CatFrames::for_side(tapcat_hal::Side::Right);
        let mut state = AnimationState::new();

        assert_eq!(state.frame(Pose::Cooldown, frames), frames.paws);
        state.advance(Pose::Tapping);
        assert_eq!(state.frame(Pose::Tapping, frames), frames.tap[1]);
        state.advance(Pose::Idling);
        state.advance(Pose::Idling);
        assert_eq!(state.frame(Pose::Idling, frames), frames.idle[2]);
    }
}
