//! Frame selection
//!
//! One step per admitted tick: classify the elapsed time, advance the
//! matching counter, look the frame up in the side's set and decode it.

use tapcat_hal::Side;
use tapcat_rle::{decode, EncodedFrame, FrameSink};

use super::{AnimationState, Pose};
use crate::frames::CatFrames;

/// Picks and draws the frame for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selector {
    /// Animation frame duration (ms)
    frame_duration_ms: u32,
}

impl Selector {
    /// Create a selector for a frame duration
    pub const fn new(frame_duration_ms: u32) -> Self {
        Self { frame_duration_ms }
    }

    /// Advance `state` for one tick and return the frame to show
    pub fn step(
        &self,
        state: &mut AnimationState,
        elapsed_ms: u32,
        side: Side,
    ) -> (Pose, EncodedFrame) {
        let pose = Pose::from_elapsed(elapsed_ms, self.frame_duration_ms);
        state.advance(pose);
        (pose, state.frame(pose, CatFrames::for_side(side)))
    }

    /// Advance `state` for one tick and decode the chosen frame into `sink`
    pub fn render<S: FrameSink + ?Sized>(
        &self,
        state: &mut AnimationState,
        elapsed_ms: u32,
        side: Side,
        sink: &mut S,
    ) -> Pose {
        let (pose, frame) = self.step(state, elapsed_ms, side);
        decode(frame.as_bytes(), sink);
        pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::{LEFT, RIGHT};
    use tapcat_display::Canvas;

    const SELECTOR: Selector = Selector::new(200);

    #[test]
    fn test_tapping_alternates_frames() {
        let mut state = AnimationState::new();
        let (pose, first) = SELECTOR.step(&mut state, 0, Side::Right);
        assert_eq!(pose, Pose::Tapping);
        assert_eq!(first, RIGHT.tap[1]);

        let (_, second) = SELECTOR.step(&mut state, 100, Side::Right);
        assert_eq!(second, RIGHT.tap[0]);
    }

    #[test]
    fn test_cooldown_shows_paws() {
        let mut state = AnimationState::new();
        for elapsed in [400, 1000, 1599] {
            let (pose, frame) = SELECTOR.step(&mut state, elapsed, Side::Left);
            assert_eq!(pose, Pose::Cooldown);
            assert_eq!(frame, LEFT.paws);
        }
        assert_eq!(state, AnimationState::new());
    }

    #[test]
    fn test_idling_cycles() {
        let mut state = AnimationState::new();
        let mut indices = [0usize; 5];
        for (n, slot) in indices.iter_mut().enumerate() {
            let elapsed = 1600 + n as u32 * 200;
            let (pose, frame) = SELECTOR.step(&mut state, elapsed, Side::Right);
            assert_eq!(pose, Pose::Idling);
            assert_eq!(frame, RIGHT.idle[state.idle_index()]);
            *slot = state.idle_index();
        }
        assert_eq!(indices, [1, 2, 3, 4, 0]);
    }

    #[test]
    fn test_sides_follow_identical_transitions() {
        let timeline = [0, 150, 420, 900, 1600, 1800, 2000, 0, 180];
        let mut left_state = AnimationState::new();
        let mut right_state = AnimationState::new();

        for elapsed in timeline {
            let (left_pose, left_frame) = SELECTOR.step(&mut left_state, elapsed, Side::Left);
            let (right_pose, right_frame) = SELECTOR.step(&mut right_state, elapsed, Side::Right);

            assert_eq!(left_pose, right_pose);
            assert_eq!(left_state, right_state);
            assert_ne!(left_frame, right_frame);
            assert!(LEFT.iter().any(|f| *f == left_frame));
            assert!(RIGHT.iter().any(|f| *f == right_frame));
        }
    }

    #[test]
    fn test_render_decodes_selected_frame() {
        let mut state = AnimationState::new();
        let mut canvas = Canvas::new();
        let pose = SELECTOR.render(&mut state, 500, Side::Right, &mut canvas);

        let mut expected = Canvas::new();
        decode(RIGHT.paws.as_bytes(), &mut expected);

        assert_eq!(pose, Pose::Cooldown);
        assert_eq!(canvas.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut a = Canvas::new();
        let mut b = Canvas::new();
        SELECTOR.render(&mut AnimationState::new(), 2000, Side::Left, &mut a);
        SELECTOR.render(&mut AnimationState::new(), 2000, Side::Left, &mut b);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }
}
