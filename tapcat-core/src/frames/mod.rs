//! Frame store
//!
//! Compiled-in cat frames, one set per keyboard half. The two sets carry
//! mirrored artwork so the cat faces the centre of the keyboard on both
//! sides; their structure is identical.

mod data;

use tapcat_hal::Side;
use tapcat_rle::EncodedFrame;

/// Number of idle sub-frames
pub const IDLE_FRAMES: usize = 5;

/// Number of tap sub-frames
pub const TAP_FRAMES: usize = 2;

/// All frames for one side
#[derive(Debug, Clone, Copy)]
pub struct CatFrames {
    /// Idle cycle. The first pose is listed twice so it holds longer.
    pub idle: [EncodedFrame; IDLE_FRAMES],
    /// Tap cycle, alternating paws
    pub tap: [EncodedFrame; TAP_FRAMES],
    /// Both paws down, just after typing stops
    pub paws: EncodedFrame,
}

/// Frames for the right half
pub static RIGHT: CatFrames = CatFrames {
    idle: [
        EncodedFrame::new(&data::RIGHT_IDLE_0),
        EncodedFrame::new(&data::RIGHT_IDLE_0),
        EncodedFrame::new(&data::RIGHT_IDLE_1),
        EncodedFrame::new(&data::RIGHT_IDLE_2),
        EncodedFrame::new(&data::RIGHT_IDLE_3),
    ],
    tap: [
        EncodedFrame::new(&data::RIGHT_TAP_0),
        EncodedFrame::new(&data::RIGHT_TAP_1),
    ],
    paws: EncodedFrame::new(&data::RIGHT_PAWS),
};

/// Frames for the left half
pub static LEFT: CatFrames = CatFrames {
    idle: [
        EncodedFrame::new(&data::LEFT_IDLE_0),
        EncodedFrame::new(&data::LEFT_IDLE_0),
        EncodedFrame::new(&data::LEFT_IDLE_1),
        EncodedFrame::new(&data::LEFT_IDLE_2),
        EncodedFrame::new(&data::LEFT_IDLE_3),
    ],
    tap: [
        EncodedFrame::new(&data::LEFT_TAP_0),
        EncodedFrame::new(&data::LEFT_TAP_1),
    ],
    paws: EncodedFrame::new(&data::LEFT_PAWS),
};

impl CatFrames {
    /// Frame set for a keyboard half
    pub fn for_side(side: Side) -> &'static CatFrames {
        match side {
            Side::Left => &LEFT,
            Side::Right => &RIGHT,
        }
    }

    /// Every frame in the set, idle first
    pub fn iter(&self) -> impl Iterator<Item = &EncodedFrame> {
        self.idle
            .iter()
            .chain(self.tap.iter())
            .chain(core::iter::once(&self.paws))
    }
}
