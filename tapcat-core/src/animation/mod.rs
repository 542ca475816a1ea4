//! Animation selection
//!
//! The pose is a pure function of the time since the last activity; only
//! the sub-frame counters carry history. The selector is deterministic and
//! performs no timing I/O of its own.

pub mod pose;
pub mod selector;
pub mod state;
pub mod timer;

pub use pose::Pose;
pub use selector::Selector;
pub use state::AnimationState;
pub use timer::FrameTimer;
