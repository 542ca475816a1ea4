//! Frame cadence

use tapcat_hal::Timestamp;

/// Gate that lets one animation step through per frame duration
///
/// The host may call the render entry point far more often than the frame
/// rate; only calls strictly more than one frame duration after the last
/// admitted step advance the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameTimer {
    /// When the last step was admitted
    last_tick: Timestamp,
}

impl FrameTimer {
    /// Create a timer whose last step happened at `start`
    pub const fn new(start: Timestamp) -> Self {
        Self { last_tick: start }
    }

    /// Admit a step at `now` if a full frame has passed
    pub fn admit(&mut self, now: Timestamp, frame_duration_ms: u32) -> bool {
        if now.wrapping_sub(self.last_tick) > frame_duration_ms {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admits_after_strictly_more_than_duration() {
        let mut timer = FrameTimer::new(0);
        assert!(!timer.admit(200, 200));
        assert!(timer.admit(201, 200));
        assert!(!timer.admit(401, 200));
        assert!(timer.admit(402, 200));
    }

    #[test]
    fn test_admits_across_wrap() {
        let mut timer = FrameTimer::new(u32::MAX - 50);
        assert!(timer.admit(200, 200));
    }
}
