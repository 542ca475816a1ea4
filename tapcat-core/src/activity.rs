//! Typing activity tracking
//!
//! Owns the activity timestamp that drives pose selection. The host's key
//! handler stamps it on every press; with [`ActivitySource::Wpm`] a rising
//! WPM sample stamps it too, which keeps the cat tapping through sustained
//! typing on halves that never see key events.

use tapcat_hal::Timestamp;

use crate::config::ActivitySource;

/// Activity timestamp and the strategy that updates it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActivityTracker {
    /// Update strategy, fixed at startup
    source: ActivitySource,
    /// Most recent activity
    last_activity: Timestamp,
    /// WPM sample seen on the previous tick
    prev_wpm: u8,
}

impl ActivityTracker {
    /// Create a tracker with no activity since `start`
    pub const fn new(source: ActivitySource, start: Timestamp) -> Self {
        Self {
            source,
            last_activity: start,
            prev_wpm: 0,
        }
    }

    /// Most recent activity
    pub fn last_activity(&self) -> Timestamp {
        self.last_activity
    }

    /// Record a key press at `now`
    pub fn register_key_press(&mut self, now: Timestamp) {
        self.last_activity = now;
    }

    /// Feed this tick's WPM sample
    ///
    /// Returns true if the sample counted as new activity.
    pub fn sample_wpm(&mut self, wpm: u8, now: Timestamp) -> bool {
        match self.source {
            ActivitySource::KeyPress => false,
            ActivitySource::Wpm => {
                let rising = wpm > self.prev_wpm;
                if rising {
                    self.last_activity = now;
                }
                self.prev_wpm = wpm;
                rising
            }
        }
    }
}
