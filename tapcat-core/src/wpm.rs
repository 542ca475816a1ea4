//! Typing speed estimate
//!
//! For hosts that count key presses but have no WPM figure of their own.
//! Presses are summed over a fixed window; each closed window is averaged
//! with the previous estimate, so the value decays over a few windows once
//! typing stops.

use tapcat_hal::Timestamp;

/// Characters counted as one word
pub const CHARS_PER_WORD: u32 = 5;

/// Windowed words-per-minute estimate from key press counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WpmMeter {
    window_start: Timestamp,
    presses: u32,
    wpm: u8,
}

impl WpmMeter {
    /// Sampling window (ms)
    pub const WINDOW_MS: u32 = 5_000;

    /// Create a meter with its first window opening at `now`
    pub const fn new(now: Timestamp) -> Self {
        Self {
            window_start: now,
            presses: 0,
            wpm: 0,
        }
    }

    /// Current estimate
    pub fn wpm(&self) -> u8 {
        self.wpm
    }

    /// Add `presses` seen up to `now` and return the current estimate
    pub fn record(&mut self, presses: u32, now: Timestamp) -> u8 {
        self.presses = self.presses.saturating_add(presses);

        let span = now.wrapping_sub(self.window_start);
        if span >= Self::WINDOW_MS {
            let sample = self.presses.saturating_mul(60_000) / (CHARS_PER_WORD * span);
            let sample = sample.min(u8::MAX as u32);
            self.wpm = ((self.wpm as u32 + sample) / 2) as u8;
            self.presses = 0;
            self.window_start = now;
        }

        self.wpm
    }
}
