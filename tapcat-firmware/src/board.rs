//! Board glue for the render loop
//!
//! Bundles the host-side collaborators the renderer asks for: the embassy
//! clock, the strapped split identity and the current typing speed.

use embassy_time::Instant;

use tapcat_hal::{Clock, FixedSplit, Role, Side, SplitInfo, Timestamp, WpmSource};

/// Current time in milliseconds since boot
pub fn now_ms() -> Timestamp {
    Instant::now().as_millis() as Timestamp
}

/// Host view handed to [`tapcat_core::Renderer::task`]
pub struct Board {
    split: FixedSplit,
    wpm: u8,
}

impl Board {
    pub fn new(split: FixedSplit) -> Self {
        Self { split, wpm: 0 }
    }

    /// Publish the latest WPM estimate
    pub fn set_wpm(&mut self, wpm: u8) {
        self.wpm = wpm;
    }
}

impl Clock for Board {
    fn now(&self) -> Timestamp {
        now_ms()
    }
}

impl SplitInfo for Board {
    fn side(&self) -> Side {
        self.split.side
    }

    fn role(&self) -> Role {
        self.split.role
    }
}

impl WpmSource for Board {
    fn current_wpm(&self) -> u8 {
        self.wpm
    }
}
