//! Raw frame buffer

use tapcat_hal::RawDisplay;
use tapcat_rle::FrameSink;

use crate::geometry::{CANVAS_LEN, WIDTH};

/// In-memory copy of display memory
///
/// Tracks whether anything was written since the last flush and whether
/// the panel is powered, so a driver only pushes pages when needed.
#[derive(Clone)]
pub struct Canvas {
    /// Raw display memory, page after page
    buffer: [u8; CANVAS_LEN],
    /// Whether the buffer changed since the last flush
    dirty: bool,
    /// Panel power state
    on: bool,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create a blank, powered canvas
    pub const fn new() -> Self {
        Self {
            buffer: [0; CANVAS_LEN],
            dirty: true,
            on: true,
        }
    }

    /// Whole frame buffer
    pub fn as_bytes(&self) -> &[u8; CANVAS_LEN] {
        &self.buffer
    }

    /// One 128-byte page
    pub fn page(&self, page: usize) -> Option<&[u8]> {
        let start = page * WIDTH;
        self.buffer.get(start..start + WIDTH)
    }

    /// Check if the buffer needs flushing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as flushed
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

impl RawDisplay for Canvas {
    fn write_raw_byte(&mut self, byte: u8, index: u16) {
        if let Some(slot) = self.buffer.get_mut(index as usize) {
            if *slot != byte {
                *slot = byte;
                self.dirty = true;
            }
        }
    }

    fn power_off(&mut self) {
        self.on = false;
    }

    fn power_on(&mut self) {
        self.on = true;
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

impl FrameSink for Canvas {
    fn write(&mut self, byte: u8, position: u16) {
        self.write_raw_byte(byte, position);
    }
}
