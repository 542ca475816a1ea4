//! Display abstractions
//!
//! The core addresses display memory as a flat byte array. Mapping a byte
//! offset onto pages, columns and the physical rotation is the host's job.

/// Display orientation, chosen once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// Rotation in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }
}

/// Raw display memory access
///
/// Implementations write straight into the display's frame buffer. `index`
/// is a sequential offset in the display's native addressing order.
pub trait RawDisplay {
    /// Write one byte of pixel data at `index`
    ///
    /// Writes past the end of display memory must be ignored.
    fn write_raw_byte(&mut self, byte: u8, index: u16);

    /// Turn the panel off
    fn power_off(&mut self);

    /// Turn the panel back on
    fn power_on(&mut self);

    /// Check if the panel is currently on
    fn is_on(&self) -> bool;
}

/// Character output for font-based rendering
///
/// Glyph codes index into the host's font table; the core never sees
/// pixel data for glyphs.
pub trait GlyphSink {
    /// Move the text cursor to a character cell
    fn set_cursor(&mut self, col: u8, line: u8);

    /// Write glyph codes at the cursor, advancing it
    fn write_glyphs(&mut self, codes: &[u8]);
}
