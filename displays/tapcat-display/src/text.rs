//! Glyph buffer for font-based screens
//!
//! Holds glyph codes rather than pixels. The cursor wraps to the next line
//! at the right edge, like a terminal.

use heapless::Vec;
use tapcat_hal::GlyphSink;

/// Character grid of glyph codes
#[derive(Clone)]
pub struct GlyphGrid<const COLS: usize, const LINES: usize> {
    /// Glyph codes, one row per line
    cells: [[u8; COLS]; LINES],
    /// Cursor column
    col: usize,
    /// Cursor line
    line: usize,
    /// Whether the grid changed since the last render
    dirty: bool,
}

impl<const COLS: usize, const LINES: usize> Default for GlyphGrid<COLS, LINES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const COLS: usize, const LINES: usize> GlyphGrid<COLS, LINES> {
    /// Glyph code used for empty cells
    pub const BLANK: u8 = b' ';

    /// Create an empty grid
    pub const fn new() -> Self {
        Self {
            cells: [[Self::BLANK; COLS]; LINES],
            col: 0,
            line: 0,
            dirty: true,
        }
    }

    /// Glyph codes on one line
    pub fn line(&self, line: usize) -> Option<&[u8; COLS]> {
        self.cells.get(line)
    }

    /// All glyph codes in reading order
    pub fn codes(&self) -> Vec<u8, 512> {
        self.cells.iter().flatten().copied().take(512).collect()
    }

    /// Current cursor position (col, line)
    pub fn cursor(&self) -> (usize, usize) {
        (self.col, self.line)
    }

    /// Check if grid needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark grid as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn put(&mut self, code: u8) {
        if self.line >= LINES {
            // Writing past the last line wraps to the top
            self.line = 0;
        }
        let cell = &mut self.cells[self.line][self.col];
        if *cell != code {
            *cell = code;
            self.dirty = true;
        }
        self.col += 1;
        if self.col >= COLS {
            self.col = 0;
            self.line += 1;
        }
    }
}

impl<const COLS: usize, const LINES: usize> GlyphSink for GlyphGrid<COLS, LINES> {
    fn set_cursor(&mut self, col: u8, line: u8) {
        self.col = (col as usize).min(COLS.saturating_sub(1));
        self.line = (line as usize).min(LINES.saturating_sub(1));
    }

    fn write_glyphs(&mut self, codes: &[u8]) {
        if COLS == 0 || LINES == 0 {
            return;
        }
        for &code in codes {
            self.put(code);
        }
    }
}

#[cfg(feature = "defmt")]
impl<const COLS: usize, const LINES: usize> defmt::Format for GlyphGrid<COLS, LINES> {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "GlyphGrid[");
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{=[u8]:x}", row.as_slice());
        }
        defmt::write!(f, "]");
    }
}
