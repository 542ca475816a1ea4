//! Panel geometry
//!
//! SSD1306 class 128x32 panel. Memory is organised as 4 pages of 128
//! columns; each byte is a vertical strip of 8 pixels, LSB on top.

use tapcat_hal::Rotation;

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 32;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Bytes in one full frame
pub const CANVAS_LEN: usize = WIDTH * PAGES;

/// Font cell size in pixels
pub const GLYPH_WIDTH: usize = 6;
pub const GLYPH_HEIGHT: usize = 8;

/// Text grid size (columns, lines) for a rotation
pub const fn text_dimensions(rotation: Rotation) -> (u8, u8) {
    match rotation {
        Rotation::R0 | Rotation::R180 => {
            ((WIDTH / GLYPH_WIDTH) as u8, (HEIGHT / GLYPH_HEIGHT) as u8)
        }
        Rotation::R90 | Rotation::R270 => {
            ((HEIGHT / GLYPH_WIDTH) as u8, (WIDTH / GLYPH_HEIGHT) as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_len() {
        assert_eq!(CANVAS_LEN, 512);
    }

    #[test]
    fn test_text_dimensions() {
        assert_eq!(text_dimensions(Rotation::R0), (21, 4));
        assert_eq!(text_dimensions(Rotation::R270), (5, 16));
    }
}
