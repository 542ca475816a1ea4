//! Status screen for the secondary half
//!
//! Draws the keyboard logo and, optionally, the active layer and held
//! modifiers. Everything is expressed as glyph codes in the host's font;
//! icons are small blocks of custom glyphs placed in the font's upper half.

mod glyphs;

use tapcat_hal::GlyphSink;

use crate::config::AnimationConfig;
use glyphs::{ModIcon, ALT, CTRL, GUI, LOGO, SHIFT};

/// Text line where the layer icon starts
const LAYER_LINE: u8 = 6;

/// Text line where the modifier icons start
const MODS_LINE: u8 = 11;

/// Icon width in glyphs
const ICON_COLS: usize = 5;

/// Active layer, as far as the status icon distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    #[default]
    Base,
    Number,
    Symbol,
    Function,
}

impl Layer {
    /// Icon glyphs, three rows of five
    fn icon(self) -> &'static [u8; ICON_COLS * 3] {
        match self {
            Layer::Base => &glyphs::BASE_LAYER,
            Layer::Number => &glyphs::NUMBER_LAYER,
            Layer::Symbol => &glyphs::SYMBOL_LAYER,
            Layer::Function => &glyphs::FUNCTION_LAYER,
        }
    }
}

/// Held modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Modifiers {
    pub gui: bool,
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

/// Keyboard state shown on the status screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusSnapshot {
    /// Highest active layer
    pub layer: Layer,
    /// Held and one-shot modifiers combined
    pub mods: Modifiers,
    /// Caps lock LED state
    pub caps_lock: bool,
}

/// Renders a [`StatusSnapshot`] as glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusRenderer {
    show_layer: bool,
    show_mods: bool,
}

impl StatusRenderer {
    /// Create a renderer with the configured sections
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            show_layer: config.show_layer,
            show_mods: config.show_mods,
        }
    }

    /// Draw the status screen
    pub fn render<G: GlyphSink + ?Sized>(&self, status: &StatusSnapshot, sink: &mut G) {
        sink.set_cursor(0, 0);
        for row in LOGO.iter() {
            sink.write_glyphs(row);
        }

        if self.show_layer {
            sink.set_cursor(0, LAYER_LINE);
            sink.write_glyphs(status.layer.icon());
        }

        if self.show_mods {
            let mods = status.mods;
            sink.set_cursor(0, MODS_LINE);
            render_pair(sink, &GUI, mods.gui, &ALT, mods.alt);
            render_pair(sink, &CTRL, mods.ctrl, &SHIFT, mods.shift || status.caps_lock);
        }
    }
}

/// Two modifier icons side by side, joined by a filler column
fn render_pair<G: GlyphSink + ?Sized>(
    sink: &mut G,
    left: &ModIcon,
    left_on: bool,
    right: &ModIcon,
    right_on: bool,
) {
    for row in 0..2 {
        let l = left.row(left_on, row);
        let r = right.row(right_on, row);
        let filler = glyphs::filler(left_on, right_on, row);
        sink.write_glyphs(&[l[0], l[1], filler, r[0], r[1]]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tapcat_display::GlyphGrid;

    type Grid = GlyphGrid<5, 16>;

    fn renderer(show_layer: bool, show_mods: bool) -> StatusRenderer {
        StatusRenderer::new(&AnimationConfig {
            show_layer,
            show_mods,
            ..Default::default()
        })
    }

    #[test]
    fn test_logo_only_by_default() {
        let mut grid = Grid::new();
        renderer(false, false).render(&StatusSnapshot::default(), &mut grid);

        assert_eq!(grid.line(0).unwrap(), &[0x80, 0x81, 0x82, 0x83, 0x84]);
        // 63 logo glyphs wrap over 13 lines of 5
        assert_eq!(grid.line(12).unwrap(), &[0xD2, 0xD3, 0xD4, b' ', b' ']);
        assert_eq!(grid.line(13).unwrap(), &[b' '; 5]);
    }

    #[test]
    fn test_layer_icon() {
        let mut grid = Grid::new();
        let status = StatusSnapshot {
            layer: Layer::Symbol,
            ..Default::default()
        };
        renderer(true, false).render(&status, &mut grid);

        assert_eq!(grid.line(6).unwrap(), &[0x20, 0x97, 0x98, 0x99, 0x20]);
        assert_eq!(grid.line(7).unwrap(), &[0x20, 0xB7, 0xB8, 0xB9, 0x20]);
        assert_eq!(grid.line(8).unwrap(), &[0x20, 0xD7, 0xD8, 0xD9, 0x20]);
    }

    #[test]
    fn test_modifiers_off() {
        let mut grid = Grid::new();
        renderer(false, true).render(&StatusSnapshot::default(), &mut grid);

        assert_eq!(grid.line(11).unwrap(), &[0x85, 0x86, 0xC5, 0x87, 0x88]);
        assert_eq!(grid.line(12).unwrap(), &[0xA5, 0xA6, 0xC6, 0xA7, 0xA8]);
        assert_eq!(grid.line(13).unwrap(), &[0x89, 0x8A, 0xC5, 0x8B, 0x8C]);
        assert_eq!(grid.line(14).unwrap(), &[0xA9, 0xAA, 0xC6, 0xAB, 0xAC]);
    }

    #[test]
    fn test_modifier_fillers() {
        let mut grid = Grid::new();
        let status = StatusSnapshot {
            mods: Modifiers {
                gui: true,
                alt: false,
                ctrl: false,
                shift: true,
            },
            ..Default::default()
        };
        renderer(false, true).render(&status, &mut grid);

        assert_eq!(grid.line(11).unwrap(), &[0x8D, 0x8E, 0xC7, 0x87, 0x88]);
        assert_eq!(grid.line(13).unwrap(), &[0x89, 0x8A, 0xC9, 0xCD, 0xCE]);
        assert_eq!(grid.line(14).unwrap(), &[0xA9, 0xAA, 0xCA, 0xCF, 0xD0]);
    }

    #[test]
    fn test_caps_lock_lights_shift() {
        let mut grid = Grid::new();
        let status = StatusSnapshot {
            mods: Modifiers {
                ctrl: true,
                ..Default::default()
            },
            caps_lock: true,
            ..Default::default()
        };
        renderer(false, true).render(&status, &mut grid);

        assert_eq!(grid.line(13).unwrap(), &[0x91, 0x92, 0xCB, 0xCD, 0xCE]);
        assert_eq!(grid.line(14).unwrap(), &[0xB1, 0xB2, 0xCC, 0xCF, 0xD0]);
    }
}
