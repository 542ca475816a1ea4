//! Glyph codes for the status screen icons

/// Keyboard logo, three rows of 21 glyphs
pub const LOGO: [[u8; 21]; 3] = [
    [
        0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x8B, 0x8C, 0x8D, 0x8E,
        0x8F, 0x90, 0x91, 0x92, 0x93, 0x94,
    ],
    [
        0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB, 0xAC, 0xAD, 0xAE,
        0xAF, 0xB0, 0xB1, 0xB2, 0xB3, 0xB4,
    ],
    [
        0xC0, 0xC1, 0xC2, 0xC3, 0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xCB, 0xCC, 0xCD, 0xCE,
        0xCF, 0xD0, 0xD1, 0xD2, 0xD3, 0xD4,
    ],
];

// Layer icons, three rows of five with blank margins
pub const BASE_LAYER: [u8; 15] = [
    0x20, 0x9A, 0x9B, 0x9C, 0x20, //
    0x20, 0xBA, 0xBB, 0xBC, 0x20, //
    0x20, 0xDA, 0xDB, 0xDC, 0x20,
];
pub const NUMBER_LAYER: [u8; 15] = [
    0x20, 0x94, 0x95, 0x96, 0x20, //
    0x20, 0xB4, 0xB5, 0xB6, 0x20, //
    0x20, 0xD4, 0xD5, 0xD6, 0x20,
];
pub const SYMBOL_LAYER: [u8; 15] = [
    0x20, 0x97, 0x98, 0x99, 0x20, //
    0x20, 0xB7, 0xB8, 0xB9, 0x20, //
    0x20, 0xD7, 0xD8, 0xD9, 0x20,
];
pub const FUNCTION_LAYER: [u8; 15] = [
    0x20, 0x9D, 0x9E, 0x9F, 0x20, //
    0x20, 0xBD, 0xBE, 0xBF, 0x20, //
    0x20, 0xDD, 0xDE, 0xDF, 0x20,
];

/// A two-by-two modifier icon with off and on variants
pub struct ModIcon {
    off: [[u8; 2]; 2],
    on: [[u8; 2]; 2],
}

impl ModIcon {
    /// Glyphs for one row of the icon
    pub fn row(&self, on: bool, row: usize) -> [u8; 2] {
        if on {
            self.on[row]
        } else {
            self.off[row]
        }
    }
}

pub const GUI: ModIcon = ModIcon {
    off: [[0x85, 0x86], [0xA5, 0xA6]],
    on: [[0x8D, 0x8E], [0xAD, 0xAE]],
};

pub const ALT: ModIcon = ModIcon {
    off: [[0x87, 0x88], [0xA7, 0xA8]],
    on: [[0x8F, 0x90], [0xAF, 0xB0]],
};

pub const CTRL: ModIcon = ModIcon {
    off: [[0x89, 0x8A], [0xA9, 0xAA]],
    on: [[0x91, 0x92], [0xB1, 0xB2]],
};

pub const SHIFT: ModIcon = ModIcon {
    off: [[0x8B, 0x8C], [0xAB, 0xAC]],
    on: [[0xCD, 0xCE], [0xCF, 0xD0]],
};

/// Filler glyph joining two icons, by which of them are lit
pub fn filler(left_on: bool, right_on: bool, row: usize) -> u8 {
    let top = match (left_on, right_on) {
        (false, false) => 0xC5,
        (true, false) => 0xC7,
        (false, true) => 0xC9,
        (true, true) => 0xCB,
    };
    // Bottom-row fillers follow their top-row partner
    top + row as u8
}
