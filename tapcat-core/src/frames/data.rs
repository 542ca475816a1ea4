//! Encoded cat frames
//!
//! Byte 0 of every table is the table's total length. Each table decodes to
//! exactly one 512-byte canvas.

// Right-aligned cat
pub static RIGHT_IDLE_0: [u8; 144] = [
    0x90, 0x3a, 0x00, 0x01, 0x80, 0x02, 0x40, 0x04, 0x20, 0x05, 0x10, 0x02, 0x08, 0x03, 0x04, 0x84,
    0x08, 0x30, 0x40, 0x80, 0x2e, 0x00, 0x03, 0x80, 0x31, 0x00, 0x83, 0x18, 0x64, 0x82, 0x05, 0x02,
    0x01, 0x01, 0x04, 0x00, 0x02, 0x80, 0x09, 0x00, 0x82, 0x80, 0x00, 0x02, 0x30, 0x82, 0x00, 0xc0,
    0x02, 0xc1, 0x87, 0xc2, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x03, 0x00, 0x04, 0x80, 0x04, 0x40,
    0x04, 0x20, 0x04, 0x10, 0x05, 0x08, 0x05, 0x04, 0x04, 0x02, 0x04, 0x01, 0x33, 0x00, 0x84, 0xc0,
    0x38, 0x04, 0x03, 0x07, 0x00, 0x03, 0x0c, 0x88, 0x0d, 0x01, 0x00, 0x40, 0xa0, 0x21, 0x22, 0x12,
    0x03, 0x11, 0x01, 0x09, 0x04, 0x08, 0x02, 0x04, 0x02, 0x08, 0x05, 0x10, 0x82, 0x11, 0x0f, 0x02,
    0x01, 0x36, 0x00, 0x05, 0x80, 0x05, 0x40, 0x05, 0x20, 0x05, 0x10, 0x05, 0x08, 0x05, 0x04, 0x82,
    0x02, 0x03, 0x02, 0x02, 0x06, 0x01, 0x02, 0x02, 0x02, 0x04, 0x05, 0x08, 0x01, 0x07, 0x3d, 0x00,
];

pub static RIGHT_IDLE_1: [u8; 147] = [
    0x93, 0x3a, 0x00, 0x01, 0x80, 0x02, 0x40, 0x04, 0x20, 0x04, 0x10, 0x02, 0x08, 0x01, 0x04, 0x03,
    0x02, 0x84, 0x04, 0x38, 0x40, 0x80, 0x2e, 0x00, 0x03, 0x80, 0x31, 0x00, 0x82, 0x1c, 0xe2, 0x02,
    0x01, 0x04, 0x02, 0x01, 0x01, 0x04, 0x00, 0x02, 0x80, 0x09, 0x00, 0x82, 0x80, 0x00, 0x02, 0x30,
    0x82, 0x00, 0xc0, 0x02, 0xc1, 0x87, 0xc2, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x03, 0x00, 0x04,
    0x80, 0x04, 0x40, 0x04, 0x20, 0x04, 0x10, 0x05, 0x08, 0x05, 0x04, 0x04, 0x02, 0x04, 0x01, 0x33,
    0x00, 0x84, 0x80, 0x70, 0x0c, 0x03, 0x07, 0x00, 0x03, 0x0c, 0x88, 0x0d, 0x01, 0x00, 0x40, 0xa0,
    0x21, 0x22, 0x12, 0x03, 0x11, 0x01, 0x09, 0x04, 0x08, 0x02, 0x04, 0x02, 0x08, 0x05, 0x10, 0x82,
    0x11, 0x0f, 0x02, 0x01, 0x36, 0x00, 0x05, 0x80, 0x05, 0x40, 0x05, 0x20, 0x05, 0x10, 0x05, 0x08,
    0x05, 0x04, 0x82, 0x02, 0x03, 0x02, 0x02, 0x06, 0x01, 0x02, 0x02, 0x02, 0x04, 0x05, 0x08, 0x01,
    0x07, 0x3d, 0x00,
];

pub static RIGHT_IDLE_2: [u8; 154] = [
    0x9a, 0x33, 0x00, 0x02, 0x80, 0x05, 0x00, 0x01, 0x80, 0x02, 0x40, 0x04, 0x20, 0x04, 0x10, 0x83,
    0x08, 0x04, 0x02, 0x02, 0x01, 0x85, 0x02, 0x0c, 0x30, 0x40, 0x80, 0x2e, 0x00, 0x03, 0x80, 0x31,
    0x00, 0x82, 0x1e, 0xe1, 0x02, 0x00, 0x02, 0x01, 0x02, 0x02, 0x01, 0x01, 0x04, 0x00, 0x02, 0x80,
    0x09, 0x00, 0x82, 0x80, 0x00, 0x02, 0x30, 0x82, 0x00, 0xc0, 0x02, 0xc1, 0x87, 0xc2, 0x04, 0x08,
    0x10, 0x20, 0x40, 0x80, 0x03, 0x00, 0x04, 0x80, 0x04, 0x40, 0x04, 0x20, 0x04, 0x10, 0x05, 0x08,
    0x05, 0x04, 0x04, 0x02, 0x04, 0x01, 0x33, 0x00, 0x84, 0x80, 0x70, 0x0c, 0x03, 0x07, 0x00, 0x03,
    0x0c, 0x88, 0x0d, 0x01, 0x00, 0x40, 0xa0, 0x21, 0x22, 0x12, 0x03, 0x11, 0x01, 0x09, 0x04, 0x08,
    0x02, 0x04, 0x02, 0x08, 0x05, 0x10, 0x82, 0x11, 0x0f, 0x02, 0x01, 0x36, 0x00, 0x05, 0x80, 0x05,
    0x40, 0x05, 0x20, 0x05, 0x10, 0x05, 0x08, 0x05, 0x04, 0x82, 0x02, 0x03, 0x02, 0x02, 0x06, 0x01,
    0x02, 0x02, 0x02, 0x04, 0x05, 0x08, 0x01, 0x07, 0x3d, 0x00,
];

pub static RIGHT_IDLE_3: [u8; 140] = [
    0x8c, 0x3b, 0x00, 0x02, 0x80, 0x04, 0x40, 0x04, 0x20, 0x83, 0x10, 0x08, 0x04, 0x02, 0x02, 0x84,
    0x04, 0x18, 0x60, 0x80, 0x2f, 0x00, 0x03, 0x80, 0x31, 0x00, 0x82, 0x3c, 0xc2, 0x02, 0x01, 0x02,
    0x02, 0x02, 0x04, 0x82, 0x02, 0x01, 0x10, 0x00, 0x02, 0x60, 0x82, 0x00, 0x81, 0x02, 0x82, 0x86,
    0x84, 0x08, 0x10, 0x20, 0x40, 0x80, 0x04, 0x00, 0x04, 0x80, 0x04, 0x40, 0x04, 0x20, 0x04, 0x10,
    0x05, 0x08, 0x05, 0x04, 0x04, 0x02, 0x04, 0x01, 0x33, 0x00, 0x84, 0x80, 0x70, 0x19, 0x06, 0x07,
    0x00, 0x03, 0x18, 0x88, 0x1b, 0x03, 0x00, 0x40, 0xa0, 0x22, 0x24, 0x14, 0x03, 0x12, 0x01, 0x0b,
    0x04, 0x08, 0x02, 0x05, 0x02, 0x09, 0x05, 0x10, 0x82, 0x11, 0x0f, 0x02, 0x01, 0x36, 0x00, 0x05,
    0x80, 0x05, 0x40, 0x05, 0x20, 0x05, 0x10, 0x05, 0x08, 0x05, 0x04, 0x82, 0x02, 0x03, 0x02, 0x02,
    0x06, 0x01, 0x02, 0x02, 0x02, 0x04, 0x05, 0x08, 0x01, 0x07, 0x3d, 0x00,
];

pub static RIGHT_PAWS: [u8; 150] = [
    0x96, 0x33, 0x00, 0x02, 0x80, 0x05, 0x00, 0x01, 0x80, 0x02, 0x40, 0x04, 0x20, 0x04, 0x10, 0x83,
    0x08, 0x04, 0x02, 0x02, 0x01, 0x85, 0x02, 0x0c, 0x30, 0x40, 0x80, 0x2e, 0x00, 0x03, 0x80, 0x31,
    0x00, 0x82, 0x1e, 0xe1, 0x02, 0x00, 0x02, 0x01, 0x02, 0x02, 0x01, 0x81, 0x02, 0x80, 0x02, 0x00,
    0x02, 0x80, 0x09, 0x00, 0x82, 0x80, 0x00, 0x02, 0x30, 0x02, 0x00, 0x8a, 0x01, 0xe1, 0x1a, 0x06,
    0x09, 0x31, 0x35, 0x01, 0x8a, 0x7c, 0x02, 0x00, 0x04, 0x80, 0x04, 0x40, 0x04, 0x20, 0x04, 0x10,
    0x05, 0x08, 0x05, 0x04, 0x04, 0x02, 0x04, 0x01, 0x33, 0x00, 0x84, 0x80, 0x70, 0x0c, 0x03, 0x02,
    0x00, 0x88, 0x18, 0x06, 0x05, 0x98, 0x99, 0x84, 0xc3, 0x7c, 0x02, 0x41, 0x02, 0x40, 0x84, 0x20,
    0x21, 0x22, 0x12, 0x03, 0x11, 0x01, 0x09, 0x04, 0x08, 0x06, 0x04, 0x03, 0x02, 0x04, 0x01, 0x36,
    0x00, 0x05, 0x80, 0x05, 0x40, 0x05, 0x20, 0x05, 0x10, 0x05, 0x08, 0x05, 0x04, 0x82, 0x02, 0x03,
    0x02, 0x02, 0x06, 0x01, 0x47, 0x00,
];

pub static RIGHT_TAP_0: [u8; 180] = [
    0xb4, 0x33, 0x00, 0x02, 0x80, 0x05, 0x00, 0x01, 0x80, 0x02, 0x40, 0x04, 0x20, 0x04, 0x10, 0x83,
    0x08, 0x04, 0x02, 0x02, 0x01, 0x85, 0x02, 0x0c, 0x30, 0x40, 0x80, 0x07, 0x00, 0x04, 0xf8, 0x05,
    0x00, 0x02, 0x80, 0x1c, 0x00, 0x03, 0x80, 0x31, 0x00, 0x82, 0x1e, 0xe1, 0x02, 0x00, 0x02, 0x01,
    0x02, 0x02, 0x01, 0x81, 0x02, 0x80, 0x02, 0x00, 0x02, 0x80, 0x09, 0x00, 0x82, 0x80, 0x00, 0x02,
    0x30, 0x02, 0x00, 0x02, 0x01, 0x8e, 0x02, 0x04, 0x08, 0x10, 0x20, 0x43, 0x87, 0x07, 0x01, 0x00,
    0xb8, 0xbc, 0xbe, 0x9f, 0x02, 0x5f, 0x82, 0x4f, 0x4c, 0x04, 0x20, 0x04, 0x10, 0x05, 0x08, 0x05,
    0x04, 0x04, 0x02, 0x04, 0x01, 0x33, 0x00, 0x84, 0x80, 0x70, 0x0c, 0x03, 0x02, 0x00, 0x88, 0x18,
    0x06, 0x05, 0x98, 0x99, 0x84, 0x43, 0x7c, 0x02, 0x41, 0x02, 0x40, 0x84, 0x20, 0x21, 0x22, 0x12,
    0x03, 0x11, 0x01, 0x09, 0x04, 0x08, 0x02, 0x04, 0x02, 0x08, 0x05, 0x10, 0x85, 0x11, 0x0f, 0x01,
    0x3d, 0x7c, 0x05, 0xfc, 0x82, 0x3c, 0x0c, 0x2e, 0x00, 0x05, 0x80, 0x05, 0x40, 0x05, 0x20, 0x05,
    0x10, 0x05, 0x08, 0x05, 0x04, 0x82, 0x02, 0x03, 0x02, 0x02, 0x06, 0x01, 0x24, 0x00, 0x01, 0x01,
    0x02, 0x03, 0x20, 0x00,
];

pub static RIGHT_TAP_1: [u8; 153] = [
    0x99, 0x33, 0x00, 0x02, 0x80, 0x05, 0x00, 0x01, 0x80, 0x02, 0x40, 0x04, 0x20, 0x04, 0x10, 0x83,
    0x08, 0x04, 0x02, 0x02, 0x01, 0x85, 0x02, 0x0c, 0x30, 0x40, 0x80, 0x2e, 0x00, 0x03, 0x80, 0x31,
    0x00, 0x82, 0x1e, 0xe1, 0x02, 0x00, 0x02, 0x01, 0x02, 0x02, 0x01, 0x01, 0x04, 0x00, 0x02, 0x80,
    0x09, 0x00, 0x82, 0x80, 0x00, 0x02, 0x30, 0x02, 0x00, 0x8a, 0x01, 0xe1, 0x1a, 0x06, 0x09, 0x31,
    0x35, 0x01, 0x8a, 0x7c, 0x02, 0x00, 0x04, 0x80, 0x04, 0x40, 0x04, 0x20, 0x04, 0x10, 0x05, 0x08,
    0x05, 0x04, 0x04, 0x02, 0x04, 0x01, 0x33, 0x00, 0x84, 0x80, 0x70, 0x0c, 0x03, 0x0a, 0x00, 0x02,
    0x01, 0x86, 0x00, 0x40, 0xa0, 0x21, 0x22, 0x12, 0x03, 0x11, 0x01, 0x09, 0x04, 0x08, 0x06, 0x04,
    0x03, 0x02, 0x04, 0x01, 0x36, 0x00, 0x05, 0x80, 0x05, 0x40, 0x05, 0x20, 0x05, 0x10, 0x05, 0x08,
    0x05, 0x04, 0x82, 0x02, 0x03, 0x02, 0x7a, 0x04, 0x79, 0x82, 0x39, 0x31, 0x02, 0x02, 0x02, 0x04,
    0x03, 0x08, 0x02, 0x88, 0x82, 0x87, 0x80, 0x3c, 0x00,
];

// Left-aligned cat
pub static LEFT_IDLE_0: [u8; 142] = [
    0x8e, 0x03, 0x80, 0x2e, 0x00, 0x84, 0x80, 0x40, 0x30, 0x08, 0x03, 0x04, 0x02, 0x08, 0x05, 0x10,
    0x04, 0x20, 0x02, 0x40, 0x01, 0x80, 0x3d, 0x00, 0x04, 0x01, 0x04, 0x02, 0x05, 0x04, 0x05, 0x08,
    0x04, 0x10, 0x04, 0x20, 0x04, 0x40, 0x04, 0x80, 0x03, 0x00, 0x87, 0x80, 0x40, 0x20, 0x10, 0x08,
    0x04, 0xc2, 0x02, 0xc1, 0x82, 0xc0, 0x00, 0x02, 0x30, 0x82, 0x00, 0x80, 0x09, 0x00, 0x02, 0x80,
    0x04, 0x00, 0x01, 0x01, 0x05, 0x02, 0x83, 0x82, 0x64, 0x18, 0x56, 0x00, 0x02, 0x01, 0x82, 0x0f,
    0x11, 0x05, 0x10, 0x02, 0x08, 0x02, 0x04, 0x04, 0x08, 0x01, 0x09, 0x03, 0x11, 0x88, 0x12, 0x22,
    0x21, 0xa0, 0x40, 0x00, 0x01, 0x0d, 0x03, 0x0c, 0x07, 0x00, 0x84, 0x03, 0x04, 0x38, 0xc0, 0x6d,
    0x00, 0x01, 0x07, 0x05, 0x08, 0x02, 0x04, 0x02, 0x02, 0x06, 0x01, 0x02, 0x02, 0x82, 0x03, 0x02,
    0x05, 0x04, 0x05, 0x08, 0x05, 0x10, 0x05, 0x20, 0x05, 0x40, 0x05, 0x80, 0x11, 0x00,
];

pub static LEFT_IDLE_1: [u8; 145] = [
    0x91, 0x03, 0x80, 0x2e, 0x00, 0x84, 0x80, 0x40, 0x38, 0x04, 0x03, 0x02, 0x01, 0x04, 0x02, 0x08,
    0x04, 0x10, 0x04, 0x20, 0x02, 0x40, 0x01, 0x80, 0x3d, 0x00, 0x04, 0x01, 0x04, 0x02, 0x05, 0x04,
    0x05, 0x08, 0x04, 0x10, 0x04, 0x20, 0x04, 0x40, 0x04, 0x80, 0x03, 0x00, 0x87, 0x80, 0x40, 0x20,
    0x10, 0x08, 0x04, 0xc2, 0x02, 0xc1, 0x82, 0xc0, 0x00, 0x02, 0x30, 0x82, 0x00, 0x80, 0x09, 0x00,
    0x02, 0x80, 0x04, 0x00, 0x01, 0x01, 0x04, 0x02, 0x02, 0x01, 0x82, 0xe2, 0x1c, 0x56, 0x00, 0x02,
    0x01, 0x82, 0x0f, 0x11, 0x05, 0x10, 0x02, 0x08, 0x02, 0x04, 0x04, 0x08, 0x01, 0x09, 0x03, 0x11,
    0x88, 0x12, 0x22, 0x21, 0xa0, 0x40, 0x00, 0x01, 0x0d, 0x03, 0x0c, 0x07, 0x00, 0x84, 0x03, 0x0c,
    0x70, 0x80, 0x6d, 0x00, 0x01, 0x07, 0x05, 0x08, 0x02, 0x04, 0x02, 0x02, 0x06, 0x01, 0x02, 0x02,
    0x82, 0x03, 0x02, 0x05, 0x04, 0x05, 0x08, 0x05, 0x10, 0x05, 0x20, 0x05, 0x40, 0x05, 0x80, 0x11,
    0x00,
];

pub static LEFT_IDLE_2: [u8; 152] = [
    0x98, 0x03, 0x80, 0x2e, 0x00, 0x85, 0x80, 0x40, 0x30, 0x0c, 0x02, 0x02, 0x01, 0x83, 0x02, 0x04,
    0x08, 0x04, 0x10, 0x04, 0x20, 0x02, 0x40, 0x01, 0x80, 0x05, 0x00, 0x02, 0x80, 0x36, 0x00, 0x04,
    0x01, 0x04, 0x02, 0x05, 0x04, 0x05, 0x08, 0x04, 0x10, 0x04, 0x20, 0x04, 0x40, 0x04, 0x80, 0x03,
    0x00, 0x87, 0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0xc2, 0x02, 0xc1, 0x82, 0xc0, 0x00, 0x02, 0x30,
    0x82, 0x00, 0x80, 0x09, 0x00, 0x02, 0x80, 0x04, 0x00, 0x01, 0x01, 0x02, 0x02, 0x02, 0x01, 0x02,
    0x00, 0x82, 0xe1, 0x1e, 0x56, 0x00, 0x02, 0x01, 0x82, 0x0f, 0x11, 0x05, 0x10, 0x02, 0x08, 0x02,
    0x04, 0x04, 0x08, 0x01, 0x09, 0x03, 0x11, 0x88, 0x12, 0x22, 0x21, 0xa0, 0x40, 0x00, 0x01, 0x0d,
    0x03, 0x0c, 0x07, 0x00, 0x84, 0x03, 0x0c, 0x70, 0x80, 0x6d, 0x00, 0x01, 0x07, 0x05, 0x08, 0x02,
    0x04, 0x02, 0x02, 0x06, 0x01, 0x02, 0x02, 0x82, 0x03, 0x02, 0x05, 0x04, 0x05, 0x08, 0x05, 0x10,
    0x05, 0x20, 0x05, 0x40, 0x05, 0x80, 0x11, 0x00,
];

pub static LEFT_IDLE_3: [u8; 138] = [
    0x8a, 0x03, 0x80, 0x2f, 0x00, 0x84, 0x80, 0x60, 0x18, 0x04, 0x02, 0x02, 0x83, 0x04, 0x08, 0x10,
    0x04, 0x20, 0x04, 0x40, 0x02, 0x80, 0x3e, 0x00, 0x04, 0x01, 0x04, 0x02, 0x05, 0x04, 0x05, 0x08,
    0x04, 0x10, 0x04, 0x20, 0x04, 0x40, 0x04, 0x80, 0x04, 0x00, 0x86, 0x80, 0x40, 0x20, 0x10, 0x08,
    0x84, 0x02, 0x82, 0x82, 0x81, 0x00, 0x02, 0x60, 0x10, 0x00, 0x82, 0x01, 0x02, 0x02, 0x04, 0x02,
    0x02, 0x02, 0x01, 0x82, 0xc2, 0x3c, 0x56, 0x00, 0x02, 0x01, 0x82, 0x0f, 0x11, 0x05, 0x10, 0x02,
    0x09, 0x02, 0x05, 0x04, 0x08, 0x01, 0x0b, 0x03, 0x12, 0x88, 0x14, 0x24, 0x22, 0xa0, 0x40, 0x00,
    0x03, 0x1b, 0x03, 0x18, 0x07, 0x00, 0x84, 0x06, 0x19, 0x70, 0x80, 0x6d, 0x00, 0x01, 0x07, 0x05,
    0x08, 0x02, 0x04, 0x02, 0x02, 0x06, 0x01, 0x02, 0x02, 0x82, 0x03, 0x02, 0x05, 0x04, 0x05, 0x08,
    0x05, 0x10, 0x05, 0x20, 0x05, 0x40, 0x05, 0x80, 0x11, 0x00,
];

pub static LEFT_PAWS: [u8; 148] = [
    0x94, 0x03, 0x80, 0x2e, 0x00, 0x85, 0x80, 0x40, 0x30, 0x0c, 0x02, 0x02, 0x01, 0x83, 0x02, 0x04,
    0x08, 0x04, 0x10, 0x04, 0x20, 0x02, 0x40, 0x01, 0x80, 0x05, 0x00, 0x02, 0x80, 0x36, 0x00, 0x04,
    0x01, 0x04, 0x02, 0x05, 0x04, 0x05, 0x08, 0x04, 0x10, 0x04, 0x20, 0x04, 0x40, 0x04, 0x80, 0x02,
    0x00, 0x8a, 0x7c, 0x8a, 0x01, 0x35, 0x31, 0x09, 0x06, 0x1a, 0xe1, 0x01, 0x02, 0x00, 0x02, 0x30,
    0x82, 0x00, 0x80, 0x09, 0x00, 0x02, 0x80, 0x02, 0x00, 0x02, 0x80, 0x01, 0x81, 0x02, 0x02, 0x02,
    0x01, 0x02, 0x00, 0x82, 0xe1, 0x1e, 0x56, 0x00, 0x04, 0x01, 0x03, 0x02, 0x06, 0x04, 0x04, 0x08,
    0x01, 0x09, 0x03, 0x11, 0x84, 0x12, 0x22, 0x21, 0x20, 0x02, 0x40, 0x02, 0x41, 0x88, 0x7c, 0xc3,
    0x84, 0x99, 0x98, 0x05, 0x06, 0x18, 0x02, 0x00, 0x84, 0x03, 0x0c, 0x70, 0x80, 0x77, 0x00, 0x06,
    0x01, 0x02, 0x02, 0x82, 0x03, 0x02, 0x05, 0x04, 0x05, 0x08, 0x05, 0x10, 0x05, 0x20, 0x05, 0x40,
    0x05, 0x80, 0x11, 0x00,
];

pub static LEFT_TAP_0: [u8; 178] = [
    0xb2, 0x03, 0x80, 0x1c, 0x00, 0x02, 0x80, 0x05, 0x00, 0x04, 0xf8, 0x07, 0x00, 0x85, 0x80, 0x40,
    0x30, 0x0c, 0x02, 0x02, 0x01, 0x83, 0x02, 0x04, 0x08, 0x04, 0x10, 0x04, 0x20, 0x02, 0x40, 0x01,
    0x80, 0x05, 0x00, 0x02, 0x80, 0x36, 0x00, 0x04, 0x01, 0x04, 0x02, 0x05, 0x04, 0x05, 0x08, 0x04,
    0x10, 0x04, 0x20, 0x82, 0x4c, 0x4f, 0x02, 0x5f, 0x8e, 0x9f, 0xbe, 0xbc, 0xb8, 0x00, 0x01, 0x07,
    0x87, 0x43, 0x20, 0x10, 0x08, 0x04, 0x02, 0x02, 0x01, 0x02, 0x00, 0x02, 0x30, 0x82, 0x00, 0x80,
    0x09, 0x00, 0x02, 0x80, 0x02, 0x00, 0x02, 0x80, 0x01, 0x81, 0x02, 0x02, 0x02, 0x01, 0x02, 0x00,
    0x82, 0xe1, 0x1e, 0x4e, 0x00, 0x82, 0x0c, 0x3c, 0x05, 0xfc, 0x85, 0x7c, 0x3d, 0x01, 0x0f, 0x11,
    0x05, 0x10, 0x02, 0x08, 0x02, 0x04, 0x04, 0x08, 0x01, 0x09, 0x03, 0x11, 0x84, 0x12, 0x22, 0x21,
    0x20, 0x02, 0x40, 0x02, 0x41, 0x88, 0x7c, 0x43, 0x84, 0x99, 0x98, 0x05, 0x06, 0x18, 0x02, 0x00,
    0x84, 0x03, 0x0c, 0x70, 0x80, 0x50, 0x00, 0x02, 0x03, 0x01, 0x01, 0x24, 0x00, 0x06, 0x01, 0x02,
    0x02, 0x82, 0x03, 0x02, 0x05, 0x04, 0x05, 0x08, 0x05, 0x10, 0x05, 0x20, 0x05, 0x40, 0x05, 0x80,
    0x11, 0x00,
];

pub static LEFT_TAP_1: [u8; 151] = [
    0x97, 0x03, 0x80, 0x2e, 0x00, 0x85, 0x80, 0x40, 0x30, 0x0c, 0x02, 0x02, 0x01, 0x83, 0x02, 0x04,
    0x08, 0x04, 0x10, 0x04, 0x20, 0x02, 0x40, 0x01, 0x80, 0x05, 0x00, 0x02, 0x80, 0x36, 0x00, 0x04,
    0x01, 0x04, 0x02, 0x05, 0x04, 0x05, 0x08, 0x04, 0x10, 0x04, 0x20, 0x04, 0x40, 0x04, 0x80, 0x02,
    0x00, 0x8a, 0x7c, 0x8a, 0x01, 0x35, 0x31, 0x09, 0x06, 0x1a, 0xe1, 0x01, 0x02, 0x00, 0x02, 0x30,
    0x82, 0x00, 0x80, 0x09, 0x00, 0x02, 0x80, 0x04, 0x00, 0x01, 0x01, 0x02, 0x02, 0x02, 0x01, 0x02,
    0x00, 0x82, 0xe1, 0x1e, 0x56, 0x00, 0x04, 0x01, 0x03, 0x02, 0x06, 0x04, 0x04, 0x08, 0x01, 0x09,
    0x03, 0x11, 0x86, 0x12, 0x22, 0x21, 0xa0, 0x40, 0x00, 0x02, 0x01, 0x0a, 0x00, 0x84, 0x03, 0x0c,
    0x70, 0x80, 0x6c, 0x00, 0x82, 0x80, 0x87, 0x02, 0x88, 0x03, 0x08, 0x02, 0x04, 0x02, 0x02, 0x82,
    0x31, 0x39, 0x04, 0x79, 0x02, 0x7a, 0x82, 0x03, 0x02, 0x05, 0x04, 0x05, 0x08, 0x05, 0x10, 0x05,
    0x20, 0x05, 0x40, 0x05, 0x80, 0x11, 0x00,
];
