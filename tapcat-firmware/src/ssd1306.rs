//! SSD1306 OLED display driver
//!
//! Driver for 128x32 SSD1306 panels over I2C. Rendering happens into an
//! in-memory [`Canvas`] through the synchronous [`RawDisplay`] interface;
//! [`Ssd1306::sync`] then pushes power changes and dirty pages to the panel.

use embedded_hal_async::i2c::I2c;

use tapcat_display::{text_dimensions, Canvas, GlyphGrid, PAGES, WIDTH};
use tapcat_hal::{GlyphSink, RawDisplay, Rotation};

/// SSD1306 I2C address
const SSD1306_ADDR: u8 = 0x3C;

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_COLUMN_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_NORMAL: u8 = 0xA0;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_INC: u8 = 0xC0;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Status screen text size, drawn portrait
const STATUS_COLS: usize = text_dimensions(Rotation::R270).0 as usize;
const STATUS_LINES: usize = text_dimensions(Rotation::R270).1 as usize;

/// Status screen glyph grid
pub type StatusGrid = GlyphGrid<STATUS_COLS, STATUS_LINES>;

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    /// Frame buffer the renderer draws into
    canvas: Canvas,
    /// Glyph codes for the status screen
    glyphs: StatusGrid,
    /// Power state last sent to the panel
    panel_on: bool,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            canvas: Canvas::new(),
            glyphs: StatusGrid::new(),
            panel_on: false,
        }
    }

    /// Initialize the display
    ///
    /// Upright and half-turn orientations are done by the panel's segment
    /// remap and COM scan direction. Quarter turns only affect how the
    /// status glyph grid is laid out.
    pub async fn init(&mut self, rotation: Rotation) -> Result<(), I2C::Error> {
        let (seg, com) = match rotation {
            Rotation::R180 => (cmd::SET_SEG_NORMAL, cmd::SET_COM_SCAN_INC),
            _ => (cmd::SET_SEG_REMAP, cmd::SET_COM_SCAN_DEC),
        };

        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_MUX_RATIO,
            0x1F, // 32 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14,
            cmd::SET_MEMORY_MODE,
            0x00, // Horizontal addressing
            seg,
            com,
            cmd::SET_COM_PINS,
            0x02, // Sequential COM config for 32 lines
            cmd::SET_CONTRAST,
            0x8F,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }
        self.panel_on = true;

        Ok(())
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(SSD1306_ADDR, &[CONTROL_COMMAND, cmd]).await
    }

    /// Push pending power changes and the frame buffer to the panel
    ///
    /// Returns `true` if frame data was sent.
    pub async fn sync(&mut self) -> Result<bool, I2C::Error> {
        let want_on = self.canvas.is_on();
        if want_on != self.panel_on {
            self.set_display_on(want_on).await?;
        }

        if !want_on || !self.canvas.is_dirty() {
            return Ok(false);
        }

        self.flush().await?;
        self.canvas.mark_clean();
        Ok(true)
    }

    /// Flush the whole frame buffer to the display
    async fn flush(&mut self) -> Result<(), I2C::Error> {
        let window: &[u8] = &[
            cmd::SET_COLUMN_ADDR,
            0,
            (WIDTH - 1) as u8,
            cmd::SET_PAGE_ADDR,
            0,
            (PAGES - 1) as u8,
        ];
        for &c in window {
            self.command(c).await?;
        }

        for page in 0..PAGES {
            let Some(bytes) = self.canvas.page(page) else {
                break;
            };
            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(bytes);
            self.i2c.write(SSD1306_ADDR, &data).await?;
        }

        Ok(())
    }

    /// Turn display on/off
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.command(cmd::DISPLAY_ON).await?;
        } else {
            self.command(cmd::DISPLAY_OFF).await?;
        }
        self.panel_on = on;
        Ok(())
    }

    /// Status glyph grid
    pub fn glyphs(&self) -> &StatusGrid {
        &self.glyphs
    }

    /// Mutable status glyph grid
    pub fn glyphs_mut(&mut self) -> &mut StatusGrid {
        &mut self.glyphs
    }
}

impl<I2C> RawDisplay for Ssd1306<I2C> {
    fn write_raw_byte(&mut self, byte: u8, index: u16) {
        self.canvas.write_raw_byte(byte, index);
    }

    fn power_off(&mut self) {
        self.canvas.power_off();
    }

    fn power_on(&mut self) {
        self.canvas.power_on();
    }

    fn is_on(&self) -> bool {
        self.canvas.is_on()
    }
}

impl<I2C> GlyphSink for Ssd1306<I2C> {
    fn set_cursor(&mut self, col: u8, line: u8) {
        self.glyphs.set_cursor(col, line);
    }

    fn write_glyphs(&mut self, codes: &[u8]) {
        self.glyphs.write_glyphs(codes);
    }
}
