//! SSD1306 OLED display driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C, in horizontal
//! addressing mode. Drawing goes to the [`FrameBuffer`]; only
//! [`DisplaySurface::render`] touches the bus.

use echoglyph_core::traits::{DisplaySurface, RenderArea};
use echoglyph_hal::I2cBus;

use crate::error::DisplayError;
use crate::framebuffer::{FrameBuffer, PAGES, WIDTH};

/// Default SSD1306 I2C address
pub const SSD1306_ADDR: u8 = 0x3C;

/// Control byte prefixing command writes
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte prefixing GDDRAM data
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const SET_MEM_MODE: u8 = 0x20;
    pub const SET_COL_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_HORIZ_SCROLL: u8 = 0x26;
    pub const SET_SCROLL: u8 = 0x2E;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA0;
    pub const SET_ENTIRE_ON: u8 = 0xA4;
    pub const SET_ALL_ON: u8 = 0xA5;
    pub const SET_NORM_DISP: u8 = 0xA6;
    pub const SET_INV_DISP: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISP: u8 = 0xAE;
    pub const SET_COM_OUT_DIR: u8 = 0xC0;
    pub const SET_DISP_OFFSET: u8 = 0xD3;
    pub const SET_DISP_CLK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PIN_CFG: u8 = 0xDA;
    pub const SET_VCOM_DESEL: u8 = 0xDB;
}

/// Power-on command sequence for a 128x64 panel with internal charge pump
#[rustfmt::skip]
const INIT_SEQUENCE: &[u8] = &[
    cmd::SET_DISP,                  // off
    cmd::SET_MEM_MODE, 0x00,        // horizontal addressing
    cmd::SET_START_LINE,
    cmd::SET_SEG_REMAP | 0x01,      // column 127 mapped to SEG0
    cmd::SET_MUX_RATIO, (crate::framebuffer::HEIGHT - 1) as u8,
    cmd::SET_COM_OUT_DIR | 0x08,    // scan from COM[N-1] to COM0
    cmd::SET_DISP_OFFSET, 0x00,
    cmd::SET_COM_PIN_CFG, 0x12,
    cmd::SET_DISP_CLK_DIV, 0x80,
    cmd::SET_PRECHARGE, 0xF1,
    cmd::SET_VCOM_DESEL, 0x30,
    cmd::SET_CONTRAST, 0xFF,
    cmd::SET_ENTIRE_ON,             // follow RAM
    cmd::SET_NORM_DISP,
    cmd::SET_CHARGE_PUMP, 0x14,
    cmd::SET_SCROLL,                // deactivate scrolling
    cmd::SET_DISP | 0x01,           // on
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    buffer: FrameBuffer,
    initialized: bool,
}

impl<I2C: I2cBus> Ssd1306<I2C> {
    /// Create a driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, SSD1306_ADDR)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: FrameBuffer::new(),
            initialized: false,
        }
    }

    /// Send one command byte
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .map_err(|_| DisplayError::Communication)
    }

    fn command_list(&mut self, cmds: &[u8]) -> Result<(), DisplayError> {
        for &c in cmds {
            self.command(c)?;
        }
        Ok(())
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.command_list(&[cmd::SET_CONTRAST, contrast])
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        self.command(cmd::SET_DISP | on as u8)
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        if inverted {
            self.command(cmd::SET_INV_DISP)
        } else {
            self.command(cmd::SET_NORM_DISP)
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2cBus> DisplaySurface for Ssd1306<I2C> {
    type Error = DisplayError;

    fn init(&mut self) -> Result<(), DisplayError> {
        self.command_list(INIT_SEQUENCE)?;
        self.initialized = true;
        Ok(())
    }

    fn render_area(&self) -> RenderArea {
        RenderArea::full(WIDTH as u8, PAGES as u8)
    }

    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn draw_char(&mut self, x: i32, y: i32, ch: u8) {
        let mut utf8 = [0u8; 4];
        let text = char::from(ch).encode_utf8(&mut utf8);
        self.buffer.draw_text(x, y, text);
    }

    fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        self.buffer.draw_text(x, y, text);
    }

    fn render(&mut self, area: &RenderArea) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }
        if area.end_column as usize >= WIDTH
            || area.end_page as usize >= PAGES
            || area.start_column > area.end_column
            || area.start_page > area.end_page
        {
            return Err(DisplayError::AreaOutOfBounds);
        }

        self.command_list(&[
            cmd::SET_COL_ADDR,
            area.start_column,
            area.end_column,
            cmd::SET_PAGE_ADDR,
            area.start_page,
            area.end_page,
        ])?;

        let columns = area.start_column as usize..=area.end_column as usize;
        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;
        for page in area.start_page as usize..=area.end_page as usize {
            let row = &self.buffer.page(page)[columns.clone()];
            data[1..=row.len()].copy_from_slice(row);
            self.i2c
                .write(self.address, &data[..=row.len()])
                .map_err(|_| DisplayError::Communication)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl I2cBus for MockI2c {
        type Error = ();

        fn write(&mut self, addr: u8, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            self.writes.push((addr, data.to_vec()));
            Ok(())
        }

        fn write_read(&mut self, _addr: u8, _write: &[u8], _read: &mut [u8]) -> Result<(), ()> {
            Ok(())
        }
    }

    fn commands(writes: &[(u8, Vec<u8>)]) -> Vec<u8> {
        writes
            .iter()
            .filter(|(_, w)| w[0] == CONTROL_COMMAND)
            .map(|(_, w)| w[1])
            .collect()
    }

    fn ready() -> Ssd1306<MockI2c> {
        let mut display = Ssd1306::new(MockI2c::default());
        display.init().unwrap();
        display.i2c.writes.clear();
        display
    }

    #[test]
    fn test_init_sequence() {
        let mut display = Ssd1306::new(MockI2c::default());
        display.init().unwrap();
        assert!(display.is_initialized());

        let writes = &display.i2c.writes;
        assert!(writes.iter().all(|(addr, w)| *addr == 0x3C && w.len() == 2));
        let cmds = commands(writes);
        assert_eq!(cmds.first(), Some(&0xAE));
        assert_eq!(cmds.last(), Some(&0xAF));
        assert_eq!(&cmds[1..3], &[0x20, 0x00]);
        assert_eq!(cmds.len(), INIT_SEQUENCE.len());
    }

    #[test]
    fn test_init_failure() {
        let mut display = Ssd1306::new(MockI2c {
            fail: true,
            ..Default::default()
        });
        assert_eq!(display.init(), Err(DisplayError::Communication));
        assert!(!display.is_initialized());
    }

    #[test]
    fn test_render_before_init() {
        let mut display = Ssd1306::new(MockI2c::default());
        let area = display.render_area();
        assert_eq!(display.render(&area), Err(DisplayError::NotInitialized));
        assert!(display.i2c.writes.is_empty());
    }

    #[test]
    fn test_full_render() {
        let mut display = ready();
        display.draw_char(10, 10, b'7');
        let area = display.render_area();
        assert_eq!(area.buffer_length(), 1024);
        display.render(&area).unwrap();

        let writes = &display.i2c.writes;
        assert_eq!(commands(writes), vec![0x21, 0, 127, 0x22, 0, 7]);

        let pages: Vec<&Vec<u8>> = writes
            .iter()
            .map(|(_, w)| w)
            .filter(|w| w[0] == CONTROL_DATA)
            .collect();
        assert_eq!(pages.len(), 8);
        assert!(pages.iter().all(|p| p.len() == WIDTH + 1));

        let sent: Vec<u8> = pages.iter().flat_map(|p| p[1..].iter().copied()).collect();
        assert_eq!(sent.as_slice(), display.buffer().as_bytes().as_slice());
        assert!(sent.iter().any(|b| *b != 0));
    }

    #[test]
    fn test_partial_render() {
        let mut display = ready();
        let area = RenderArea {
            start_column: 8,
            end_column: 15,
            start_page: 1,
            end_page: 2,
        };
        display.render(&area).unwrap();
        let data: Vec<_> = display
            .i2c
            .writes
            .iter()
            .filter(|(_, w)| w[0] == CONTROL_DATA)
            .collect();
        assert_eq!(data.len(), 2);
        assert!(data.iter().all(|(_, w)| w.len() == 9));
    }

    #[test]
    fn test_render_out_of_bounds() {
        let mut display = ready();
        let area = RenderArea::full(129, 8);
        assert_eq!(display.render(&area), Err(DisplayError::AreaOutOfBounds));
    }

    #[test]
    fn test_clear_and_draw_touch_only_buffer() {
        let mut display = ready();
        display.draw_string(5, 0, "  LED Verde  ");
        assert!(display.buffer().as_bytes().iter().any(|b| *b != 0));
        display.clear();
        assert!(display.buffer().as_bytes().iter().all(|b| *b == 0));
        assert!(display.i2c.writes.is_empty());
    }

    #[test]
    fn test_control_commands() {
        let mut display = ready();
        display.set_contrast(0x7F).unwrap();
        display.set_display_on(false).unwrap();
        display.set_display_on(true).unwrap();
        display.set_inverted(true).unwrap();
        assert_eq!(
            commands(&display.i2c.writes),
            vec![0x81, 0x7F, 0xAE, 0xAF, 0xA7]
        );
    }
}
