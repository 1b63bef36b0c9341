//! Page-packed 1 bpp framebuffer
//!
//! Byte `page * WIDTH + x` holds pixels (x, page*8) to (x, page*8 + 7),
//! LSB on top. This is the layout the SSD1306 expects in horizontal
//! addressing mode, so a page can be sent without reshuffling.

use core::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

/// Panel width in pixels
pub const WIDTH: usize = 128;
/// Panel height in pixels
pub const HEIGHT: usize = 64;
/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;
/// Framebuffer size in bytes
pub const BUFFER_LEN: usize = WIDTH * PAGES;

/// 128x64 monochrome framebuffer
pub struct FrameBuffer {
    buf: [u8; BUFFER_LEN],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            buf: [0; BUFFER_LEN],
        }
    }

    /// Zero every pixel
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let idx = (y / 8) * WIDTH + x;
        let mask = 1 << (y % 8);
        if on {
            self.buf[idx] |= mask;
        } else {
            self.buf[idx] &= !mask;
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.buf[(y / 8) * WIDTH + x] & (1 << (y % 8)) != 0
    }

    /// Raw bytes of one page
    pub fn page(&self, page: usize) -> &[u8] {
        &self.buf[page * WIDTH..(page + 1) * WIDTH]
    }

    pub fn as_bytes(&self) -> &[u8; BUFFER_LEN] {
        &self.buf
    }

    /// Draw `text` with its top-left corner at (`x`, `y`)
    ///
    /// Glyph cells are opaque: unlit pixels inside a cell are cleared.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        // Drawing into memory cannot fail
        let _ = Text::with_baseline(text, Point::new(x, y), text_style(), Baseline::Top)
            .draw(self);
    }
}

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_5X8)
        .text_color(BinaryColor::On)
        .background_color(BinaryColor::Off)
        .build()
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel(point.x as usize, point.y as usize, color.is_on());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels(fb: &FrameBuffer) -> usize {
        fb.as_bytes().iter().map(|b| b.count_ones() as usize).sum()
    }

    #[test]
    fn test_page_layout() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(3, 9, true);
        assert_eq!(fb.page(1)[3], 0b10);
        assert!(fb.pixel(3, 9));

        fb.set_pixel(3, 9, false);
        assert_eq!(lit_pixels(&fb), 0);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(WIDTH, 0, true);
        fb.set_pixel(0, HEIGHT, true);
        assert_eq!(lit_pixels(&fb), 0);
        assert!(!fb.pixel(500, 500));
    }

    #[test]
    fn test_text_lands_in_its_cell() {
        let mut fb = FrameBuffer::new();
        fb.draw_text(10, 10, "7");
        assert!(lit_pixels(&fb) > 0);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if fb.pixel(x, y) {
                    assert!((10..15).contains(&x) && (10..18).contains(&y), "({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn test_text_background_is_opaque() {
        let mut fb = FrameBuffer::new();
        for y in 0..8 {
            for x in 5..10 {
                fb.set_pixel(x, y, true);
            }
        }
        fb.draw_text(5, 0, " ");
        assert_eq!(lit_pixels(&fb), 0);
    }

    #[test]
    fn test_empty_text_changes_nothing() {
        let mut fb = FrameBuffer::new();
        fb.set_pixel(6, 1, true);
        fb.draw_text(5, 0, "");
        assert_eq!(lit_pixels(&fb), 1);
    }

    #[test]
    fn test_clear() {
        let mut fb = FrameBuffer::new();
        fb.draw_text(0, 0, "ligado");
        fb.clear();
        assert_eq!(lit_pixels(&fb), 0);
    }
}
