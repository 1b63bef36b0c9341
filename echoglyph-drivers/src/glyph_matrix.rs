//! 5x5 WS2812 glyph matrix
//!
//! The 25 pixels are chained in a serpentine starting at the bottom-right
//! corner: the bottom row runs right to left, the next one left to
//! right, and so on upwards.

use echoglyph_core::glyph::{GlyphPattern, MATRIX_SIZE};
use echoglyph_core::traits::GlyphMatrix;
use echoglyph_hal::{PixelStrip, Rgb};

/// Number of pixels in the chain
pub const MATRIX_PIXELS: usize = MATRIX_SIZE * MATRIX_SIZE;

/// Colour of lit cells unless overridden
pub const DEFAULT_COLOR: Rgb = Rgb { r: 0, g: 0, b: 40 };

const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Chain position of the cell at (`row`, `col`), (0, 0) being top-left
pub const fn led_index(row: usize, col: usize) -> usize {
    let r = MATRIX_SIZE - 1 - row;
    if r % 2 == 0 {
        r * MATRIX_SIZE + (MATRIX_SIZE - 1 - col)
    } else {
        r * MATRIX_SIZE + col
    }
}

/// Lay a pattern out in chain order
pub fn frame(pattern: &GlyphPattern, color: Rgb) -> [Rgb; MATRIX_PIXELS] {
    let mut pixels = [OFF; MATRIX_PIXELS];
    for row in 0..MATRIX_SIZE {
        for col in 0..MATRIX_SIZE {
            if pattern.is_lit(row, col) {
                pixels[led_index(row, col)] = color;
            }
        }
    }
    pixels
}

/// Glyph matrix on top of a 25-pixel strip
pub struct GlyphMatrixDriver<S> {
    strip: S,
    color: Rgb,
}

impl<S: PixelStrip<MATRIX_PIXELS>> GlyphMatrixDriver<S> {
    pub fn new(strip: S) -> Self {
        Self::with_color(strip, DEFAULT_COLOR)
    }

    pub fn with_color(strip: S, color: Rgb) -> Self {
        Self { strip, color }
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}

impl<S: PixelStrip<MATRIX_PIXELS>> GlyphMatrix for GlyphMatrixDriver<S> {
    type Error = S::Error;

    async fn show(&mut self, pattern: &GlyphPattern) -> Result<(), S::Error> {
        let pixels = frame(pattern, self.color);
        self.strip.write(&pixels).await
    }
}
