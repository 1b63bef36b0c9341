//! Glyph matrix trait

use crate::glyph::GlyphPattern;

/// 5x5 LED grid showing one glyph at a time
#[allow(async_fn_in_trait)]
pub trait GlyphMatrix {
    /// Error type for transfers to the LED chain
    type Error;

    /// Replace the whole grid with `pattern`
    async fn show(&mut self, pattern: &GlyphPattern) -> Result<(), Self::Error>;
}
