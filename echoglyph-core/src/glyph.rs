//! Digit glyphs for the 5x5 LED matrix
//!
//! Every input byte maps to exactly one of 11 glyphs: the digits `'0'`
//! to `'9'` to their own pattern, everything else to the blank pattern.

/// Matrix edge length in LEDs
pub const MATRIX_SIZE: usize = 5;

/// Number of entries in [`GLYPH_TABLE`]
pub const GLYPH_COUNT: usize = 11;

/// 5x5 bitmap, one byte per row, bit 4 is the leftmost column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphPattern {
    rows: [u8; MATRIX_SIZE],
}

impl GlyphPattern {
    /// All LEDs off
    pub const BLANK: Self = Self::from_rows([0; MATRIX_SIZE]);

    /// Build a pattern from row bitmasks (top row first)
    pub const fn from_rows(rows: [u8; MATRIX_SIZE]) -> Self {
        Self { rows }
    }

    /// Whether the LED at (`row`, `col`) is lit; (0, 0) is top-left
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        if row >= MATRIX_SIZE || col >= MATRIX_SIZE {
            return false;
        }
        self.rows[row] & (1 << (MATRIX_SIZE - 1 - col)) != 0
    }

    /// Number of lit LEDs
    pub fn lit_count(&self) -> u32 {
        self.rows.iter().map(|r| (r & 0x1F).count_ones()).sum()
    }

    pub fn rows(&self) -> &[u8; MATRIX_SIZE] {
        &self.rows
    }
}

/// Digits 0-9 followed by the blank sentinel
#[rustfmt::skip]
pub static GLYPH_TABLE: [GlyphPattern; GLYPH_COUNT] = [
    GlyphPattern::from_rows([0b01110, 0b10001, 0b10001, 0b10001, 0b01110]), // 0
    GlyphPattern::from_rows([0b00100, 0b01100, 0b00100, 0b00100, 0b01110]), // 1
    GlyphPattern::from_rows([0b01110, 0b00001, 0b01110, 0b10000, 0b11111]), // 2
    GlyphPattern::from_rows([0b11110, 0b00001, 0b01110, 0b00001, 0b11110]), // 3
    GlyphPattern::from_rows([0b10010, 0b10010, 0b11111, 0b00010, 0b00010]), // 4
    GlyphPattern::from_rows([0b11111, 0b10000, 0b11110, 0b00001, 0b11110]), // 5
    GlyphPattern::from_rows([0b01110, 0b10000, 0b11110, 0b10001, 0b01110]), // 6
    GlyphPattern::from_rows([0b11111, 0b00001, 0b00010, 0b00100, 0b00100]), // 7
    GlyphPattern::from_rows([0b01110, 0b10001, 0b01110, 0b10001, 0b01110]), // 8
    GlyphPattern::from_rows([0b01110, 0b10001, 0b01111, 0b00001, 0b01110]), // 9
    GlyphPattern::BLANK,
];

/// Index into [`GLYPH_TABLE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphIndex(u8);

impl GlyphIndex {
    /// The blank sentinel (index 10)
    pub const BLANK: Self = Self(10);

    /// Classify an input byte
    pub const fn classify(byte: u8) -> Self {
        match byte {
            b'0'..=b'9' => Self(byte - b'0'),
            _ => Self::BLANK,
        }
    }

    /// Digit value, or None for the blank sentinel
    pub fn digit(self) -> Option<u8> {
        if self.is_blank() {
            None
        } else {
            Some(self.0)
        }
    }

    pub fn is_blank(self) -> bool {
        self == Self::BLANK
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Pattern shown for this index
    pub fn pattern(self) -> &'static GlyphPattern {
        &GLYPH_TABLE[self.get()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_digits_classify_to_themselves() {
        for (i, byte) in (b'0'..=b'9').enumerate() {
            assert_eq!(GlyphIndex::classify(byte).get(), i);
            assert_eq!(GlyphIndex::classify(byte).digit(), Some(i as u8));
        }
    }

    #[test]
    fn test_seven_and_hash() {
        assert_eq!(GlyphIndex::classify(b'7').get(), 7);
        assert_eq!(GlyphIndex::classify(b'#'), GlyphIndex::BLANK);
        assert_eq!(GlyphIndex::classify(b'#').pattern(), &GlyphPattern::BLANK);
    }

    #[test]
    fn test_blank_is_dark() {
        assert_eq!(GlyphIndex::BLANK.pattern().lit_count(), 0);
        assert!(GlyphIndex::BLANK.digit().is_none());
    }

    #[test]
    fn test_digit_patterns_distinct_and_lit() {
        for a in 0..10 {
            assert!(GLYPH_TABLE[a].lit_count() > 0);
            for b in a + 1..10 {
                assert_ne!(GLYPH_TABLE[a], GLYPH_TABLE[b], "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_rows_fit_matrix() {
        for glyph in &GLYPH_TABLE {
            assert!(glyph.rows().iter().all(|r| *r < 1 << MATRIX_SIZE));
        }
    }

    #[test]
    fn test_is_lit_orientation() {
        // Top bar of the seven spans the full width
        let seven = GlyphIndex::classify(b'7').pattern();
        assert!((0..MATRIX_SIZE).all(|c| seven.is_lit(0, c)));
        // Stem of the one sits in the middle column
        let one = GlyphIndex::classify(b'1').pattern();
        assert!(one.is_lit(2, 2));
        assert!(!one.is_lit(2, 0));
        assert!(!one.is_lit(5, 0));
    }

    proptest! {
        #[test]
        fn prop_classification_total(byte in any::<u8>()) {
            let index = GlyphIndex::classify(byte);
            prop_assert!(index.get() < GLYPH_COUNT);
            prop_assert_eq!(byte.is_ascii_digit(), !index.is_blank());
        }
    }
}
