//! Display surface trait for the monochrome panel

/// Rectangle of the panel covered by a blit, in columns and 8-pixel pages
///
/// Computed once at startup and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderArea {
    pub start_column: u8,
    /// Inclusive
    pub end_column: u8,
    pub start_page: u8,
    /// Inclusive
    pub end_page: u8,
}

impl RenderArea {
    /// Area covering a whole panel of `width` columns and `pages` pages
    pub const fn full(width: u8, pages: u8) -> Self {
        Self {
            start_column: 0,
            end_column: width.saturating_sub(1),
            start_page: 0,
            end_page: pages.saturating_sub(1),
        }
    }

    /// Number of columns covered
    pub const fn width(&self) -> usize {
        self.end_column as usize - self.start_column as usize + 1
    }

    /// Number of pages covered
    pub const fn pages(&self) -> usize {
        self.end_page as usize - self.start_page as usize + 1
    }

    /// Bytes of page-packed pixel data in this area
    pub const fn buffer_length(&self) -> usize {
        self.width() * self.pages()
    }
}

/// Pixel surface owning a framebuffer and the transport that blits it
///
/// Drawing operations only touch the buffer; [`DisplaySurface::render`]
/// is the only call that talks to the panel.
pub trait DisplaySurface {
    /// Error type for panel transfers
    type Error;

    /// Send the controller init sequence
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Area covering the whole panel
    fn render_area(&self) -> RenderArea;

    /// Zero the whole buffer
    fn clear(&mut self);

    /// Draw one character with its top-left corner at (`x`, `y`)
    ///
    /// Bytes outside printable ASCII are drawn as the font's replacement
    /// glyph.
    fn draw_char(&mut self, x: i32, y: i32, ch: u8);

    /// Draw a line of text with its top-left corner at (`x`, `y`)
    fn draw_string(&mut self, x: i32, y: i32, text: &str);

    /// Blit the buffer contents covered by `area` to the panel
    fn render(&mut self, area: &RenderArea) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_area_geometry() {
        let area = RenderArea::full(128, 8);
        assert_eq!(area.end_column, 127);
        assert_eq!(area.end_page, 7);
        assert_eq!(area.width(), 128);
        assert_eq!(area.pages(), 8);
        assert_eq!(area.buffer_length(), 1024);
    }

    #[test]
    fn test_partial_area_length() {
        let area = RenderArea {
            start_column: 10,
            end_column: 19,
            start_page: 2,
            end_page: 3,
        };
        assert_eq!(area.buffer_length(), 20);
    }
}
