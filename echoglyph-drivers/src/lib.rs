//! Hardware driver implementations
//!
//! Concrete implementations of the collaborator traits defined in
//! echoglyph-core:
//!
//! - SSD1306 128x64 OLED over I2C ([`Ssd1306`], a [`DisplaySurface`])
//! - 5x5 WS2812 glyph matrix ([`GlyphMatrixDriver`], a [`GlyphMatrix`])
//!
//! [`DisplaySurface`]: echoglyph_core::traits::DisplaySurface
//! [`GlyphMatrix`]: echoglyph_core::traits::GlyphMatrix

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod error;
pub mod framebuffer;
pub mod glyph_matrix;
pub mod ssd1306;

pub use error::DisplayError;
pub use framebuffer::FrameBuffer;
pub use glyph_matrix::GlyphMatrixDriver;
pub use ssd1306::Ssd1306;
