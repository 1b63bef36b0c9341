//! Collaborator traits
//!
//! The dispatcher and the echo loop only talk to the panel and the LED
//! matrix through these. Drivers live in `echoglyph-drivers`.

pub mod display;
pub mod matrix;

pub use display::{DisplaySurface, RenderArea};
pub use matrix::GlyphMatrix;
