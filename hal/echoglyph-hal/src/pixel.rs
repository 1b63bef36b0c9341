//! Addressable LED chain abstraction
//!
//! A single-wire WS2812-style chain of `N` pixels. The chip HAL is
//! responsible for the bit timing; callers only hand over colours in
//! chain order.

/// RGB colour as used by the `smart-leds` ecosystem
pub use smart_leds::RGB8 as Rgb;

/// Fixed-length chain of addressable pixels
#[allow(async_fn_in_trait)]
pub trait PixelStrip<const N: usize> {
    /// Error type for transfers
    type Error;

    /// Push one full frame out on the data line
    ///
    /// Index 0 is the pixel closest to the controller.
    async fn write(&mut self, pixels: &[Rgb; N]) -> Result<(), Self::Error>;
}
