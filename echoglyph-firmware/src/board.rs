//! Board definition
//!
//! Pin map and bus settings of the reference board. The pin numbers are
//! mirrored by the `p.PIN_n` peripherals taken in `main`; validation
//! keeps the two from drifting apart silently.

use echoglyph_core::config::BoardPins;
use echoglyph_hal::i2c::I2cConfig;
use echoglyph_hal::uart::UartConfig;
use echoglyph_hal_rp2040::gpio::{validate_board, GpioAllocator, PinError};

/// Pin map
pub const PINS: BoardPins = BoardPins::DEFAULT;

/// Display bus: 400 kHz with the internal pull-ups on
pub const DISPLAY_I2C: I2cConfig = I2cConfig::FAST;

/// Console: 115200 8N1
pub fn console_uart() -> UartConfig {
    UartConfig::default()
}

/// Check the pin map; claims every pin in a fresh allocator
pub fn validate() -> Result<GpioAllocator, PinError> {
    validate_board(&PINS)
}
