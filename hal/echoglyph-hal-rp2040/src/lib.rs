//! RP2040-specific HAL for the echoglyph firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `echoglyph-hal` traits, plus RP2040-specific functionality:
//!
//! - GPIO allocation and board pin map validation
//! - Pin function checks for the UART and I2C peripherals
//! - Console UART halves
//! - PIO-based WS2812 pixel chain

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod uart;
pub mod ws2812;

// Re-export shared traits from echoglyph-hal for convenience
pub use echoglyph_hal::{I2cBus, InputPin, OutputPin, PixelStrip, UartRx, UartTx};
