//! echoglyph Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the board-agnostic logic is
//! written against. Chip-specific crates implement them; host tests
//! implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  echoglyph-core / echoglyph-drivers     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  echoglyph-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ echoglyph-hal-│       │  host mocks   │
//! │    rp2040     │       │  (#[cfg(test)])│
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital outputs and edge inputs
//! - [`uart::UartTx`], [`uart::UartRx`] - Console serial link
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`pixel::PixelStrip`] - Addressable LED chains

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod pixel;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use i2c::I2cBus;
pub use pixel::{PixelStrip, Rgb};
pub use uart::{UartRx, UartTx};
