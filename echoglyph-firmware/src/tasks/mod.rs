//! Embassy async tasks
//!
//! The button dispatcher runs on the interrupt executor, the echo loop
//! in thread mode. They share only the display/console context.

use echoglyph_core::SharedContext;
use echoglyph_drivers::glyph_matrix::MATRIX_PIXELS;
use echoglyph_drivers::{GlyphMatrixDriver, Ssd1306};
use echoglyph_hal_rp2040::i2c::RpI2c;
use echoglyph_hal_rp2040::uart::ConsoleTx;
use echoglyph_hal_rp2040::ws2812::PioWs2812;
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

pub mod buttons;
pub mod echo;

pub use buttons::button_task;
pub use echo::echo_task;

/// The OLED on I2C1
pub type Display = Ssd1306<RpI2c<'static, I2C1>>;

/// The 5x5 matrix on PIO0 state machine 0
pub type Matrix = GlyphMatrixDriver<PioWs2812<'static, PIO0, 0, MATRIX_PIXELS>>;

/// State shared by both executors
pub type Context = SharedContext<CriticalSectionRawMutex, Display, ConsoleTx<'static>>;
