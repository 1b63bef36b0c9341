//! GPIO allocation and pin wrappers
//!
//! Tracks which GPIO pins are in use to prevent conflicts, and checks
//! that the board pin map routes every peripheral signal to a pin that
//! can carry it.

use echoglyph_core::config::{BoardPins, PinRole};
use embassy_rp::gpio::{Input, Output};
use heapless::FnvIndexSet;

use crate::i2c::{gpio_to_i2c, I2cId, I2cSignal};
use crate::uart::{gpio_to_uart, UartId, UartSignal};

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: usize = 30;

/// Board pin map problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already claimed by another role
    AlreadyTaken(u8),
    /// Pin cannot carry the signal its role needs
    WrongFunction(PinRole),
}

/// GPIO allocator to track pin usage
pub struct GpioAllocator {
    /// Set of allocated GPIO pins
    allocated: FnvIndexSet<u8, 32>,
}

impl Default for GpioAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl GpioAllocator {
    /// Create a new GPIO allocator
    pub fn new() -> Self {
        Self {
            allocated: FnvIndexSet::new(),
        }
    }

    /// Allocate a GPIO pin
    pub fn allocate(&mut self, pin: u8) -> Result<(), PinError> {
        if pin >= GPIO_COUNT as u8 {
            return Err(PinError::InvalidPin(pin));
        }
        if self.allocated.contains(&pin) {
            return Err(PinError::AlreadyTaken(pin));
        }
        self.allocated
            .insert(pin)
            .map_err(|_| PinError::InvalidPin(pin))?;
        Ok(())
    }

    /// Release a GPIO pin
    pub fn release(&mut self, pin: u8) {
        self.allocated.remove(&pin);
    }

    /// Check if a pin is allocated
    pub fn is_allocated(&self, pin: u8) -> bool {
        self.allocated.contains(&pin)
    }

    /// Get the number of allocated pins
    pub fn allocated_count(&self) -> usize {
        self.allocated.len()
    }
}

/// Check a board pin map before any pin is configured
///
/// Every pin must be in range and claimed once; the console must sit on
/// UART0 and the display bus on I2C1.
pub fn validate_board(pins: &BoardPins) -> Result<GpioAllocator, PinError> {
    let mut alloc = GpioAllocator::new();
    for (_, cfg) in pins.assignments() {
        alloc.allocate(cfg.pin)?;
    }

    let routed = [
        (
            PinRole::ConsoleTx,
            gpio_to_uart(pins.console_tx.pin) == Some((UartId::Uart0, UartSignal::Tx)),
        ),
        (
            PinRole::ConsoleRx,
            gpio_to_uart(pins.console_rx.pin) == Some((UartId::Uart0, UartSignal::Rx)),
        ),
        (
            PinRole::DisplaySda,
            gpio_to_i2c(pins.display_sda.pin) == Some((I2cId::I2c1, I2cSignal::Sda)),
        ),
        (
            PinRole::DisplayScl,
            gpio_to_i2c(pins.display_scl.pin) == Some((I2cId::I2c1, I2cSignal::Scl)),
        ),
    ];
    for (role, ok) in routed {
        if !ok {
            return Err(PinError::WrongFunction(role));
        }
    }

    Ok(alloc)
}

/// Push-pull output (LEDs)
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl echoglyph_hal::OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Edge-sensing input (buttons)
pub struct RpInput<'d>(Input<'d>);

impl<'d> RpInput<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self(pin)
    }
}

impl echoglyph_hal::InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }

    async fn wait_for_falling_edge(&mut self) {
        self.0.wait_for_falling_edge().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echoglyph_core::config::PinConfig;

    #[test]
    fn test_allocator() {
        let mut alloc = GpioAllocator::new();

        assert!(alloc.allocate(11).is_ok());
        assert!(alloc.is_allocated(11));

        // Can't allocate same pin twice
        assert_eq!(alloc.allocate(11), Err(PinError::AlreadyTaken(11)));

        // Can allocate different pin
        assert!(alloc.allocate(12).is_ok());
        assert_eq!(alloc.allocated_count(), 2);

        // Release and re-allocate
        alloc.release(11);
        assert!(!alloc.is_allocated(11));
        assert!(alloc.allocate(11).is_ok());

        assert_eq!(alloc.allocate(30), Err(PinError::InvalidPin(30)));
    }

    #[test]
    fn test_default_board_is_valid() {
        let alloc = validate_board(&BoardPins::DEFAULT).unwrap();
        assert_eq!(alloc.allocated_count(), 9);
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        let mut pins = BoardPins::DEFAULT;
        pins.blue_led = PinConfig::new(11);
        assert!(matches!(
            validate_board(&pins),
            Err(PinError::AlreadyTaken(11))
        ));
    }

    #[test]
    fn test_console_on_wrong_pins() {
        let mut pins = BoardPins::DEFAULT;
        pins.console_tx = PinConfig::new(4);
        assert!(matches!(
            validate_board(&pins),
            Err(PinError::WrongFunction(PinRole::ConsoleTx))
        ));
    }

    #[test]
    fn test_display_on_i2c0_rejected() {
        let mut pins = BoardPins::DEFAULT;
        pins.display_sda = PinConfig::with_pullup(16);
        pins.display_scl = PinConfig::with_pullup(17);
        assert!(matches!(
            validate_board(&pins),
            Err(PinError::WrongFunction(PinRole::DisplaySda))
        ));
    }
}
