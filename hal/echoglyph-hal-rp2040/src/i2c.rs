//! I2C bus for the display
//!
//! Each RP2040 GPIO can be muxed to exactly one I2C signal: even pins
//! carry SDA, odd pins SCL, and the controller alternates every pair.

use echoglyph_hal::i2c::I2cConfig;
use embassy_rp::i2c::{self, Blocking, I2c, Instance};
use embedded_hal::i2c::I2c as _;

/// I2C peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cId {
    I2c0,
    I2c1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cSignal {
    Sda,
    Scl,
}

/// Determine which I2C signal a given GPIO pin carries
pub fn gpio_to_i2c(gpio: u8) -> Option<(I2cId, I2cSignal)> {
    if gpio >= crate::gpio::GPIO_COUNT as u8 {
        return None;
    }
    let id = if (gpio / 2) % 2 == 0 {
        I2cId::I2c0
    } else {
        I2cId::I2c1
    };
    let signal = if gpio % 2 == 0 {
        I2cSignal::Sda
    } else {
        I2cSignal::Scl
    };
    Some((id, signal))
}

/// Convert the shared config to embassy's
pub fn to_embassy_config(cfg: &I2cConfig) -> i2c::Config {
    let mut out = i2c::Config::default();
    out.frequency = cfg.frequency;
    out.sda_pullup = cfg.internal_pullups;
    out.scl_pullup = cfg.internal_pullups;
    out
}

/// Blocking I2C controller
pub struct RpI2c<'d, T: Instance>(I2c<'d, T, Blocking>);

impl<'d, T: Instance> RpI2c<'d, T> {
    pub fn new(i2c: I2c<'d, T, Blocking>) -> Self {
        Self(i2c)
    }
}

impl<T: Instance> echoglyph_hal::I2cBus for RpI2c<'_, T> {
    type Error = i2c::Error;

    fn write(&mut self, addr: u8, data: &[u8]) -> Result<(), i2c::Error> {
        self.0.write(addr, data)
    }

    fn write_read(&mut self, addr: u8, write: &[u8], read: &mut [u8]) -> Result<(), i2c::Error> {
        self.0.write_read(addr, write, read)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpio_to_i2c() {
        assert_eq!(gpio_to_i2c(0), Some((I2cId::I2c0, I2cSignal::Sda)));
        assert_eq!(gpio_to_i2c(3), Some((I2cId::I2c1, I2cSignal::Scl)));
        assert_eq!(gpio_to_i2c(14), Some((I2cId::I2c1, I2cSignal::Sda)));
        assert_eq!(gpio_to_i2c(15), Some((I2cId::I2c1, I2cSignal::Scl)));
        assert_eq!(gpio_to_i2c(16), Some((I2cId::I2c0, I2cSignal::Sda)));
        assert_eq!(gpio_to_i2c(29), Some((I2cId::I2c0, I2cSignal::Scl)));
        assert_eq!(gpio_to_i2c(30), None);
    }
}
