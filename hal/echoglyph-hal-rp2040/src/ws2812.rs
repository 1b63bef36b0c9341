//! PIO-based WS2812 driver
//!
//! One state machine shifts 24-bit GRB words out on a single pin. Each
//! bit takes 10 PIO cycles at 8 MHz, giving the 800 kHz WS2812 bit rate.
//! Words are pushed by the CPU; a 25-pixel frame fits in well under a
//! millisecond.

use core::convert::Infallible;

use echoglyph_hal::{PixelStrip, Rgb};
use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::{
    Common, Config, Direction as PioDirection, FifoJoin, Instance, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::Peri;
use embassy_time::Timer;
use fixed::types::U24F8;

/// WS2812 bit rate in Hz
pub const BIT_RATE_HZ: u32 = 800_000;

/// PIO cycles per data bit (T1 + T2 + T3 of the program)
pub const CYCLES_PER_BIT: u32 = 10;

/// Latch time after a frame, in µs
pub const RESET_US: u64 = 60;

/// Clock divider for the state machine at system clock `sys_hz`
pub fn clock_divider(sys_hz: u32) -> U24F8 {
    // Scale to kHz so the product fits the integer part
    U24F8::from_num(sys_hz / 1000) / U24F8::from_num(BIT_RATE_HZ / 1000 * CYCLES_PER_BIT)
}

/// Pack a colour as the chip expects it: G, R, B, MSB first, left-aligned
pub fn pack_grb(color: Rgb) -> u32 {
    (u32::from(color.g) << 24) | (u32::from(color.r) << 16) | (u32::from(color.b) << 8)
}

/// WS2812 chain of `N` pixels on one PIO state machine
pub struct PioWs2812<'d, PIO: Instance, const SM: usize, const N: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize, const N: usize> PioWs2812<'d, PIO, SM, N> {
    /// Load the program and start the state machine on `pin`
    pub fn new<P: PioPin>(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        pin: Peri<'d, P>,
    ) -> Self {
        // T1 = 2, T2 = 5, T3 = 3
        let prg = pio::pio_asm!(
            ".side_set 1",
            ".wrap_target",
            "bitloop:",
            "    out x, 1        side 0 [2]",
            "    jmp !x do_zero  side 1 [1]",
            "    jmp bitloop     side 1 [4]",
            "do_zero:",
            "    nop             side 0 [4]",
            ".wrap"
        );

        let installed = common.load_program(&prg.program);
        let out_pin = common.make_pio_pin(pin);

        let mut cfg = Config::default();
        cfg.use_program(&installed, &[&out_pin]);
        cfg.clock_divider = clock_divider(clk_sys_freq());
        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_pin_dirs(PioDirection::Out, &[&out_pin]);
        sm.set_enable(true);

        Self { sm }
    }
}

impl<PIO: Instance, const SM: usize, const N: usize> PixelStrip<N> for PioWs2812<'_, PIO, SM, N> {
    type Error = Infallible;

    async fn write(&mut self, pixels: &[Rgb; N]) -> Result<(), Infallible> {
        let tx = self.sm.tx();
        for pixel in pixels {
            tx.wait_push(pack_grb(*pixel)).await;
        }
        Timer::after_micros(RESET_US).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_grb() {
        assert_eq!(pack_grb(Rgb::new(0x11, 0x22, 0x33)), 0x2211_3300);
        assert_eq!(pack_grb(Rgb::new(0, 0, 0)), 0);
    }

    #[test]
    fn test_clock_divider_default_clock() {
        // 125 MHz / 8 MHz
        assert_eq!(clock_divider(125_000_000), U24F8::from_num(15.625));
    }
}
