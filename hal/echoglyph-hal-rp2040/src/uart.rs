//! Console UART
//!
//! RP2040 has two UART peripherals (UART0 and UART1), each reachable
//! from a fixed set of pins. The console halves wrap embassy's split
//! UART: the receiver is awaited by the echo loop, the transmitter only
//! does FIFO-polled writes so it can be used under a critical section.

use echoglyph_hal::uart::{DataBits, Parity, StopBits, UartConfig};
use embassy_rp::uart::{self, Async, UartRx as RpUartRx, UartTx as RpUartTx};

/// UART peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart0,
    Uart1,
}

/// Signal a UART function select routes to a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartSignal {
    Tx,
    Rx,
    Cts,
    Rts,
}

/// Determine which UART signal a given GPIO pin carries
///
/// Pins come in groups of four (TX, RX, CTS, RTS). GPIO 0-3 belong to
/// UART0, then the owner flips every eight pins: 4-11 UART1, 12-19
/// UART0, 20-27 UART1, 28-29 UART0.
pub fn gpio_to_uart(gpio: u8) -> Option<(UartId, UartSignal)> {
    if gpio >= crate::gpio::GPIO_COUNT as u8 {
        return None;
    }
    let id = if ((gpio + 4) / 8) % 2 == 0 {
        UartId::Uart0
    } else {
        UartId::Uart1
    };
    let signal = match gpio % 4 {
        0 => UartSignal::Tx,
        1 => UartSignal::Rx,
        2 => UartSignal::Cts,
        _ => UartSignal::Rts,
    };
    Some((id, signal))
}

/// Convert the shared config to embassy's
pub fn to_embassy_config(cfg: &UartConfig) -> uart::Config {
    let mut out = uart::Config::default();
    out.baudrate = cfg.baudrate;
    out.data_bits = match cfg.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    out.parity = match cfg.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    out.stop_bits = match cfg.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    out
}

/// Transmit half of the console
pub struct ConsoleTx<'d>(RpUartTx<'d, Async>);

impl<'d> ConsoleTx<'d> {
    pub fn new(tx: RpUartTx<'d, Async>) -> Self {
        Self(tx)
    }
}

impl echoglyph_hal::UartTx for ConsoleTx<'_> {
    type Error = uart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), uart::Error> {
        self.0.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), uart::Error> {
        self.0.blocking_flush()
    }
}

/// Receive half of the console
pub struct ConsoleRx<'d>(RpUartRx<'d, Async>);

impl<'d> ConsoleRx<'d> {
    pub fn new(rx: RpUartRx<'d, Async>) -> Self {
        Self(rx)
    }
}

impl echoglyph_hal::UartRx for ConsoleRx<'_> {
    type Error = uart::Error;

    async fn read_byte(&mut self) -> Result<u8, uart::Error> {
        let mut byte = [0u8; 1];
        self.0.read(&mut byte).await?;
        Ok(byte[0])
    }
}
