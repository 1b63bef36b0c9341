//! echoglyph - RP2040 demonstration firmware
//!
//! Two buttons toggle two LEDs from a high-priority executor while the
//! thread-mode loop echoes console bytes to an SSD1306 OLED and a 5x5
//! WS2812 glyph matrix.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::I2c;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::uart::{InterruptHandler as UartInterruptHandler, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use echoglyph_core::traits::{DisplaySurface, GlyphMatrix};
use echoglyph_core::{
    ButtonBinding, ButtonPair, GlyphPattern, InputDispatcher, LedColor, SharedContext,
};
use echoglyph_drivers::{GlyphMatrixDriver, Ssd1306};
use echoglyph_hal_rp2040::gpio::{RpInput, RpOutput};
use echoglyph_hal_rp2040::i2c::RpI2c;
use echoglyph_hal_rp2040::uart::{ConsoleRx, ConsoleTx};
use echoglyph_hal_rp2040::ws2812::PioWs2812;

mod board;
mod tasks;

use tasks::{Context, Display, Matrix};

bind_interrupts!(struct Irqs {
    UART0_IRQ => UartInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();
static CONTEXT: StaticCell<Context> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[entry]
fn main() -> ! {
    let p = embassy_rp::init(Default::default());
    info!("echoglyph firmware starting...");

    let pins = board::PINS;
    match board::validate() {
        Ok(alloc) => info!("Pin map ok, {} pins claimed", alloc.allocated_count()),
        Err(e) => {
            error!("Invalid pin map");
            defmt::panic!("pin map: {:?}", e);
        }
    }

    // Buttons are active-low, LEDs start off
    let button_a = RpInput::new(Input::new(p.PIN_5, Pull::Up));
    let button_b = RpInput::new(Input::new(p.PIN_6, Pull::Up));
    let green = RpOutput::new(Output::new(p.PIN_11, Level::Low));
    let blue = RpOutput::new(Output::new(p.PIN_12, Level::Low));

    let buttons = ButtonPair::new(pins.button_a.pin, button_a, pins.button_b.pin, button_b);
    let dispatcher = InputDispatcher::new([
        ButtonBinding::new(pins.button_a.pin, LedColor::Green, green),
        ButtonBinding::new(pins.button_b.pin, LedColor::Blue, blue),
    ]);
    info!("Buttons on GPIO{}/GPIO{}", pins.button_a.pin, pins.button_b.pin);

    // main never returns, so the PIO common block outlives the state machine
    let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
    let strip = PioWs2812::new(&mut common, sm0, p.PIN_7);
    let mut matrix: Matrix = GlyphMatrixDriver::new(strip);
    info!("Glyph matrix on GPIO{}", pins.matrix.pin);

    let i2c = I2c::new_blocking(
        p.I2C1,
        p.PIN_15,
        p.PIN_14,
        echoglyph_hal_rp2040::i2c::to_embassy_config(&board::DISPLAY_I2C),
    );
    let mut display: Display = Ssd1306::new(RpI2c::new(i2c));
    if let Err(e) = display.init() {
        error!("SSD1306 not responding");
        defmt::panic!("display init: {:?}", e);
    }

    let area = display.render_area();
    info!("Display ready, render area {} bytes", area.buffer_length());
    display.clear();
    if let Err(e) = display.render(&area) {
        warn!("Initial render failed: {:?}", e);
    }

    if embassy_futures::block_on(matrix.show(&GlyphPattern::BLANK)).is_err() {
        warn!("Glyph matrix not cleared");
    }

    let uart = Uart::new(
        p.UART0,
        p.PIN_0,
        p.PIN_1,
        Irqs,
        p.DMA_CH1,
        p.DMA_CH2,
        echoglyph_hal_rp2040::uart::to_embassy_config(&board::console_uart()),
    );
    let (tx, rx) = uart.split();
    info!("Console on UART0");

    let ctx: &'static Context = CONTEXT.init(SharedContext::new(display, ConsoleTx::new(tx)));

    // Buttons preempt the echo loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner.spawn(unwrap!(tasks::button_task(buttons, dispatcher, ctx)));

    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(unwrap!(tasks::echo_task(ctx, ConsoleRx::new(rx), matrix)));
        info!("All tasks spawned");
    })
}
