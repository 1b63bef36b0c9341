//! Host-side test doubles

use std::collections::VecDeque;
use std::string::String;
use std::vec::Vec;

use echoglyph_hal::{InputPin, OutputPin, UartRx, UartTx};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embedded_hal_async::delay::DelayNs;

use crate::glyph::GlyphPattern;
use crate::shared::SharedContext;
use crate::traits::{DisplaySurface, GlyphMatrix, RenderArea};

pub type TestContext = SharedContext<NoopRawMutex, MockSurface, MockConsole>;

/// Output pin latch
#[derive(Debug, Default)]
pub struct MockPin {
    high: bool,
    pub writes: usize,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_high() -> Self {
        Self {
            high: true,
            writes: 0,
        }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.writes += 1;
    }

    fn set_low(&mut self) {
        self.high = false;
        self.writes += 1;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin that reports a fixed number of falling edges, then pends
#[derive(Debug, Default)]
pub struct MockButton {
    pub edges: usize,
}

impl InputPin for MockButton {
    fn is_high(&self) -> bool {
        self.edges == 0
    }

    async fn wait_for_falling_edge(&mut self) {
        if self.edges == 0 {
            core::future::pending::<()>().await;
        }
        self.edges -= 1;
    }
}

/// Recorded surface operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    Init,
    Clear,
    Char(i32, i32, u8),
    Text(i32, i32, String),
    Render(RenderArea),
}

/// Surface that records every call
#[derive(Debug, Default)]
pub struct MockSurface {
    pub ops: Vec<SurfaceOp>,
    pub fail_render: bool,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renders(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Render(_)))
            .count()
    }
}

impl DisplaySurface for MockSurface {
    type Error = ();

    fn init(&mut self) -> Result<(), ()> {
        self.ops.push(SurfaceOp::Init);
        Ok(())
    }

    fn render_area(&self) -> RenderArea {
        RenderArea::full(128, 8)
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn draw_char(&mut self, x: i32, y: i32, ch: u8) {
        self.ops.push(SurfaceOp::Char(x, y, ch));
    }

    fn draw_string(&mut self, x: i32, y: i32, text: &str) {
        self.ops.push(SurfaceOp::Text(x, y, text.into()));
    }

    fn render(&mut self, area: &RenderArea) -> Result<(), ()> {
        self.ops.push(SurfaceOp::Render(*area));
        if self.fail_render {
            Err(())
        } else {
            Ok(())
        }
    }
}

/// Console transmitter collecting written bytes
#[derive(Debug, Default)]
pub struct MockConsole {
    pub written: Vec<u8>,
    pub fail: bool,
}

impl MockConsole {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UartTx for MockConsole {
    type Error = ();

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.written.extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }
}

/// Console receiver fed from a queue; errors once it runs dry
#[derive(Debug, Default)]
pub struct MockRx {
    pub pending: VecDeque<u8>,
}

impl MockRx {
    pub fn with_bytes(bytes: &[u8]) -> Self {
        Self {
            pending: bytes.iter().copied().collect(),
        }
    }
}

impl UartRx for MockRx {
    type Error = ();

    async fn read_byte(&mut self) -> Result<u8, ()> {
        self.pending.pop_front().ok_or(())
    }
}

/// Glyph matrix remembering every pattern shown
#[derive(Debug, Default)]
pub struct MockMatrix {
    pub shown: Vec<GlyphPattern>,
    pub fail: bool,
}

impl GlyphMatrix for MockMatrix {
    type Error = ();

    async fn show(&mut self, pattern: &GlyphPattern) -> Result<(), ()> {
        self.shown.push(*pattern);
        if self.fail {
            Err(())
        } else {
            Ok(())
        }
    }
}

/// Delay that only records the requested duration
#[derive(Debug, Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}
