//! Display surface and console shared by both execution contexts
//!
//! Each method takes the lock for exactly one surface or console
//! operation. A sequence such as clear, draw, render is therefore not
//! atomic: the interrupt-priority dispatcher may run between any two
//! steps of the echo loop.

use core::cell::RefCell;

use echoglyph_hal::UartTx;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::error::Error;
use crate::traits::{DisplaySurface, RenderArea};

/// Shared display buffer, console transmitter and render area
pub struct SharedContext<M: RawMutex, S, C> {
    surface: Mutex<M, RefCell<S>>,
    console: Mutex<M, RefCell<C>>,
    area: RenderArea,
}

impl<M, S, C> SharedContext<M, S, C>
where
    M: RawMutex,
    S: DisplaySurface,
    C: UartTx,
{
    /// Wrap an initialized surface and the console transmitter
    ///
    /// The render area is taken from the surface once, here.
    pub fn new(surface: S, console: C) -> Self {
        let area = surface.render_area();
        Self {
            surface: Mutex::new(RefCell::new(surface)),
            console: Mutex::new(RefCell::new(console)),
            area,
        }
    }

    /// Precomputed full-panel area
    pub fn render_area(&self) -> &RenderArea {
        &self.area
    }

    /// Run `f` with exclusive access to the surface
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        self.surface.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Zero the display buffer
    pub fn clear(&self) {
        self.with_surface(|s| s.clear());
    }

    pub fn draw_char(&self, x: i32, y: i32, ch: u8) {
        self.with_surface(|s| s.draw_char(x, y, ch));
    }

    pub fn draw_string(&self, x: i32, y: i32, text: &str) {
        self.with_surface(|s| s.draw_string(x, y, text));
    }

    /// Blit the whole buffer at the precomputed area
    pub fn render(&self) -> Result<(), Error> {
        let area = self.area;
        self.with_surface(|s| s.render(&area))
            .map_err(|_| Error::Display)
    }

    /// Write raw bytes to the console
    pub fn write_console(&self, data: &[u8]) -> Result<(), Error> {
        self.console
            .lock(|cell| cell.borrow_mut().write_blocking(data))
            .map_err(|_| Error::Console)
    }

    /// Run `f` with exclusive access to the console transmitter
    pub fn with_console<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        self.console.lock(|cell| f(&mut cell.borrow_mut()))
    }
}
