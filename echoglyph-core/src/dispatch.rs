//! Button edge dispatcher
//!
//! Runs on the interrupt-priority executor. Each edge is handled to
//! completion: debounce, toggle, compose the status lines, draw them
//! over whatever the buffer holds, render.

use echoglyph_hal::{InputPin, OutputPin, UartTx};
use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::binding::{ButtonBinding, LedColor, StatusLabels};
use crate::config::{label_y, LABEL_X};
use crate::debounce::DebounceFilter;
use crate::error::{first_error, Error};
use crate::shared::SharedContext;
use crate::traits::DisplaySurface;

/// Falling edge on a button pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeEvent {
    /// GPIO number that saw the edge
    pub pin: u8,
    /// Monotonic time of the edge, µs since boot
    pub timestamp_us: u64,
}

/// What an edge did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// An LED changed state
    Toggled { color: LedColor, on: bool },
    /// Inside the debounce window
    Rejected,
    /// Accepted, but no binding owns the pin
    Unmatched,
}

/// Outcome of one edge plus the first peripheral failure, if any
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DispatchReport {
    pub outcome: Dispatch,
    pub result: Result<(), Error>,
}

/// The two button inputs, turned into edge events
pub struct ButtonPair<I> {
    a_gpio: u8,
    a: I,
    b_gpio: u8,
    b: I,
}

impl<I: InputPin> ButtonPair<I> {
    pub fn new(a_gpio: u8, a: I, b_gpio: u8, b: I) -> Self {
        Self { a_gpio, a, b_gpio, b }
    }

    /// Wait for a falling edge on either button
    ///
    /// `now_us` is sampled as soon as the edge is seen. If both pins
    /// fire together, button A wins and B's edge is picked up next time.
    pub async fn next_edge(&mut self, now_us: impl FnOnce() -> u64) -> EdgeEvent {
        let pin = match select(self.a.wait_for_falling_edge(), self.b.wait_for_falling_edge()).await
        {
            Either::First(()) => self.a_gpio,
            Either::Second(()) => self.b_gpio,
        };
        EdgeEvent {
            pin,
            timestamp_us: now_us(),
        }
    }
}

/// Owner of the debounce state and both bindings
pub struct InputDispatcher<P> {
    debounce: DebounceFilter,
    bindings: [ButtonBinding<P>; 2],
}

impl<P: OutputPin> InputDispatcher<P> {
    /// Dispatcher with the standard debounce window
    pub fn new(bindings: [ButtonBinding<P>; 2]) -> Self {
        Self::with_filter(DebounceFilter::new(), bindings)
    }

    pub fn with_filter(debounce: DebounceFilter, bindings: [ButtonBinding<P>; 2]) -> Self {
        Self { debounce, bindings }
    }

    /// Handle one edge
    ///
    /// The status lines are drawn and the buffer rendered on every edge,
    /// including rejected ones; those draw two empty lines. The buffer is
    /// never cleared here.
    pub fn handle<M, S, C>(
        &mut self,
        ctx: &SharedContext<M, S, C>,
        event: EdgeEvent,
    ) -> DispatchReport
    where
        M: RawMutex,
        S: DisplaySurface,
        C: UartTx,
    {
        let mut result = Ok(());

        let (outcome, labels) = if !self.debounce.accept(event.timestamp_us) {
            (Dispatch::Rejected, StatusLabels::empty())
        } else if let Some(binding) = self
            .bindings
            .iter_mut()
            .find(|b| b.gpio_id() == event.pin)
        {
            let toggle = binding.toggle();
            first_error(
                &mut result,
                ctx.write_console(toggle.console_line().as_bytes()),
            );
            (
                Dispatch::Toggled {
                    color: toggle.color,
                    on: toggle.on,
                },
                toggle.labels,
            )
        } else {
            (Dispatch::Unmatched, StatusLabels::empty())
        };

        for (i, line) in labels.lines().enumerate() {
            ctx.draw_string(LABEL_X, label_y(i), line);
        }
        first_error(&mut result, ctx.render());

        DispatchReport { outcome, result }
    }

    pub fn bindings(&self) -> &[ButtonBinding<P>; 2] {
        &self.bindings
    }

    pub fn debounce(&self) -> &DebounceFilter {
        &self.debounce
    }
}
