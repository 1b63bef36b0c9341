//! Edge debounce filter
//!
//! A single filter instance gates every button: an edge is accepted only
//! if more than the window has elapsed since the last accepted edge on
//! *any* button. Pressing A then B within 200 ms drops the B press.

use crate::config::DEBOUNCE_WINDOW_US;

/// Time-window debounce filter
///
/// Holds only the timestamp of the last accepted edge, so it is cheap
/// to keep in an interrupt-priority task: no allocation, no blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceFilter {
    /// Monotonic timestamp of the last accepted edge (µs since boot)
    last_accepted_us: u64,
    /// Minimum spacing, exclusive
    window_us: u64,
}

impl Default for DebounceFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebounceFilter {
    /// Create a filter with the standard 200 ms window
    ///
    /// The last accepted timestamp starts at 0, so edges within the first
    /// window after boot are rejected.
    pub const fn new() -> Self {
        Self::with_window(DEBOUNCE_WINDOW_US)
    }

    /// Create a filter with a custom window
    pub const fn with_window(window_us: u64) -> Self {
        Self {
            last_accepted_us: 0,
            window_us,
        }
    }

    /// Decide whether an edge at `now_us` is a real press
    ///
    /// Returns true and records `now_us` iff strictly more than the
    /// window has elapsed since the last accepted edge. A rejected edge
    /// leaves the state untouched, so a bounce train cannot extend the
    /// window.
    pub fn accept(&mut self, now_us: u64) -> bool {
        if now_us.wrapping_sub(self.last_accepted_us) > self.window_us {
            self.last_accepted_us = now_us;
            true
        } else {
            false
        }
    }

    /// Timestamp of the last accepted edge
    pub fn last_accepted_us(&self) -> u64 {
        self.last_accepted_us
    }

    /// Configured window in µs
    pub fn window_us(&self) -> u64 {
        self.window_us
    }
}
