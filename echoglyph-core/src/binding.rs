//! Button-to-LED toggle bindings
//!
//! Each button owns one LED. Only the input dispatcher holds the
//! bindings, so the LED state needs no synchronization.

use core::fmt::Write;

use echoglyph_hal::OutputPin;
use heapless::String;

use crate::config::{LABEL_CAPACITY, LABEL_LINES};

/// Header line shown for the green LED
pub const GREEN_HEADER: &str = "  LED Verde  ";
/// Header line shown for the blue LED
pub const BLUE_HEADER: &str = "  LED Azul  ";
/// State line for an LED that is on
pub const STATE_ON: &str = "   ligado  ";
/// State line for an LED that is off
pub const STATE_OFF: &str = "  desligado  ";

/// Colour of a bound LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedColor {
    Green,
    Blue,
}

impl LedColor {
    /// Status header naming this LED
    pub fn header(self) -> &'static str {
        match self {
            LedColor::Green => GREEN_HEADER,
            LedColor::Blue => BLUE_HEADER,
        }
    }

    /// Lower-case colour name used in console messages
    pub fn name(self) -> &'static str {
        match self {
            LedColor::Green => "verde",
            LedColor::Blue => "azul",
        }
    }
}

/// Padded state line for the display
pub fn state_label(on: bool) -> &'static str {
    if on {
        STATE_ON
    } else {
        STATE_OFF
    }
}

/// Two status lines drawn by the dispatcher
///
/// Empty lines are drawn too: they leave the buffer untouched but the
/// render still happens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLabels {
    lines: [String<LABEL_CAPACITY>; LABEL_LINES],
}

impl StatusLabels {
    /// Two empty lines
    pub fn empty() -> Self {
        Self::default()
    }

    /// Header + state lines for an LED
    pub fn for_led(color: LedColor, on: bool) -> Self {
        let mut labels = Self::empty();
        // Both constants fit LABEL_CAPACITY
        let _ = labels.lines[0].push_str(color.header());
        let _ = labels.lines[1].push_str(state_label(on));
        labels
    }

    /// Line `index`, or "" if out of range
    pub fn line(&self, index: usize) -> &str {
        self.lines.get(index).map(|l| l.as_str()).unwrap_or("")
    }

    /// All lines, top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.as_str())
    }

    /// Whether every line is empty
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.is_empty())
    }
}

/// Result of one toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub color: LedColor,
    /// New LED state
    pub on: bool,
    pub labels: StatusLabels,
}

impl Toggle {
    /// Console message, e.g. `"LED verde ligado\n"`
    pub fn console_line(&self) -> String<24> {
        let mut line = String::new();
        let state = if self.on { "ligado" } else { "desligado" };
        let _ = write!(line, "LED {} {}\n", self.color.name(), state);
        line
    }
}

/// One button bound to one LED
pub struct ButtonBinding<P> {
    /// GPIO number of the button, matched against edge events
    gpio_id: u8,
    color: LedColor,
    led: P,
    on: bool,
}

impl<P: OutputPin> ButtonBinding<P> {
    /// Bind a button to an LED; the LED is driven off
    pub fn new(gpio_id: u8, color: LedColor, mut led: P) -> Self {
        led.set_low();
        Self {
            gpio_id,
            color,
            led,
            on: false,
        }
    }

    /// Flip the LED and describe the new state
    pub fn toggle(&mut self) -> Toggle {
        self.on = !self.on;
        self.led.set_state(self.on);
        Toggle {
            color: self.color,
            on: self.on,
            labels: StatusLabels::for_led(self.color, self.on),
        }
    }

    /// GPIO number of the button
    pub fn gpio_id(&self) -> u8 {
        self.gpio_id
    }

    pub fn color(&self) -> LedColor {
        self.color
    }

    /// Current logical LED state
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Access the LED pin (for inspection)
    pub fn led(&self) -> &P {
        &self.led
    }
}
