//! Hardware configuration types
//!
//! The pin map of the demonstration board. Chip HALs validate it before
//! any pin is configured.

/// Pin configuration with optional pull-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Enable internal pull-up
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            pull_up: false,
        }
    }

    /// Create a pin with pull-up enabled
    pub const fn with_pullup(pin: u8) -> Self {
        Self { pin, pull_up: true }
    }
}

/// Role of a pin on the board, used in validation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    ButtonA,
    ButtonB,
    GreenLed,
    BlueLed,
    Matrix,
    DisplaySda,
    DisplayScl,
    ConsoleTx,
    ConsoleRx,
}

/// Number of pins claimed by [`BoardPins`]
pub const BOARD_PIN_COUNT: usize = 9;

/// Complete pin map of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardPins {
    /// Button bound to the green LED (active-low)
    pub button_a: PinConfig,
    /// Button bound to the blue LED (active-low)
    pub button_b: PinConfig,
    pub green_led: PinConfig,
    pub blue_led: PinConfig,
    /// WS2812 data line of the 5x5 matrix
    pub matrix: PinConfig,
    pub display_sda: PinConfig,
    pub display_scl: PinConfig,
    pub console_tx: PinConfig,
    pub console_rx: PinConfig,
}

impl BoardPins {
    /// Pin map of the reference board
    pub const DEFAULT: Self = Self {
        button_a: PinConfig::with_pullup(5),
        button_b: PinConfig::with_pullup(6),
        green_led: PinConfig::new(11),
        blue_led: PinConfig::new(12),
        matrix: PinConfig::new(7),
        display_sda: PinConfig::with_pullup(14),
        display_scl: PinConfig::with_pullup(15),
        console_tx: PinConfig::new(0),
        console_rx: PinConfig::new(1),
    };

    /// Every claimed pin with its role
    pub fn assignments(&self) -> [(PinRole, PinConfig); BOARD_PIN_COUNT] {
        [
            (PinRole::ButtonA, self.button_a),
            (PinRole::ButtonB, self.button_b),
            (PinRole::GreenLed, self.green_led),
            (PinRole::BlueLed, self.blue_led),
            (PinRole::Matrix, self.matrix),
            (PinRole::DisplaySda, self.display_sda),
            (PinRole::DisplayScl, self.display_scl),
            (PinRole::ConsoleTx, self.console_tx),
            (PinRole::ConsoleRx, self.console_rx),
        ]
    }
}

impl Default for BoardPins {
    fn default() -> Self {
        Self::DEFAULT
    }
}
