//! Timing and screen layout constants

/// Minimum spacing between two accepted button edges (any button), in µs
pub const DEBOUNCE_WINDOW_US: u64 = 200_000;

/// How long the echo loop holds a character before reading the next one
pub const ECHO_HOLD_MS: u32 = 1000;

/// Left margin of the status lines, in pixels
pub const LABEL_X: i32 = 5;

/// Vertical pitch of the status lines (one text row), in pixels
pub const LABEL_LINE_HEIGHT: i32 = 8;

/// Number of status lines composed per edge
pub const LABEL_LINES: usize = 2;

/// Capacity of one status line
pub const LABEL_CAPACITY: usize = 16;

/// Position of the echoed character
pub const ECHO_X: i32 = 10;
pub const ECHO_Y: i32 = 10;

/// Vertical position of status line `index`
pub const fn label_y(index: usize) -> i32 {
    index as i32 * LABEL_LINE_HEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_rows() {
        assert_eq!(label_y(0), 0);
        assert_eq!(label_y(1), 8);
    }
}
