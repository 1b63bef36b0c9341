//! Display driver errors

/// Display driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Render area reaches past the panel
    AreaOutOfBounds,
    /// Display not initialized
    NotInitialized,
}
