//! Errors surfaced by the dispatcher and the echo loop
//!
//! Peripheral failures are not recoverable here; callers log them and
//! carry on with the next event.

/// Peripheral that failed during an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Display surface transfer failed
    Display,
    /// Console read or write failed
    Console,
    /// Glyph matrix transfer failed
    Matrix,
}

/// Keep the first error of a sequence that must run to the end anyway
pub(crate) fn first_error(current: &mut Result<(), Error>, next: Result<(), Error>) {
    if current.is_ok() {
        *current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_wins() {
        let mut result = Ok(());
        first_error(&mut result, Ok(()));
        assert_eq!(result, Ok(()));

        first_error(&mut result, Err(Error::Console));
        first_error(&mut result, Err(Error::Display));
        assert_eq!(result, Err(Error::Console));
    }
}
