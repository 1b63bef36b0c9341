//! Events that drive the echo loop

/// Events that can trigger a loop state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopEvent {
    /// A console byte arrived
    ByteReceived(u8),
    /// The hold after a render ran out
    HoldElapsed,
}

impl LoopEvent {
    /// Check if this event carries console input
    pub fn is_input_event(&self) -> bool {
        matches!(self, LoopEvent::ByteReceived(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_events() {
        assert!(LoopEvent::ByteReceived(b'a').is_input_event());
        assert!(!LoopEvent::HoldElapsed.is_input_event());
    }
}
