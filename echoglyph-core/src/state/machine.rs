//! Echo loop states and transitions

use super::events::LoopEvent;

/// Echo loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopState {
    /// Suspended on the console receiver
    #[default]
    AwaitingInput,
    /// Echoing, drawing and holding the last byte
    Rendering,
}

impl LoopState {
    /// Check if the loop is waiting for the console
    pub fn accepts_input(&self) -> bool {
        matches!(self, LoopState::AwaitingInput)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: LoopEvent) -> Self {
        use LoopEvent::*;
        use LoopState::*;

        match (self, event) {
            (AwaitingInput, ByteReceived(_)) => Rendering,
            (Rendering, HoldElapsed) => AwaitingInput,

            // Default: stay in current state
            _ => self,
        }
    }
}
