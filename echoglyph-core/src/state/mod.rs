//! Echo loop state machine
//!
//! The echo loop alternates between waiting for a console byte and
//! showing it. There is no terminal state.

pub mod events;
pub mod machine;

pub use events::LoopEvent;
pub use machine::LoopState;
