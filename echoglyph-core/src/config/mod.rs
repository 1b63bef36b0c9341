//! Configuration types
//!
//! Compile-time configuration: the board pin map and the timing/layout
//! constants of the echo and status screens. Nothing is loaded at runtime.

pub mod hardware;
pub mod ui;

pub use hardware::*;
pub use ui::*;
