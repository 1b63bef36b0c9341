//! Board-agnostic core logic for the echoglyph firmware
//!
//! This crate contains everything that does not depend on a specific
//! chip:
//!
//! - Debounce filtering of button edges
//! - Button-to-LED toggle bindings and their status labels
//! - The 5x5 digit glyph table and byte classification
//! - The shared display/console context used by both execution contexts
//! - The edge dispatcher (interrupt priority) and the echo loop (thread mode)
//! - Traits for the display surface and the glyph matrix
//!
//! # Execution model
//!
//! ```text
//!  button edge ──► InputDispatcher ──┐
//!   (interrupt executor)             │   SharedContext
//!                                    ├──► { surface, console, render area }
//!  console byte ──► EchoLoop ────────┘
//!   (thread-mode executor)
//! ```
//!
//! The dispatcher may run between any two surface operations of the echo
//! loop. Each operation is atomic, the sequence is not.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod binding;
pub mod config;
pub mod debounce;
pub mod dispatch;
pub mod echo;
pub mod error;
pub mod glyph;
pub mod shared;
pub mod state;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use binding::{ButtonBinding, LedColor, StatusLabels};
pub use debounce::DebounceFilter;
pub use dispatch::{ButtonPair, Dispatch, DispatchReport, EdgeEvent, InputDispatcher};
pub use echo::{EchoLoop, EchoReport};
pub use error::Error;
pub use glyph::{GlyphIndex, GlyphPattern};
pub use shared::SharedContext;
pub use state::{LoopEvent, LoopState};
pub use traits::{DisplaySurface, GlyphMatrix, RenderArea};
