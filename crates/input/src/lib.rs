//! Terminal input.
//!
//! Maps `crossterm` key events onto the three device buttons and exposes them
//! through the engine's `Input` trait. Terminals usually report presses but
//! not releases, so [`ButtonLatch`] turns presses into a short held state.

pub mod keyboard;
pub mod latch;
pub mod map;

pub use blockfall_types as types;

pub use keyboard::{KeyboardInput, QuitHandle};
pub use latch::{ButtonLatch, DEFAULT_HOLD_MS};
pub use map::{button_for_key, should_quit};
