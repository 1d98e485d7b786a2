//! Terminal display driver.
//!
//! Implements the engine's `Renderer` on top of crossterm. Drawing goes to a
//! grid-unit [`Canvas`], which composes into a character [`FrameBuffer`] that
//! is flushed to the terminal with diff-based redraws.

pub mod canvas;
pub mod fb;
pub mod renderer;

pub use blockfall_types as types;

pub use canvas::Canvas;
pub use fb::{Cell, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
