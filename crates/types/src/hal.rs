//! Collaborator interfaces the engine drives.
//!
//! The game loop and the melody sequencer only ever talk to hardware through
//! these traits: a bitmap display, three buttons, a tone generator, and a
//! monotonic clock with a cooperative sleep.

use std::future::Future;
use std::io;

use crate::{Button, Rect};

/// Display driver.
///
/// Coordinates are display grid units (one unit = one block). Positions
/// outside the display are ignored by implementations.
pub trait Renderer {
    fn clear_region(&mut self, rect: Rect);
    fn draw_cell(&mut self, row: i16, col: i16);
    fn draw_text(&mut self, text: &str, x: u16, y: u16);
    /// Push the composed frame to the device.
    fn present(&mut self) -> io::Result<()>;
}

/// Button reader, polled once per tick for each logical button.
pub trait Input {
    fn is_pressed(&mut self, button: Button) -> bool;
}

/// Tone generator (PWM speaker).
pub trait Audio {
    fn set_tone(&mut self, frequency_hz: u16);
    /// On/off is all the speaker supports.
    fn set_volume(&mut self, on: bool);
}

/// Monotonic millisecond clock plus the only suspension primitive.
pub trait Clock {
    fn now_ms(&self) -> u64;
    fn sleep_ms(&self, ms: u32) -> impl Future<Output = ()>;
}
