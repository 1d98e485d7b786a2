//! The shared "audio enabled" flag.
//!
//! Split into a write half for the game loop and a read half for the
//! sequencer so the single-writer/single-reader shape is in the types.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Create a linked switch/flag pair.
pub fn audio_flag(enabled: bool) -> (AudioSwitch, AudioFlag) {
    let shared = Arc::new(AtomicBool::new(enabled));
    (AudioSwitch(Arc::clone(&shared)), AudioFlag(shared))
}

/// Write half, held by the game loop.
///
/// Dropping the switch also disables audio, so a game task that ends early
/// (error or cancellation) still lets the sequencer finish.
#[derive(Debug)]
pub struct AudioSwitch(Arc<AtomicBool>);

impl AudioSwitch {
    /// Ask the sequencer to stop after its current pass.
    pub fn disable(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Drop for AudioSwitch {
    fn drop(&mut self) {
        self.disable();
    }
}

/// Read half, held by the sequencer.
#[derive(Debug, Clone)]
pub struct AudioFlag(Arc<AtomicBool>);

impl AudioFlag {
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}
