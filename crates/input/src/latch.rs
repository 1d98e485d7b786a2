//! Held-button emulation for terminals.
//!
//! Most terminals never report key releases, so a press is treated as held
//! until a release arrives or `hold_ms` passes without a repeat.

use crate::types::Button;

/// How long a press counts as held without a repeat or release.
pub const DEFAULT_HOLD_MS: u64 = 120;

#[derive(Debug, Clone)]
pub struct ButtonLatch {
    pressed_at: [Option<u64>; 3],
    hold_ms: u64,
}

impl ButtonLatch {
    pub fn new(hold_ms: u64) -> Self {
        Self {
            pressed_at: [None; 3],
            hold_ms,
        }
    }

    /// Record a press (or terminal auto-repeat) at `now_ms`.
    pub fn press(&mut self, button: Button, now_ms: u64) {
        self.pressed_at[button.index()] = Some(now_ms);
    }

    pub fn release(&mut self, button: Button) {
        self.pressed_at[button.index()] = None;
    }

    /// Whether `button` still reads as down at `now_ms`. Expired presses are
    /// dropped.
    pub fn is_held(&mut self, button: Button, now_ms: u64) -> bool {
        let slot = &mut self.pressed_at[button.index()];
        match *slot {
            Some(at) if now_ms.saturating_sub(at) < self.hold_ms => true,
            Some(_) => {
                *slot = None;
                false
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.pressed_at = [None; 3];
    }
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_MS)
    }
}
