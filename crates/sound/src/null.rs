//! Silent speaker: tracks the requested state and logs it.

use log::trace;

use crate::types::hal::Audio;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullSpeaker {
    tone_hz: u16,
    on: bool,
}

impl NullSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tone_hz(&self) -> u16 {
        self.tone_hz
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

impl Audio for NullSpeaker {
    fn set_tone(&mut self, frequency_hz: u16) {
        self.tone_hz = frequency_hz;
    }

    fn set_volume(&mut self, on: bool) {
        if on != self.on {
            trace!("speaker {} at {}Hz", if on { "on" } else { "off" }, self.tone_hz);
        }
        self.on = on;
    }
}
