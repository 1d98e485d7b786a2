//! Speaker backends for the engine's `Audio` trait.
//!
//! [`NullSpeaker`] is always available. With the `rodio` feature the default
//! output device plays the tones as sine waves; [`Speaker::open`] falls back
//! to the silent backend when no device can be opened.

pub mod null;
#[cfg(feature = "rodio")]
pub mod rodio_out;

pub use blockfall_types as types;

pub use null::NullSpeaker;
#[cfg(feature = "rodio")]
pub use rodio_out::RodioSpeaker;

use types::hal::Audio;

/// Whichever backend could be opened.
pub enum Speaker {
    Null(NullSpeaker),
    #[cfg(feature = "rodio")]
    Rodio(RodioSpeaker),
}

impl Speaker {
    /// Open the best available backend. `enabled == false` always gives the
    /// silent one.
    pub fn open(enabled: bool) -> Self {
        if !enabled {
            log::info!("audio disabled");
            return Speaker::Null(NullSpeaker::new());
        }

        #[cfg(feature = "rodio")]
        match RodioSpeaker::open() {
            Ok(speaker) => return Speaker::Rodio(speaker),
            Err(e) => log::warn!("no audio output ({e}), continuing silently"),
        }

        Speaker::Null(NullSpeaker::new())
    }

    pub fn is_silent(&self) -> bool {
        matches!(self, Speaker::Null(_))
    }
}

impl Audio for Speaker {
    fn set_tone(&mut self, frequency_hz: u16) {
        match self {
            Speaker::Null(s) => s.set_tone(frequency_hz),
            #[cfg(feature = "rodio")]
            Speaker::Rodio(s) => s.set_tone(frequency_hz),
        }
    }

    fn set_volume(&mut self, on: bool) {
        match self {
            Speaker::Null(s) => s.set_volume(on),
            #[cfg(feature = "rodio")]
            Speaker::Rodio(s) => s.set_volume(on),
        }
    }
}
