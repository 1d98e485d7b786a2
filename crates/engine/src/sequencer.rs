//! Melody sequencer task
//!
//! Plays the melody on repeat. The audio flag is read once at the top of each
//! pass, so after the game loop clears it the current pass still finishes:
//! the task never stops in the middle of a note.

use log::{debug, trace};

use crate::core::{Note, MELODY};
use crate::flag::AudioFlag;
use crate::types::hal::{Audio, Clock};

pub struct Sequencer {
    flag: AudioFlag,
    notes: &'static [Note],
    note_gap_ms: u32,
}

impl Sequencer {
    /// Sequencer for the built-in melody.
    pub fn new(flag: AudioFlag, note_gap_ms: u32) -> Self {
        Self::with_melody(flag, &MELODY, note_gap_ms)
    }

    pub fn with_melody(flag: AudioFlag, notes: &'static [Note], note_gap_ms: u32) -> Self {
        Self {
            flag,
            notes,
            note_gap_ms,
        }
    }

    /// Loop until the flag is found cleared. Returns completed passes.
    pub async fn run<A, C>(&self, audio: &mut A, clock: &C) -> u32
    where
        A: Audio,
        C: Clock,
    {
        let mut passes = 0;
        while self.flag.is_enabled() {
            for note in self.notes {
                self.play_note(note, audio, clock).await;
            }
            passes += 1;
        }
        audio.set_volume(false);
        debug!("sequencer stopped after {passes} pass(es)");
        passes
    }

    async fn play_note<A, C>(&self, note: &Note, audio: &mut A, clock: &C)
    where
        A: Audio,
        C: Clock,
    {
        let hz = note.tone.frequency_hz();
        trace!("note {} ({hz}Hz) for {}ms", note.tone.as_str(), note.duration_ms);
        audio.set_tone(hz);
        audio.set_volume(true);
        clock.sleep_ms(note.duration_ms).await;
        audio.set_volume(false);
        clock.sleep_ms(self.note_gap_ms).await;
    }
}
