//! The background melody played by the sequencer.

use blockfall_types::Tone;

/// One note: a tone held for a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note {
    pub tone: Tone,
    pub duration_ms: u32,
}

impl Note {
    pub const fn new(tone: Tone, duration_ms: u32) -> Self {
        Self { tone, duration_ms }
    }
}

const fn n(tone: Tone, duration_ms: u32) -> Note {
    Note::new(tone, duration_ms)
}

/// Looping theme, 37 notes.
pub const MELODY: [Note; 37] = [
    n(Tone::E4, 500),
    n(Tone::B3, 250),
    n(Tone::C4, 250),
    n(Tone::D4, 500),
    n(Tone::C4, 250),
    n(Tone::B3, 250),
    n(Tone::A3, 500),
    n(Tone::A3, 250),
    n(Tone::C4, 250),
    n(Tone::E4, 500),
    n(Tone::D4, 250),
    n(Tone::C4, 250),
    n(Tone::B3, 500),
    n(Tone::C4, 250),
    n(Tone::D4, 500),
    n(Tone::E4, 500),
    n(Tone::C4, 500),
    n(Tone::A3, 500),
    n(Tone::A3, 1000),
    n(Tone::D4, 500),
    n(Tone::F4, 250),
    n(Tone::A4, 500),
    n(Tone::G4, 250),
    n(Tone::F4, 250),
    n(Tone::E4, 500),
    n(Tone::C4, 250),
    n(Tone::E4, 500),
    n(Tone::D4, 250),
    n(Tone::C4, 250),
    n(Tone::B3, 500),
    n(Tone::B3, 250),
    n(Tone::C4, 250),
    n(Tone::D4, 500),
    n(Tone::E4, 500),
    n(Tone::C4, 500),
    n(Tone::A3, 500),
    n(Tone::A3, 1000),
];

/// Wall time of one full pass over `notes`, including the gap after each note.
pub fn pass_duration_ms(notes: &[Note], gap_ms: u32) -> u64 {
    notes
        .iter()
        .map(|note| note.duration_ms as u64 + gap_ms as u64)
        .sum()
}
