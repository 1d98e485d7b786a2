//! Melody sequencer tests on a paused tokio clock.

mod common;

use tokio::time::{sleep, Duration, Instant};
use tokio_test::{assert_pending, task};

use blockfall::core::melody::{pass_duration_ms, Note};
use blockfall::core::MELODY;
use blockfall::engine::{audio_flag, Sequencer, TokioClock};
use blockfall::types::Tone;

use common::{RecordingAudio, Sound};

static TUNE: [Note; 3] = [
    Note::new(Tone::C4, 200),
    Note::new(Tone::G4, 100),
    Note::new(Tone::C5, 400),
];

#[tokio::test(start_paused = true)]
async fn cleared_flag_stops_after_the_current_pass() {
    let clock = TokioClock::new();
    let start = Instant::now();
    let (switch, flag) = audio_flag(true);
    let sequencer = Sequencer::new(flag, 50);
    let mut audio = RecordingAudio::new();

    let (passes, ()) = tokio::join!(sequencer.run(&mut audio, &clock), async {
        sleep(Duration::from_millis(1_000)).await;
        switch.disable();
    });

    assert_eq!(passes, 1);
    assert_eq!(audio.tones(), MELODY.len());
    assert_eq!(audio.count(Sound::On), MELODY.len());
    // One off per note plus the final silence.
    assert_eq!(audio.count(Sound::Off), MELODY.len() + 1);
    assert_eq!(
        start.elapsed().as_millis() as u64,
        pass_duration_ms(&MELODY, 50)
    );
}

#[tokio::test(start_paused = true)]
async fn notes_follow_the_melody_timing() {
    let clock = TokioClock::new();
    let (switch, flag) = audio_flag(true);
    let sequencer = Sequencer::with_melody(flag, &TUNE, 50);
    let mut audio = RecordingAudio::new();

    let (passes, ()) = tokio::join!(sequencer.run(&mut audio, &clock), async {
        sleep(Duration::from_millis(10)).await;
        switch.disable();
    });

    assert_eq!(passes, 1);
    assert_eq!(
        audio.events,
        vec![
            (0, Sound::Tone(262)),
            (0, Sound::On),
            (200, Sound::Off),
            (250, Sound::Tone(392)),
            (250, Sound::On),
            (350, Sound::Off),
            (400, Sound::Tone(524)),
            (400, Sound::On),
            (800, Sound::Off),
            (850, Sound::Off),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn flag_read_once_per_pass() {
    let clock = TokioClock::new();
    let (switch, flag) = audio_flag(true);
    let sequencer = Sequencer::with_melody(flag, &TUNE, 50);
    let mut audio = RecordingAudio::new();

    // One pass is 850ms; clearing at 1000ms lands inside the second pass.
    let (passes, ()) = tokio::join!(sequencer.run(&mut audio, &clock), async {
        sleep(Duration::from_millis(1_000)).await;
        switch.disable();
    });

    assert_eq!(passes, 2);
    assert_eq!(audio.tones(), 2 * TUNE.len());
    assert_eq!(audio.events.last(), Some(&(1_700, Sound::Off)));
}

#[tokio::test(start_paused = true)]
async fn disabled_flag_plays_nothing() {
    let clock = TokioClock::new();
    let (_switch, flag) = audio_flag(false);
    let sequencer = Sequencer::new(flag, 50);
    let mut audio = RecordingAudio::new();

    assert_eq!(sequencer.run(&mut audio, &clock).await, 0);
    assert_eq!(audio.events, vec![(0, Sound::Off)]);
}

#[tokio::test(start_paused = true)]
async fn first_poll_sounds_the_first_note_and_suspends() {
    let clock = TokioClock::new();
    let (_switch, flag) = audio_flag(true);
    let sequencer = Sequencer::with_melody(flag, &TUNE, 50);
    let mut audio = RecordingAudio::new();

    {
        let mut run = task::spawn(sequencer.run(&mut audio, &clock));
        assert_pending!(run.poll());
    }

    assert_eq!(audio.events, vec![(0, Sound::Tone(262)), (0, Sound::On)]);
}

#[test]
fn full_melody_pass_takes_seventeen_seconds() {
    assert_eq!(pass_duration_ms(&MELODY, 50), 17_100);
}
