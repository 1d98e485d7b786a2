//! Game loop and scheduler tests on a paused tokio clock.

mod common;

use tokio::time::Instant;

use blockfall::core::melody::Note;
use blockfall::core::{FallOutcome, Field, Piece, Session, SimpleRng};
use blockfall::engine::{
    audio_flag, prepare, run_session, EngineConfig, GameLoop, GameSummary, LoopTiming, Sequencer,
    TokioClock,
};
use blockfall::types::hal::Clock;
use blockfall::types::{Button, Rect, ShapeKind, Tone};

use common::{DrawOp, RecordingAudio, RecordingRenderer, ScriptedInput, Sound};

const TIMING: LoopTiming = LoopTiming {
    fall_interval_ms: 1,
    debounce_ms: 100,
    frame_ms: 50,
    game_over_hold_ms: 10_000,
};

/// Two-note tune, 700ms per pass with a 50ms gap.
static SHORT_TUNE: [Note; 2] = [Note::new(Tone::C4, 300), Note::new(Tone::E4, 300)];

/// A session whose first lock lands in the top row.
fn doomed_session(now_ms: u64) -> Session {
    Session::with_pieces(
        Field::with_size(3, 4),
        Piece::new(ShapeKind::L, 0, 0, 0),
        Piece::new(ShapeKind::T, 0, 0, 1),
        SimpleRng::new(1),
        now_ms,
    )
}

fn open_session(piece: Piece, now_ms: u64) -> Session {
    Session::with_pieces(
        Field::with_size(10, 8),
        piece,
        Piece::new(ShapeKind::T, 0, 0, 4),
        SimpleRng::new(1),
        now_ms,
    )
}

fn slow_fall() -> LoopTiming {
    LoopTiming {
        fall_interval_ms: 60_000,
        ..TIMING
    }
}

#[tokio::test(start_paused = true)]
async fn top_out_runs_the_game_over_sequence() {
    let clock = TokioClock::new();
    let start = Instant::now();
    let (switch, flag) = audio_flag(true);
    let game = GameLoop::new(doomed_session(clock.now_ms()), switch, TIMING);

    let mut renderer = RecordingRenderer::new();
    let mut input = ScriptedInput::idle();
    let summary = game.run(&mut renderer, &mut input, &clock).await.unwrap();

    assert_eq!(
        summary,
        GameSummary {
            score: 10,
            lines_cleared: 0,
            pieces_locked: 1,
            ticks: 2,
        }
    );
    assert!(!flag.is_enabled());

    // Two frames, the summary, then the blank screen.
    assert_eq!(renderer.presents(), 4);
    let texts = renderer.texts();
    assert!(texts.contains(&"GAME OVER"));
    assert_eq!(texts.iter().filter(|t| **t == "Score:10").count(), 2);
    let display = Rect::new(0, 0, 14, 3);
    for op in &renderer.ops {
        if let DrawOp::Cell(row, col) = *op {
            assert!(display.contains(col as u16, row as u16), "cell ({row}, {col}) off display");
        }
    }
    assert_eq!(
        renderer.ops[renderer.ops.len() - 2..],
        [DrawOp::Clear(display), DrawOp::Present]
    );

    assert_eq!(start.elapsed().as_millis(), 50 + 50 + 10_000);
}

#[tokio::test(start_paused = true)]
async fn applied_press_is_debounced() {
    let clock = TokioClock::new();
    let start = Instant::now();
    let (switch, _flag) = audio_flag(true);
    let mut game = GameLoop::new(
        open_session(Piece::new(ShapeKind::T, 0, 0, 3), clock.now_ms()),
        switch,
        slow_fall(),
    );
    let mut renderer = RecordingRenderer::new();
    let mut input = ScriptedInput::new(vec![vec![Button::MoveLeft]]);

    let outcome = game.tick(&mut renderer, &mut input, &clock).await.unwrap();
    assert_eq!(outcome, FallOutcome::Waiting);
    assert_eq!(game.session().current().col, 2);
    assert_eq!(start.elapsed().as_millis(), 100 + 50);

    game.tick(&mut renderer, &mut input, &clock).await.unwrap();
    assert_eq!(game.session().current().col, 2);
    assert_eq!(start.elapsed().as_millis(), 100 + 50 + 50);
    assert_eq!(game.ticks(), 2);
    assert_eq!(input.polls, 6);
}

#[tokio::test(start_paused = true)]
async fn rejected_press_is_not_debounced() {
    let clock = TokioClock::new();
    let start = Instant::now();
    let (switch, _flag) = audio_flag(true);
    let mut game = GameLoop::new(
        open_session(Piece::new(ShapeKind::T, 0, 0, 0), clock.now_ms()),
        switch,
        slow_fall(),
    );
    let mut renderer = RecordingRenderer::new();
    let mut input = ScriptedInput::new(vec![vec![Button::MoveLeft]]);

    game.tick(&mut renderer, &mut input, &clock).await.unwrap();
    assert_eq!(game.session().current().col, 0);
    assert_eq!(start.elapsed().as_millis(), 50);
}

#[tokio::test(start_paused = true)]
async fn every_pressed_button_applies_in_one_tick() {
    let clock = TokioClock::new();
    let start = Instant::now();
    let (switch, _flag) = audio_flag(true);
    let mut game = GameLoop::new(
        open_session(Piece::new(ShapeKind::T, 0, 0, 3), clock.now_ms()),
        switch,
        slow_fall(),
    );
    let mut renderer = RecordingRenderer::new();
    let mut input = ScriptedInput::new(vec![vec![
        Button::MoveLeft,
        Button::MoveRight,
        Button::Rotate,
    ]]);

    game.tick(&mut renderer, &mut input, &clock).await.unwrap();
    let piece = game.session().current();
    assert_eq!((piece.col, piece.rotation), (3, 1));
    assert_eq!(start.elapsed().as_millis(), 3 * 100 + 50);
}

#[tokio::test(start_paused = true)]
async fn gravity_uses_the_time_sampled_at_tick_start() {
    let clock = TokioClock::new();
    let (switch, _flag) = audio_flag(true);
    let timing = LoopTiming {
        fall_interval_ms: 120,
        ..TIMING
    };
    let mut game = GameLoop::new(
        open_session(Piece::new(ShapeKind::T, 0, 0, 3), clock.now_ms()),
        switch,
        timing,
    );
    let mut renderer = RecordingRenderer::new();
    let mut input = ScriptedInput::new(vec![vec![Button::MoveLeft], vec![], vec![]]);

    // Tick 1 starts at 0, tick 2 at 150: the fall is due by then.
    assert_eq!(
        game.tick(&mut renderer, &mut input, &clock).await.unwrap(),
        FallOutcome::Waiting
    );
    assert_eq!(
        game.tick(&mut renderer, &mut input, &clock).await.unwrap(),
        FallOutcome::Fell
    );
    assert_eq!(game.session().last_fall_ms(), 150);
    // Tick 3 at 200: only 50ms since the last fall.
    assert_eq!(
        game.tick(&mut renderer, &mut input, &clock).await.unwrap(),
        FallOutcome::Waiting
    );
}

#[tokio::test(start_paused = true)]
async fn session_ends_after_both_tasks_finish() {
    let clock = TokioClock::new();
    let start = Instant::now();
    let (switch, flag) = audio_flag(true);
    let game = GameLoop::new(doomed_session(clock.now_ms()), switch, TIMING);
    let sequencer = Sequencer::with_melody(flag, &SHORT_TUNE, 50);

    let mut renderer = RecordingRenderer::new();
    let mut input = ScriptedInput::idle();
    let mut audio = RecordingAudio::new();
    let report = run_session(game, sequencer, &mut renderer, &mut input, &mut audio, &clock)
        .await
        .unwrap();

    assert_eq!(report.game.score, 10);
    // The flag is cleared at 100ms, so only the pass already under way plays.
    assert_eq!(report.melody_passes, 1);
    assert_eq!(audio.tones(), 2);
    assert_eq!(audio.events.last().map(|(_, s)| *s), Some(Sound::Off));
    assert_eq!(start.elapsed().as_millis(), 10_100);
}

#[tokio::test(start_paused = true)]
async fn muted_session_never_plays() {
    let clock = TokioClock::new();
    let (switch, flag) = audio_flag(false);
    let game = GameLoop::new(doomed_session(clock.now_ms()), switch, TIMING);
    let sequencer = Sequencer::new(flag, 50);

    let mut renderer = RecordingRenderer::new();
    let mut input = ScriptedInput::idle();
    let mut audio = RecordingAudio::new();
    let report = run_session(game, sequencer, &mut renderer, &mut input, &mut audio, &clock)
        .await
        .unwrap();

    assert_eq!(report.melody_passes, 0);
    assert_eq!(audio.events, vec![(0, Sound::Off)]);
}

#[test]
fn prepare_builds_a_seeded_session() {
    let config = EngineConfig {
        seed: 5,
        fall_interval_ms: 40,
        ..EngineConfig::default()
    };
    let (game, _sequencer) = prepare(&config, 0);
    let expected = Session::new(5, 0);

    assert_eq!(game.session().current(), expected.current());
    assert_eq!(game.session().next(), expected.next());
    assert_eq!(game.layout().field, Rect::new(10, 0, 8, 42));
}
