//! Scheduler: runs the game loop and the sequencer side by side.
//!
//! Both tasks are futures joined on one current-thread runtime, so they only
//! interleave at their `sleep_ms` awaits. Between two awaits a task runs
//! uninterrupted, which is what lets them share the audio flag without a lock.

use anyhow::{Context, Result};
use log::info;
use tokio::runtime::{Builder, Runtime};

use crate::config::EngineConfig;
use crate::core::Session;
use crate::flag::audio_flag;
use crate::game_loop::{GameLoop, GameSummary, LoopTiming};
use crate::sequencer::Sequencer;
use crate::types::hal::{Audio, Clock, Input, Renderer};

/// What a whole session produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub game: GameSummary,
    pub melody_passes: u32,
}

/// Build both tasks for a fresh session, wired to one audio flag.
pub fn prepare(config: &EngineConfig, now_ms: u64) -> (GameLoop, Sequencer) {
    let (switch, flag) = audio_flag(config.audio_enabled);
    let session = Session::new(config.seed, now_ms);
    (
        GameLoop::new(session, switch, LoopTiming::from(config)),
        Sequencer::new(flag, config.note_gap_ms),
    )
}

/// Drive both tasks until both have finished.
pub async fn run_session<R, I, A, C>(
    game: GameLoop,
    sequencer: Sequencer,
    renderer: &mut R,
    input: &mut I,
    audio: &mut A,
    clock: &C,
) -> Result<SessionReport>
where
    R: Renderer,
    I: Input,
    A: Audio,
    C: Clock,
{
    let (game, melody_passes) = tokio::join!(
        game.run(renderer, input, clock),
        sequencer.run(audio, clock)
    );
    let report = SessionReport {
        game: game?,
        melody_passes,
    };
    info!(
        "session finished: score {}, {} melody pass(es)",
        report.game.score, report.melody_passes
    );
    Ok(report)
}

/// Single-threaded runtime with the timer enabled.
pub fn runtime() -> Result<Runtime> {
    Builder::new_current_thread()
        .enable_time()
        .build()
        .context("building scheduler runtime")
}
