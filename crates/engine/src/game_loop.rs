//! Game loop task
//!
//! One tick: poll the three buttons (debouncing after each applied press),
//! run the gravity check, draw, then wait for the next frame. When a lock
//! leaves a block in the top row the loop stops the music, shows the summary
//! for the hold duration, blanks the display, and returns.

use anyhow::{Context, Result};
use log::{info, trace};

use crate::config::EngineConfig;
use crate::core::{FallOutcome, Session};
use crate::flag::AudioSwitch;
use crate::types::hal::{Clock, Input, Renderer};
use crate::types::Button;
use crate::view::{self, Layout};

/// Final numbers of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    pub score: u32,
    pub lines_cleared: u32,
    pub pieces_locked: u32,
    pub ticks: u64,
}

/// Timings the loop waits on, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopTiming {
    pub fall_interval_ms: u32,
    pub debounce_ms: u32,
    pub frame_ms: u32,
    pub game_over_hold_ms: u32,
}

impl From<&EngineConfig> for LoopTiming {
    fn from(config: &EngineConfig) -> Self {
        Self {
            fall_interval_ms: config.fall_interval_ms,
            debounce_ms: config.debounce_ms,
            frame_ms: config.frame_ms,
            game_over_hold_ms: config.game_over_hold_ms,
        }
    }
}

/// The game task. Owns the session and the write half of the audio flag.
pub struct GameLoop {
    session: Session,
    layout: Layout,
    switch: AudioSwitch,
    timing: LoopTiming,
    ticks: u64,
}

impl GameLoop {
    pub fn new(session: Session, switch: AudioSwitch, timing: LoopTiming) -> Self {
        let layout = Layout::for_session(&session);
        Self {
            session,
            layout,
            switch,
            timing,
            ticks: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one tick. Returns what gravity did this tick.
    pub async fn tick<R, I, C>(
        &mut self,
        renderer: &mut R,
        input: &mut I,
        clock: &C,
    ) -> Result<FallOutcome>
    where
        R: Renderer,
        I: Input,
        C: Clock,
    {
        let now = clock.now_ms();

        for button in Button::ALL {
            if input.is_pressed(button) && self.session.apply(button) {
                trace!("applied {}", button.as_str());
                clock.sleep_ms(self.timing.debounce_ms).await;
            }
        }

        let outcome = self
            .session
            .step_gravity(now, self.timing.fall_interval_ms);

        view::draw_frame(renderer, &self.layout, &self.session).context("presenting frame")?;
        self.ticks += 1;
        clock.sleep_ms(self.timing.frame_ms).await;

        Ok(outcome)
    }

    /// Tick until game over, then run the game-over sequence.
    pub async fn run<R, I, C>(mut self, renderer: &mut R, input: &mut I, clock: &C) -> Result<GameSummary>
    where
        R: Renderer,
        I: Input,
        C: Clock,
    {
        while !self.session.is_game_over() {
            self.tick(renderer, input, clock).await?;
        }
        self.finish(renderer, clock).await
    }

    async fn finish<R, C>(self, renderer: &mut R, clock: &C) -> Result<GameSummary>
    where
        R: Renderer,
        C: Clock,
    {
        self.switch.disable();

        let summary = GameSummary {
            score: self.session.score(),
            lines_cleared: self.session.lines_cleared(),
            pieces_locked: self.session.pieces_locked(),
            ticks: self.ticks,
        };
        info!(
            "showing game over for {}ms (score {})",
            self.timing.game_over_hold_ms, summary.score
        );

        view::draw_game_over(renderer, &self.layout, summary.score)
            .context("presenting game over screen")?;
        clock.sleep_ms(self.timing.game_over_hold_ms).await;
        view::clear_screen(renderer, &self.layout).context("clearing display")?;

        Ok(summary)
    }
}
