//! Session module - the complete state of one game
//!
//! Ties together the field, the falling piece, the pre-rolled next piece, the
//! RNG, and the score. The game loop owns exactly one `Session` and is the only
//! thing that mutates it. All operations are total: an illegal move returns
//! `false` and changes nothing.

use log::{debug, info};

use crate::field::Field;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::{rotation, scoring, shapes};
use blockfall_types::Button;

/// Running/terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// What one gravity check did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallOutcome {
    /// The fall interval has not elapsed yet.
    Waiting,
    /// The piece moved down one row.
    Fell,
    /// The piece locked; the next piece is now falling.
    Locked { lines_cleared: u32 },
    /// The piece locked and left a block in the top row.
    ToppedOut { lines_cleared: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    field: Field,
    current: Piece,
    next: Piece,
    rng: SimpleRng,
    score: u32,
    lines_cleared: u32,
    pieces_locked: u32,
    last_fall_ms: u64,
    phase: Phase,
}

impl Session {
    /// New game on the device-sized field.
    pub fn new(seed: u32, now_ms: u64) -> Self {
        Self::with_field(Field::new(), seed, now_ms)
    }

    /// New game on a given field; current and next are rolled from `seed`.
    pub fn with_field(field: Field, seed: u32, now_ms: u64) -> Self {
        let mut rng = SimpleRng::new(seed);
        let current = Piece::spawn(&mut rng, field.cols());
        let next = Piece::spawn(&mut rng, field.cols());
        Self::with_pieces(field, current, next, rng, now_ms)
    }

    /// New game with explicit current and next pieces.
    pub fn with_pieces(
        field: Field,
        current: Piece,
        next: Piece,
        rng: SimpleRng,
        now_ms: u64,
    ) -> Self {
        debug_assert!(shapes::is_well_formed());
        info!(
            "session start: field {}x{}, current {}, next {}",
            field.rows(),
            field.cols(),
            current.kind.as_str(),
            next.kind.as_str()
        );
        Self {
            field,
            current,
            next,
            rng,
            score: 0,
            lines_cleared: 0,
            pieces_locked: 0,
            last_fall_ms: now_ms,
            phase: Phase::Running,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn last_fall_ms(&self) -> u64 {
        self.last_fall_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    fn try_move(&mut self, drow: i16, dcol: i16) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.current.try_move(&self.field, drow, dcol)
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(0, -1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Move down one row without locking.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Rotate with kicks. Unchanged on failure.
    pub fn rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        rotation::rotate(&mut self.current, &self.field)
    }

    /// Apply the action bound to a button.
    pub fn apply(&mut self, button: Button) -> bool {
        match button {
            Button::MoveLeft => self.move_left(),
            Button::MoveRight => self.move_right(),
            Button::Rotate => self.rotate(),
        }
    }

    /// Whether more than `fall_interval_ms` has passed since the last fall.
    pub fn fall_due(&self, now_ms: u64, fall_interval_ms: u32) -> bool {
        now_ms.saturating_sub(self.last_fall_ms) > fall_interval_ms as u64
    }

    /// Gravity check for one tick.
    ///
    /// Does nothing until the fall interval has elapsed, then falls or locks
    /// and restarts the interval from `now_ms`.
    pub fn step_gravity(&mut self, now_ms: u64, fall_interval_ms: u32) -> FallOutcome {
        if self.is_game_over() || !self.fall_due(now_ms, fall_interval_ms) {
            return FallOutcome::Waiting;
        }
        self.fall(now_ms)
    }

    /// Unconditional gravity step: fall one row, or lock if resting.
    pub fn fall(&mut self, now_ms: u64) -> FallOutcome {
        if self.is_game_over() {
            return FallOutcome::Waiting;
        }
        let outcome = if self.current.try_move(&self.field, 1, 0) {
            FallOutcome::Fell
        } else {
            self.lock_current()
        };
        self.last_fall_ms = now_ms;
        outcome
    }

    /// Lock the current piece, score it, clear rows, then top out or advance.
    fn lock_current(&mut self) -> FallOutcome {
        self.field.lock(&self.current);
        self.pieces_locked += 1;

        let lines_cleared = self.field.clear_full_rows() as u32;
        self.lines_cleared += lines_cleared;
        self.score = scoring::apply_lock(self.score, lines_cleared);
        debug!(
            "locked {} at ({}, {}): {} line(s), score {}",
            self.current.kind.as_str(),
            self.current.row,
            self.current.col,
            lines_cleared,
            self.score
        );

        if self.field.row_has_block(0) {
            self.phase = Phase::GameOver;
            info!(
                "game over: score {}, {} pieces, {} lines",
                self.score, self.pieces_locked, self.lines_cleared
            );
            return FallOutcome::ToppedOut { lines_cleared };
        }

        let spawned = Piece::spawn(&mut self.rng, self.field.cols());
        self.current = std::mem::replace(&mut self.next, spawned);
        debug!(
            "next piece: {} (preview {})",
            self.current.kind.as_str(),
            self.next.kind.as_str()
        );
        FallOutcome::Locked { lines_cleared }
    }
}
