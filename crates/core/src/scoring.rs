//! Scoring module
//!
//! Every lock is worth a flat bonus, and every row it clears adds a flat
//! per-line bonus on top. No levels, combos, or multipliers.

use blockfall_types::{LINE_SCORE, LOCK_SCORE};

/// Points for one lock that cleared `lines_cleared` rows.
pub fn lock_score(lines_cleared: u32) -> u32 {
    LOCK_SCORE.saturating_add(LINE_SCORE.saturating_mul(lines_cleared))
}

/// Add a lock's points to a running score without wrapping.
pub fn apply_lock(score: u32, lines_cleared: u32) -> u32 {
    score.saturating_add(lock_score(lines_cleared))
}
