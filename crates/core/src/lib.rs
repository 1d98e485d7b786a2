//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the falling-block game: the field, the
//! shape catalog, piece movement and rotation, scoring, the melody data, and
//! the session state machine that ties them together. It has no dependencies
//! on the display, buttons, speaker, or clock; timestamps come in as plain
//! milliseconds.
//!
//! # Module Structure
//!
//! - [`field`]: fixed-size occupancy grid with collision queries and line clearing
//! - [`shapes`]: the seven shape templates and their rotation states
//! - [`piece`]: the falling piece, spawning, and the `can_move` legality check
//! - [`rotation`]: rotation with the fixed kick list
//! - [`rng`]: small seeded generator for piece selection
//! - [`scoring`]: lock and line bonuses
//! - [`melody`]: the looping theme as `(tone, duration)` notes
//! - [`session`]: one game's state and its `Running`/`GameOver` transitions
//!
//! # Example
//!
//! ```
//! use blockfall_core::{FallOutcome, Session};
//!
//! let mut session = Session::new(12345, 0);
//! session.move_left();
//! session.rotate();
//!
//! // One row of gravity once more than 1ms has passed.
//! assert_eq!(session.step_gravity(2, 1), FallOutcome::Fell);
//! ```

pub mod field;
pub mod melody;
pub mod piece;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod shapes;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use field::Field;
pub use melody::{Note, MELODY};
pub use piece::Piece;
pub use rng::SimpleRng;
pub use rotation::{rotate, try_rotate, KICKS};
pub use session::{FallOutcome, Phase, Session};
pub use shapes::get_shape;
