//! Game engine: the two cooperative tasks and the scheduler that runs them.
//!
//! - [`game_loop`]: input, gravity, locking, rendering, and the game-over sequence
//! - [`sequencer`]: the looping melody, stopped through the shared [`flag`]
//! - [`scheduler`]: joins both tasks on a single-threaded tokio runtime
//! - [`view`]: maps a session onto `Renderer` calls
//! - [`config`]: timings and environment overrides
//! - [`clock`]: tokio-backed `Clock`
//!
//! Hardware stays behind the traits in [`types::hal`](blockfall_types::hal).

pub mod clock;
pub mod config;
pub mod flag;
pub mod game_loop;
pub mod scheduler;
pub mod sequencer;
pub mod view;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use clock::TokioClock;
pub use config::{ConfigError, EngineConfig};
pub use flag::{audio_flag, AudioFlag, AudioSwitch};
pub use game_loop::{GameLoop, GameSummary, LoopTiming};
pub use scheduler::{prepare, run_session, runtime, SessionReport};
pub use sequencer::Sequencer;
pub use view::Layout;
