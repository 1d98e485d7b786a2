//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests, and the benches can reach everything through
//! `blockfall::{core,engine,input,sound,term,types}`.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_sound as sound;
pub use blockfall_term as term;
pub use blockfall_types as types;
