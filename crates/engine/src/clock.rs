//! Tokio-backed [`Clock`].

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::types::hal::Clock;

/// Milliseconds since construction, sleeping on the tokio timer.
///
/// Built on `tokio::time::Instant`, so a paused test runtime drives it with
/// virtual time.
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: Instant,
}

impl TokioClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TokioClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep_ms(&self, ms: u32) -> impl Future<Output = ()> {
        tokio::time::sleep(Duration::from_millis(ms as u64))
    }
}
