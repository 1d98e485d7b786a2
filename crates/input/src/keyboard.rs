//! KeyboardInput: the engine's `Input` backed by crossterm key events.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, warn};

use crate::latch::ButtonLatch;
use crate::map::{button_for_key, should_quit};
use crate::types::hal::Input;
use crate::types::Button;

/// Shared view of whether the player asked to quit.
#[derive(Debug, Clone, Default)]
pub struct QuitHandle(Arc<AtomicBool>);

impl QuitHandle {
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn request(&self) {
        self.0.store(true, Ordering::Release);
    }
}

pub struct KeyboardInput {
    latch: ButtonLatch,
    quit: QuitHandle,
    origin: Instant,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::with_latch(ButtonLatch::default())
    }

    pub fn with_latch(latch: ButtonLatch) -> Self {
        Self {
            latch,
            quit: QuitHandle::default(),
            origin: Instant::now(),
        }
    }

    pub fn quit_handle(&self) -> QuitHandle {
        self.quit.clone()
    }

    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    /// Drain every pending terminal event without blocking.
    pub fn pump(&mut self) {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    warn!("polling terminal events failed: {e}");
                    break;
                }
            }

            let key = match event::read() {
                Ok(Event::Key(key)) => key,
                Ok(_) => continue,
                Err(e) => {
                    warn!("reading terminal event failed: {e}");
                    break;
                }
            };

            if should_quit(key) {
                debug!("quit requested");
                self.quit.request();
                continue;
            }

            let Some(button) = button_for_key(key) else {
                continue;
            };
            match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    let now = self.now_ms();
                    self.latch.press(button, now);
                }
                KeyEventKind::Release => self.latch.release(button),
            }
        }
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Input for KeyboardInput {
    fn is_pressed(&mut self, button: Button) -> bool {
        // Buttons are polled in a fixed order; refresh once per round.
        if button == Button::ALL[0] {
            self.pump();
        }
        let now = self.now_ms();
        self.latch.is_held(button, now)
    }
}
