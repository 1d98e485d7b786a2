//! Fake collaborators shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use tokio::time::Instant;

use blockfall::term::{Canvas, FrameBuffer};
use blockfall::types::hal::{Audio, Input, Renderer};
use blockfall::types::{Button, Rect};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Clear(Rect),
    Cell(i16, i16),
    Text(String, u16, u16),
    Present,
}

/// Records every renderer call in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub ops: Vec<DrawOp>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presents(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Present).count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(text, _, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn clear_region(&mut self, rect: Rect) {
        self.ops.push(DrawOp::Clear(rect));
    }

    fn draw_cell(&mut self, row: i16, col: i16) {
        self.ops.push(DrawOp::Cell(row, col));
    }

    fn draw_text(&mut self, text: &str, x: u16, y: u16) {
        self.ops.push(DrawOp::Text(text.to_string(), x, y));
    }

    fn present(&mut self) -> io::Result<()> {
        self.ops.push(DrawOp::Present);
        Ok(())
    }
}

/// Renders into a terminal canvas and keeps the last presented frame.
pub struct CanvasRenderer {
    pub canvas: Canvas,
    pub frame: FrameBuffer,
}

impl CanvasRenderer {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            canvas: Canvas::new(cols, rows),
            frame: FrameBuffer::new(0, 0),
        }
    }

    pub fn line(&self, y: u16) -> String {
        self.frame.line(y)
    }
}

impl Renderer for CanvasRenderer {
    fn clear_region(&mut self, rect: Rect) {
        self.canvas.clear_region(rect);
    }

    fn draw_cell(&mut self, row: i16, col: i16) {
        self.canvas.set_block(row, col);
    }

    fn draw_text(&mut self, text: &str, x: u16, y: u16) {
        self.canvas.put_text(text, x, y);
    }

    fn present(&mut self) -> io::Result<()> {
        self.canvas.compose_into(&mut self.frame);
        Ok(())
    }
}

/// Replays one set of held buttons per polling round, then nothing.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    rounds: VecDeque<Vec<Button>>,
    held: Vec<Button>,
    pub polls: usize,
}

impl ScriptedInput {
    pub fn new(rounds: Vec<Vec<Button>>) -> Self {
        Self {
            rounds: rounds.into(),
            held: Vec::new(),
            polls: 0,
        }
    }

    pub fn idle() -> Self {
        Self::default()
    }
}

impl Input for ScriptedInput {
    fn is_pressed(&mut self, button: Button) -> bool {
        if button == Button::ALL[0] {
            self.held = self.rounds.pop_front().unwrap_or_default();
        }
        self.polls += 1;
        self.held.contains(&button)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    Tone(u16),
    On,
    Off,
}

/// Speaker that logs calls with their (virtual) time.
#[derive(Debug)]
pub struct RecordingAudio {
    origin: Instant,
    pub events: Vec<(u64, Sound)>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            events: Vec::new(),
        }
    }

    fn push(&mut self, sound: Sound) {
        let at = self.origin.elapsed().as_millis() as u64;
        self.events.push((at, sound));
    }

    pub fn count(&self, sound: Sound) -> usize {
        self.events.iter().filter(|(_, s)| *s == sound).count()
    }

    pub fn tones(&self) -> usize {
        self.events
            .iter()
            .filter(|(_, s)| matches!(s, Sound::Tone(_)))
            .count()
    }
}

impl Audio for RecordingAudio {
    fn set_tone(&mut self, frequency_hz: u16) {
        self.push(Sound::Tone(frequency_hz));
    }

    fn set_volume(&mut self, on: bool) {
        self.push(if on { Sound::On } else { Sound::Off });
    }
}
