//! Grid-unit drawing surface.
//!
//! Blocks are one column wide and half a terminal line tall, so two field rows
//! share one line as `▀`, `▄`, or `█`. That keeps cells roughly square and fits
//! the 42-row field into 21 lines. Text sits on a separate layer addressed in
//! grid units as well and wins over blocks when composed.

use blockfall_types::Rect;

use crate::fb::{Cell, FrameBuffer};

const UPPER: char = '▀';
const LOWER: char = '▄';
const FULL: char = '█';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cols: u16,
    rows: u16,
    blocks: Vec<bool>,
    text: Vec<Option<char>>,
}

impl Canvas {
    /// A canvas `cols` grid units wide and `rows` grid units tall.
    pub fn new(cols: u16, rows: u16) -> Self {
        let lines = Self::lines_for(rows);
        Self {
            cols,
            rows,
            blocks: vec![false; cols as usize * rows as usize],
            text: vec![None; cols as usize * lines as usize],
        }
    }

    fn lines_for(rows: u16) -> u16 {
        rows.div_ceil(2)
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Terminal lines needed to show every grid row.
    pub fn lines(&self) -> u16 {
        Self::lines_for(self.rows)
    }

    pub fn is_block(&self, row: i16, col: i16) -> bool {
        self.block_idx(row, col).is_some_and(|i| self.blocks[i])
    }

    fn block_idx(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || col < 0 || row as u16 >= self.rows || col as u16 >= self.cols {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    fn text_idx(&self, x: u16, line: u16) -> Option<usize> {
        if x >= self.cols || line >= self.lines() {
            return None;
        }
        Some(line as usize * self.cols as usize + x as usize)
    }

    pub fn set_block(&mut self, row: i16, col: i16) {
        if let Some(i) = self.block_idx(row, col) {
            self.blocks[i] = true;
        }
    }

    /// Write text starting at grid `(x, y)`; it lands on line `y / 2`.
    pub fn put_text(&mut self, text: &str, x: u16, y: u16) {
        let line = y / 2;
        for (dx, ch) in text.chars().enumerate() {
            let Some(i) = self.text_idx(x.saturating_add(dx as u16), line) else {
                break;
            };
            self.text[i] = Some(ch);
        }
    }

    /// Erase blocks and text inside `rect`.
    ///
    /// Text is erased on every line the rect touches.
    pub fn clear_region(&mut self, rect: Rect) {
        for y in rect.y..rect.y.saturating_add(rect.height).min(self.rows) {
            for x in rect.x..rect.x.saturating_add(rect.width).min(self.cols) {
                if let Some(i) = self.block_idx(y as i16, x as i16) {
                    self.blocks[i] = false;
                }
            }
        }
        if rect.height == 0 {
            return;
        }
        let first_line = rect.y / 2;
        let last_line = (rect.y.saturating_add(rect.height) - 1) / 2;
        for line in first_line..=last_line {
            for x in rect.x..rect.x.saturating_add(rect.width).min(self.cols) {
                if let Some(i) = self.text_idx(x, line) {
                    self.text[i] = None;
                }
            }
        }
    }

    /// Compose into `fb`, resizing it to `cols x lines`.
    pub fn compose_into(&self, fb: &mut FrameBuffer) {
        if fb.width() != self.cols || fb.height() != self.lines() {
            *fb = FrameBuffer::new(self.cols, self.lines());
        }
        for line in 0..self.lines() {
            for x in 0..self.cols {
                let cell = match self.text_idx(x, line).and_then(|i| self.text[i]) {
                    Some(ch) => Cell { ch, bold: true },
                    None => {
                        let top = self.is_block((line * 2) as i16, x as i16);
                        let bottom = self.is_block((line * 2 + 1) as i16, x as i16);
                        let ch = match (top, bottom) {
                            (true, true) => FULL,
                            (true, false) => UPPER,
                            (false, true) => LOWER,
                            (false, false) => ' ',
                        };
                        Cell { ch, bold: false }
                    }
                };
                fb.set(x, line, cell);
            }
        }
    }
}
