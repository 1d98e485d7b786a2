//! TerminalRenderer: the display driver for a desktop terminal.
//!
//! Drawing calls land on a [`Canvas`]; `present` composes it into a character
//! framebuffer and writes only the runs that changed since the last frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use blockfall_types::hal::Renderer;
use blockfall_types::Rect;

use crate::canvas::Canvas;
use crate::fb::{Cell, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    canvas: Canvas,
    front: FrameBuffer,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    /// Renderer for a display `cols x rows` grid units large.
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            stdout: io::stdout(),
            canvas: Canvas::new(cols, rows),
            front: FrameBuffer::new(0, 0),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.invalidate();
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()
    }
}

impl Renderer for TerminalRenderer {
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
        self.canvas.compose_into(&mut self.front);

        let same_size = self.last.as_ref().is_some_and(|prev| {
            prev.width() == self.front.width() && prev.height() == self.front.height()
        });

        self.buf.clear();
        match &self.last {
            Some(prev) if same_size => encode_diff_into(prev, &self.front, &mut self.buf)?,
            _ => encode_full_into(&self.front, &mut self.buf)?,
        }
        self.flush_buf()?;

        // Keep the presented frame for the next diff; reuse the old allocation.
        match self.last.as_mut() {
            Some(prev) if same_size => std::mem::swap(prev, &mut self.front),
            _ => {
                let presented = self.front.clone();
                self.last = Some(presented);
            }
        }
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut bold = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            put_cell(out, cell, &mut bold)?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> io::Result<()> {
    let mut bold = None;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            put_cell(out, cell, &mut bold)?;
        }
        Ok(())
    })?;

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn put_cell(out: &mut Vec<u8>, cell: Cell, bold: &mut Option<bool>) -> io::Result<()> {
    if *bold != Some(cell.bold) {
        out.queue(SetAttribute(if cell.bold {
            Attribute::Bold
        } else {
            Attribute::NormalIntensity
        }))?;
        *bold = Some(cell.bold);
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> io::Result<()>,
) -> io::Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
