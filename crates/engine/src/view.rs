//! Frame composition: maps a [`Session`] onto [`Renderer`] calls.
//!
//! The display is split into a narrow panel (score text and next-piece
//! preview) and the playing field beside it. All positions are display grid
//! units.

use std::io;

use crate::core::Session;
use crate::types::hal::Renderer;
use crate::types::Rect;

/// Panel width in grid units. Wide enough for `Score:` plus five digits.
pub const PANEL_COLS: u16 = 10;
/// Grid row where the preview piece's anchor is drawn.
pub const PREVIEW_ROW: u16 = 2;

/// Where each part of the UI goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub panel: Rect,
    pub field: Rect,
}

impl Layout {
    /// Panel on the left, field to its right, both as tall as the field.
    pub fn for_field(rows: u8, cols: u8) -> Self {
        let height = rows as u16;
        Self {
            panel: Rect::new(0, 0, PANEL_COLS, height),
            field: Rect::new(PANEL_COLS, 0, cols as u16, height),
        }
    }

    pub fn for_session(session: &Session) -> Self {
        Self::for_field(session.field().rows(), session.field().cols())
    }

    /// The whole display.
    pub fn display(&self) -> Rect {
        Rect::new(
            0,
            0,
            self.field.x + self.field.width,
            self.panel.height.max(self.field.height),
        )
    }
}

/// Draw one running frame and present it.
pub fn draw_frame<R: Renderer>(
    renderer: &mut R,
    layout: &Layout,
    session: &Session,
) -> io::Result<()> {
    draw_panel(renderer, layout, session);
    draw_field(renderer, layout, session);
    renderer.present()
}

fn draw_panel<R: Renderer>(renderer: &mut R, layout: &Layout, session: &Session) {
    let panel = layout.panel;
    renderer.clear_region(panel);
    renderer.draw_text(&format!("Score:{}", session.score()), panel.x, panel.y);

    // Preview cells that would spill out of the panel are dropped.
    for &(dr, dc) in session.next().shape() {
        let row = panel.y + PREVIEW_ROW + dr as u16;
        let col = panel.x + dc as u16;
        if panel.contains(col, row) {
            renderer.draw_cell(row as i16, col as i16);
        }
    }
}

fn draw_field<R: Renderer>(renderer: &mut R, layout: &Layout, session: &Session) {
    let area = layout.field;
    renderer.clear_region(area);

    let origin_row = area.y as i16;
    let origin_col = area.x as i16;
    for (row, col) in session.field().occupied() {
        renderer.draw_cell(origin_row + row, origin_col + col);
    }
    for (row, col) in session.current().cells() {
        renderer.draw_cell(origin_row + row, origin_col + col);
    }
}

/// Full-screen game-over summary.
pub fn draw_game_over<R: Renderer>(renderer: &mut R, layout: &Layout, score: u32) -> io::Result<()> {
    renderer.clear_region(layout.display());
    renderer.draw_text("GAME OVER", 0, 4);
    renderer.draw_text(&format!("Score:{score}"), 0, 6);
    renderer.present()
}

/// Blank the whole display.
pub fn clear_screen<R: Renderer>(renderer: &mut R, layout: &Layout) -> io::Result<()> {
    renderer.clear_region(layout.display());
    renderer.present()
}
