//! Field module - the occupancy grid of locked blocks
//!
//! The field is a fixed `rows x cols` grid of occupied/empty flags stored in a
//! flat row-major buffer. Coordinates are `(row, col)` with row 0 at the top.
//! Dimensions never change after construction.

use crate::piece::Piece;
use blockfall_types::{FIELD_COLS, FIELD_ROWS};

/// The playing field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    rows: u8,
    cols: u8,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<bool>,
}

impl Field {
    /// Create an empty field of the device's fixed size.
    pub fn new() -> Self {
        Self::with_size(FIELD_ROWS, FIELD_COLS)
    }

    /// Create an empty field with explicit dimensions.
    pub fn with_size(rows: u8, cols: u8) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows as usize * cols as usize],
        }
    }

    /// Build a field from text rows, `#` for occupied and anything else empty.
    ///
    /// All rows must have the same width.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as u8;
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0) as u8;
        let mut field = Self::with_size(height, width);
        for (r, line) in rows.iter().enumerate() {
            debug_assert_eq!(line.chars().count(), width as usize);
            for (c, ch) in line.chars().enumerate() {
                field.set(r as i16, c as i16, ch == '#');
            }
        }
        field
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.rows as i16 || col >= self.cols as i16 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// True if the position is outside the grid or already occupied.
    pub fn is_blocked(&self, row: i16, col: i16) -> bool {
        match self.index(row, col) {
            Some(idx) => self.cells[idx],
            None => true,
        }
    }

    /// True only for in-bounds occupied cells.
    pub fn is_occupied(&self, row: i16, col: i16) -> bool {
        self.index(row, col).is_some_and(|idx| self.cells[idx])
    }

    /// Set a cell. Returns false if out of bounds.
    pub fn set(&mut self, row: i16, col: i16, occupied: bool) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    fn row_slice(&self, row: usize) -> &[bool] {
        let width = self.cols as usize;
        &self.cells[row * width..(row + 1) * width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows as usize {
            return false;
        }
        self.row_slice(row).iter().all(|&cell| cell)
    }

    /// Check if a row has at least one occupied cell
    pub fn row_has_block(&self, row: usize) -> bool {
        if row >= self.rows as usize {
            return false;
        }
        self.row_slice(row).iter().any(|&cell| cell)
    }

    /// Write every in-bounds cell of `piece` into the grid.
    ///
    /// Cells outside the grid are skipped; callers only lock pieces that passed
    /// the collision checks, so this never happens in play.
    pub fn lock(&mut self, piece: &Piece) {
        for (row, col) in piece.cells() {
            self.set(row, col, true);
        }
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Remaining rows keep their relative order and slide down; the same number
    /// of empty rows appear at the top. Two-pointer pass, bottom to top.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.cols as usize;
        let height = self.rows as usize;
        let mut cleared = 0;
        let mut write_row = height;

        for read_row in (0..height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    let dst_start = write_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        self.cells[..write_row * width].fill(false);

        cleared
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Iterate over occupied positions in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        let width = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &cell)| cell)
            .map(move |(idx, _)| ((idx / width) as i16, (idx % width) as i16))
    }

    /// Render as text rows (`#` occupied, `.` empty), mostly for assertions.
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows as usize)
            .map(|row| {
                self.row_slice(row)
                    .iter()
                    .map(|&cell| if cell { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}
