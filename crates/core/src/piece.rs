//! Piece module - the live falling piece
//!
//! A piece is a shape kind, a rotation index into that shape's state list, and
//! an anchor `(row, col)`. Its cells are the anchor plus the current state's
//! offsets. [`Piece::can_move`] is the only legality check: gravity, shifts,
//! and rotation kicks all go through it.

use arrayvec::ArrayVec;

use crate::field::Field;
use crate::rng::SimpleRng;
use crate::shapes::{self, ShapeState};
use blockfall_types::{ShapeKind, MAX_PIECE_CELLS};

/// Absolute cell positions of a piece, `(row, col)`.
pub type PieceCells = ArrayVec<(i16, i16), MAX_PIECE_CELLS>;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub rotation: u8,
    pub row: i16,
    pub col: i16,
}

impl Piece {
    /// Create a piece. `rotation` is reduced into the shape's state range.
    pub fn new(kind: ShapeKind, rotation: u8, row: i16, col: i16) -> Self {
        let count = shapes::rotation_count(kind) as u8;
        Self {
            kind,
            rotation: rotation % count,
            row,
            col,
        }
    }

    /// Spawn a random piece at the top row, horizontally centered.
    ///
    /// Kind and rotation are both uniform. No collision check happens here; a
    /// blocked spawn shows up as a top-row lock later.
    pub fn spawn(rng: &mut SimpleRng, cols: u8) -> Self {
        let kind = ShapeKind::ALL[rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let rotation = rng.next_range(shapes::rotation_count(kind) as u32) as u8;
        Self::new(kind, rotation, 0, (cols / 2) as i16)
    }

    /// Offsets for the current rotation state
    pub fn shape(&self) -> ShapeState {
        shapes::get_shape(self.kind, self.rotation)
    }

    /// Number of rotation states for this piece's kind
    pub fn rotation_count(&self) -> u8 {
        shapes::rotation_count(self.kind) as u8
    }

    /// Absolute cell positions
    pub fn cells(&self) -> PieceCells {
        self.shape()
            .iter()
            .map(|&(dr, dc)| (self.row + dr as i16, self.col + dc as i16))
            .collect()
    }

    /// A copy translated by `(drow, dcol)`.
    pub fn shifted(&self, drow: i16, dcol: i16) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
            ..*self
        }
    }

    /// True iff every cell translated by `(drow, dcol)` is in bounds and free.
    pub fn can_move(&self, field: &Field, drow: i16, dcol: i16) -> bool {
        self.shape()
            .iter()
            .all(|&(dr, dc)| {
                !field.is_blocked(self.row + dr as i16 + drow, self.col + dc as i16 + dcol)
            })
    }

    /// Translate if legal. Returns whether the piece moved.
    pub fn try_move(&mut self, field: &Field, drow: i16, dcol: i16) -> bool {
        if !self.can_move(field, drow, dcol) {
            return false;
        }
        self.row += drow;
        self.col += dcol;
        true
    }

    /// True if the piece cannot fall any further.
    pub fn is_grounded(&self, field: &Field) -> bool {
        !self.can_move(field, 1, 0)
    }
}
