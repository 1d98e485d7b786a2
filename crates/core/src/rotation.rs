//! Rotation resolver with a fixed kick list
//!
//! Rotation always steps to the next state. If the rotated piece does not fit
//! in place, horizontal kicks are tried in a fixed priority order and the
//! first legal one wins. The order decides which kick is used when several
//! are legal.

use crate::field::Field;
use crate::piece::Piece;

/// Kick candidates as `(row, col)` offsets, in priority order:
/// in place, left 1, right 1, left 2, right 2.
pub const KICKS: [(i8, i8); 5] = [(0, 0), (0, -1), (0, 1), (0, -2), (0, 2)];

/// Resolve a rotation without mutating the piece.
///
/// Returns the rotated (and possibly kicked) piece plus the kick used, or
/// `None` if no candidate fits.
pub fn try_rotate(piece: &Piece, field: &Field) -> Option<(Piece, (i8, i8))> {
    let next_rotation = (piece.rotation + 1) % piece.rotation_count();
    let rotated = Piece {
        rotation: next_rotation,
        ..*piece
    };

    KICKS.iter().find_map(|&(dr, dc)| {
        rotated
            .can_move(field, dr as i16, dc as i16)
            .then(|| (rotated.shifted(dr as i16, dc as i16), (dr, dc)))
    })
}

/// Rotate in place. Rotation and anchor change together, or not at all.
pub fn rotate(piece: &mut Piece, field: &Field) -> bool {
    match try_rotate(piece, field) {
        Some((rotated, _kick)) => {
            *piece = rotated;
            true
        }
        None => false,
    }
}
