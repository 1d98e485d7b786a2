//! Shape catalog - the seven piece templates and their rotation states
//!
//! Each shape is an ordered list of rotation states; a state is a fixed set of
//! `(row, col)` offsets from the piece anchor. Rotating steps to the next
//! state in the list, wrapping at the end.

use blockfall_types::{ShapeKind, MAX_PIECE_CELLS};

/// Offset of a single cell relative to the piece anchor, `(row, col)`.
pub type CellOffset = (i8, i8);

/// One rotation state.
pub type ShapeState = &'static [CellOffset];

const I_STATES: &[ShapeState] = &[
    &[(0, 1), (1, 1), (2, 1), (3, 1)],
    &[(2, 0), (2, 1), (2, 2), (2, 3)],
    &[(0, 2), (1, 2), (2, 2), (3, 2)],
    &[(1, 0), (1, 1), (1, 2), (1, 3)],
];

const T_STATES: &[ShapeState] = &[
    &[(0, 1), (1, 0), (1, 1), (1, 2)],
    &[(0, 1), (1, 0), (1, 1), (2, 1)],
    &[(0, 0), (0, 1), (0, 2), (1, 1)],
    &[(0, 1), (1, 1), (1, 2), (2, 1)],
];

const S_STATES: &[ShapeState] = &[
    &[(0, 1), (0, 2), (1, 0), (1, 1)],
    &[(0, 0), (1, 0), (1, 1), (2, 1)],
];

const Z_STATES: &[ShapeState] = &[
    &[(0, 0), (0, 1), (1, 1), (1, 2)],
    &[(0, 1), (1, 0), (1, 1), (2, 0)],
];

const J_STATES: &[ShapeState] = &[
    &[(0, 0), (1, 0), (1, 1), (1, 2)],
    &[(0, 1), (1, 1), (2, 0), (2, 1)],
    &[(0, 0), (0, 1), (0, 2), (1, 2)],
    &[(0, 0), (0, 1), (1, 0), (2, 0)],
];

const L_STATES: &[ShapeState] = &[
    &[(0, 0), (0, 1), (1, 0), (2, 0)],
    &[(0, 0), (1, 0), (1, 1), (1, 2)],
    &[(0, 1), (1, 1), (2, 0), (2, 1)],
    &[(0, 0), (0, 1), (0, 2), (1, 2)],
];

// Five cells: the only non-tetromino in the set.
const U_STATES: &[ShapeState] = &[
    &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2)],
    &[(0, 0), (0, 1), (1, 0), (2, 0), (2, 1)],
    &[(0, 0), (0, 2), (1, 0), (1, 1), (1, 2)],
    &[(0, 0), (0, 1), (1, 1), (2, 0), (2, 1)],
];

/// All rotation states for a shape kind, in rotation order.
pub fn rotations(kind: ShapeKind) -> &'static [ShapeState] {
    match kind {
        ShapeKind::I => I_STATES,
        ShapeKind::T => T_STATES,
        ShapeKind::S => S_STATES,
        ShapeKind::Z => Z_STATES,
        ShapeKind::J => J_STATES,
        ShapeKind::L => L_STATES,
        ShapeKind::U => U_STATES,
    }
}

/// Number of rotation states for a shape kind.
pub fn rotation_count(kind: ShapeKind) -> usize {
    rotations(kind).len()
}

/// Cell offsets for a kind at a rotation index.
///
/// The index wraps, so any `u8` maps to a valid state.
pub fn get_shape(kind: ShapeKind, rotation: u8) -> ShapeState {
    let states = rotations(kind);
    states[rotation as usize % states.len()]
}

/// Cells per piece of this kind.
pub fn cell_count(kind: ShapeKind) -> usize {
    rotations(kind)[0].len()
}

/// Startup check of the static catalog.
///
/// Every kind has at least one state, every state of a kind has the same
/// number of cells (at most [`MAX_PIECE_CELLS`]), offsets are non-negative,
/// and no state repeats an offset.
pub fn is_well_formed() -> bool {
    ShapeKind::ALL.iter().all(|&kind| {
        let states = rotations(kind);
        let Some(first) = states.first() else {
            return false;
        };
        let count = first.len();
        count > 0
            && count <= MAX_PIECE_CELLS
            && states.iter().all(|state| {
                state.len() == count
                    && state.iter().all(|&(r, c)| r >= 0 && c >= 0)
                    && state
                        .iter()
                        .enumerate()
                        .all(|(i, cell)| !state[i + 1..].contains(cell))
            })
    })
}

/// Bounding box `(rows, cols)` of a rotation state, measured from the anchor.
pub fn extent(state: ShapeState) -> (u8, u8) {
    let rows = state.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
    let cols = state.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
    (rows as u8, cols as u8)
}
