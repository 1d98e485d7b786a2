//! Core types shared across the workspace.
//!
//! This crate contains pure data types with no external dependencies: display
//! geometry, timing defaults, shape and tone identifiers, button ids, and the
//! collaborator traits in [`hal`] that the engine drives.

pub mod hal;

/// Portrait display geometry in pixels.
pub const DISPLAY_WIDTH: u16 = 32;
pub const DISPLAY_HEIGHT: u16 = 128;
/// Width of the score/preview band beside the field.
pub const UI_WIDTH: u16 = 8;
/// Edge length of one block in pixels.
pub const BLOCK_SIZE: u16 = 3;

/// Field dimensions derived from the display: 42 rows x 8 columns.
pub const FIELD_ROWS: u8 = (DISPLAY_HEIGHT / BLOCK_SIZE) as u8;
pub const FIELD_COLS: u8 = ((DISPLAY_WIDTH - UI_WIDTH) / BLOCK_SIZE) as u8;

/// Largest cell count of any shape (the U piece).
pub const MAX_PIECE_CELLS: usize = 5;

/// Game timing defaults (in milliseconds)
pub const DEFAULT_FALL_INTERVAL_MS: u32 = 1;
pub const DEFAULT_DEBOUNCE_MS: u32 = 100;
pub const DEFAULT_FRAME_MS: u32 = 50;
pub const DEFAULT_NOTE_GAP_MS: u32 = 50;
pub const DEFAULT_GAME_OVER_HOLD_MS: u32 = 10_000;

/// Points awarded for every lock, cleared lines or not.
pub const LOCK_SCORE: u32 = 10;
/// Points awarded per cleared row.
pub const LINE_SCORE: u32 = 100;

/// Piece shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    T,
    S,
    Z,
    J,
    L,
    U,
}

impl ShapeKind {
    /// Every kind, in catalog order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::U,
    ];

    /// Convert to uppercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::I => "I",
            ShapeKind::T => "T",
            ShapeKind::S => "S",
            ShapeKind::Z => "Z",
            ShapeKind::J => "J",
            ShapeKind::L => "L",
            ShapeKind::U => "U",
        }
    }
}

/// The three logical buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    MoveLeft,
    MoveRight,
    Rotate,
}

impl Button {
    /// Polling order used by the game loop.
    pub const ALL: [Button; 3] = [Button::MoveLeft, Button::MoveRight, Button::Rotate];

    pub fn index(&self) -> usize {
        match self {
            Button::MoveLeft => 0,
            Button::MoveRight => 1,
            Button::Rotate => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Button::MoveLeft => "moveLeft",
            Button::MoveRight => "moveRight",
            Button::Rotate => "rotate",
        }
    }
}

/// Named tones used by the melody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    C3,
    D3,
    E3,
    F3,
    G3,
    A3,
    B3,
    C4,
    D4,
    E4,
    F4,
    G4,
    A4,
    B4,
    C5,
}

impl Tone {
    /// Speaker frequency in Hz.
    ///
    /// These are the device's tuned values, not equal-temperament pitches.
    pub const fn frequency_hz(self) -> u16 {
        match self {
            Tone::C3 => 132,
            Tone::D3 => 148,
            Tone::E3 => 166,
            Tone::F3 => 176,
            Tone::G3 => 196,
            Tone::A3 => 220,
            Tone::B3 => 248,
            Tone::C4 => 262,
            Tone::D4 => 294,
            Tone::E4 => 330,
            Tone::F4 => 349,
            Tone::G4 => 392,
            Tone::A4 => 440,
            Tone::B4 => 494,
            Tone::C5 => 524,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::C3 => "C3",
            Tone::D3 => "D3",
            Tone::E3 => "E3",
            Tone::F3 => "F3",
            Tone::G3 => "G3",
            Tone::A3 => "A3",
            Tone::B3 => "B3",
            Tone::C4 => "C4",
            Tone::D4 => "D4",
            Tone::E4 => "E4",
            Tone::F4 => "F4",
            Tone::G4 => "G4",
            Tone::A4 => "A4",
            Tone::B4 => "B4",
            Tone::C5 => "C5",
        }
    }
}

/// Axis-aligned region in display grid units (one unit = one block).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether grid position `(x, y)` lies inside the rect.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x - self.x) < self.width
            && (y - self.y) < self.height
    }
}
