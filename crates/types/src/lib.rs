//! Core types module - shared data structures and constants
//!
//! Plain data used by every other crate: piece kinds, display colors, player
//! actions and the default board/timing constants. Nothing here knows about
//! game rules, terminals or I/O.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Default board columns |
//! | `BOARD_HEIGHT` | 20 | Default board rows |
//! | `FALL_INTERVAL_MS` | 500 | Time between automatic downward steps |
//! | `TICK_MS` | 16 | Host loop timestep (~60 FPS) |
//!
//! # Scoring
//!
//! - soft drop: `SOFT_DROP_SCORE` per cell
//! - hard drop: `HARD_DROP_SCORE` per cell
//! - line clear: `LINE_CLEAR_SCORE` per cleared row (flat, no multipliers)
//!
//! # Examples
//!
//! ```
//! use reveal_tetris_types::{Color, GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.index(), 5);
//! assert_ne!(GameAction::HardDrop, GameAction::SoftDrop);
//! assert_eq!(Color::Orange.rgb().g, 165);
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default board width in cells
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest accepted board width/height (the I piece must fit lying down)
pub const MIN_BOARD_DIM: u8 = 4;

/// Largest accepted board width/height
pub const MAX_BOARD_DIM: u8 = 64;

/// Default automatic fall interval in milliseconds
pub const FALL_INTERVAL_MS: u32 = 500;

/// Host loop timestep in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Points per cell of successful soft drop
pub const SOFT_DROP_SCORE: u32 = 1;

/// Points per cell travelled by a hard drop
pub const HARD_DROP_SCORE: u32 = 2;

/// Points per cleared row
pub const LINE_CLEAR_SCORE: u32 = 100;

/// Seed used when the caller does not provide one
pub const DEFAULT_SEED: u32 = 1;

/// The seven tetromino piece kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Display color of a piece or a locked cell.
///
/// Colors are drawn independently of the piece kind, so any color may show up
/// on any shape. The engine only compares them for identity; hosts use
/// [`Color::rgb`] to paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl Color {
    /// All colors in palette order
    pub const ALL: [Color; 7] = [
        Color::Cyan,
        Color::Blue,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Purple,
        Color::Red,
    ];

    pub fn rgb(&self) -> Rgb {
        match self {
            Color::Cyan => Rgb::new(0, 255, 255),
            Color::Blue => Rgb::new(0, 0, 255),
            Color::Orange => Rgb::new(255, 165, 0),
            Color::Yellow => Rgb::new(255, 255, 0),
            Color::Green => Rgb::new(0, 255, 0),
            Color::Purple => Rgb::new(128, 0, 128),
            Color::Red => Rgb::new(255, 0, 0),
        }
    }
}

/// Player actions accepted by a session
///
/// Human input and scripted drivers both go through these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (scores per cell)
    SoftDrop,
    /// Rotate piece 90°, no wall kicks
    Rotate,
    /// Drop to the lowest valid row and lock immediately
    HardDrop,
    /// Start a fresh game
    Reset,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Color)`: Cell filled by a locked piece of that color
pub type Cell = Option<Color>;
