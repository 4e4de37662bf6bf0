//! Piece module - the falling piece as a plain value
//!
//! A piece is copied in and out of the session's `current`/`next` slots;
//! movement and rotation produce new values that the session commits only
//! after the board accepts them.

use crate::catalog::{Mask, Shape};
use crate::types::{Color, PieceKind};

/// A falling piece: kind, current mask, color and board anchor.
///
/// The mask's top-left cell sits on board cell `(y, x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub mask: Mask,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Spawn a piece in its canonical orientation, horizontally centered on
    /// a board `board_width` cells wide, on the top row.
    pub fn spawn(shape: Shape, color: Color, board_width: u8) -> Self {
        let x = (board_width / 2) as i8 - (shape.mask.cols() / 2) as i8;
        Self {
            kind: shape.kind,
            mask: shape.mask,
            color,
            x,
            y: 0,
        }
    }

    /// Mask after one rotation step; the anchor stays put.
    pub fn rotated_mask(&self) -> Mask {
        self.mask.rotated()
    }

    /// Same piece shifted by `(dx, dy)`
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with a replacement mask
    pub fn with_mask(&self, mask: Mask) -> Self {
        Self { mask, ..*self }
    }

    /// Absolute board `(x, y)` of every occupied cell
    pub fn board_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.mask
            .cells()
            .into_iter()
            .map(move |(r, c)| (self.x + c, self.y + r))
    }
}
