//! Shape catalog - occupancy masks for the seven piece kinds
//!
//! Each shape is stored as the bounding box of its canonical orientation.
//! Rotation produces a new mask with rows and columns swapped, so the box is
//! always tight around the piece.

use arrayvec::ArrayVec;

use crate::rng::RandomSource;
use crate::types::{Color, PieceKind};

/// Largest bounding box side of any piece in any orientation
pub const MAX_MASK_DIM: usize = 4;

/// Occupied cells of a mask, as `(row, col)` offsets
pub type MaskCells = ArrayVec<(i8, i8), { MAX_MASK_DIM * MAX_MASK_DIM }>;

/// 2-D boolean occupancy matrix (row-major, at most 4x4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mask {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_MASK_DIM]; MAX_MASK_DIM],
}

impl Mask {
    /// Build a mask from its first `rows` x `cols` bits.
    ///
    /// Bits outside the box are ignored.
    pub const fn new(rows: u8, cols: u8, bits: [[bool; MAX_MASK_DIM]; MAX_MASK_DIM]) -> Self {
        let mut clean = [[false; MAX_MASK_DIM]; MAX_MASK_DIM];
        let mut r = 0;
        while r < rows as usize {
            let mut c = 0;
            while c < cols as usize {
                clean[r][c] = bits[r][c];
                c += 1;
            }
            r += 1;
        }
        Self {
            rows,
            cols,
            bits: clean,
        }
    }

    /// Build a mask from rows of 0/1 values, as the catalog is written.
    ///
    /// Returns `None` for empty, ragged or oversized input.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || width == 0 || height > MAX_MASK_DIM || width > MAX_MASK_DIM {
            return None;
        }
        let mut bits = [[false; MAX_MASK_DIM]; MAX_MASK_DIM];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return None;
            }
            for (c, &v) in row.iter().enumerate() {
                bits[r][c] = v != 0;
            }
        }
        Some(Self::new(height as u8, width as u8, bits))
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether `(row, col)` is occupied; false outside the box
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.bits[row][col]
    }

    /// Occupied `(row, col)` offsets in row-major order
    pub fn cells(&self) -> MaskCells {
        let mut out = MaskCells::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.bits[r][c] {
                    out.push((r as i8, c as i8));
                }
            }
        }
        out
    }

    /// Rotate 90°: an R x C mask becomes C x R with
    /// `rotated[i][j] = original[j][C - 1 - i]`.
    pub fn rotated(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut bits = [[false; MAX_MASK_DIM]; MAX_MASK_DIM];
        for (i, out_row) in bits.iter_mut().enumerate().take(cols) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.bits[j][cols - 1 - i];
            }
        }
        Self::new(self.cols, self.rows, bits)
    }

    /// Mask as nested rows, for display and tests
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows as usize)
            .map(|r| self.bits[r][..self.cols as usize].to_vec())
            .collect()
    }
}

/// A catalog entry: a kind and its canonical mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub kind: PieceKind,
    pub mask: Mask,
}

const X: bool = true;
const O: bool = false;

/// The seven canonical shapes, in [`PieceKind::ALL`] order
pub const CATALOG: [Shape; 7] = [
    Shape {
        kind: PieceKind::I,
        mask: Mask::new(1, 4, [[X, X, X, X], [O; 4], [O; 4], [O; 4]]),
    },
    Shape {
        kind: PieceKind::J,
        mask: Mask::new(2, 3, [[X, O, O, O], [X, X, X, O], [O; 4], [O; 4]]),
    },
    Shape {
        kind: PieceKind::L,
        mask: Mask::new(2, 3, [[O, O, X, O], [X, X, X, O], [O; 4], [O; 4]]),
    },
    Shape {
        kind: PieceKind::O,
        mask: Mask::new(2, 2, [[X, X, O, O], [X, X, O, O], [O; 4], [O; 4]]),
    },
    Shape {
        kind: PieceKind::S,
        mask: Mask::new(2, 3, [[O, X, X, O], [X, X, O, O], [O; 4], [O; 4]]),
    },
    Shape {
        kind: PieceKind::T,
        mask: Mask::new(2, 3, [[O, X, O, O], [X, X, X, O], [O; 4], [O; 4]]),
    },
    Shape {
        kind: PieceKind::Z,
        mask: Mask::new(2, 3, [[X, X, O, O], [O, X, X, O], [O; 4], [O; 4]]),
    },
];

/// Canonical shape for a kind
pub fn shape(kind: PieceKind) -> Shape {
    CATALOG[kind.index()]
}

/// Draw a shape and a color, uniformly and independently.
///
/// The kind is drawn first, then the color, so scripted sources map
/// value pairs to `(kind, color)` predictably.
pub fn random_shape(rng: &mut impl RandomSource) -> (Shape, Color) {
    let entry = CATALOG[rng.next_range(CATALOG.len() as u32) as usize];
    let color = Color::ALL[rng.next_range(Color::ALL.len() as u32) as usize];
    (entry, color)
}
