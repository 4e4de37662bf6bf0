//! Board module - manages the game grid
//!
//! The board is a W x H grid where each cell is empty or holds the color of a
//! locked piece. Cells live in one flat row-major vector (`y * width + x`).
//! Coordinates: x grows left to right, y grows top to bottom.
//!
//! Rows above the board (y < 0) are not stored. Placement checks let piece
//! cells hang above the top edge, and locking drops those cells.

use arrayvec::ArrayVec;

use crate::catalog::Mask;
use crate::piece::Piece;
use crate::types::{Cell, MAX_BOARD_DIM};

/// Row indices produced by a full-row scan (bounded by the tallest board)
pub type RowList = ArrayVec<usize, { MAX_BOARD_DIM as usize }>;

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Dimensions are trusted here; sessions validate them through
    /// `SessionConfig` first. Both sides are clamped to `1..=MAX_BOARD_DIM`.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.clamp(1, MAX_BOARD_DIM);
        let height = height.clamp(1, MAX_BOARD_DIM);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || y < 0 || x as u8 >= self.width || y as u8 >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether `mask` anchored at `(x, y)` fits.
    ///
    /// A cell is rejected when it leaves the board to the left, right or
    /// bottom, or lands on an occupied on-board cell. Cells above the top
    /// edge (`y < 0`) are always accepted.
    pub fn is_valid(&self, mask: &Mask, x: i8, y: i8) -> bool {
        mask.cells().iter().all(|&(r, c)| {
            let nx = x as i16 + c as i16;
            let ny = y as i16 + r as i16;
            if nx < 0 || nx >= self.width as i16 || ny >= self.height as i16 {
                return false;
            }
            ny < 0 || !self.is_occupied(nx as i8, ny as i8)
        })
    }

    /// [`Board::is_valid`] for a piece at its own anchor
    pub fn fits(&self, piece: &Piece) -> bool {
        self.is_valid(&piece.mask, piece.x, piece.y)
    }

    /// Write the piece's color into every on-board cell it covers.
    ///
    /// Cells above the top edge are dropped. Cells outside the board on other
    /// sides cannot occur for a piece that passed [`Board::fits`], and are
    /// ignored as well.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.board_cells() {
            if y >= 0 {
                self.set(x, y, Some(piece.color));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Indices of all full rows, ascending
    pub fn find_full_rows(&self) -> RowList {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove a row and shift all rows above it down by one.
    /// The top row becomes empty.
    ///
    /// Returns the number of lines cleared (1 or 0)
    pub fn clear_row(&mut self, y: usize) -> usize {
        if y >= self.height as usize {
            return 0;
        }

        let width = self.width as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }
        self.cells[..width].fill(None);

        1
    }

    /// Remove every listed row, compacting the rows above.
    ///
    /// Rows are processed in ascending order. Removing a row only moves rows
    /// above it, so the higher-indexed rows still to be processed keep their
    /// original index and the result equals a simultaneous clear.
    /// Out-of-range and duplicate indices are ignored.
    pub fn clear_rows(&mut self, rows: &[usize]) -> usize {
        let height = self.height as usize;
        let mut marked = [false; MAX_BOARD_DIM as usize];
        for &y in rows {
            if y < height {
                marked[y] = true;
            }
        }

        let mut cleared = 0;
        for y in (0..height).filter(|&y| marked[y]) {
            cleared += self.clear_row(y);
        }
        cleared
    }

    /// Cells of row `y` (panics when out of range)
    pub fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Copy of the grid as nested rows
    pub fn to_grid(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT)
    }
}
