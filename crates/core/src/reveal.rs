//! Reveal mask - which board cells of an attached picture are uncovered
//!
//! The mask runs parallel to the board (`true` = still covered). It advances
//! by line-clear count, not by cleared row: the n-th cleared line of the game
//! uncovers the n-th row from the bottom, wherever the clear happened.

/// Covered/uncovered grid, same dimensions as the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealMask {
    width: u8,
    height: u8,
    covered: Vec<bool>,
}

impl RevealMask {
    /// Fully covered mask
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            covered: vec![true; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// A new picture was attached: cover everything again.
    pub fn on_image_attached(&mut self) {
        self.covered.fill(true);
    }

    /// Record one cleared line.
    ///
    /// `cleared_before` is the number of lines cleared earlier in the game.
    /// Row `height - 1 - cleared_before` is uncovered; once the count passes
    /// the board height nothing further changes.
    pub fn on_line_cleared(&mut self, cleared_before: u32) {
        let height = self.height as u32;
        if cleared_before >= height {
            return;
        }
        let row = (height - 1 - cleared_before) as usize;
        let width = self.width as usize;
        self.covered[row * width..(row + 1) * width].fill(false);
    }

    /// Whether cell `(x, y)` is still covered; out-of-range cells count as covered
    pub fn is_covered(&self, x: usize, y: usize) -> bool {
        if x >= self.width as usize || y >= self.height as usize {
            return true;
        }
        self.covered[y * self.width as usize + x]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.covered.chunks(self.width.max(1) as usize)
    }

    /// Flat row-major view
    pub fn cells(&self) -> &[bool] {
        &self.covered
    }

    /// Number of uncovered cells
    pub fn revealed_count(&self) -> usize {
        self.covered.iter().filter(|&&c| !c).count()
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.covered.iter().all(|&c| !c)
    }

    /// Copy of the mask as nested rows
    pub fn to_grid(&self) -> Vec<Vec<bool>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_fully_covered() {
        let mask = RevealMask::new(10, 20);
        assert_eq!(mask.revealed_count(), 0);
        assert!(mask.cells().iter().all(|&c| c));
    }

    #[test]
    fn reveals_from_the_bottom_up() {
        let mut mask = RevealMask::new(4, 5);

        mask.on_line_cleared(0);
        assert!(mask.to_grid()[4].iter().all(|&c| !c));
        assert!(mask.to_grid()[3].iter().all(|&c| c));

        mask.on_line_cleared(1);
        assert!(mask.to_grid()[3].iter().all(|&c| !c));
        assert_eq!(mask.revealed_count(), 8);
    }

    #[test]
    fn excess_clears_are_ignored() {
        let mut mask = RevealMask::new(4, 4);
        for n in 0..4 {
            mask.on_line_cleared(n);
        }
        assert!(mask.is_fully_revealed());

        let before = mask.clone();
        mask.on_line_cleared(4);
        mask.on_line_cleared(400);
        assert_eq!(mask, before);
    }

    #[test]
    fn revealed_cells_stay_revealed() {
        let mut mask = RevealMask::new(4, 4);
        mask.on_line_cleared(0);
        // A repeated count re-reveals the same row; it never re-covers.
        mask.on_line_cleared(0);
        mask.on_line_cleared(1);
        assert!(!mask.is_covered(0, 3));
        assert!(!mask.is_covered(0, 2));
    }

    #[test]
    fn attaching_recovers_everything() {
        let mut mask = RevealMask::new(4, 4);
        mask.on_line_cleared(0);
        mask.on_image_attached();
        assert_eq!(mask.revealed_count(), 0);
    }

    #[test]
    fn out_of_range_lookups_count_as_covered() {
        let mut mask = RevealMask::new(4, 4);
        mask.on_line_cleared(0);
        assert!(mask.is_covered(4, 3));
        assert!(mask.is_covered(0, 4));
    }
}
