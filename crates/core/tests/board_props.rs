//! Property tests for placement checks, row clearing and rotation.

use proptest::prelude::*;
use reveal_tetris_core::{
    shape,
    types::{Color, PieceKind},
    Board, Mask, Piece, CATALOG,
};

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

/// Reference check: every occupied cell in `[0, W) x (-inf, H)` and off any
/// filled on-board cell.
fn expected_valid(board: &Board, mask: &Mask, x: i8, y: i8) -> bool {
    mask.cells().iter().all(|&(r, c)| {
        let nx = x as i32 + c as i32;
        let ny = y as i32 + r as i32;
        let inside = nx >= 0 && nx < board.width() as i32 && ny < board.height() as i32;
        inside && (ny < 0 || !board.is_occupied(nx as i8, ny as i8))
    })
}

proptest! {
    #[test]
    fn is_valid_matches_reference(
        kind in kind_strategy(),
        turns in 0usize..4,
        x in -6i8..16,
        y in -8i8..24,
        filled in prop::collection::vec((0i8..10, 0i8..20), 0..60),
    ) {
        let mut board = Board::new(10, 20);
        for (fx, fy) in filled {
            board.set(fx, fy, Some(Color::Green));
        }
        let mut mask = shape(kind).mask;
        for _ in 0..turns {
            mask = mask.rotated();
        }

        prop_assert_eq!(board.is_valid(&mask, x, y), expected_valid(&board, &mask, x, y));
    }

    #[test]
    fn four_rotations_are_identity(kind in kind_strategy(), turns in 0usize..4) {
        let mut mask = shape(kind).mask;
        for _ in 0..turns {
            mask = mask.rotated();
        }
        prop_assert_eq!(mask.rotated().rotated().rotated().rotated(), mask);
        prop_assert_eq!(mask.cells().len(), 4);
    }

    #[test]
    fn completing_a_row_finds_exactly_that_row(
        row in 1usize..20,
        gap in 0i8..10,
    ) {
        let mut board = Board::new(10, 20);
        for x in 0..10 {
            if x != gap {
                board.set(x, row as i8, Some(Color::Red));
            }
        }
        prop_assert!(board.find_full_rows().is_empty());

        // A vertical I whose bottom cell plugs the gap.
        let plug = Piece {
            kind: PieceKind::I,
            mask: shape(PieceKind::I).mask.rotated(),
            color: Color::Cyan,
            x: gap,
            y: row as i8 - 3,
        };
        prop_assert!(board.fits(&plug));
        board.lock(&plug);
        let full = board.find_full_rows();
        prop_assert_eq!(full.as_slice(), &[row]);
    }

    #[test]
    fn clear_rows_shifts_everything_above(
        rows in prop::collection::btree_set(0usize..12, 1..5),
        seed_cells in prop::collection::vec((0i8..6, 0i8..12), 0..40),
    ) {
        let mut board = Board::new(6, 12);
        for (x, y) in seed_cells {
            board.set(x, y, Some(Color::Purple));
        }
        let before = board.to_grid();
        let rows: Vec<usize> = rows.into_iter().collect();

        prop_assert_eq!(board.clear_rows(&rows), rows.len());

        let mut expected: Vec<Vec<Option<Color>>> = before
            .into_iter()
            .enumerate()
            .filter(|(y, _)| !rows.contains(y))
            .map(|(_, row)| row)
            .collect();
        while expected.len() < 12 {
            expected.insert(0, vec![None; 6]);
        }
        prop_assert_eq!(board.to_grid(), expected);
    }
}

#[test]
fn catalog_covers_every_kind_once() {
    let kinds: Vec<PieceKind> = CATALOG.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, PieceKind::ALL.to_vec());
}
