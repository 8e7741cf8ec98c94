//! Property tests for seed footprints against a brute-force model.

use proptest::prelude::*;
use turing_core::Species;
use turing_grid::Grid;
use turing_test_utils::FieldSnapshot;

fn check_footprint(grid: &Grid, before: &FieldSnapshot, inside: impl Fn(i64, i64) -> bool) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let (b, a) = (grid.get(Species::B, x, y), grid.get(Species::A, x, y));
            if inside(i64::from(x), i64::from(y)) {
                assert_eq!((a, b), (0.0, 1.0), "cell ({x}, {y}) should be seeded");
            } else {
                assert_eq!(a, before.get(Species::A, x, y), "A at ({x}, {y}) changed");
                assert_eq!(b, before.get(Species::B, x, y), "B at ({x}, {y}) changed");
            }
        }
    }
}

proptest! {
    #[test]
    fn disk_touches_exactly_the_disk(
        w in 1u32..24,
        h in 1u32..24,
        cx in -6i32..30,
        cy in -6i32..30,
        r in 1u32..9,
    ) {
        let mut grid = Grid::new(w, h).unwrap();
        grid.fill(Species::A, 0.75);
        grid.fill(Species::B, 0.125);
        let before = FieldSnapshot::capture(&grid);
        let written = grid.seed_disk(cx, cy, r).unwrap();

        let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(r));
        let inside = |x: i64, y: i64| (x - cx).pow(2) + (y - cy).pow(2) <= r * r;
        check_footprint(&grid, &before, inside);

        let expected = (0..h as i64)
            .flat_map(|y| (0..w as i64).map(move |x| (x, y)))
            .filter(|&(x, y)| inside(x, y))
            .count();
        prop_assert_eq!(written, expected);
    }

    #[test]
    fn square_touches_exactly_the_window(
        w in 1u32..24,
        h in 1u32..24,
        cx in -6i32..30,
        cy in -6i32..30,
        size in 1u32..12,
    ) {
        let mut grid = Grid::new(w, h).unwrap();
        let before = FieldSnapshot::capture(&grid);
        grid.seed_square(cx, cy, size).unwrap();

        let half = i64::from(size / 2);
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        check_footprint(&grid, &before, |x, y| {
            (x - cx).abs() <= half && (y - cy).abs() <= half
        });
    }
}
