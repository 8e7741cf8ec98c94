//! Integration tests for the Gray-Scott stepper against full grids.

use proptest::prelude::*;
use turing_core::{ReactionParams, Species};
use turing_grid::Grid;
use turing_stepper::{laplacian, update_cell, Execution, GrayScott};
use turing_test_utils::{
    assert_unit_range, border_cells, initialized_grid, max_abs_diff, uniform_grid, FieldSnapshot,
};

fn reference_params() -> ReactionParams {
    ReactionParams::new(0.055, 0.062, 1.0, 0.5)
}

#[test]
fn single_step_on_initialized_10x10() {
    let mut grid = initialized_grid(10, 10);
    let corner = (grid.get(Species::A, 0, 0), grid.get(Species::B, 0, 0));

    GrayScott::default().step(&mut grid, &reference_params(), 1);

    assert_eq!((grid.get(Species::A, 0, 0), grid.get(Species::B, 0, 0)), corner);
    let b = grid.get(Species::B, 5, 5);
    assert!(b < 1.0, "B(5,5) = {b} should drain below 1");
    assert!(b > 0.0);
}

#[test]
fn step_promotes_scratch_to_live() {
    let mut grid = initialized_grid(12, 9);
    let before = FieldSnapshot::capture(&grid);
    let old_live = grid.field(Species::B).as_ptr();
    let old_scratch = grid.scratch(Species::B).as_ptr();

    GrayScott::new(Execution::Serial).step(&mut grid, &reference_params(), 1);

    assert_eq!(grid.field(Species::B).as_ptr(), old_scratch);
    assert_eq!(grid.scratch(Species::B).as_ptr(), old_live);

    // The promoted buffer holds freshly computed values.
    let (x, y) = (5usize, 4usize);
    let i = y * 12 + x;
    let (a, b) = update_cell(
        before.a[i],
        before.b[i],
        laplacian(&before.a, 12, i),
        laplacian(&before.b, 12, i),
        &reference_params(),
    );
    assert_eq!(grid.get(Species::A, x as u32, y as u32), a);
    assert_eq!(grid.get(Species::B, x as u32, y as u32), b);
}

#[test]
fn iterations_chain_through_swaps() {
    let mut once = initialized_grid(16, 16);
    let mut stepwise = once.clone();
    let stepper = GrayScott::new(Execution::Serial);

    stepper.step(&mut once, &reference_params(), 4);
    for _ in 0..4 {
        stepper.step(&mut stepwise, &reference_params(), 1);
    }
    assert_eq!(once.field(Species::A), stepwise.field(Species::A));
    assert_eq!(once.field(Species::B), stepwise.field(Species::B));
}

#[test]
fn serial_and_parallel_agree_bitwise() {
    let mut serial = Grid::new(64, 48).unwrap();
    serial.initialize();
    serial.seed_scatter(8, 4, 99).unwrap();
    let mut parallel = serial.clone();

    GrayScott::new(Execution::Serial).step(&mut serial, &reference_params(), 25);
    let m = GrayScott::new(Execution::Parallel).step(&mut parallel, &reference_params(), 25);

    assert!(m.parallel);
    assert_eq!(serial.field(Species::A), parallel.field(Species::A));
    assert_eq!(serial.field(Species::B), parallel.field(Species::B));
}

#[test]
fn seeded_border_cell_survives_step() {
    let mut grid = Grid::new(8, 8).unwrap();
    grid.seed_disk(0, 3, 1).unwrap();
    GrayScott::default().step(&mut grid, &reference_params(), 3);
    assert_eq!(grid.get(Species::B, 0, 3), 1.0);
    assert_eq!(grid.get(Species::A, 0, 3), 0.0);
}

#[test]
fn uniform_interior_after_one_step_with_no_feed_or_kill() {
    let mut grid = uniform_grid(9, 7, 0.6, 0.3);
    let params = ReactionParams::new(0.0, 0.0, 1.0, 0.5);
    GrayScott::default().step(&mut grid, &params, 1);

    let first = grid.get(Species::B, 1, 1);
    for y in 1..6 {
        for x in 1..8 {
            assert!((grid.get(Species::B, x, y) - first).abs() < 1e-6);
        }
    }
}

#[test]
fn parameters_can_change_between_steps() {
    let mut grid = initialized_grid(20, 20);
    let stepper = GrayScott::default();
    stepper.step(&mut grid, &reference_params(), 5);
    let mid = FieldSnapshot::capture(&grid);

    let mut high_kill = grid.clone();
    stepper.step(&mut grid, &reference_params(), 1);
    stepper.step(&mut high_kill, &reference_params().with_kill(0.1), 1);

    let total = |g: &Grid| g.field(Species::B).iter().sum::<f32>();
    assert!(total(&high_kill) < total(&grid));
    assert_ne!(mid.b, grid.field(Species::B));
}

proptest! {
    #[test]
    fn cells_stay_in_unit_range(
        feed in -0.5f32..1.5,
        kill in -0.5f32..1.5,
        d_a in -1.0f32..3.0,
        d_b in -1.0f32..3.0,
        iterations in 1u32..6,
        rng_seed in 0u64..1000,
    ) {
        let mut grid = Grid::new(24, 18).unwrap();
        grid.initialize();
        grid.seed_scatter(4, 3, rng_seed).unwrap();
        let params = ReactionParams::new(feed, kill, d_a, d_b);
        GrayScott::default().step(&mut grid, &params, iterations);
        assert_unit_range(&grid);
    }

    #[test]
    fn border_is_frozen(
        feed in 0.01f32..0.1,
        kill in 0.01f32..0.1,
        iterations in 1u32..8,
        rng_seed in 0u64..1000,
    ) {
        let mut grid = Grid::new(20, 15).unwrap();
        grid.seed_scatter(6, 3, rng_seed).unwrap();
        let before = FieldSnapshot::capture(&grid);
        let params = reference_params().with_feed(feed).with_kill(kill);
        GrayScott::default().step(&mut grid, &params, iterations);
        for (x, y) in border_cells(grid.dims()) {
            prop_assert_eq!(grid.get(Species::A, x, y), before.get(Species::A, x, y));
            prop_assert_eq!(grid.get(Species::B, x, y), before.get(Species::B, x, y));
        }
    }

    #[test]
    fn reaction_free_uniform_field_stays_uniform(
        value in 0.0f32..=1.0,
        d_a in 0.0f32..1.0,
        d_b in 0.0f32..1.0,
        iterations in 1u32..20,
        species_b in any::<bool>(),
    ) {
        // With one species at zero there is no reaction, and with
        // feed = kill = 0 only diffusion acts on the other.
        let (a, b) = if species_b { (0.0, value) } else { (value, 0.0) };
        let mut grid = uniform_grid(12, 10, a, b);
        let before = FieldSnapshot::capture(&grid);
        let params = ReactionParams::new(0.0, 0.0, d_a, d_b);
        GrayScott::default().step(&mut grid, &params, iterations);
        prop_assert!(max_abs_diff(grid.field(Species::A), &before.a) < 1e-5);
        prop_assert!(max_abs_diff(grid.field(Species::B), &before.b) < 1e-5);
    }
}
