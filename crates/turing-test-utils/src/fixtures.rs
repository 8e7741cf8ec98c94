//! Reusable grid fixtures and invariant checks.

use turing_core::{GridDims, Species};
use turing_grid::Grid;

/// A grid with every live cell set to `a` / `b`.
///
/// The scratch generation stays at the base steady state.
pub fn uniform_grid(width: u32, height: u32, a: f32, b: f32) -> Grid {
    let mut grid = Grid::new(width, height).expect("fixture dimensions must be positive");
    grid.fill(Species::A, a);
    grid.fill(Species::B, b);
    grid
}

/// A grid after [`Grid::initialize`].
pub fn initialized_grid(width: u32, height: u32) -> Grid {
    let mut grid = Grid::new(width, height).expect("fixture dimensions must be positive");
    grid.initialize();
    grid
}

/// Every border cell of a grid, row-major.
pub fn border_cells(dims: GridDims) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for y in 0..dims.height() {
        for x in 0..dims.width() {
            if dims.is_border(x, y) {
                out.push((x, y));
            }
        }
    }
    out
}

/// Panic unless every live cell of both species lies in `[0, 1]`.
pub fn assert_unit_range(grid: &Grid) {
    let width = grid.width() as usize;
    for species in Species::ALL {
        for (i, &v) in grid.field(species).iter().enumerate() {
            assert!(
                (0.0..=1.0).contains(&v),
                "{species} at ({}, {}) = {v} is outside [0, 1]",
                i % width,
                i / width
            );
        }
    }
}

/// Largest absolute element-wise difference between two fields.
pub fn max_abs_diff(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "field length mismatch");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

/// Owned copy of a grid's live generation.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSnapshot {
    pub dims: GridDims,
    pub a: Vec<f32>,
    pub b: Vec<f32>,
}

impl FieldSnapshot {
    pub fn capture(grid: &Grid) -> Self {
        Self {
            dims: grid.dims(),
            a: grid.field(Species::A).to_vec(),
            b: grid.field(Species::B).to_vec(),
        }
    }

    pub fn get(&self, species: Species, x: u32, y: u32) -> f32 {
        let i = self
            .dims
            .index(x, y)
            .expect("snapshot coordinate out of bounds");
        match species {
            Species::A => self.a[i],
            Species::B => self.b[i],
        }
    }
}
