//! Seeding: local injection of chemical `B` into the live generation.
//!
//! Every seed shape is bounded by a square window around its centre.
//! [`Footprint`] walks that window in row-major order and yields only the
//! cells that are both inside the shape and inside the grid, so a brush
//! dragged partly off the canvas clips instead of failing.

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use turing_core::{ConfigError, GridDims, SeedShape, Species};

use crate::grid::Grid;

/// Edge length of the square placed at the centre by [`Grid::initialize`]
/// on grids large enough to hold it.
pub const DEFAULT_SEED_SIZE: u32 = 20;

/// Radius of the disk injected by pointer input.
pub const DEFAULT_BRUSH_RADIUS: u32 = 5;

/// Size of the initial centre square for a grid of the given dimensions.
///
/// [`DEFAULT_SEED_SIZE`], capped at a fifth of the shorter side so small
/// grids keep an unseeded margin (never below 1).
pub fn initial_seed_size(dims: GridDims) -> u32 {
    let short = dims.width().min(dims.height());
    (short / 5).clamp(1, DEFAULT_SEED_SIZE)
}

/// In-bounds cells covered by a seed shape, in row-major order.
///
/// Only the part of the shape's bounding window that overlaps the grid is
/// walked, so the cost is bounded by the grid size whatever the radius.
#[derive(Clone, Debug)]
pub struct Footprint {
    shape: SeedShape,
    cx: i64,
    cy: i64,
    x_min: i64,
    x_max: i64,
    y_max: i64,
    x: i64,
    y: i64,
}

impl Footprint {
    /// Plan the cells covered by `shape` centred at `(cx, cy)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeedSize`] for zero-sized shapes.
    pub fn new(dims: GridDims, shape: SeedShape, cx: i32, cy: i32) -> Result<Self, ConfigError> {
        shape.validate()?;
        let half = shape.half_extent();
        let (cx, cy) = (i64::from(cx), i64::from(cy));
        let x_min = (cx - half).max(0);
        let x_max = (cx + half).min(i64::from(dims.width()) - 1);
        let y_min = (cy - half).max(0);
        let y_max = (cy + half).min(i64::from(dims.height()) - 1);
        Ok(Self {
            shape,
            cx,
            cy,
            x_min,
            x_max,
            y_max,
            x: x_min,
            y: y_min,
        })
    }
}

impl Iterator for Footprint {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        if self.x_min > self.x_max {
            return None;
        }
        while self.y <= self.y_max {
            let (x, y) = (self.x, self.y);
            if self.x < self.x_max {
                self.x += 1;
            } else {
                self.x = self.x_min;
                self.y += 1;
            }
            if self.shape.contains_offset(x - self.cx, y - self.cy) {
                return Some((x as u32, y as u32));
            }
        }
        None
    }
}

impl Grid {
    /// Stamp a seed shape into the live generation: `B = 1`, `A = 0`.
    ///
    /// Returns the number of cells written.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeedSize`] for zero-sized shapes; the
    /// grid is left untouched in that case.
    pub fn seed(&mut self, shape: SeedShape, cx: i32, cy: i32) -> Result<usize, ConfigError> {
        let dims = self.dims();
        let width = dims.width() as usize;
        let mut written = 0;
        let (a, b) = self.live_mut().fields_mut();
        for (x, y) in Footprint::new(dims, shape, cx, cy)? {
            let i = y as usize * width + x as usize;
            a[i] = Species::A.seeded_value();
            b[i] = Species::B.seeded_value();
            written += 1;
        }
        trace!("seeded {shape:?} at ({cx}, {cy}): {written} cells");
        Ok(written)
    }

    /// Seed a square of edge `size` centred at `(cx, cy)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeedSize`] if `size` is zero.
    pub fn seed_square(&mut self, cx: i32, cy: i32, size: u32) -> Result<usize, ConfigError> {
        self.seed(SeedShape::Square { size }, cx, cy)
    }

    /// Seed a disk of `radius` centred at `(cx, cy)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeedSize`] if `radius` is zero.
    pub fn seed_disk(&mut self, cx: i32, cy: i32, radius: u32) -> Result<usize, ConfigError> {
        self.seed(SeedShape::Disk { radius }, cx, cy)
    }

    /// Seed `count` disks at positions drawn from a ChaCha8 stream.
    ///
    /// The same `rng_seed` on the same grid always produces the same cells.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeedSize`] if `radius` is zero.
    pub fn seed_scatter(
        &mut self,
        count: u32,
        radius: u32,
        rng_seed: u64,
    ) -> Result<usize, ConfigError> {
        SeedShape::Disk { radius }.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(rng_seed);
        let (w, h) = (self.width() as i32, self.height() as i32);
        let mut written = 0;
        for _ in 0..count {
            let x = rng.random_range(0..w);
            let y = rng.random_range(0..h);
            written += self.seed_disk(x, y, radius)?;
        }
        debug!("scattered {count} disks of radius {radius} (rng seed {rng_seed})");
        Ok(written)
    }

    /// Reset to the base steady state and place the initial centre square.
    ///
    /// Safe to call repeatedly; no memory is reallocated.
    pub fn initialize(&mut self) {
        self.reset();
        let dims = self.dims();
        let (cx, cy) = dims.center();
        let size = initial_seed_size(dims);
        // initial_seed_size is never zero.
        let written = self
            .seed_square(cx as i32, cy as i32, size)
            .unwrap_or_default();
        debug!(
            "initialized {}x{} grid with {size}-cell centre square ({written} cells)",
            dims.width(),
            dims.height()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_seed_size_scales_with_grid() {
        assert_eq!(initial_seed_size(GridDims::new(800, 600).unwrap()), 20);
        assert_eq!(initial_seed_size(GridDims::new(10, 10).unwrap()), 2);
        assert_eq!(initial_seed_size(GridDims::new(3, 100).unwrap()), 1);
    }

    #[test]
    fn initialize_seeds_centre_and_spares_corner() {
        let mut g = Grid::new(10, 10).unwrap();
        g.initialize();
        assert_eq!(g.get(Species::B, 5, 5), 1.0);
        assert_eq!(g.get(Species::A, 5, 5), 0.0);
        assert_eq!(g.get(Species::B, 0, 0), 0.0);
        assert_eq!(g.get(Species::A, 0, 0), 1.0);
        let seeded = g.field(Species::B).iter().filter(|&&v| v == 1.0).count();
        assert_eq!(seeded, 9);
    }

    #[test]
    fn initialize_discards_previous_state() {
        let mut g = Grid::new(10, 10).unwrap();
        g.seed_disk(1, 1, 2).unwrap();
        g.initialize();
        assert_eq!(g.get(Species::B, 1, 1), 0.0);
        assert_eq!(g.get(Species::A, 1, 1), 1.0);
    }

    #[test]
    fn disk_radius_five_covers_81_cells() {
        let mut g = Grid::new(21, 21).unwrap();
        assert_eq!(g.seed_disk(10, 10, 5).unwrap(), 81);
    }

    #[test]
    fn square_clips_at_corner() {
        let mut g = Grid::new(5, 5).unwrap();
        assert_eq!(g.seed_square(0, 0, 2).unwrap(), 4);
        assert_eq!(g.get(Species::B, 1, 1), 1.0);
        assert_eq!(g.get(Species::B, 2, 0), 0.0);
    }

    #[test]
    fn off_grid_centre_touches_nothing() {
        let mut g = Grid::new(5, 5).unwrap();
        assert_eq!(g.seed_disk(-20, 40, 3).unwrap(), 0);
        assert!(g.field(Species::B).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn partially_off_grid_disk_is_clipped() {
        let mut g = Grid::new(5, 5).unwrap();
        // Only the east neighbour of (-1, 2) is inside the grid.
        assert_eq!(g.seed_disk(-1, 2, 1).unwrap(), 1);
        assert_eq!(g.get(Species::B, 0, 2), 1.0);
    }

    #[test]
    fn zero_size_rejected_without_writing() {
        let mut g = Grid::new(5, 5).unwrap();
        assert_eq!(
            g.seed_square(2, 2, 0),
            Err(ConfigError::InvalidSeedSize {
                shape: "square",
                size: 0
            })
        );
        assert!(g.seed_disk(2, 2, 0).is_err());
        assert!(g.field(Species::B).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn seeding_leaves_scratch_alone() {
        let mut g = Grid::new(5, 5).unwrap();
        g.seed_square(2, 2, 4).unwrap();
        assert!(g.scratch(Species::B).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn footprint_is_row_major() {
        let dims = GridDims::new(5, 5).unwrap();
        let cells: Vec<_> = Footprint::new(dims, SeedShape::Disk { radius: 1 }, 2, 2)
            .unwrap()
            .collect();
        assert_eq!(cells, vec![(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]);
    }

    #[test]
    fn scatter_is_deterministic() {
        let mut g1 = Grid::new(64, 64).unwrap();
        let mut g2 = Grid::new(64, 64).unwrap();
        g1.seed_scatter(6, 3, 42).unwrap();
        g2.seed_scatter(6, 3, 42).unwrap();
        assert_eq!(g1.field(Species::B), g2.field(Species::B));
        assert!(g1.field(Species::B).iter().any(|&v| v == 1.0));

        let mut g3 = Grid::new(64, 64).unwrap();
        g3.seed_scatter(6, 3, 7).unwrap();
        assert_ne!(g1.field(Species::B), g3.field(Species::B));
    }

    #[test]
    fn huge_disk_covers_whole_grid() {
        let mut g = Grid::new(10, 10).unwrap();
        assert_eq!(g.seed_disk(5, 5, u32::MAX).unwrap(), 100);
        assert!(g.field(Species::B).iter().all(|&b| b == 1.0));
    }

    #[test]
    fn huge_square_at_corner_covers_whole_grid() {
        let mut g = Grid::new(10, 10).unwrap();
        assert_eq!(g.seed_square(0, 0, u32::MAX).unwrap(), 100);
    }

    #[test]
    fn huge_disk_far_off_grid_touches_nothing() {
        let mut g = Grid::new(10, 10).unwrap();
        assert_eq!(g.seed_disk(i32::MIN, i32::MAX, 1_000).unwrap(), 0);
    }

    #[test]
    fn scatter_rejects_zero_radius() {
        let mut g = Grid::new(8, 8).unwrap();
        assert!(g.seed_scatter(3, 0, 1).is_err());
    }
}
