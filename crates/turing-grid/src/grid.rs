//! The double-buffered grid.
//!
//! [`Grid`] owns two [`Generation`]s that alternate between "live"
//! (readable, seedable) and "next" (written by the stepper). The lifecycle
//! of one step is:
//!
//! 1. [`Grid::begin_step`]: split-borrow live (shared) and next (exclusive)
//! 2. The stepper writes every interior cell of next
//! 3. [`Grid::publish`]: copy the live border ring into next, then swap
//!
//! Because the guard holds `&mut Grid`, nothing can seed, render or swap
//! while a step is in flight, and no reader can ever observe a generation
//! that is only partially computed.

use log::debug;
use turing_core::{ConfigError, GridDims, Species};

use crate::generation::Generation;

/// Split access to both generations for the duration of one step.
///
/// Created by [`Grid::begin_step`] and dropped before [`Grid::publish`].
#[must_use]
pub struct StepGuard<'a> {
    /// Grid dimensions (copied, so the guard needs no further grid access).
    pub dims: GridDims,
    /// Previous generation, read-only.
    pub live: &'a Generation,
    /// Generation being computed.
    pub next: &'a mut Generation,
}

/// Two concentration fields plus their scratch twins, with O(1) swap.
#[derive(Clone, Debug)]
pub struct Grid {
    dims: GridDims,
    live: Generation,
    next: Generation,
    /// Number of swaps performed since construction.
    generation: u64,
}

impl Grid {
    /// Allocate a `width x height` grid in the base steady state.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either dimension is zero or the cell
    /// count overflows.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        Ok(Self::from_dims(GridDims::new(width, height)?))
    }

    /// Allocate a grid from already-validated dimensions.
    pub fn from_dims(dims: GridDims) -> Self {
        let cells = dims.cell_count();
        debug!(
            "allocating {}x{} grid ({} cells, 4 buffers)",
            dims.width(),
            dims.height(),
            cells
        );
        Self {
            dims,
            live: Generation::base(cells),
            next: Generation::base(cells),
            generation: 0,
        }
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    /// Number of swaps since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn expect_index(&self, x: u32, y: u32) -> usize {
        match self.dims.index(x, y) {
            Some(i) => i,
            None => panic!(
                "cell ({x}, {y}) out of bounds for {}x{} grid",
                self.dims.width(),
                self.dims.height()
            ),
        }
    }

    /// Read one live cell.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid. Callers must clamp first.
    pub fn get(&self, species: Species, x: u32, y: u32) -> f32 {
        self.live.field(species)[self.expect_index(x, y)]
    }

    /// Read one live cell, or `None` if `(x, y)` is outside the grid.
    pub fn checked_get(&self, species: Species, x: u32, y: u32) -> Option<f32> {
        self.dims.index(x, y).map(|i| self.live.field(species)[i])
    }

    /// Write one live cell.
    ///
    /// The value is stored as given; keeping it inside `[0, 1]` is the
    /// caller's responsibility.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn set(&mut self, species: Species, x: u32, y: u32, value: f32) {
        let i = self.expect_index(x, y);
        self.live.field_mut(species)[i] = value;
    }

    /// Overwrite every live cell of one species.
    pub fn fill(&mut self, species: Species, value: f32) {
        self.live.field_mut(species).fill(value);
    }

    /// Live field of one species, row-major.
    pub fn field(&self, species: Species) -> &[f32] {
        self.live.field(species)
    }

    /// Mutable live field of one species, row-major.
    pub fn field_mut(&mut self, species: Species) -> &mut [f32] {
        self.live.field_mut(species)
    }

    /// Scratch ("next") field of one species. Holds the generation before
    /// the most recent swap.
    pub fn scratch(&self, species: Species) -> &[f32] {
        self.next.field(species)
    }

    /// The live generation.
    pub fn live(&self) -> &Generation {
        &self.live
    }

    pub(crate) fn live_mut(&mut self) -> &mut Generation {
        &mut self.live
    }

    /// Exchange live and scratch generations for both species.
    ///
    /// Swaps the owned buffer handles, so the cost is independent of grid
    /// size. Calling it twice restores the original buffer roles.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.live, &mut self.next);
        self.generation += 1;
    }

    /// Reset both generations to the base steady state (A=1, B=0).
    ///
    /// Reuses the existing allocations.
    pub fn reset(&mut self) {
        self.live.fill_base();
        self.next.fill_base();
    }

    /// Split-borrow the generations for one step.
    pub fn begin_step(&mut self) -> StepGuard<'_> {
        StepGuard {
            dims: self.dims,
            live: &self.live,
            next: &mut self.next,
        }
    }

    /// Finish a step: carry the frozen border into next, then swap.
    pub fn publish(&mut self) {
        self.carry_border();
        self.swap();
    }

    /// Copy the outermost ring of live cells into the next generation.
    ///
    /// The stepper never computes border cells, so without this a border
    /// cell seeded after the last swap would revert to a stale value.
    fn carry_border(&mut self) {
        let w = self.dims.width() as usize;
        let h = self.dims.height() as usize;
        let full = !self.dims.has_interior();
        for species in Species::ALL {
            let src = self.live.field(species);
            let dst = self.next.field_mut(species);
            if full {
                dst.copy_from_slice(src);
                continue;
            }
            let last = (h - 1) * w;
            dst[..w].copy_from_slice(&src[..w]);
            dst[last..].copy_from_slice(&src[last..]);
            for row in (w..last).step_by(w) {
                dst[row] = src[row];
                dst[row + w - 1] = src[row + w - 1];
            }
        }
    }
}
