//! Grid plus stepper, driven explicitly by the caller.

use turing_core::{ConfigError, GridDims, ReactionParams, RenderError, SeedShape, Species};
use turing_grid::Grid;
use turing_stepper::{Execution, GrayScott, StepMetrics};

/// A Gray-Scott simulation: one double-buffered grid and the stepper that
/// advances it.
///
/// Nothing here holds parameters between calls. Seeding, stepping and
/// rendering all borrow `self`, so they cannot overlap.
///
/// # Example
///
/// ```
/// use turing_core::ReactionParams;
/// use turing_engine::ReactionDiffusion;
///
/// let mut sim = ReactionDiffusion::new(64, 48).unwrap();
/// sim.initialize();
/// let metrics = sim.step(&ReactionParams::default(), 4);
/// assert_eq!(metrics.iterations, 4);
///
/// let mut pixels = vec![0u8; 64 * 48 * 4];
/// sim.render(&mut pixels, 64 * 4).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct ReactionDiffusion {
    grid: Grid,
    stepper: GrayScott,
}

impl ReactionDiffusion {
    /// Allocate a `width x height` simulation in the base steady state
    /// (no seed yet; call [`initialize`](Self::initialize)).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDimension`] or
    /// [`ConfigError::GridTooLarge`] for unusable dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        Self::with_execution(width, height, Execution::default())
    }

    /// Like [`new`](Self::new) with an explicit scheduling mode.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_execution(
        width: u32,
        height: u32,
        execution: Execution,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            stepper: GrayScott::new(execution),
        })
    }

    /// Reset to A = 1, B = 0 and place the centre square seed.
    pub fn initialize(&mut self) {
        self.grid.initialize();
    }

    /// Stamp `shape` at `(x, y)`. Returns the number of cells written.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeedSize`] for a zero-sized shape.
    pub fn seed(&mut self, shape: SeedShape, x: i32, y: i32) -> Result<usize, ConfigError> {
        self.grid.seed(shape, x, y)
    }

    /// Stamp a square of edge `size` centred at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeedSize`] if `size` is zero.
    pub fn seed_square(&mut self, x: i32, y: i32, size: u32) -> Result<usize, ConfigError> {
        self.grid.seed_square(x, y, size)
    }

    /// Stamp a disk of `radius` centred at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeedSize`] if `radius` is zero.
    pub fn seed_disk(&mut self, x: i32, y: i32, radius: u32) -> Result<usize, ConfigError> {
        self.grid.seed_disk(x, y, radius)
    }

    /// Stamp `count` disks at deterministic pseudo-random positions.
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
        self.grid.seed_scatter(count, radius, rng_seed)
    }

    /// Advance `iterations` generations with `params`.
    pub fn step(&mut self, params: &ReactionParams, iterations: u32) -> StepMetrics {
        self.stepper.step(&mut self.grid, params, iterations)
    }

    /// Write the `B` field as grayscale RGBA8 into `pixels`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] if `stride` or `pixels` is too small.
    pub fn render(&self, pixels: &mut [u8], stride: usize) -> Result<(), RenderError> {
        turing_render::render(&self.grid, pixels, stride)
    }

    /// Concentration of `species` at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    pub fn get(&self, species: Species, x: u32, y: u32) -> f32 {
        self.grid.get(species, x, y)
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.grid.dims()
    }

    /// Scheduling mode of the stepper.
    pub fn execution(&self) -> Execution {
        self.stepper.execution()
    }

    /// Completed generations since construction. Resets do not rewind it.
    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the underlying grid, for direct cell edits.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}
