//! Benchmark profiles and utilities for the Turing engine.
//!
//! Provides pre-built [`SimulationConfig`] profiles for benchmarks and demos:
//!
//! - [`reference_profile`]: 800x600 canvas, the default interactive size
//! - [`stress_profile`]: 1024x1024 grid (~1M cells) for parallel scaling
//! - [`warmed_grid`]: a grid stepped far enough to carry real patterns

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use turing_core::{ConfigError, Preset, ReactionParams};
use turing_engine::SimulationConfig;
use turing_grid::Grid;
use turing_stepper::{Execution, GrayScott};

/// Build the reference profile: 800x600, default parameters, one
/// iteration per frame.
pub fn reference_profile(execution: Execution) -> SimulationConfig {
    SimulationConfig {
        execution,
        ..SimulationConfig::default()
    }
}

/// Build the stress profile: 1024x1024 with the coral preset and four
/// iterations per frame.
pub fn stress_profile(execution: Execution) -> SimulationConfig {
    SimulationConfig {
        width: 1024,
        height: 1024,
        params: ReactionParams::from(Preset::Coral),
        iterations_per_frame: 4,
        execution,
        ..SimulationConfig::default()
    }
}

/// A `width x height` grid with the centre seed plus `scatter` random
/// disks, stepped `warmup` times so the field is no longer mostly uniform.
///
/// # Errors
///
/// Returns [`ConfigError`] for unusable dimensions.
pub fn warmed_grid(
    width: u32,
    height: u32,
    scatter: u32,
    warmup: u32,
) -> Result<Grid, ConfigError> {
    let mut grid = Grid::new(width, height)?;
    grid.initialize();
    grid.seed_scatter(scatter, 5, 7)?;
    GrayScott::default().step(&mut grid, &ReactionParams::default(), warmup);
    Ok(grid)
}
