//! Session configuration and validation.

use turing_core::{ConfigError, GridDims, ReactionParams, SeedShape};
use turing_grid::DEFAULT_BRUSH_RADIUS;
use turing_stepper::Execution;

/// Upper bound on [`SimulationConfig::iterations_per_frame`].
pub const MAX_ITERATIONS_PER_FRAME: u32 = 256;

/// Everything needed to build a [`Session`](crate::Session).
///
/// [`validate()`](SimulationConfig::validate) checks structural invariants;
/// [`Session::new`](crate::Session::new) calls it before allocating.
/// Parameters outside the stable band are accepted; the session only
/// logs them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Grid width in cells. Default: 800.
    pub width: u32,
    /// Grid height in cells. Default: 600.
    pub height: u32,
    /// Reaction parameters the session starts with.
    pub params: ReactionParams,
    /// Stepper iterations run by each frame. Default: 1.
    pub iterations_per_frame: u32,
    /// Seed stamped at the grid centre on start and reset. `None` uses the
    /// capped square of [`Grid::initialize`](turing_grid::Grid::initialize).
    pub initial_seed: Option<SeedShape>,
    /// Radius of the disk stamped by each injection. Default: 5.
    pub brush_radius: u32,
    /// Row scheduling for the stepper. Default: [`Execution::Auto`].
    pub execution: Execution,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            params: ReactionParams::default(),
            iterations_per_frame: 1,
            initial_seed: None,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            execution: Execution::Auto,
        }
    }
}

impl SimulationConfig {
    /// Grid dimensions, validated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDimension`] or [`ConfigError::GridTooLarge`].
    pub fn dims(&self) -> Result<GridDims, ConfigError> {
        GridDims::new(self.width, self.height)
    }

    /// The brush as a seed shape.
    pub fn brush(&self) -> SeedShape {
        SeedShape::Disk {
            radius: self.brush_radius,
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroDimension`] / [`ConfigError::GridTooLarge`]
    ///   for bad dimensions.
    /// - [`ConfigError::InvalidParameter`] if `iterations_per_frame` is
    ///   zero or above [`MAX_ITERATIONS_PER_FRAME`].
    /// - [`ConfigError::InvalidSeedSize`] for a zero brush radius or a
    ///   zero-sized initial seed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.dims()?;
        if !(1..=MAX_ITERATIONS_PER_FRAME).contains(&self.iterations_per_frame) {
            return Err(ConfigError::InvalidParameter {
                name: "iterations_per_frame",
                reason: format!(
                    "must be in 1..={MAX_ITERATIONS_PER_FRAME}, got {}",
                    self.iterations_per_frame
                ),
            });
        }
        self.brush().validate()?;
        if let Some(shape) = self.initial_seed {
            shape.validate()?;
        }
        Ok(())
    }
}
