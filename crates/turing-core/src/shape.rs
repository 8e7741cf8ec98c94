//! Seed shapes for injecting chemical into a grid.

use crate::error::ConfigError;

/// Shape of a local perturbation, relative to its centre cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "shape", rename_all = "snake_case"))]
pub enum SeedShape {
    /// Axis-aligned square covering offsets `-size/2 ..= size/2` on both axes.
    Square {
        /// Nominal edge length in cells. Integer division means an even
        /// size still produces an odd, centred window (20 covers 21 cells).
        size: u32,
    },
    /// Disk of cells with `i² + j² <= radius²`.
    Disk {
        /// Radius in cells.
        radius: u32,
    },
}

impl SeedShape {
    /// Reject zero-sized shapes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSeedSize`] when the size or radius is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            SeedShape::Square { size: 0 } => Err(ConfigError::InvalidSeedSize {
                shape: "square",
                size: 0,
            }),
            SeedShape::Disk { radius: 0 } => Err(ConfigError::InvalidSeedSize {
                shape: "disk",
                size: 0,
            }),
            _ => Ok(()),
        }
    }

    /// Half-width of the square window that bounds the shape.
    pub fn half_extent(&self) -> i64 {
        match *self {
            SeedShape::Square { size } => i64::from(size / 2),
            SeedShape::Disk { radius } => i64::from(radius),
        }
    }

    /// Whether the offset `(i, j)` from the centre belongs to the shape.
    pub fn contains_offset(&self, i: i64, j: i64) -> bool {
        let h = self.half_extent().unsigned_abs();
        if i.unsigned_abs() > h || j.unsigned_abs() > h {
            return false;
        }
        match *self {
            SeedShape::Square { .. } => true,
            SeedShape::Disk { radius } => {
                let (i, j, r) = (i128::from(i), i128::from(j), i128::from(radius));
                i * i + j * j <= r * r
            }
        }
    }
}
