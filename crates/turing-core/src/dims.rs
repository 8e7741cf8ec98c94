//! Fixed grid dimensions and row-major index arithmetic.

use crate::error::ConfigError;

/// Width and height of a simulation grid, validated at construction.
///
/// Cells are stored row-major: the cell at column `x`, row `y` lives at
/// flat index `y * width + x`. Dimensions never change after a grid is
/// built, so every buffer sized from a `GridDims` stays shape-compatible.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDims"))]
pub struct GridDims {
    width: u32,
    height: u32,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDims {
    width: u32,
    height: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDims> for GridDims {
    type Error = ConfigError;

    fn try_from(raw: RawDims) -> Result<Self, Self::Error> {
        GridDims::new(raw.width, raw.height)
    }
}

impl GridDims {
    /// Validate and create grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDimension`] if either axis is zero and
    /// [`ConfigError::GridTooLarge`] if the cell count overflows `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroDimension { width, height });
        }
        if (width as usize).checked_mul(height as usize).is_none() {
            return Err(ConfigError::GridTooLarge { width, height });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Flat row-major index of `(x, y)`, or `None` if out of bounds.
    pub fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Whether a signed coordinate falls inside the grid.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Whether `(x, y)` lies on the outermost ring of cells.
    pub fn is_border(&self, x: u32, y: u32) -> bool {
        x == 0 || y == 0 || x + 1 >= self.width || y + 1 >= self.height
    }

    /// Whether the grid has any interior cell with a full 3x3 neighbourhood.
    pub fn has_interior(&self) -> bool {
        self.width >= 3 && self.height >= 3
    }

    /// Number of interior cells (`(width - 2) * (height - 2)`, or zero).
    pub fn interior_cell_count(&self) -> usize {
        if self.has_interior() {
            (self.width as usize - 2) * (self.height as usize - 2)
        } else {
            0
        }
    }

    /// Grid centre, using integer division on each axis.
    pub fn center(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }
}
