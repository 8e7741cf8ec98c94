//! Error types for the Turing reaction-diffusion engine.
//!
//! The domain is a closed numerical grid, so the taxonomy is narrow:
//! configuration errors (degenerate dimensions, empty seed shapes,
//! invalid session settings) and readout errors (caller-supplied pixel
//! buffers that cannot hold the image). The stepper itself has no
//! recoverable failure modes.

use std::error::Error;
use std::fmt;

/// Errors detected while constructing a grid, seeding it, or validating
/// a simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Width or height is zero.
    ZeroDimension {
        /// Requested width in cells.
        width: u32,
        /// Requested height in cells.
        height: u32,
    },
    /// `width * height` does not fit in the address space.
    GridTooLarge {
        /// Requested width in cells.
        width: u32,
        /// Requested height in cells.
        height: u32,
    },
    /// A seed shape was requested with a zero size or radius.
    InvalidSeedSize {
        /// Shape name (`"square"` or `"disk"`).
        shape: &'static str,
        /// The rejected size.
        size: u32,
    },
    /// A configuration value is outside its accepted range.
    InvalidParameter {
        /// Name of the offending setting.
        name: &'static str,
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { width, height } => {
                write!(f, "grid dimensions must be positive, got {width}x{height}")
            }
            Self::GridTooLarge { width, height } => {
                write!(f, "grid of {width}x{height} cells exceeds addressable memory")
            }
            Self::InvalidSeedSize { shape, size } => {
                write!(f, "{shape} seed size must be positive, got {size}")
            }
            Self::InvalidParameter { name, reason } => {
                write!(f, "invalid {name}: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from writing the readout image into a caller-owned buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderError {
    /// Row stride is shorter than one row of RGBA pixels.
    StrideTooSmall {
        /// Stride supplied by the caller, in bytes.
        stride: usize,
        /// Minimum stride for this grid (`width * 4`).
        min: usize,
    },
    /// The pixel buffer cannot hold every row at the given stride.
    BufferTooSmall {
        /// Bytes needed.
        required: usize,
        /// Bytes supplied.
        actual: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrideTooSmall { stride, min } => {
                write!(f, "row stride {stride} is smaller than one pixel row ({min} bytes)")
            }
            Self::BufferTooSmall { required, actual } => {
                write!(
                    f,
                    "pixel buffer too small: need {required} bytes, got {actual}"
                )
            }
        }
    }
}

impl Error for RenderError {}
