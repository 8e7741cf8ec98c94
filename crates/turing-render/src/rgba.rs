//! RGBA8 writer.

use turing_core::{GridDims, RenderError, Species};
use turing_grid::Grid;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

const OPAQUE: u8 = 255;

/// Gray level for a `B` concentration: `floor((1 - b) * 255)` clamped.
#[inline]
pub fn intensity(b: f32) -> u8 {
    ((1.0 - b) * 255.0).floor().clamp(0.0, 255.0) as u8
}

/// Smallest buffer that holds a `dims` image at `stride` bytes per row.
///
/// The last row needs only its pixels, not a full stride. `None` when the
/// length does not fit in `usize`.
pub fn required_len(dims: GridDims, stride: usize) -> Option<usize> {
    let row_bytes = (dims.width() as usize).checked_mul(BYTES_PER_PIXEL)?;
    stride
        .checked_mul(dims.height() as usize - 1)?
        .checked_add(row_bytes)
}

/// Check that a `len`-byte buffer at `stride` bytes per row can hold a
/// `dims` image.
///
/// # Errors
///
/// Same conditions as [`render`].
pub fn check_target(dims: GridDims, len: usize, stride: usize) -> Result<(), RenderError> {
    let row_bytes = dims.width() as usize * BYTES_PER_PIXEL;
    if stride < row_bytes {
        return Err(RenderError::StrideTooSmall {
            stride,
            min: row_bytes,
        });
    }
    let required = required_len(dims, stride).unwrap_or(usize::MAX);
    if len < required {
        return Err(RenderError::BufferTooSmall {
            required,
            actual: len,
        });
    }
    Ok(())
}

/// Write the grid's `B` field into `pixels` as grayscale RGBA8.
///
/// Pixel `(x, y)` lands at byte offset `y * stride + x * 4`.
///
/// # Errors
///
/// Returns [`RenderError::StrideTooSmall`] if `stride < width * 4` and
/// [`RenderError::BufferTooSmall`] if `pixels` cannot hold every row.
/// Nothing is written when an error is returned.
pub fn render(grid: &Grid, pixels: &mut [u8], stride: usize) -> Result<(), RenderError> {
    check_target(grid.dims(), pixels.len(), stride)?;
    write_rows(grid, pixels, stride);
    Ok(())
}

fn write_rows(grid: &Grid, pixels: &mut [u8], stride: usize) {
    let width = grid.width() as usize;
    let row_bytes = width * BYTES_PER_PIXEL;
    for (y, cells) in grid.field(Species::B).chunks_exact(width).enumerate() {
        let start = y * stride;
        let row = &mut pixels[start..start + row_bytes];
        for (px, &conc) in row.chunks_exact_mut(BYTES_PER_PIXEL).zip(cells) {
            let v = intensity(conc);
            px.copy_from_slice(&[v, v, v, OPAQUE]);
        }
    }
}

/// Render into a freshly allocated, tightly packed buffer
/// (`stride = width * 4`).
pub fn render_to_vec(grid: &Grid) -> Vec<u8> {
    let stride = grid.width() as usize * BYTES_PER_PIXEL;
    let mut pixels = vec![0u8; stride * grid.height() as usize];
    write_rows(grid, &mut pixels, stride);
    pixels
}
