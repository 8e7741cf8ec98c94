//! Weighted 3x3 Laplacian stencil.
//!
//! ```text
//! 0.05  0.2  0.05
//! 0.2  -1.0  0.2
//! 0.05  0.2  0.05
//! ```
//!
//! The weights sum to zero, so a uniform field has a zero Laplacian.

/// Weight of the centre cell.
pub const CENTER: f32 = -1.0;
/// Weight of each of the four orthogonal neighbours.
pub const ORTHOGONAL: f32 = 0.2;
/// Weight of each of the four diagonal neighbours.
pub const DIAGONAL: f32 = 0.05;

/// Discrete Laplacian of `field` at flat index `i` on a row of `width` cells.
///
/// `i` must address an interior cell: all eight neighbours are read
/// without bounds adjustment, so the stepper only calls this for
/// `x in 1..width-1`, `y in 1..height-1`.
#[inline]
pub fn laplacian(field: &[f32], width: usize, i: usize) -> f32 {
    let (n, s) = (i - width, i + width);
    let orthogonal = field[n] + field[s] + field[i - 1] + field[i + 1];
    let diagonal = field[n - 1] + field[n + 1] + field[s - 1] + field[s + 1];
    ORTHOGONAL * orthogonal + DIAGONAL * diagonal + CENTER * field[i]
}
