//! Gray-Scott diffusion-reaction stepper.
//!
//! One iteration reads the live generation of a [`Grid`](turing_grid::Grid),
//! writes every interior cell of the next generation, carries the frozen
//! border across and swaps:
//!
//! ```text
//! laplace(f) = 0.2 * (N + S + E + W) + 0.05 * (NE + NW + SE + SW) - f
//! reaction   = A * B²
//! A' = clamp(A + 0.9 * (dA * laplace(A) - reaction + feed * (1 - A)))
//! B' = clamp(B + 0.9 * (dB * laplace(B) + reaction - (kill + feed) * B))
//! ```
//!
//! Interior rows are independent of each other, so [`Execution::Parallel`]
//! hands disjoint row chunks of the next generation to rayon workers while
//! all of them share the live generation read-only.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod gray_scott;
pub mod metrics;
pub mod stencil;

pub use gray_scott::{update_cell, Execution, GrayScott, DAMPING, PARALLEL_CELL_THRESHOLD};
pub use metrics::StepMetrics;
pub use stencil::laplacian;
