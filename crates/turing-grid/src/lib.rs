//! Double-buffered concentration grid for Turing simulations.
//!
//! # Architecture
//!
//! ```text
//! Grid
//! ├── live:  Generation { a: Vec<f32>, b: Vec<f32> }  ←── read by step, seed, render
//! ├── next:  Generation { a: Vec<f32>, b: Vec<f32> }  ←── written by step
//! └── generation: u64                                 ←── bumped on every swap
//! ```
//!
//! A step borrows the live generation immutably and the next generation
//! mutably through a [`StepGuard`], then [`Grid::publish`] carries the
//! frozen border across and swaps the two generations by exchanging
//! their `Vec` handles. No element is copied by the swap itself.
//!
//! Seeding ([`seed`]) writes the live generation only.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generation;
pub mod grid;
pub mod seed;

pub use generation::Generation;
pub use grid::{Grid, StepGuard};
pub use seed::{initial_seed_size, Footprint, DEFAULT_BRUSH_RADIUS, DEFAULT_SEED_SIZE};
