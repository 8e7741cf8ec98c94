//! Simulation driver for the Turing reaction-diffusion engine.
//!
//! Two entry points, from low to high level:
//!
//! - [`ReactionDiffusion`] bundles a [`Grid`](turing_grid::Grid) with a
//!   [`GrayScott`](turing_stepper::GrayScott) stepper. Parameters are
//!   passed on every [`step`](ReactionDiffusion::step) call and pixels are
//!   written into caller-owned buffers.
//! - [`Session`] owns a `ReactionDiffusion` plus the live parameters and
//!   a queue of brush injections. Each [`frame`](Session::frame) runs
//!   inject, step and render phases in order, the way an interactive
//!   front end would drive the model once per displayed frame.
//!
//! Sessions are built from a [`SimulationConfig`], which is validated
//! up front so the frame loop itself has no configuration failures.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod session;
pub mod simulation;

pub use config::{SimulationConfig, MAX_ITERATIONS_PER_FRAME};
pub use metrics::FrameMetrics;
pub use session::Session;
pub use simulation::ReactionDiffusion;
