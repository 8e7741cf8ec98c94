//! Turing: a Gray-Scott reaction-diffusion engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Turing sub-crates. For most users, adding `turing` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use turing::prelude::*;
//!
//! let mut sim = ReactionDiffusion::new(10, 10).unwrap();
//! sim.initialize();
//! assert_eq!(sim.get(Species::B, 5, 5), 1.0);
//!
//! let params = ReactionParams::default();
//! sim.step(&params, 1);
//! assert!(sim.get(Species::B, 5, 5) < 1.0);
//! assert_eq!(sim.get(Species::A, 0, 0), 1.0);
//!
//! let mut pixels = vec![0u8; 10 * 10 * 4];
//! sim.render(&mut pixels, 10 * 4).unwrap();
//! ```
//!
//! Interactive front ends usually drive a [`Session`](engine::Session)
//! instead:
//!
//! ```rust
//! use turing::prelude::*;
//!
//! let config = SimulationConfig {
//!     width: 64,
//!     height: 48,
//!     ..SimulationConfig::default()
//! };
//! let mut session = Session::new(config).unwrap();
//! session.apply_preset(Preset::Coral);
//! session.inject(10, 10);
//!
//! let stride = 64 * 4;
//! let mut pixels = vec![0u8; stride * 48];
//! let metrics = session.frame(&mut pixels, stride).unwrap();
//! assert_eq!(metrics.injections, 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `turing-core` | Dimensions, parameters, presets, seed shapes, errors |
//! | [`grid`] | `turing-grid` | Double-buffered grid and seeding |
//! | [`stepper`] | `turing-stepper` | Laplacian stencil and Gray-Scott update |
//! | [`render`] | `turing-render` | Grayscale RGBA8 readout |
//! | [`engine`] | `turing-engine` | `ReactionDiffusion` driver, `Session`, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`turing-core`).
pub use turing_core as types;

/// Double-buffered grid, generations and seeding (`turing-grid`).
///
/// [`grid::Grid`] owns all four concentration arrays;
/// [`grid::StepGuard`] is the split borrow the stepper writes through.
pub use turing_grid as grid;

/// Diffusion-reaction stepper (`turing-stepper`).
pub use turing_stepper as stepper;

/// Pixel readout (`turing-render`).
pub use turing_render as render;

/// Simulation drivers (`turing-engine`).
///
/// [`engine::ReactionDiffusion`] for explicit calls,
/// [`engine::Session`] for a per-frame loop with pause and brush input.
pub use turing_engine as engine;

/// Common imports for typical Turing usage.
///
/// ```rust
/// use turing::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use turing_core::{GridDims, Preset, ReactionParams, SeedShape, Species};

    // Errors
    pub use turing_core::{ConfigError, RenderError};

    // Grid
    pub use turing_grid::Grid;

    // Stepper
    pub use turing_stepper::{Execution, GrayScott, StepMetrics};

    // Engine
    pub use turing_engine::{FrameMetrics, ReactionDiffusion, Session, SimulationConfig};
}
