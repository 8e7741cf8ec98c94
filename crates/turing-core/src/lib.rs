//! Core types and errors for the Turing reaction-diffusion engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: the two chemical
//! species, grid dimensions, Gray-Scott reaction parameters, and the
//! error types returned by construction, seeding and readout.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dims;
pub mod error;
pub mod params;
pub mod shape;
pub mod species;

pub use dims::GridDims;
pub use error::{ConfigError, RenderError};
pub use params::{Preset, ReactionParams, STABLE_BAND};
pub use shape::SeedShape;
pub use species::Species;
