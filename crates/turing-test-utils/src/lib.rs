//! Test utilities for Turing development.
//!
//! Provides grid fixtures ([`uniform_grid`], [`initialized_grid`]),
//! generation snapshots for before/after comparisons, and assertions for
//! the invariants every update must preserve.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    assert_unit_range, border_cells, initialized_grid, max_abs_diff, uniform_grid, FieldSnapshot,
};
