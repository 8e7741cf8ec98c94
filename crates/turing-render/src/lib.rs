//! Grayscale readout of a Turing grid.
//!
//! Maps the live `B` concentration of every cell to an RGBA pixel in a
//! caller-owned buffer. Low `B` (untouched substrate) renders near white,
//! high `B` (reacted region) near black:
//!
//! ```text
//! v = clamp(floor((1 - B) * 255), 0, 255)      pixel = [v, v, v, 255]
//! ```
//!
//! The renderer only borrows the grid immutably and writes nothing but
//! the supplied buffer; bytes past `width * 4` in each row (stride
//! padding) are left as they were.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod rgba;

pub use rgba::{
    check_target, intensity, render, render_to_vec, required_len, BYTES_PER_PIXEL,
};
