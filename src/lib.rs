//! 2D Game of Life grid storage and simulation backend.
//!
//! This crate provides a dense, bounds-checked [`grid::Grid`] of two-state
//! cells with geometric operations (crop, merge, rotate), a double-buffered
//! [`sim::World`] simulator that advances a grid under bounded or toroidal
//! neighbor semantics, flat-file codecs for a textual and a packed-bit
//! binary pattern format in [`io`], and a small [`zoo`] of preset creatures.

#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all)]
#![deny(clippy::correctness)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod io;
pub mod sim;
pub mod zoo;

pub mod prelude {
    //! Re-exports of the most commonly used types.

    pub use crate::cell::Cell;
    pub use crate::error::{GridResult, LifeError};
    pub use crate::grid::Grid;
    pub use crate::io::{PatternError, PatternFormat};
    pub use crate::sim::World;
}

#[cfg(test)]
mod tests;
