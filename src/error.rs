//! Errors reported by grid and simulator operations.

use thiserror::Error;

/// Result type returned by fallible grid and simulator routines.
pub type GridResult<T> = Result<T, LifeError>;

/// Error produced by a grid or simulator operation.
///
/// All errors are reported before any mutation takes place, so a failed
/// operation always leaves the grid or simulator in its prior state.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum LifeError {
    /// Coordinate access outside the grid bounds.
    #[error("coordinates ({x}, {y}) are out of range for a {width}x{height} grid")]
    OutOfRange {
        /// Requested X coordinate.
        x: usize,
        /// Requested Y coordinate.
        y: usize,
        /// Width of the grid that was accessed.
        width: usize,
        /// Height of the grid that was accessed.
        height: usize,
    },

    /// Width/height pair that cannot describe a valid grid, such as inverted
    /// crop corners or a cell count that overflows the address space.
    #[error("invalid grid dimensions: {0}")]
    InvalidDimension(String),

    /// Grid whose dimensions do not match the simulator's. This also names
    /// the internal current/next invariant of the simulator, which is
    /// asserted rather than returned; seeing it from `World::step()` means a
    /// bug in this crate.
    #[error(
        "dimension mismatch: expected a {expected_width}x{expected_height} grid, \
         got {width}x{height}"
    )]
    DimensionMismatch {
        /// Expected width.
        expected_width: usize,
        /// Expected height.
        expected_height: usize,
        /// Width of the grid that was supplied.
        width: usize,
        /// Height of the grid that was supplied.
        height: usize,
    },
}
