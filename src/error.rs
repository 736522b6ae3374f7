//! Error types for tessella.
//!
//! Grid construction has exactly one failure mode: a hexagon side count that
//! is too small to triangulate. Everything else the builder accepts is taken
//! at face value; in particular, a number source returning values outside
//! `[0, 1)` is a precondition violation, not a recoverable error.

use thiserror::Error;

/// Result type alias using [`GridError`].
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur while building a grid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The requested hexagon side count is below the minimum of 2.
    ///
    /// Construction fails before any container is populated, so no partially
    /// built grid is ever observable.
    #[error("hexagon side count must be at least 2 (got {size})")]
    SideCountTooLow {
        /// The rejected side count.
        size: usize,
    },
}
