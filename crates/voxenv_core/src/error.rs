//! # Grid Error Types

use thiserror::Error;

use crate::coords::VoxelCoords;
use crate::grid::GridExtent;

/// Errors raised by grid access and construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate fell outside the configured extent.
    #[error("coordinates {coords} out of range for grid extent {extent}")]
    OutOfRange {
        /// The offending coordinates.
        coords: VoxelCoords,
        /// The grid extent.
        extent: GridExtent,
    },

    /// The requested extent has a zero dimension or is too large to index.
    #[error("invalid grid extent: {length}x{height}x{width}")]
    InvalidExtent {
        /// Requested length (x).
        length: usize,
        /// Requested height (y).
        height: usize,
        /// Requested width (z).
        width: usize,
    },
}

/// Result type for grid operations.
pub type GridResult<T> = Result<T, GridError>;
