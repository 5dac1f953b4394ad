//! # Layout Error Types
//!
//! All errors that can occur while generating a level.

use thiserror::Error;
use voxenv_core::{GridError, GridExtent, VoxelCoords, VoxelState};

/// Errors that can occur in layout generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Grid access failed.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Exit sizing needs at least one agent.
    #[error("invalid agent count: {0} (must be at least 1)")]
    InvalidAgentCount(i32),

    /// The grid is smaller than the operation needs.
    #[error("{operation} needs a grid of at least {required}, got {extent}")]
    ExtentTooSmall {
        /// The generation phase that refused the grid.
        operation: &'static str,
        /// The grid's actual extent.
        extent: GridExtent,
        /// Minimum extent for the phase.
        required: GridExtent,
    },

    /// The exit region overlaps a solid cell.
    #[error("exit region blocked by {state} at {coords}")]
    ExitBlocked {
        /// First blocking cell in scan order.
        coords: VoxelCoords,
        /// What occupies it.
        state: VoxelState,
    },

    /// A box with no cells was passed where a region is required.
    #[error("degenerate bounding box")]
    DegenerateBox,

    /// Invalid configuration file or values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
