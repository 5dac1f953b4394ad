//! # VOXENV Core
//!
//! Dense voxel storage and the geometric value types the layout generator
//! works with.
//!
//! ## Design Rules
//!
//! 1. **Dense, not sparse** - every cell inside the extent has a value
//! 2. **No clamping** - out-of-extent access is an error, not a silent fixup
//! 3. **Deterministic iteration** - x-major, then y, then z
//! 4. **Inclusive boxes** - a `BoundingBox` covers `[min, max]` on every axis
//!
//! ## Example
//!
//! ```rust
//! use voxenv_core::{BoundingBox, VoxelCoords, VoxelGrid, VoxelState};
//!
//! let mut grid = VoxelGrid::<VoxelState>::new(5, 1, 4).unwrap();
//! grid.set(VoxelCoords::new(2, 0, 1), VoxelState::Floor).unwrap();
//! assert_eq!(grid.get(VoxelCoords::new(2, 0, 1)).unwrap(), VoxelState::Floor);
//! assert!(grid.get(VoxelCoords::new(5, 0, 0)).is_err());
//!
//! let mut bbox = BoundingBox::empty();
//! bbox.add_point(VoxelCoords::new(0, 3, 0));
//! bbox.add_point(VoxelCoords::new(2, 0, 1));
//! assert_eq!(bbox.min, VoxelCoords::new(0, 0, 0));
//! assert_eq!(bbox.max, VoxelCoords::new(2, 3, 1));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bounds;
pub mod coords;
pub mod error;
pub mod grid;
pub mod state;

pub use bounds::BoundingBox;
pub use coords::VoxelCoords;
pub use error::{GridError, GridResult};
pub use grid::{GridExtent, VoxelGrid};
pub use state::VoxelState;
