//! # VOXENV Layout Generation
//!
//! Turns an empty voxel grid into a navigable level and reduces the result
//! to a small set of boxes for instanced rendering and collision shapes.
//!
//! ## Phases
//!
//! ```text
//! empty ──generate_floor──> floor ──generate_floor_walls──> walled ──mark_exit──> exit-marked
//!                                                              │
//!                                                     extract_primitives
//!                                                              ▼
//!                                                     Vec<BoundingBox>
//! ```
//!
//! ## Design Principles
//!
//! 1. **Stateless**: the generator only carries its immutable config
//! 2. **Non-destructive stamping**: generation never overwrites a classified cell
//! 3. **Exact tiling**: extracted boxes cover every occupied cell exactly once
//! 4. **Deterministic**: extraction order follows the grid scan order
//!
//! ## Example
//!
//! ```rust
//! use voxenv_core::{VoxelGrid, VoxelState};
//! use voxenv_layout::LayoutGenerator;
//!
//! let generator = LayoutGenerator::default();
//! let mut grid = VoxelGrid::<VoxelState>::with_extent(generator.config().extent()).unwrap();
//!
//! generator.generate_floor(&mut grid).unwrap();
//! generator.generate_floor_walls(&mut grid).unwrap();
//!
//! let primitives = generator.extract_primitives(&grid);
//! assert_eq!(primitives.len(), 5);
//!
//! let exit = generator.level_exit(4).unwrap();
//! assert_eq!(exit.cell_count(), 4);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod extract;
pub mod generator;

pub use config::LayoutConfig;
pub use error::{LayoutError, LayoutResult};
pub use extract::{extract_classified, extract_primitives, BoxExtractor, Primitive};
pub use generator::LayoutGenerator;
