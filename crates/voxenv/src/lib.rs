//! # VOXENV
//!
//! The environment crate: generates a level and hands its boxes to the
//! renderer and the physics engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Env::new                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  EnvConfig ──> LayoutGenerator ──> VoxelGrid<VoxelState>     │
//! │                                          │                   │
//! │                              extract_classified              │
//! │                                          │                   │
//! │                       ┌──────────────────┴─────────┐         │
//! │                       ▼                            ▼         │
//! │              instancing::batch_instances   physics::Aabb     │
//! │              (one batch per box shape)     (1:1 per box)     │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `env`: environment assembly and queries
//! - `instancing`: Pod instance data for GPU upload
//! - `physics`: float collision volumes

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod env;
pub mod instancing;
pub mod physics;

// Re-export the pipeline crates
pub use voxenv_core as core;
pub use voxenv_layout as layout;

// Re-export commonly used types
pub use env::{Env, EnvConfig};
pub use instancing::{batch_instances, state_color, InstanceBatch, InstanceData};
pub use physics::{collision_volumes, Aabb};
