//! # Environment
//!
//! One generated level: the classified grid, its merged layout boxes and
//! the exit pad for the configured number of agents.
//!
//! The exit is stamped after the layout boxes are extracted, so it is drawn
//! and triggered on its own rather than merged into the layout.
//!
//! ```toml
//! num_agents = 4
//!
//! [layout]
//! length = 12
//! width = 8
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use voxenv_core::{BoundingBox, VoxelCoords, VoxelGrid, VoxelState};
use voxenv_layout::{LayoutConfig, LayoutError, LayoutGenerator, LayoutResult, Primitive};

use crate::instancing::{batch_instances, state_color, InstanceBatch, InstanceData};
use crate::physics::{collision_volumes, Aabb};

/// Environment configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    /// Agents that must fit on the exit pad.
    pub num_agents: i32,
    /// Level dimensions.
    pub layout: LayoutConfig,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            num_agents: 1,
            layout: LayoutConfig::default(),
        }
    }
}

impl EnvConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` on malformed TOML or unknown keys, and
    /// whatever [`EnvConfig::validate`] rejects.
    pub fn from_toml_str(text: &str) -> LayoutResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| LayoutError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the file cannot be read, otherwise as
    /// [`EnvConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LayoutError::InvalidConfig(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Checks the agent count and the layout.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAgentCount` for fewer than one agent, or the layout's
    /// `InvalidConfig`.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.num_agents < 1 {
            return Err(LayoutError::InvalidAgentCount(self.num_agents));
        }
        self.layout.validate()
    }
}

/// A generated level.
#[derive(Clone, Debug)]
pub struct Env {
    config: EnvConfig,
    grid: VoxelGrid<VoxelState>,
    primitives: Vec<Primitive>,
    layout_drawables: Vec<BoundingBox>,
    exit: BoundingBox,
}

impl Env {
    /// Generates the level described by `config`.
    ///
    /// # Errors
    ///
    /// Fails on an invalid config, or with `ExitBlocked` when the exit pad
    /// for `num_agents` does not fit inside the walls.
    pub fn new(config: EnvConfig) -> LayoutResult<Self> {
        config.validate()?;
        let generator = LayoutGenerator::new(config.layout)?;

        let mut grid = generator.generate()?;
        let primitives = generator.extract_classified(&grid);
        let layout_drawables = primitives.iter().map(|p| p.bounds).collect();

        let exit = generator.level_exit(config.num_agents)?;
        generator.mark_exit(&mut grid, &exit)?;

        tracing::info!(
            "Env ready: {} grid, {} layout boxes, exit {}..{} for {} agents",
            grid.extent(),
            primitives.len(),
            exit.min,
            exit.max,
            config.num_agents
        );

        Ok(Self {
            config,
            grid,
            primitives,
            layout_drawables,
            exit,
        })
    }

    /// The config this level was built from.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Classified grid, exit included.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &VoxelGrid<VoxelState> {
        &self.grid
    }

    /// Floor and wall boxes in extraction order.
    #[inline]
    #[must_use]
    pub fn layout_drawables(&self) -> &[BoundingBox] {
        &self.layout_drawables
    }

    /// Floor and wall boxes with their classification.
    #[inline]
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// The exit pad. Its `min` corner is where the pad model is placed.
    #[inline]
    #[must_use]
    pub const fn exit_pad_coords(&self) -> BoundingBox {
        self.exit
    }

    /// Returns true if `coords` is an exit cell.
    #[must_use]
    pub fn is_exit(&self, coords: VoxelCoords) -> bool {
        self.grid.get(coords) == Ok(VoxelState::Exit)
    }

    /// Returns true if an agent can stand at `coords`: the cell is in range
    /// and not solid, and the cell below it is solid.
    #[must_use]
    pub fn is_walkable(&self, coords: VoxelCoords) -> bool {
        let open = matches!(self.grid.get(coords), Ok(state) if !state.is_solid());
        let supported = coords.y > 0
            && matches!(self.grid.get(coords.offset(0, -1, 0)), Ok(state) if state.is_solid());
        open && supported
    }

    /// Walkable cells in scan order.
    pub fn walkable_cells(&self) -> impl Iterator<Item = VoxelCoords> + '_ {
        self.grid.coords().filter(|&c| self.is_walkable(c))
    }

    /// Layout instances grouped by box shape.
    #[must_use]
    pub fn instance_batches(&self) -> Vec<InstanceBatch> {
        batch_instances(&self.primitives)
    }

    /// Instance for the exit pad.
    #[must_use]
    pub fn exit_instance(&self) -> InstanceData {
        InstanceData::from_box(&self.exit, state_color(VoxelState::Exit))
    }

    /// Layout boxes as collision volumes, 1:1 with [`Env::layout_drawables`].
    #[must_use]
    pub fn collision_volumes(&self) -> Vec<Aabb> {
        collision_volumes(&self.layout_drawables)
    }

    /// Trigger volume for the exit pad.
    #[must_use]
    pub fn exit_volume(&self) -> Option<Aabb> {
        Aabb::from_bounding_box(&self.exit)
    }
}
