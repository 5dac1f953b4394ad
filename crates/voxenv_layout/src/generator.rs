//! # Layout Generator
//!
//! Stamps a level into a classified grid in fixed phases:
//!
//! 1. **Floor**: every cell of layer `y = 0`
//! 2. **Walls**: perimeter columns above the floor
//! 3. **Exit**: a pad on the walkable layer, sized by agent count
//!
//! Each phase validates the grid before touching it and only writes Empty
//! cells, so phases can run in any order and any number of times without
//! clobbering one another.
//!
//! ## Exit pad
//!
//! ```text
//!   z ->
//!   W W W W         n = 4, level 5x4x4 (top view of y = 1)
//!   W . . W
//!   W E E W         pad_z = min(n, width - 2)  = 2
//!   W E E W         pad_x = ceil(n / pad_z)    = 2
//!   W W W W         anchored at x = length - 2, z = 1, growing toward -x
//! ```

use voxenv_core::{BoundingBox, GridExtent, VoxelCoords, VoxelGrid, VoxelState};

use crate::config::{LayoutConfig, MIN_WALLED_HEIGHT, MIN_WALLED_LENGTH, MIN_WALLED_WIDTH};
use crate::error::{LayoutError, LayoutResult};
use crate::extract::{self, Primitive};

/// Layer agents stand on.
pub const WALKABLE_LAYER: i32 = 1;

/// Stateless level generator.
///
/// Holds only its config; the grid is passed in and exclusively borrowed
/// for each phase.
#[derive(Clone, Debug, Default)]
pub struct LayoutGenerator {
    config: LayoutConfig,
}

impl LayoutGenerator {
    /// Creates a generator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the config is rejected by
    /// [`LayoutConfig::validate`].
    pub fn new(config: LayoutConfig) -> LayoutResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The generator's config.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Builds a grid of the configured extent with floor and walls.
    ///
    /// # Errors
    ///
    /// Propagates grid allocation and phase errors.
    pub fn generate(&self) -> LayoutResult<VoxelGrid<VoxelState>> {
        let mut grid = VoxelGrid::with_extent(self.config.extent())?;
        self.generate_floor(&mut grid)?;
        self.generate_floor_walls(&mut grid)?;
        Ok(grid)
    }

    /// Marks layer `y = 0` as Floor.
    ///
    /// Only Empty cells are written. Calling it again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ExtentTooSmall` if the grid footprint is smaller than the
    /// configured minimum floor.
    pub fn generate_floor(&self, grid: &mut VoxelGrid<VoxelState>) -> LayoutResult<()> {
        let extent = grid.extent();
        if extent.length < self.config.min_floor_length
            || extent.width < self.config.min_floor_width
        {
            return Err(LayoutError::ExtentTooSmall {
                operation: "generate_floor",
                extent,
                required: GridExtent::new(
                    self.config.min_floor_length,
                    1,
                    self.config.min_floor_width,
                ),
            });
        }

        let mut stamped = 0usize;
        for x in 0..extent.length as i32 {
            for z in 0..extent.width as i32 {
                stamped += usize::from(stamp(grid, VoxelCoords::new(x, 0, z), VoxelState::Floor)?);
            }
        }

        tracing::debug!("Floor: stamped {} cells on {} grid", stamped, extent);
        Ok(())
    }

    /// Marks the perimeter columns above the floor as Wall.
    ///
    /// A cell is on the perimeter when `x` is `0` or `length - 1`, or `z` is
    /// `0` or `width - 1`. Only Empty cells are written.
    ///
    /// # Errors
    ///
    /// Returns `ExtentTooSmall` if the grid cannot enclose a walkable cell.
    pub fn generate_floor_walls(&self, grid: &mut VoxelGrid<VoxelState>) -> LayoutResult<()> {
        let extent = grid.extent();
        if extent.length < MIN_WALLED_LENGTH
            || extent.width < MIN_WALLED_WIDTH
            || extent.height < MIN_WALLED_HEIGHT
        {
            return Err(LayoutError::ExtentTooSmall {
                operation: "generate_floor_walls",
                extent,
                required: GridExtent::new(MIN_WALLED_LENGTH, MIN_WALLED_HEIGHT, MIN_WALLED_WIDTH),
            });
        }

        let (last_x, last_z) = (extent.length as i32 - 1, extent.width as i32 - 1);
        let mut stamped = 0usize;
        for x in 0..=last_x {
            for y in 1..extent.height as i32 {
                for z in 0..=last_z {
                    if x == 0 || x == last_x || z == 0 || z == last_z {
                        stamped +=
                            usize::from(stamp(grid, VoxelCoords::new(x, y, z), VoxelState::Wall)?);
                    }
                }
            }
        }

        tracing::debug!("Walls: stamped {} cells on {} grid", stamped, extent);
        Ok(())
    }

    /// Exit pad for `num_agents` agents on the configured level.
    ///
    /// The pad is `min(n, width - 2)` cells deep along z and as many cells
    /// long along x as needed to hold `n`. Large counts push the pad past the
    /// interior; [`LayoutGenerator::mark_exit`] rejects such a pad.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAgentCount` if `num_agents < 1`.
    pub fn level_exit(&self, num_agents: i32) -> LayoutResult<BoundingBox> {
        if num_agents < 1 {
            return Err(LayoutError::InvalidAgentCount(num_agents));
        }

        let n = i64::from(num_agents);
        let interior_width = self.config.width as i64 - 2;
        let pad_z = n.min(interior_width);
        let pad_x = (n + pad_z - 1) / pad_z;

        let far_x = self.config.length as i64 - 2;
        let min = VoxelCoords::new((far_x - pad_x + 1) as i32, WALKABLE_LAYER, 1);
        let max = VoxelCoords::new(far_x as i32, WALKABLE_LAYER, pad_z as i32);

        Ok(BoundingBox::new(min, max))
    }

    /// Stamps `exit` into `grid` as Exit.
    ///
    /// # Errors
    ///
    /// - `DegenerateBox` if `exit` has no cells
    /// - `Grid(OutOfRange)` if any corner lies outside the grid
    /// - `ExitBlocked` if a Floor or Wall cell lies under the pad
    ///
    /// The grid is untouched on failure.
    pub fn mark_exit(
        &self,
        grid: &mut VoxelGrid<VoxelState>,
        exit: &BoundingBox,
    ) -> LayoutResult<()> {
        if !exit.is_valid() {
            return Err(LayoutError::DegenerateBox);
        }
        grid.index_of(exit.min)?;
        grid.index_of(exit.max)?;

        for coords in exit.cells() {
            let state = grid.get(coords)?;
            if state.is_solid() {
                return Err(LayoutError::ExitBlocked { coords, state });
            }
        }

        grid.fill_box(exit, VoxelState::Exit)?;
        tracing::debug!("Exit: marked {} cells at {:?}", exit.cell_count(), exit);
        Ok(())
    }

    /// Merged boxes covering every occupied cell of `grid`.
    #[must_use]
    pub fn extract_primitives(&self, grid: &VoxelGrid<VoxelState>) -> Vec<BoundingBox> {
        extract::extract_primitives(grid)
    }

    /// Merged boxes paired with their classification.
    #[must_use]
    pub fn extract_classified(&self, grid: &VoxelGrid<VoxelState>) -> Vec<Primitive> {
        extract::extract_classified(grid)
    }
}

/// Writes `state` if the cell is Empty. Returns whether it wrote.
fn stamp(
    grid: &mut VoxelGrid<VoxelState>,
    coords: VoxelCoords,
    state: VoxelState,
) -> LayoutResult<bool> {
    if grid.get(coords)?.is_empty() {
        grid.set(coords, state)?;
        Ok(true)
    } else {
        Ok(false)
    }
}
