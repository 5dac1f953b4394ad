//! Greedy box extraction.
//!
//! Reduces a classified grid to a list of boxes, each covering cells of a
//! single state. Cuts draw calls and collision shapes from one per voxel to
//! a handful per level.
//!
//! ## Algorithm
//!
//! 1. Scan cells in x-major, y, z order
//! 2. Skip empty and already-covered cells
//! 3. Grow a run along z while the state matches
//! 4. Grow the run into a rectangle along y
//! 5. Grow the rectangle into a box along x
//! 6. Mark the box covered and emit it
//!
//! The result tiles the occupied cells exactly: no overlaps, no gaps, and no
//! box mixes states.

use voxenv_core::{BoundingBox, VoxelCoords, VoxelGrid, VoxelState};

/// A merged box of identically classified cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Primitive {
    /// Covered cells, corners inclusive.
    pub bounds: BoundingBox,
    /// Classification shared by every covered cell.
    pub state: VoxelState,
}

/// Greedy extraction engine.
///
/// Keeps its coverage mask and output buffer between runs so repeated
/// extraction of same-sized grids does not reallocate.
#[derive(Debug, Default)]
pub struct BoxExtractor {
    /// Cells already claimed by an emitted box, in grid linear order.
    covered: Vec<bool>,
    /// Boxes from the last run.
    output: Vec<Primitive>,
}

impl BoxExtractor {
    /// Creates an extractor with empty buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Extracts boxes from `grid`.
    ///
    /// The returned slice is valid until the next call to `extract`.
    pub fn extract(&mut self, grid: &VoxelGrid<VoxelState>) -> &[Primitive] {
        let (length, height, width) = grid.extent().as_tuple();
        let cells = grid.as_slice();
        let index = |x: usize, y: usize, z: usize| (x * height + y) * width + z;

        self.output.clear();
        self.covered.clear();
        self.covered.resize(cells.len(), false);

        for x in 0..length {
            for y in 0..height {
                for z in 0..width {
                    let start = index(x, y, z);
                    let state = cells[start];
                    if state.is_empty() || self.covered[start] {
                        continue;
                    }

                    let covered = &self.covered;
                    let open = |i: usize| cells[i] == state && !covered[i];

                    // Run along z
                    let mut depth = 1;
                    while z + depth < width && open(index(x, y, z + depth)) {
                        depth += 1;
                    }

                    // Rectangle along y
                    let mut rows = 1;
                    'rows: while y + rows < height {
                        for dz in 0..depth {
                            if !open(index(x, y + rows, z + dz)) {
                                break 'rows;
                            }
                        }
                        rows += 1;
                    }

                    // Box along x
                    let mut slabs = 1;
                    'slabs: while x + slabs < length {
                        for dy in 0..rows {
                            for dz in 0..depth {
                                if !open(index(x + slabs, y + dy, z + dz)) {
                                    break 'slabs;
                                }
                            }
                        }
                        slabs += 1;
                    }

                    for dx in 0..slabs {
                        for dy in 0..rows {
                            for dz in 0..depth {
                                self.covered[index(x + dx, y + dy, z + dz)] = true;
                            }
                        }
                    }

                    self.output.push(Primitive {
                        bounds: BoundingBox::new(
                            VoxelCoords::new(x as i32, y as i32, z as i32),
                            VoxelCoords::new(
                                (x + slabs - 1) as i32,
                                (y + rows - 1) as i32,
                                (z + depth - 1) as i32,
                            ),
                        ),
                        state,
                    });
                }
            }
        }

        tracing::debug!(
            "Extracted {} primitives from {} grid",
            self.output.len(),
            grid.extent()
        );

        &self.output
    }

    /// Number of boxes from the last run.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.output.len()
    }
}

/// Extracts classified boxes in scan order of their lowest corner.
#[must_use]
pub fn extract_classified(grid: &VoxelGrid<VoxelState>) -> Vec<Primitive> {
    BoxExtractor::new().extract(grid).to_vec()
}

/// Extracts the bounding boxes of every merged region.
#[must_use]
pub fn extract_primitives(grid: &VoxelGrid<VoxelState>) -> Vec<BoundingBox> {
    BoxExtractor::new()
        .extract(grid)
        .iter()
        .map(|p| p.bounds)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(min: (i32, i32, i32), max: (i32, i32, i32)) -> BoundingBox {
        BoundingBox::new(min.into(), max.into())
    }

    #[test]
    fn test_empty_grid() {
        let grid = VoxelGrid::<VoxelState>::new(4, 4, 4).unwrap();

        assert!(extract_primitives(&grid).is_empty());
    }

    #[test]
    fn test_single_cell() {
        let mut grid = VoxelGrid::<VoxelState>::new(3, 3, 3).unwrap();
        grid.set(VoxelCoords::new(1, 2, 0), VoxelState::Wall).unwrap();

        let prims = extract_classified(&grid);
        assert_eq!(prims.len(), 1);
        assert_eq!(prims[0].bounds, bbox((1, 2, 0), (1, 2, 0)));
        assert_eq!(prims[0].state, VoxelState::Wall);
    }

    #[test]
    fn test_full_grid_is_one_box() {
        let grid = VoxelGrid::filled(6, 2, 3, VoxelState::Floor).unwrap();

        assert_eq!(extract_primitives(&grid), vec![bbox((0, 0, 0), (5, 1, 2))]);
    }

    #[test]
    fn test_states_never_merge() {
        let mut grid = VoxelGrid::<VoxelState>::new(2, 1, 1).unwrap();
        grid.set(VoxelCoords::new(0, 0, 0), VoxelState::Floor).unwrap();
        grid.set(VoxelCoords::new(1, 0, 0), VoxelState::Wall).unwrap();

        let prims = extract_classified(&grid);
        assert_eq!(prims.len(), 2);
        assert_eq!(prims[0].state, VoxelState::Floor);
        assert_eq!(prims[1].state, VoxelState::Wall);
    }

    #[test]
    fn test_checkerboard_cannot_merge() {
        let mut grid = VoxelGrid::<VoxelState>::new(4, 1, 4).unwrap();
        for x in 0..4 {
            for z in 0..4 {
                if (x + z) % 2 == 0 {
                    grid.set(VoxelCoords::new(x, 0, z), VoxelState::Wall).unwrap();
                }
            }
        }

        let prims = extract_primitives(&grid);
        assert_eq!(prims.len(), 8);
        assert!(prims.iter().all(|b| b.cell_count() == 1));
    }

    #[test]
    fn test_l_shape_splits_into_two() {
        // ##.
        // #..
        let mut grid = VoxelGrid::<VoxelState>::new(2, 1, 3).unwrap();
        grid.set(VoxelCoords::new(0, 0, 0), VoxelState::Wall).unwrap();
        grid.set(VoxelCoords::new(0, 0, 1), VoxelState::Wall).unwrap();
        grid.set(VoxelCoords::new(1, 0, 0), VoxelState::Wall).unwrap();

        let prims = extract_primitives(&grid);
        assert_eq!(
            prims,
            vec![bbox((0, 0, 0), (0, 0, 1)), bbox((1, 0, 0), (1, 0, 0))]
        );
    }

    #[test]
    fn test_extractor_reuse_matches_fresh_run() {
        let mut grid = VoxelGrid::<VoxelState>::new(5, 4, 4).unwrap();
        grid.fill_box(&bbox((0, 0, 0), (4, 0, 3)), VoxelState::Floor).unwrap();

        let mut extractor = BoxExtractor::new();
        let first = extractor.extract(&grid).to_vec();
        let second = extractor.extract(&grid).to_vec();

        assert_eq!(first, second);
        assert_eq!(extractor.primitive_count(), 1);
    }
}
